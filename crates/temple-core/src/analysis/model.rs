//! Analysis request and result models.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A business description submitted for analysis.
///
/// Wire form is camelCase. Missing and `null` fields deserialize as empty
/// strings and other scalars as their JSON text; the JSON handler does not
/// validate, only the form does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub business_idea: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub industry: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub target_audience: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub key_features: String,
}

/// The alternate deployment's snake_case request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnakeCaseAnalysisRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub business_idea: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub industry: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub target_audience: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub key_features: String,
}

/// Accept any JSON value where text is expected.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl From<SnakeCaseAnalysisRequest> for AnalysisRequest {
    fn from(req: SnakeCaseAnalysisRequest) -> Self {
        Self {
            business_idea: req.business_idea,
            industry: req.industry,
            target_audience: req.target_audience,
            key_features: req.key_features,
        }
    }
}

/// Raw model text for both prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub competitors: String,
    pub design: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_body() {
        let body = r#"{"businessIdea":"Bakery","industry":"Food","targetAudience":"Locals","keyFeatures":"Online orders"}"#;
        let req: AnalysisRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.business_idea, "Bakery");
        assert_eq!(req.target_audience, "Locals");
        assert_eq!(req.key_features, "Online orders");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: AnalysisRequest = serde_json::from_str(r#"{"industry":"Food"}"#).unwrap();
        assert_eq!(req.industry, "Food");
        assert_eq!(req.business_idea, "");
        assert_eq!(req.key_features, "");
    }

    #[test]
    fn test_null_fields_become_empty() {
        let body = r#"{"businessIdea":null,"industry":"Food","targetAudience":null,"keyFeatures":null}"#;
        let req: AnalysisRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.business_idea, "");
        assert_eq!(req.industry, "Food");

        let snake: SnakeCaseAnalysisRequest =
            serde_json::from_str(r#"{"business_idea":null,"industry":"Food"}"#).unwrap();
        assert_eq!(snake.business_idea, "");
    }

    #[test]
    fn test_non_string_fields_use_json_text() {
        let body = r#"{"businessIdea":"Bakery","industry":7,"targetAudience":false,"keyFeatures":["a","b"]}"#;
        let req: AnalysisRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.industry, "7");
        assert_eq!(req.target_audience, "false");
        assert_eq!(req.key_features, r#"["a","b"]"#);
    }

    #[test]
    fn test_snake_case_is_not_camel_case() {
        let body = r#"{"business_idea":"Bakery","industry":"Food","target_audience":"Locals","key_features":"Delivery"}"#;

        let camel: AnalysisRequest = serde_json::from_str(body).unwrap();
        assert_eq!(camel.business_idea, "");
        assert_eq!(camel.industry, "Food");

        let snake: SnakeCaseAnalysisRequest = serde_json::from_str(body).unwrap();
        let req = AnalysisRequest::from(snake);
        assert_eq!(req.business_idea, "Bakery");
        assert_eq!(req.target_audience, "Locals");
    }

    #[test]
    fn test_result_serializes_two_strings() {
        let result = AnalysisResult {
            competitors: "A, B, C".to_string(),
            design: "Blue".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"competitors": "A, B, C", "design": "Blue"}));
    }
}
