//! Terminal output formatting.

use colored::Colorize;
use temple_core::AnalysisResult;

/// Print both analysis sections.
pub fn print_analysis(result: &AnalysisResult) {
    print_section("Competitors Analysis", &result.competitors);
    println!();
    print_section("Design Recommendations", &result.design);
}

fn print_section(title: &str, body: &str) {
    println!("{}", title.cyan().bold());
    println!("{}", "─".repeat(title.chars().count()).dimmed());

    if body.trim().is_empty() {
        println!("{}", "(no text returned)".dimmed());
        return;
    }

    for line in body.lines() {
        println!("  {}", line);
    }
}
