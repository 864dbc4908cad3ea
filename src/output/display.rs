//! Display functions for command results

use super::formatters::{verdict_message, verdict_title};
use crate::commands::{CheckResult, SolveReport};
use crate::engine::Rules;
use colored::Colorize;

/// Print the result of a one-shot check
pub fn print_check_result(result: &CheckResult, rules: &Rules) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root:      {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    if !result.used.is_empty() {
        println!("Used:      {}", result.used.join(", "));
    }
    println!("Candidate: {}", result.candidate.bold());
    println!("{}", "─".repeat(60).cyan());

    let title = verdict_title(result.verdict);
    let message = verdict_message(result.verdict, &result.root, rules);

    if result.verdict.is_accepted() {
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("{title} - {message}").green()
        );
    } else {
        println!(
            "{} {}",
            "✗".red().bold(),
            format!("{title} - {message}").red()
        );
    }
}

/// Print a solve report, answers grouped by length
pub fn print_solve_report(report: &SolveReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANSWERS FOR:".bright_cyan().bold(),
        report.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if report.answers.is_empty() {
        println!("\nNo valid answers found.");
    } else {
        let mut current_len = 0;
        for word in &report.answers {
            let len = word.chars().count();
            if len != current_len {
                current_len = len;
                println!("\n{}", format!("{len} letters").bold());
            }
            println!("  {word}");
        }
    }

    println!(
        "\n{} answers from {} words scanned in {:.2}s",
        report.answers.len().to_string().bright_green().bold(),
        report.scanned,
        report.duration.as_secs_f64()
    );
}
