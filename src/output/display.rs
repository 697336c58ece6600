//! Display functions for command results

use super::formatters::format_chain;
use crate::commands::SolveResult;
use crate::core::Question;
use colored::Colorize;

/// Print the result of solving a question directly
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Solving: {} → {}",
        result.question.start.to_string().bright_yellow().bold(),
        result.question.end.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    match &result.path {
        Some(path) => {
            let symbols: String = path.symbols().iter().collect();
            println!("\n  Path:   {symbols}");
            println!("  Chain:  {}", format_chain(&path.idioms()));
            println!();
            println!(
                "{}",
                format!("✅ Linked in {} idioms", path.len() - 1).green().bold()
            );
        }
        None => {
            println!();
            println!("{}", "❌ No chain found".red().bold());
        }
    }
}

/// Print a question that was posted
pub fn print_question_posted(question: &Question, channel: &str) {
    println!(
        "{} {} to {}",
        "Posted".green().bold(),
        question.announcement(),
        channel.bright_black()
    );
}

/// Print a results post that was sent
pub fn print_answer_posted(text: &str, channel: &str) {
    println!("{} results to {}", "Posted".green().bold(), channel.bright_black());
    println!("{text}");
}
