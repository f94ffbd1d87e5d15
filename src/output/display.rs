//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::VocabularySummary;
use crate::game::ResultsTable;
use colored::Colorize;

/// Print the contents of a word source
pub fn print_vocabulary_summary(summary: &VocabularySummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD SOURCE:".bright_cyan().bold(),
        summary.source.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {} words", summary.total.to_string().bright_white().bold());

    println!("\n📈 {}", "Parts of speech:".bright_cyan().bold());
    for (pos, count) in &summary.by_part_of_speech {
        let bar = create_progress_bar(*count as f64, summary.total as f64, 30);
        println!("   {:<12} {} {count:4}", pos.to_string(), bar.green());
    }

    println!("\n🗂  {}", "Groups:".bright_cyan().bold());
    for (group, count) in &summary.by_group {
        let bar = create_progress_bar(*count as f64, summary.total as f64, 30);
        println!("   {group:<16} {} {count:4}", bar.blue());
    }
    println!();
}

/// Print what a quiz session left behind
pub fn print_session_summary(answered: u32, results: &ResultsTable) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Answered: {}",
        answered.to_string().bright_yellow().bold()
    );

    let weakest: Vec<_> = results
        .weakest(5)
        .into_iter()
        .filter(|r| r.wrong > 0)
        .collect();
    if weakest.is_empty() {
        println!("{}", "No mistakes this time".green());
    } else {
        println!("\n{}", "Words to practise:".bright_cyan().bold());
        for entry in weakest {
            println!(
                "   {:<20} {} {}",
                entry.word.bright_white().bold(),
                format!("✓{}", entry.correct).green(),
                format!("✗{}", entry.wrong).red()
            );
        }
    }
    println!("{}", "─".repeat(60).cyan());
}
