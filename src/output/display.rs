//! Display functions for run results

use super::formatters::{format_duration, share_bar};
use crate::commands::RunResult;
use crate::core::group_thousands;
use colored::Colorize;

/// Print the summary of a completed run
pub fn print_run_result(result: &RunResult) {
    let summary = result.words.summary();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD LIST:".bright_cyan().bold(),
        result.words.source().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Collection:".bright_cyan().bold());
    println!("   Words:            {}", group_thousands(summary.words as u64));
    println!("   Length classes:   {}", summary.classes);
    println!(
        "   Pairs compared:   {}",
        group_thousands(result.report.total_pairs()).bright_yellow()
    );
    println!(
        "   Time taken:       {}",
        format_duration(result.report.elapsed)
    );

    if !result.report.classes.is_empty() {
        let max_pairs = result
            .report
            .classes
            .iter()
            .map(|c| c.pairs)
            .max()
            .unwrap_or(0);

        println!("\n📈 {}", "Pairs by length:".bright_cyan().bold());
        for class in &result.report.classes {
            let bar = share_bar(class.pairs, max_pairs, 30);
            println!(
                "   {:>3}: {} {:>9} words {:>14} pairs  {}",
                class.length,
                bar.green(),
                group_thousands(class.words as u64),
                group_thousands(class.pairs),
                format_duration(class.elapsed).bright_black()
            );
        }
    }

    println!("\n🔤 {}", "Relations:".bright_cyan().bold());
    println!(
        "   Anagram groups:   {} ({} words)",
        group_thousands(summary.anagram_groups as u64).green(),
        group_thousands(summary.words_with_anagrams as u64)
    );
    println!("   Palindromes:      {}", group_thousands(summary.palindromes as u64));
    println!("   Proper nouns:     {}", group_thousands(summary.proper as u64));
    println!("   Acronyms:         {}", group_thousands(summary.acronyms as u64));

    if !result.written.is_empty() {
        println!("\n💾 {}", "Written:".bright_cyan().bold());
        for (format, path) in &result.written {
            println!("   {:<9} {}", format.name(), path.display().to_string().green());
        }
    }
}
