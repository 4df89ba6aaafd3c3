//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, group_by_length};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::dictionary::Dictionary;
use crate::wordlists::LoadReport;
use colored::Colorize;
use std::time::Duration;

/// Print what went into the dictionary and how long it took
pub fn print_dictionary_summary(
    dictionary: &Dictionary,
    report: Option<&LoadReport>,
    build_time: Duration,
) {
    println!(
        "📚 Built a dictionary of {} words in {}",
        dictionary.len().to_string().bright_cyan().bold(),
        format_duration(build_time)
    );

    if let Some(report) = report {
        if report.skipped() > 0 {
            println!(
                "   {}",
                format!(
                    "Skipped {} lines ({} too long, {} invalid, {} blank)",
                    report.skipped(),
                    report.too_long,
                    report.invalid,
                    report.blank
                )
                .bright_black()
            );
        }
    }

    let histogram = dictionary.length_histogram();
    let max = histogram.iter().map(|&(_, count)| count).max().unwrap_or(0);
    for (len, count) in histogram {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {len:2} letters: {} {count:6}", bar.green());
    }
    println!();
}

/// Print the words found for one set of letters
pub fn print_solve_result(result: &SolveResult, show_stats: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}",
        result.letters.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "❌ No words can be made from these letters".red().bold());
    }

    for (len, words) in group_by_length(&result.words) {
        println!("\n{}", format!("{len} letters ({})", words.len()).bright_cyan().bold());
        println!("  {}", words.join(" "));
    }

    println!();
    if let Some(best) = result.best_length() {
        println!(
            "{}",
            format!(
                "✅ {} words, best is {best} letters ({})",
                result.words.len(),
                format_duration(result.duration)
            )
            .green()
            .bold()
        );
    }

    if show_stats {
        let stats = result.stats;
        println!("  Visited:     {} entries", stats.visited);
        println!("  Skipped:     {} entries", stats.skipped);
        println!("  Comparisons: {}", stats.comparisons);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Workload:".bright_cyan().bold());
    println!("   Queries:          {}", result.queries);
    println!("   Dictionary size:  {}", result.dictionary_size);
    println!("   Words found:      {}", result.total_matches);

    println!("\n⚡ {}", "Jump table vs linear scan:".bright_cyan().bold());
    println!(
        "   Jump table:       {}",
        format_duration(result.jump_duration)
    );
    println!(
        "   Linear scan:      {}",
        format_duration(result.scan_duration)
    );
    println!(
        "   Speedup:          {}",
        format!("{:.1}x", result.speedup()).bright_yellow().bold()
    );
    println!("   Avg visited:      {:.1} entries", result.average_visited);
    println!("   Avg comparisons:  {:.1}", result.average_comparisons);

    let skipped = result.skip_ratio() * 100.0;
    println!(
        "   Skipped:          [{}] {skipped:.1}%",
        create_progress_bar(skipped, 100.0, 30).green()
    );

    match result.mismatches {
        Some(0) => println!("\n{}", "✅ Every query matched the linear scan".green().bold()),
        Some(n) => println!(
            "\n{}",
            format!("❌ {n} queries disagreed with the linear scan")
                .red()
                .bold()
        ),
        None => {}
    }
}
