//! Interactive letters mode
//!
//! Read-query-print loop: prompt for letters, list every word they spell, repeat.

use crate::core::LetterCounts;
use crate::dictionary::Dictionary;
use crate::output::formatters::format_duration;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Totals for one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub queries: usize,
    pub rejected: usize,
    pub words_found: usize,
}

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_interactive(
    dictionary: &Dictionary,
    expected_len: Option<usize>,
) -> io::Result<SessionSummary> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Countdown Solver - Letters Round               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Dictionary holds {} words.", dictionary.len());
    println!("Commands: 'quit' to exit\n");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(dictionary, expected_len, stdin.lock(), stdout.lock())
}

/// Drive the loop over arbitrary input and output streams
///
/// Ends on `quit`/`exit`/`q` or end of input. Invalid letters are reported and
/// the prompt repeats.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    expected_len: Option<usize>,
    mut input: R,
    mut output: W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let prompt = expected_len.map_or_else(
        || "Enter letters".to_string(),
        |n| format!("Enter {n} letters"),
    );

    loop {
        write!(output, "{prompt}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(summary);
        }

        let text = line.trim();
        match text.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(summary),
            _ => {}
        }

        let letters = match LetterCounts::parse_query(text, expected_len) {
            Ok(letters) => letters,
            Err(e) => {
                summary.rejected += 1;
                writeln!(output, "❌ {e}")?;
                continue;
            }
        };

        let start = Instant::now();
        let mut count = 0;
        for entry in dictionary.query(&letters) {
            writeln!(output, "{}", entry.word())?;
            count += 1;
        }

        summary.queries += 1;
        summary.words_found += count;
        writeln!(
            output,
            "{count} word{} in {}\n",
            if count == 1 { "" } else { "s" },
            format_duration(start.elapsed())
        )?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str, expected_len: Option<usize>) -> (SessionSummary, String) {
        let dictionary = Dictionary::from_words(["CAT", "CATS", "AT", "TA"]).unwrap();
        let mut output = Vec::new();
        let summary =
            run_session(&dictionary, expected_len, input.as_bytes(), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn answers_each_query() {
        let (summary, output) = session("cats\nat\nquit\n", None);

        assert_eq!(summary.queries, 2);
        assert_eq!(summary.words_found, 6);
        assert!(output.contains("CATS\nCAT\nAT\nTA\n4 words in"));
        assert!(output.contains("AT\nTA\n2 words in"));
    }

    #[test]
    fn rejects_wrong_length_and_retries() {
        let (summary, output) = session("cat\nstac\n", Some(4));

        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.queries, 1);
        assert!(output.contains("Expected exactly 4 letters, got 3"));
        assert!(output.contains("Enter 4 letters: "));
    }

    #[test]
    fn stops_at_end_of_input() {
        let (summary, _) = session("", None);
        assert_eq!(summary, SessionSummary::default());
    }

    #[test]
    fn reports_single_word_and_blank_lines() {
        let (summary, output) = session("\n\nzzzz\nq\n", None);
        assert_eq!(summary.queries, 1);
        assert!(output.contains("0 words in"));

        let dictionary = Dictionary::from_words(["CAT"]).unwrap();
        let mut out = Vec::new();
        run_session(&dictionary, None, "tac\n".as_bytes(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("1 word in"));
    }
}
