//! Formatting utilities for terminal output

use std::time::Duration;

/// Format a short duration for humans
///
/// Microseconds below one millisecond, milliseconds below one second, seconds above.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{micros} µs")
    } else if micros < 1_000_000 {
        format!("{:.2} ms", duration.as_secs_f64() * 1000.0)
    } else {
        format!("{:.2} s", duration.as_secs_f64())
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Split dictionary-ordered words into runs of equal length
///
/// Input order is kept, so the longest run comes first.
#[must_use]
pub fn group_by_length(words: &[String]) -> Vec<(usize, Vec<&str>)> {
    let mut groups: Vec<(usize, Vec<&str>)> = Vec::new();
    for word in words {
        match groups.last_mut() {
            Some((len, group)) if *len == word.len() => group.push(word.as_str()),
            _ => groups.push((word.len(), vec![word.as_str()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_units() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250 µs");
        assert_eq!(format_duration(Duration::from_micros(1_500)), "1.50 ms");
        assert_eq!(format_duration(Duration::from_millis(2_500)), "2.50 s");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn group_by_length_keeps_runs() {
        let words: Vec<String> = ["CATS", "CAT", "AT", "TA"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let groups = group_by_length(&words);
        assert_eq!(
            groups,
            vec![(4, vec!["CATS"]), (3, vec!["CAT"]), (2, vec!["AT", "TA"])]
        );
        assert!(group_by_length(&[]).is_empty());
    }
}
