//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a similarity ratio with four decimals
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Render a ratio as a fixed-width bar, e.g. `████░░░░░░`
pub fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Print one ranked line: score, bar, text
pub fn print_ranked(position: usize, score: f64, text: &str) {
    let bar = score_bar(score, 10);
    let colored_bar = if score >= 0.8 {
        bar.green().to_string()
    } else if score >= 0.5 {
        bar.yellow().to_string()
    } else {
        bar.red().to_string()
    };
    println!(
        "{} {} {} {}",
        format!("{:>3}.", position).dimmed(),
        format_score(score),
        colored_bar,
        text
    );
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(4.0 / 7.0), "0.5714");
        assert_eq!(format_score(1.0), "1.0000");
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0.0, 4), "░░░░");
        assert_eq!(score_bar(0.5, 4), "██░░");
        assert_eq!(score_bar(1.0, 4), "████");
        assert_eq!(score_bar(2.0, 4), "████");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "match", "matches"), "1 match");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "match", "matches"), "5 matches");
    }
}
