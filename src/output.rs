//! Output formatting for query results

use crate::index::SuffixTrieStats;
use crate::report::QueryReport;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout_stream(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print the containment/position side of a report
///
/// Shows the word with the first occurrence of the pattern highlighted,
/// followed by position and occurrence count.
pub fn print_match(report: &QueryReport, color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);

    write!(stdout, "Word:             ")?;
    print_highlighted_word(&mut stdout, report)?;

    writeln!(stdout, "Pattern:          {}", report.pattern)?;

    write!(stdout, "Contains:         ")?;
    if report.contains {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "yes")?;
    } else {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(stdout, "no")?;
    }
    stdout.reset()?;

    match report.position {
        Some(pos) => {
            write!(stdout, "Position:         ")?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(stdout, "{}", pos)?;
            stdout.reset()?;
            writeln!(stdout, "Occurrences:      {}", report.occurrences)?;
        }
        None => {
            writeln!(stdout, "Position:         not found")?;
        }
    }

    Ok(())
}

/// Print a full report: match results plus the repetition queries
pub fn print_report(report: &QueryReport, color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);

    print_match(report, color)?;
    print_repeated(&mut stdout, "Longest repeated:", &report.longest_repeated)?;
    print_repeated(&mut stdout, "Most repeated:", &report.most_repeated)?;

    Ok(())
}

/// Print a single repetition-query result line
pub fn print_repeated_line(label: &str, value: &str, color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);
    print_repeated(&mut stdout, label, value)
}

fn print_repeated(stdout: &mut StandardStream, label: &str, value: &str) -> io::Result<()> {
    write!(stdout, "{:<18}", label)?;
    if value.is_empty() {
        writeln!(stdout, "(none)")?;
    } else {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        writeln!(stdout, "{}", value)?;
        stdout.reset()?;
    }
    Ok(())
}

/// Print the word with the first pattern occurrence highlighted
///
/// Positions are character offsets, so the highlight bounds are mapped to
/// byte offsets before slicing.
fn print_highlighted_word(stdout: &mut StandardStream, report: &QueryReport) -> io::Result<()> {
    let (start, end) = match report.position {
        Some(pos) if !report.pattern.is_empty() => {
            let pat_chars = report.pattern.chars().count();
            match char_span(&report.word, pos as usize, pat_chars) {
                Some(span) => span,
                None => {
                    writeln!(stdout, "{}", report.word)?;
                    return Ok(());
                }
            }
        }
        _ => {
            writeln!(stdout, "{}", report.word)?;
            return Ok(());
        }
    };

    write!(stdout, "{}", &report.word[..start])?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stdout, "{}", &report.word[start..end])?;
    stdout.reset()?;
    writeln!(stdout, "{}", &report.word[end..])?;

    Ok(())
}

/// Map a (char offset, char length) span to byte offsets within `word`
fn char_span(word: &str, start: usize, len: usize) -> Option<(usize, usize)> {
    let mut indices = word.char_indices().map(|(i, _)| i);
    let byte_start = indices.clone().nth(start)?;
    let byte_end = indices
        .nth(start + len)
        .unwrap_or(word.len());
    Some((byte_start, byte_end))
}

/// Display index statistics
pub fn print_stats(word: &str, stats: &SuffixTrieStats) -> io::Result<()> {
    println!("Index Statistics");
    println!("================");
    println!();
    println!("Word:             {}", word);
    println!("Word length:      {}", stats.word_len);
    println!("Node count:       {}", stats.node_count);
    println!("Max depth:        {}", stats.max_depth);

    Ok(())
}

/// Print any serializable value as pretty JSON (for --json mode)
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_span_ascii() {
        assert_eq!(char_span("mississippi", 2, 3), Some((2, 5)));
        assert_eq!(char_span("abc", 0, 3), Some((0, 3)));
    }

    #[test]
    fn test_char_span_multibyte() {
        // 'ç' is two bytes; char offset 1 is byte offset 2
        assert_eq!(char_span("çaça", 1, 1), Some((2, 3)));
        assert_eq!(char_span("çaça", 2, 2), Some((3, 6)));
    }

    #[test]
    fn test_char_span_out_of_range() {
        assert_eq!(char_span("abc", 5, 1), None);
    }
}
