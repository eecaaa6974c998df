mod index;
mod input;
mod output;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use index::SuffixTrie;
use report::QueryReport;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sxi")]
#[command(about = "Suffix-trie substring index over a single input word")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pattern to run a full report for (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    pattern: Vec<String>,

    /// File to read the input word from (first line)
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Test containment and locate the first occurrence of a pattern
    Query {
        /// Pattern to search for
        pattern: String,
    },
    /// Find the longest substring that occurs at least twice
    Longest,
    /// Find the repeated substring with the highest occurrence count
    Most,
    /// Run every query and print a combined report
    Report {
        /// Pattern for the containment/position queries
        pattern: String,
    },
    /// Show statistics about the built trie
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let word = input::read_word(&cli.input)?;
    let trie = SuffixTrie::build(&word);

    match cli.command {
        Some(Commands::Query { pattern }) => {
            let report = QueryReport::run(&trie, &pattern);
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_match(&report, true)?;
            }
        }
        Some(Commands::Longest) => {
            let longest = trie.longest_repeated();
            if cli.json {
                output::print_json(&longest)?;
            } else {
                output::print_repeated_line("Longest repeated:", &longest, true)?;
            }
        }
        Some(Commands::Most) => {
            let most = trie.most_repeated();
            if cli.json {
                output::print_json(&most)?;
            } else {
                output::print_repeated_line("Most repeated:", &most, true)?;
            }
        }
        Some(Commands::Report { pattern }) => {
            print_report(&trie, &pattern, cli.json)?;
        }
        Some(Commands::Stats) => {
            let stats = trie.stats();
            if cli.json {
                output::print_json(&stats)?;
            } else {
                output::print_stats(trie.word(), &stats)?;
            }
        }
        None => {
            // Direct report mode: `sxi <pattern>`
            let pattern = cli.pattern.join(" ");
            print_report(&trie, &pattern, cli.json)?;
        }
    }

    Ok(())
}

fn print_report(trie: &SuffixTrie, pattern: &str, json: bool) -> Result<()> {
    let report = QueryReport::run(trie, pattern);
    if json {
        output::print_json(&report)?;
    } else {
        output::print_report(&report, true)?;
    }
    Ok(())
}
