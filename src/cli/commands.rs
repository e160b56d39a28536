//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the people API page by page
#[derive(Parser, Debug)]
#[command(name = "people-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single page and print it
    Page {
        /// Page number (1-based)
        #[arg(default_value = "1")]
        page: u32,
    },

    /// Load the list the way an infinite-scroll view would, printing every event
    Browse {
        /// Stop after this many pages have loaded
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_pages: Option<u32>,

        /// Minimum list length before scrolling loads more
        #[arg(long)]
        scroll_threshold: Option<usize>,
    },

    /// Show the detail view for the person at a list position
    Detail {
        /// Position in the list (0-based)
        index: usize,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_browse() {
        let cli = Cli::parse_from([
            "people-pager",
            "browse",
            "--max-pages",
            "3",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::Browse {
                max_pages: Some(3),
                scroll_threshold: None
            }
        ));
    }

    #[test]
    fn test_parse_browse_rejects_zero_pages() {
        let result = Cli::try_parse_from(["people-pager", "browse", "--max-pages", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_browse_scroll_threshold() {
        let cli = Cli::parse_from(["people-pager", "browse", "--scroll-threshold", "0"]);
        assert!(matches!(
            cli.command,
            Commands::Browse {
                max_pages: None,
                scroll_threshold: Some(0)
            }
        ));
    }

    #[test]
    fn test_parse_page_default() {
        let cli = Cli::parse_from(["people-pager", "page"]);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Page { page: 1 }));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "people-pager",
            "detail",
            "4",
            "--base-url",
            "http://localhost:8000",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
        assert!(matches!(cli.command, Commands::Detail { index: 4 }));
    }
}
