use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagewielder")]
#[command(about = "Filter PDF pages by dimensions and extract page ranges")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter PDF pages based on dimensions
    Filter {
        /// Path to the input PDF file
        input: PathBuf,

        /// Path to the output PDF file (defaults to a new temporary file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract a range of pages from a PDF
    Excerpt {
        /// Path to the input PDF file
        input: PathBuf,

        /// Page range to extract (e.g., 1:5, 3:, :10, 7)
        pages: String,

        /// Path to the output PDF file (defaults to a new temporary file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List page dimensions and the pages that have them
    #[command(alias = "dims")]
    Dimensions {
        /// PDF file to inspect
        input: PathBuf,
    },

    /// Run as MCP server over stdio
    Mcp,
}
