//! CLI module - Command-line interface for booktour
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// booktour - Tour catalogue and customer ratings service
#[derive(Parser)]
#[command(name = "booktour")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default search paths
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    #[command(alias = "daemon", alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Import tours from a JSON catalogue file
    Import {
        /// Path to the catalogue file
        file: PathBuf,
    },

    /// List tour packages
    #[command(alias = "pkgs")]
    Packages,

    /// List tours
    #[command(alias = "ls")]
    Tours {
        /// Package code filter
        #[arg(long)]
        package: Option<String>,
        /// Difficulty filter
        #[arg(long)]
        difficulty: Option<String>,
        /// Region filter
        #[arg(long)]
        region: Option<String>,
        /// Maximum price, inclusive
        #[arg(long)]
        max_price: Option<i32>,
        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page: u64,
        /// Page size
        #[arg(long, default_value = "20")]
        size: u64,
    },

    /// Show the ratings of a tour with its average score
    Ratings {
        /// Tour ID
        tour_id: i32,
        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page: u64,
        /// Page size
        #[arg(long, default_value = "20")]
        size: u64,
    },
}

pub use commands::*;
