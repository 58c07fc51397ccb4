//! CLI module for the University Workshop API
//!
//! A single `serve` subcommand runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// University Workshop API - demo REST API for deployment workshops
#[derive(Parser)]
#[command(name = "university-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
