//! Site Visit MCP Server - Main Entry Point
//!
//! This is the main entry point for the site visit MCP server application.
//! The actual implementation is in the `site_visit_mcp` library.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use site_visit_mcp::{SiteVisitServerHandler, calendar, logging};
use tracing::info;

/// Site Visit MCP Server - business-day visit scheduling via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the site roster file (TOML)
    file: String,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today when a tool call omits one
    #[arg(long, value_parser = parse_basis_date)]
    basis_date: Option<NaiveDate>,
}

fn parse_basis_date(value: &str) -> Result<NaiveDate, String> {
    calendar::normalize_date(value)
        .ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", value))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init();

    let handler = SiteVisitServerHandler::new(&args.file, args.basis_date)
        .with_context(|| format!("Failed to load roster from {}", args.file))?;
    info!(file = %args.file, basis_date = ?args.basis_date, "serving site visit tools on stdio");

    serve_stdio(handler).await?;
    Ok(())
}
