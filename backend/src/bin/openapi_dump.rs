//! Print the OpenAPI document as JSON.

use std::path::PathBuf;

use clap::Parser;
use hotel_booking::doc::ApiDoc;
use utoipa::OpenApi;

/// Render the booking API's OpenAPI document.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Cli {
    /// Write to this file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let json = ApiDoc::openapi().to_pretty_json()?;
    match cli.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
