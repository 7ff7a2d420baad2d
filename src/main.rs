//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;

use clap::Parser as ClapParser;

use chatlens::cli::Args;
use chatlens::links::LinkExtractor;
use chatlens::stopwords::StopwordSet;
use chatlens::{Analyzer, ChatlensError, SenderFilter, preprocess};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();

    // Undecodable bytes are replaced, never a parse failure.
    let bytes = fs::read(&args.input)?;
    let data = String::from_utf8_lossy(&bytes);

    let records = preprocess(&data);
    let stopwords = StopwordSet::load(&args.stopwords)?;
    let analyzer = Analyzer::new(records, LinkExtractor::new(), stopwords);

    let filter = SenderFilter::from_selection(&args.user);
    let report = analyzer.build_report(&filter);

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            println!("📊 chatlens v{}", env!("CARGO_PKG_VERSION"));
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("📂 Input:        {}", args.input.display());
            println!("👤 Selection:    {}", args.user);
            println!("   Records:      {}", analyzer.records().len());
            println!(
                "   Participants: {}",
                analyzer.participants().len().saturating_sub(1)
            );
            println!();
            println!("✅ Report saved to {}", path.display());
        }
        // Bare JSON on stdout so the output stays pipeable.
        None => println!("{json}"),
    }

    Ok(())
}
