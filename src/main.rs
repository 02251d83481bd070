use anyhow::Result;
use clap::Parser;
use excelbot::{Classifier, FixtureHost, WorkbookAnalysis};
use log::info;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Task description to classify; runs the built-in demo inputs if omitted
    description: Option<String>,

    /// Emit the classification as JSON instead of plain text
    #[arg(short, long)]
    json: bool,

    /// Also print the workbook analysis report for the demo workbook
    #[arg(short, long)]
    analyze: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("=== Starting Macro Generator Demo ===");

    let start_time = Instant::now();
    let classifier = Classifier::builder().with_default_rules().build()?;
    info!("classifier ready (took {:.2?})", start_time.elapsed());

    match &args.description {
        Some(description) => {
            process_input(&classifier, description, args.json)?;
        }
        None => {
            let demo_inputs = vec![
                // Clear single-family cases
                "Highlight every cell with a value over 100",
                "Sort the sales data by the first column",
                "Filter rows where revenue exceeds the target",
                "Create a chart from the selected quarterly totals",
                "Format the header row with bold text",

                // Tie-break cases: the earlier rule wins
                "Sort the data and then chart it",
                "Color the cells after sorting them",

                // Fallback cases
                "Reconcile the two ledgers",
                "Do something unusual with the selection",
            ];

            info!("=== Running Classifications ({} inputs) ===", demo_inputs.len());
            let classify_start = Instant::now();

            for (i, text) in demo_inputs.iter().enumerate() {
                info!("Demo {}/{}: {}", i + 1, demo_inputs.len(), text);
                process_input(&classifier, text, args.json)?;
            }

            info!(
                "classified {} inputs in {:.2?}",
                demo_inputs.len(),
                classify_start.elapsed()
            );
        }
    }

    if args.analyze {
        let host = FixtureHost::default();
        let analysis = WorkbookAnalysis::fetch(&host)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            println!("{}", analysis.render_report());
        }
    }

    info!("=== Demo Complete (total {:.2?}) ===", start_time.elapsed());
    Ok(())
}

fn process_input(classifier: &Classifier, text: &str, json: bool) -> Result<()> {
    match classifier.classify(text) {
        Ok(classification) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&classification)?);
            } else {
                println!("Family: {}", classification.family);
                println!("{}\n", classification.rendered);
            }
        }
        Err(e) => {
            eprintln!("Error classifying text: {}", e);
            eprintln!("The description must contain at least one non-whitespace character.");
            return Err(e.into());
        }
    }

    Ok(())
}
