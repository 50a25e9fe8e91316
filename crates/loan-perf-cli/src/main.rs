mod input;
mod output;

use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};
use colored::Colorize;

use loan_perf_core::aggregate::{portfolio_summary, summarize_by_grade};
use loan_perf_core::pipeline::run_pipeline;

/// Loan-book performance reporting from a SQLite loan table
#[derive(Parser)]
#[command(
    name = "loanperf",
    version,
    about = "Loan-book performance reporting from a SQLite loan table",
    long_about = "Loads the loan table from a SQLite database, normalizes loan \
                  statuses, derives profit/loss per loan, and exports the result \
                  as CSV and/or a PowerPoint deck. Output files are timestamped \
                  so repeated runs never overwrite each other."
)]
#[command(group(
    ArgGroup::new("outputs").required(true).multiple(true)
))]
struct Cli {
    /// Path to the SQLite database holding the loan table
    database: String,

    /// Export the full per-loan table to CSV
    #[arg(long, group = "outputs")]
    csv_all: bool,

    /// Export the per-grade summary table to CSV
    #[arg(long, group = "outputs")]
    csv_by_grade: bool,

    /// Export the per-grade summary to a PowerPoint deck
    #[arg(long, group = "outputs")]
    pptx_by_grade: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let rows = input::db::load_loans(&cli.database)?;
    println!(
        "Read {} records from database \"{}\"",
        rows.len(),
        cli.database
    );

    let (records, report) = run_pipeline(rows);
    println!(
        "Out of {} records, {} have a status, and {} do not",
        report.total_rows, report.with_status, report.missing_status
    );
    println!("{} records are Uncategorized", report.uncategorized);

    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();

    if cli.csv_all {
        let path = PathBuf::from(format!("loans_all_{}.csv", stamp));
        output::csv_out::write_loans(&path, &records)?;
        println!("Exported data to \"{}\"", path.display());
    }

    if cli.csv_by_grade || cli.pptx_by_grade {
        let grades = summarize_by_grade(&records);

        if cli.csv_by_grade {
            let path = PathBuf::from(format!("loans_by_grade_{}.csv", stamp));
            output::csv_out::write_grade_summary(&path, &grades)?;
            println!("Exported data to \"{}\"", path.display());
        }

        if cli.pptx_by_grade {
            let totals = portfolio_summary(&grades);
            let path = PathBuf::from(format!("loan_performance_{}.pptx", stamp));
            output::pptx::write_deck(&path, &grades, &totals)?;
            println!("Exported data to \"{}\"", path.display());
        }
    }

    Ok(())
}
