// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use finance_tracker_rs::report::{render_chart, render_report};
use finance_tracker_rs::{
    DATE_PROMPT, END_DATE_PROMPT, LedgerError, LedgerStore, Prompter, QueryEngine,
    START_DATE_PROMPT, Settings, Transaction, ValidationError, validate_amount, validate_category,
    validate_date, validate_description,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Finance Tracker - Record income and expenses in a CSV ledger
///
/// Without a command, starts the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "finance-tracker-rs")]
#[command(about = "Records income and expenses and summarizes them by date range", long_about = None)]
struct Args {
    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Ledger CSV file, overrides the configured path
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Currency symbol used in summaries
    #[arg(long)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the ledger file if it does not exist
    Init,
    /// Record a transaction; fields not given as flags are prompted for
    Add(AddArgs),
    /// Show transactions and a summary for an inclusive date range
    Query {
        /// First day of the range (dd-mm-yyyy)
        start: String,
        /// Last day of the range (dd-mm-yyyy)
        end: String,
        /// Also draw the daily income/expense chart
        #[arg(long)]
        plot: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
struct AddArgs {
    /// Transaction date (dd-mm-yyyy), empty for today
    #[arg(long)]
    date: Option<String>,
    /// Positive amount
    #[arg(long)]
    amount: Option<String>,
    /// `I` for Income or `E` for Expense
    #[arg(long)]
    category: Option<String>,
    /// Free-text description
    #[arg(long)]
    description: Option<String>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("invalid --{field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidField { .. } => 2,
            _ => 1,
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            process::exit(1);
        }
    };
    if let Some(file) = args.file {
        settings.ledger_path = file;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }

    init_tracing(&settings.log_level);

    let store = LedgerStore::new(settings.ledger_config());
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let result = match args.command {
        Some(Command::Init) => init(&store),
        Some(Command::Add(fields)) => add(&store, &mut prompter, fields),
        Some(Command::Query { start, end, plot }) => {
            query(&store, &start, &end, plot, &settings.currency)
        }
        None => menu(&store, &mut prompter, &settings.currency),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("finance_tracker_rs={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init(store: &LedgerStore) -> Result<(), CliError> {
    if store.initialize()? {
        println!("Created ledger {}", store.path().display());
    } else {
        println!("Ledger {} already exists", store.path().display());
    }
    Ok(())
}

/// Builds a transaction from flags, prompting for the missing ones.
///
/// Invalid flag values are reported rather than re-prompted.
fn collect_transaction<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    fields: AddArgs,
    today: NaiveDate,
) -> Result<Transaction, CliError> {
    let invalid =
        |field: &'static str| move |source: ValidationError| CliError::InvalidField { field, source };

    let date = match fields.date {
        Some(raw) => validate_date(&raw, true, today).map_err(invalid("date"))?,
        None => prompter.date(DATE_PROMPT, true)?,
    };
    let amount = match fields.amount {
        Some(raw) => validate_amount(&raw).map_err(invalid("amount"))?,
        None => prompter.amount()?,
    };
    let category = match fields.category {
        Some(raw) => validate_category(&raw).map_err(invalid("category"))?,
        None => prompter.category()?,
    };
    let description = match fields.description {
        Some(raw) => validate_description(&raw),
        None => prompter.description()?,
    };

    Transaction::new(date, amount, category, description).map_err(invalid("amount"))
}

fn add<R: BufRead, W: Write>(
    store: &LedgerStore,
    prompter: &mut Prompter<R, W>,
    fields: AddArgs,
) -> Result<(), CliError> {
    store.initialize()?;
    let transaction = collect_transaction(prompter, fields, Local::now().date_naive())?;
    store.append(&transaction)?;
    writeln!(prompter.output_mut(), "Entry added successfully")?;
    Ok(())
}

fn query(
    store: &LedgerStore,
    start: &str,
    end: &str,
    plot: bool,
    currency: &str,
) -> Result<(), CliError> {
    let result = QueryEngine::new(store).query(start, end)?;
    let mut stdout = io::stdout().lock();

    render_report(&mut stdout, &result, currency)?;
    if plot && !result.is_empty() {
        writeln!(stdout)?;
        render_chart(&mut stdout, &result.daily_totals(), currency)?;
    }
    Ok(())
}

/// Interactive menu loop.
///
/// Storage failures abort only the current operation. Closing the input
/// leaves the loop like choosing "Exit".
fn menu<R: BufRead, W: Write>(
    store: &LedgerStore,
    prompter: &mut Prompter<R, W>,
    currency: &str,
) -> Result<(), CliError> {
    match run_menu(store, prompter, currency) {
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        other => Ok(other?),
    }
}

fn run_menu<R: BufRead, W: Write>(
    store: &LedgerStore,
    prompter: &mut Prompter<R, W>,
    currency: &str,
) -> io::Result<()> {
    if let Err(e) = store.initialize() {
        writeln!(prompter.output_mut(), "Error: {}", e)?;
    }

    loop {
        let out = prompter.output_mut();
        writeln!(out)?;
        writeln!(out, "1. Add a new transaction.")?;
        writeln!(out, "2. View transactions and a summary within a date range.")?;
        writeln!(out, "3. Exit")?;

        match prompter.ask("Enter your choice (1-3): ")?.trim() {
            "1" => {
                let transaction = prompter.transaction()?;
                let outcome = store
                    .initialize()
                    .and_then(|_| store.append(&transaction));
                match outcome {
                    Ok(()) => writeln!(prompter.output_mut(), "Entry added successfully")?,
                    Err(e) => writeln!(prompter.output_mut(), "Error: {}", e)?,
                }
            }
            "2" => {
                let start = prompter.date(START_DATE_PROMPT, false)?;
                let end = prompter.date(END_DATE_PROMPT, false)?;

                let result = match QueryEngine::new(store).query_range(start, end) {
                    Ok(result) => result,
                    Err(e) => {
                        writeln!(prompter.output_mut(), "Error: {}", e)?;
                        continue;
                    }
                };

                render_report(prompter.output_mut(), &result, currency)?;
                if !result.is_empty() && prompter.confirm("Do you want to see a plot (y/n): ")? {
                    render_chart(prompter.output_mut(), &result.daily_totals(), currency)?;
                }
            }
            "3" => {
                writeln!(prompter.output_mut(), "Exiting...")?;
                return Ok(());
            }
            _ => writeln!(prompter.output_mut(), "Invalid choice. Enter 1, 2 or 3")?,
        }
    }
}
