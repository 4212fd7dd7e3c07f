use std::io::{self, BufRead, IsTerminal, Write};

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use smarttax_advisor::{FinancialAdvisor, GeminiClient, Transcript};
use smarttax_core::{
    FilingStatus, IncomeProfile, IndiaProfile, TaxRegime, UsaProfile, compute_tax,
};

mod display;
mod input;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Income tax estimator for India and the USA, with an AI financial
/// advisor.
#[derive(Debug, Parser)]
#[command(name = "smarttax", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate a tax liability.
    #[command(subcommand)]
    Calc(CalcCommand),

    /// Ask the AI financial advisor. Requires GEMINI_API_KEY; without it
    /// (or on any service failure) a fallback message is printed instead.
    Advise {
        /// The question to ask. Omit to start an interactive session.
        question: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum CalcCommand {
    /// Indian income tax (FY 2025-26 slabs).
    India {
        /// Annual gross income in rupees.
        #[arg(long, value_parser = input::parse_money)]
        income: Decimal,

        #[arg(long, value_enum, default_value = "new")]
        regime: RegimeArg,

        /// Section 80C investments (old regime only, capped at 1.5L).
        #[arg(long = "section-80c", value_parser = input::parse_money, default_value = "0")]
        section_80c: Decimal,

        /// Section 80D health insurance premiums (old regime only).
        #[arg(long = "section-80d", value_parser = input::parse_money, default_value = "0")]
        section_80d: Decimal,

        /// Other exemptions (old regime only).
        #[arg(long, value_parser = input::parse_money, default_value = "0")]
        other_deductions: Decimal,
    },

    /// USA federal income tax and FICA (2024 tables).
    Usa {
        /// Annual gross income in dollars.
        #[arg(long, value_parser = input::parse_money)]
        income: Decimal,

        #[arg(long, value_enum, default_value = "single")]
        filing_status: FilingStatusArg,

        /// Pre-tax 401(k) / IRA contributions.
        #[arg(long, value_parser = input::parse_money, default_value = "0")]
        retirement: Decimal,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RegimeArg {
    New,
    Old,
}

impl From<RegimeArg> for TaxRegime {
    fn from(value: RegimeArg) -> Self {
        match value {
            RegimeArg::New => TaxRegime::New,
            RegimeArg::Old => TaxRegime::Old,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilingStatusArg {
    Single,
    MarriedJoint,
    HeadOfHousehold,
}

impl From<FilingStatusArg> for FilingStatus {
    fn from(value: FilingStatusArg) -> Self {
        match value {
            FilingStatusArg::Single => FilingStatus::Single,
            FilingStatusArg::MarriedJoint => FilingStatus::MarriedJoint,
            FilingStatusArg::HeadOfHousehold => FilingStatus::HeadOfHousehold,
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_calc(command: CalcCommand) {
    let profile = match command {
        CalcCommand::India {
            income,
            regime,
            section_80c,
            section_80d,
            other_deductions,
        } => IncomeProfile::India(IndiaProfile {
            gross_income: income,
            regime: regime.into(),
            section_80c,
            section_80d,
            other_deductions,
        }),
        CalcCommand::Usa {
            income,
            filing_status,
            retirement,
        } => IncomeProfile::Usa(UsaProfile {
            gross_income: income,
            filing_status: filing_status.into(),
            retirement_contribution: retirement,
        }),
    };

    let result = compute_tax(&profile);
    print!("{}", display::render_result(&result));
}

async fn run_advise(question: Option<String>) -> anyhow::Result<()> {
    let advisor = FinancialAdvisor::new(GeminiClient::new());

    match question {
        Some(question) => {
            let answer = advisor.ask(&question).await;
            println!("{answer}");
        }
        None => run_advise_interactive(&advisor).await?,
    }

    Ok(())
}

/// Interactive session: one question per line, transcript kept in memory
/// for the lifetime of the session only.
async fn run_advise_interactive(
    advisor: &FinancialAdvisor<GeminiClient>,
) -> anyhow::Result<()> {
    let mut transcript = Transcript::new();
    let stdin = io::stdin();

    if stdin.is_terminal() {
        println!("Ask a financial question (empty line to quit).");
    }

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        transcript.push_user(question);
        let answer = advisor.ask(question).await;
        transcript.push_model(answer.as_str());
        println!("{answer}\n");
    }

    tracing::debug!(messages = transcript.len(), "advice session ended");
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Calc(command) => run_calc(command),
        Command::Advise { question } => run_advise(question).await?,
    }

    Ok(())
}
