#![warn(missing_docs)]
//! # scamwise binary
//!
//! Terminal front end for the scam analyzer. Results go to stdout; logs and
//! notices go to stderr.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use scamwise_app::{
    AppError, analysis_delay_from_env, analyze_with_delay, app_version, complete_with_delay,
    decode_input, decode_line, indicators_json, verdict_json,
};
use scamwise_ui::{
    AnalyzerState, INPUT_PLACEHOLDER, Key, Notice, NoticeVariant, ShellError, security_indicators,
};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const EXIT_EMPTY_INPUT: u8 = 2;
const QUIT_COMMAND: &str = ":quit";

/// Scam analyzer command line.
#[derive(Debug, Parser)]
#[command(name = "scamwise", version = scamwise_app::APP_VERSION, about = "Your personal scam detection assistant")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one message, link, or email body.
    Analyze(AnalyzeArgs),
    /// Analyze one line at a time until `:quit` or end of input.
    Interactive(DelayArgs),
    /// Print the security indicator panel.
    Indicators(IndicatorsArgs),
}

#[derive(Debug, Args)]
struct IndicatorsArgs {
    /// Print the panel as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Text to analyze. Read from stdin when omitted.
    text: Option<String>,
    /// Print the verdict as JSON.
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    delay: DelayArgs,
}

#[derive(Debug, Args)]
struct DelayArgs {
    /// Delay before showing the verdict, in milliseconds.
    /// Defaults to SCAMWISE_ANALYSIS_DELAY_MS or 1000.
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl DelayArgs {
    fn resolve(&self) -> Duration {
        self.delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(analysis_delay_from_env)
    }
}

/// CLI entry point.
#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();
    tracing::debug!(version = app_version(), "starting scamwise");

    match cli.command {
        Command::Analyze(args) => run_analyze(args).await,
        Command::Interactive(args) => run_interactive(args.resolve()).await,
        Command::Indicators(args) => {
            print_indicators(args.json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_analyze(args: AnalyzeArgs) -> Result<ExitCode> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buffer)
                .await
                .context("failed to read input from stdin")?;
            decode_input(&buffer)
        }
    };

    let mut state = AnalyzerState::new();
    state.set_input(text);

    match analyze_with_delay(&mut state, args.delay.resolve()).await {
        Ok(verdict) => {
            if args.json {
                println!("{}", verdict_json(&verdict)?);
            } else {
                println!("{}", verdict.display_text());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(AppError::Shell(ShellError::EmptyInput)) => {
            print_notices(state.drain_notices());
            Ok(ExitCode::from(EXIT_EMPTY_INPUT))
        }
        Err(error) => Err(error).context("analysis failed"),
    }
}

async fn run_interactive(delay: Duration) -> Result<ExitCode> {
    eprintln!("scamwise {} | {INPUT_PLACEHOLDER}", app_version());
    eprintln!("press Enter to analyze, {QUIT_COMMAND} to exit");

    let mut state = AnalyzerState::new();
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .await
            .context("failed to read input line")?;
        if read == 0 {
            break;
        }

        let line = decode_line(&buffer);
        if line.trim() == QUIT_COMMAND {
            break;
        }

        state.set_input(line);
        let Some(submission) = state.on_key(Key::Enter) else {
            continue;
        };

        match submission {
            Ok(ticket) => {
                eprintln!("{}", state.button_label());
                complete_with_delay(&mut state, ticket, delay).await;
            }
            Err(error) => tracing::debug!(%error, "submission rejected"),
        }

        print_notices(state.drain_notices());
    }

    Ok(ExitCode::SUCCESS)
}

// Completion notices are results and go to stdout; validation notices go to stderr.
fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        let line = match &notice.description {
            Some(description) => format!("{}: {description}", notice.title),
            None => notice.title.clone(),
        };
        match notice.variant {
            NoticeVariant::Success => println!("{line}"),
            NoticeVariant::Destructive => eprintln!("{line}"),
        }
    }
}

fn print_indicators(json: bool) -> Result<()> {
    if json {
        println!("{}", indicators_json()?);
        return Ok(());
    }

    for indicator in security_indicators() {
        println!(
            "[{:?}] {} - {}",
            indicator.status, indicator.title, indicator.description
        );
    }
    Ok(())
}
