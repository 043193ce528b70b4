#![warn(missing_docs)]
//! # scamwise-app
//!
//! ## Purpose
//! Wires the analyzer UI state to the text classifier for `scamwise`.
//!
//! ## Responsibilities
//! - Run one analysis from ticket to verdict, with or without the cosmetic
//!   delay.
//! - Resolve runtime configuration from env vars.
//! - Produce log-safe descriptors of the input (fingerprint, kind).
//! - Decode raw input bytes without rejecting invalid UTF-8.
//! - Encode verdicts and the indicator panel for machine-readable output.
//!
//! ## Data flow
//! [`AnalyzerState`] issues a ticket -> optional delay ->
//! [`scamwise_core::RuleCascade`] classifies -> verdict flows back into
//! [`AnalyzerState`] and out to the caller.
//!
//! ## Error model
//! Shell gate failures and encoding failures are wrapped in [`AppError`].
//!
//! ## Security and privacy notes
//! Raw input is never logged. Log events carry [`input_fingerprint`] and
//! [`input_kind`] instead.

use std::time::Duration;

use scamwise_core::{RiskVerdict, RuleCascade};
use scamwise_ui::{AnalysisTicket, AnalyzerState, ShellError, security_indicators};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("SCAMWISE_VERSION");

/// Env var holding the cosmetic analysis delay in milliseconds.
pub const DELAY_ENV_VAR: &str = "SCAMWISE_ANALYSIS_DELAY_MS";

/// Delay applied before showing a verdict when nothing is configured.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(1_000);

const FINGERPRINT_HEX_LEN: usize = 12;

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Parses a millisecond delay value.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// a non-negative integer.
pub fn parse_delay_ms(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_millis)
}

/// Reads the cosmetic delay from [`DELAY_ENV_VAR`].
///
/// Semantics:
/// - Unset => [`DEFAULT_ANALYSIS_DELAY`].
/// - Valid integer => that many milliseconds (`0` disables the delay).
/// - Anything else => [`DEFAULT_ANALYSIS_DELAY`] with a warning.
pub fn analysis_delay_from_env() -> Duration {
    match std::env::var(DELAY_ENV_VAR) {
        Ok(value) => parse_delay_ms(&value).unwrap_or_else(|| {
            warn!(
                env_var = DELAY_ENV_VAR,
                "ignoring invalid delay value; using default"
            );
            DEFAULT_ANALYSIS_DELAY
        }),
        Err(_) => DEFAULT_ANALYSIS_DELAY,
    }
}

/// Coarse shape of the submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Absolute `http`/`https` URL.
    Link,
    /// Anything else.
    Message,
}

/// Classifies the input shape for log fields. Never affects the verdict.
pub fn input_kind(text: &str) -> InputKind {
    match Url::parse(text.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => InputKind::Link,
        _ => InputKind::Message,
    }
}

/// Decodes raw input bytes into analysis text.
///
/// Input is not validated: invalid UTF-8 sequences become `U+FFFD` so the
/// surrounding text still reaches the classifier.
pub fn decode_input(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Decodes one line read with its terminator, dropping a trailing `\n` or
/// `\r\n`.
pub fn decode_line(bytes: &[u8]) -> String {
    let line = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    decode_input(line)
}

/// Returns a short SHA-256 prefix identifying `text` in logs.
pub fn input_fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(FINGERPRINT_HEX_LEN);
    encoded
}

/// Runs one analysis without delay.
///
/// # Errors
/// Returns [`AppError::Shell`] when the state rejects submission.
pub fn analyze_now(state: &mut AnalyzerState) -> Result<RiskVerdict, AppError> {
    let ticket = state.begin_analysis()?;
    let verdict = classify_ticket(&ticket);
    state.complete_analysis(verdict.clone());
    Ok(verdict)
}

/// Runs one analysis, waiting `delay` before the verdict is surfaced.
///
/// The classifier itself runs after the delay; the delay only affects when
/// the result appears.
///
/// # Errors
/// Returns [`AppError::Shell`] when the state rejects submission.
pub async fn analyze_with_delay(
    state: &mut AnalyzerState,
    delay: Duration,
) -> Result<RiskVerdict, AppError> {
    let ticket = state.begin_analysis()?;
    Ok(complete_with_delay(state, ticket, delay).await)
}

/// Completes an already issued ticket after `delay`.
///
/// Used by shells that obtain tickets through [`AnalyzerState::on_key`].
pub async fn complete_with_delay(
    state: &mut AnalyzerState,
    ticket: AnalysisTicket,
    delay: Duration,
) -> RiskVerdict {
    if !delay.is_zero() {
        debug!(?delay, "delaying verdict");
        tokio::time::sleep(delay).await;
    }
    let verdict = classify_ticket(&ticket);
    state.complete_analysis(verdict.clone());
    verdict
}

fn classify_ticket(ticket: &AnalysisTicket) -> RiskVerdict {
    let text = ticket.text();
    let (verdict, rule) = RuleCascade::builtin().evaluate_with_rule(text);
    info!(
        input_fingerprint = %input_fingerprint(text),
        input_kind = ?input_kind(text),
        input_len = text.len(),
        tier = %verdict.tier,
        rule = rule.unwrap_or("none"),
        "analysis complete"
    );
    verdict
}

/// Encodes a verdict as a single-line JSON object.
///
/// # Errors
/// Returns [`AppError::Encode`] when serialization fails.
pub fn verdict_json(verdict: &RiskVerdict) -> Result<String, AppError> {
    Ok(serde_json::to_string(verdict)?)
}

/// Encodes the security indicator panel as a JSON array.
///
/// # Errors
/// Returns [`AppError::Encode`] when serialization fails.
pub fn indicators_json() -> Result<String, AppError> {
    Ok(serde_json::to_string(&security_indicators())?)
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Analyzer rejected submission.
    #[error("shell error: {0}")]
    Shell(#[from] ShellError),
    /// Verdict encoding failed.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
