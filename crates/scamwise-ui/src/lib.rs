#![warn(missing_docs)]
//! # scamwise-ui
//!
//! ## Purpose
//! Defines the UI-facing state model for the scam analyzer widget.
//!
//! ## Responsibilities
//! - Hold input text, the single-flight analyzing flag, and the last verdict.
//! - Reject empty input before any classification happens.
//! - Queue notices for the shell to present.
//! - Describe the static security indicator panel.
//!
//! ## Data flow
//! Shell events ([`AnalyzerState::set_input`], [`AnalyzerState::on_key`])
//! produce an [`AnalysisTicket`]; the caller classifies the ticket text and
//! hands the verdict back through [`AnalyzerState::complete_analysis`].
//!
//! ## Ownership and lifetimes
//! Tickets carry an owned snapshot of the input so the caller may await a
//! delay while the user keeps editing.
//!
//! ## Error model
//! Submission gates return [`ShellError`]; both variants are non-fatal.

use scamwise_core::RiskVerdict;
use serde::Serialize;
use thiserror::Error;

/// Title of the notice shown when input is blank.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter a message or link to analyze";
/// Title of the notice shown after a verdict is available.
pub const ANALYSIS_COMPLETE_NOTICE: &str = "Analysis Complete";
/// Placeholder shown in an empty input box.
pub const INPUT_PLACEHOLDER: &str = "Enter message, link, or email to analyze...";

/// Visual variant of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    /// Validation failure.
    Destructive,
    /// Completed analysis.
    Success,
}

/// Transient message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Headline text.
    pub title: String,
    /// Optional body text.
    pub description: Option<String>,
    /// Visual variant.
    pub variant: NoticeVariant,
}

/// Keys the shell forwards from the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Submit key.
    Enter,
    /// Any other key.
    Other,
}

/// Indicator activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    /// Check is enabled.
    Active,
    /// Check is disabled.
    Inactive,
}

/// One panel in the security indicator grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityIndicator {
    /// Panel title.
    pub title: &'static str,
    /// Panel description.
    pub description: &'static str,
    /// Panel status.
    pub status: IndicatorStatus,
}

/// Returns the fixed indicator panel.
pub fn security_indicators() -> [SecurityIndicator; 3] {
    [
        SecurityIndicator {
            title: "Phishing Detection",
            description: "Analyzes for suspicious links and requests",
            status: IndicatorStatus::Active,
        },
        SecurityIndicator {
            title: "Content Analysis",
            description: "Checks for manipulative language",
            status: IndicatorStatus::Active,
        },
        SecurityIndicator {
            title: "Risk Assessment",
            description: "Evaluates overall threat level",
            status: IndicatorStatus::Active,
        },
    ]
}

/// Permission to run one analysis, issued by [`AnalyzerState::begin_analysis`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    text: String,
}

impl AnalysisTicket {
    /// Input snapshot to classify.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Analyzer widget state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerState {
    input: String,
    analyzing: bool,
    last_analysis: Option<RiskVerdict>,
    notices: Vec<Notice>,
}

impl AnalyzerState {
    /// Creates idle state with empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Returns `true` while an analysis is in flight.
    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Most recent verdict.
    pub fn last_analysis(&self) -> Option<&RiskVerdict> {
        self.last_analysis.as_ref()
    }

    /// Label for the analyze button.
    pub fn button_label(&self) -> &'static str {
        if self.analyzing {
            "Analyzing..."
        } else {
            "Analyze"
        }
    }

    /// Starts an analysis of the current input.
    ///
    /// # Errors
    /// Returns [`ShellError::EmptyInput`] for blank input and queues a
    /// destructive notice.
    /// Returns [`ShellError::AnalysisInFlight`] when a previous ticket has not
    /// completed.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, ShellError> {
        if self.input.trim().is_empty() {
            self.notices.push(Notice {
                title: EMPTY_INPUT_NOTICE.to_string(),
                description: None,
                variant: NoticeVariant::Destructive,
            });
            return Err(ShellError::EmptyInput);
        }

        if self.analyzing {
            return Err(ShellError::AnalysisInFlight);
        }

        self.analyzing = true;
        Ok(AnalysisTicket {
            text: self.input.clone(),
        })
    }

    /// Records a verdict and queues the completion notice.
    pub fn complete_analysis(&mut self, verdict: RiskVerdict) {
        self.analyzing = false;
        self.notices.push(Notice {
            title: ANALYSIS_COMPLETE_NOTICE.to_string(),
            description: Some(verdict.display_text()),
            variant: NoticeVariant::Success,
        });
        self.last_analysis = Some(verdict);
    }

    /// Handles a key press in the input box. Enter submits.
    ///
    /// Returns `None` for keys that do not submit.
    pub fn on_key(&mut self, key: Key) -> Option<Result<AnalysisTicket, ShellError>> {
        match key {
            Key::Enter => Some(self.begin_analysis()),
            Key::Other => None,
        }
    }

    /// Pending notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Returns and clears pending notices.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

/// Submission gate failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Input is empty or whitespace-only.
    #[error("{}", EMPTY_INPUT_NOTICE)]
    EmptyInput,
    /// An analysis is already running.
    #[error("an analysis is already in progress")]
    AnalysisInFlight,
}
