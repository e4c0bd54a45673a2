//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Request Types** - Analysis mode, uploaded file, request state
//! - **Result Types** - Text and risk table results
//! - **API Types** - Backend health response
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Request Types
// =============================================================================

/// Analysis operation requested from the backend.
///
/// The mode name doubles as the route segment (`POST /{mode}`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Rewrite the document in plain English
    #[default]
    Simplify,
    /// Pull out the document's clauses
    Extract,
    /// Tabulate risky clauses with a severity
    Risks,
    /// Compare documents (no selector in the UI)
    Compare,
    /// Question answering (no selector in the UI)
    Qa,
    /// Any other route name
    Other(String),
}

impl AnalysisMode {
    /// Modes offered by the selector, in display order.
    pub const SELECTABLE: [AnalysisMode; 3] =
        [AnalysisMode::Simplify, AnalysisMode::Extract, AnalysisMode::Risks];

    /// Parse a route name. Unknown names become [`AnalysisMode::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "simplify" => AnalysisMode::Simplify,
            "extract" => AnalysisMode::Extract,
            "risks" => AnalysisMode::Risks,
            "compare" => AnalysisMode::Compare,
            "qa" => AnalysisMode::Qa,
            other => AnalysisMode::Other(other.to_string()),
        }
    }

    /// Route segment for this mode.
    pub fn as_str(&self) -> &str {
        match self {
            AnalysisMode::Simplify => "simplify",
            AnalysisMode::Extract => "extract",
            AnalysisMode::Risks => "risks",
            AnalysisMode::Compare => "compare",
            AnalysisMode::Qa => "qa",
            AnalysisMode::Other(name) => name,
        }
    }

    /// Selector label.
    pub fn label(&self) -> &str {
        match self {
            AnalysisMode::Simplify => "Simplify",
            AnalysisMode::Extract => "Extract Clauses",
            AnalysisMode::Risks => "Risk Analysis",
            AnalysisMode::Compare => "Compare",
            AnalysisMode::Qa => "Ask a Question",
            AnalysisMode::Other(name) => name,
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The file picked by the user.
///
/// `F` is the platform file handle: `web_sys::File` in the browser,
/// plain bytes in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSelection<F> {
    /// File name as reported by the picker
    pub name: String,
    /// Handle to the file content
    pub file: F,
}

impl<F> UploadSelection<F> {
    pub fn new(name: impl Into<String>, file: F) -> Self {
        Self {
            name: name.into(),
            file,
        }
    }
}

/// Lifecycle of a submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Last request produced a result
    Done,
    /// Last request failed
    Failed,
}

// =============================================================================
// Result Types
// =============================================================================

/// Risk level attached to a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Red,
    Yellow,
    Green,
}

impl Severity {
    /// Case-insensitive parse of a severity label.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "red" => Some(Severity::Red),
            "yellow" => Some(Severity::Yellow),
            "green" => Some(Severity::Green),
            _ => None,
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Red => "risk-high",
            Severity::Yellow => "risk-medium",
            Severity::Green => "risk-low",
        }
    }
}

/// CSS class for a raw severity label; unknown labels get no class.
pub fn risk_class(label: &str) -> &'static str {
    Severity::parse(label).map_or("", |severity| severity.css_class())
}

/// One row of a risk analysis.
///
/// Missing or `null` fields read as empty strings and other scalars as
/// their JSON text, so a partial row still renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskItem {
    /// Clause text
    #[serde(deserialize_with = "lenient_text")]
    pub clause: String,
    /// Severity label as sent by the backend
    #[serde(deserialize_with = "lenient_text")]
    pub severity: String,
    /// Explanation of the risk
    #[serde(deserialize_with = "lenient_text")]
    pub details: String,
}

/// Any JSON value as display text: strings verbatim, `null` empty,
/// everything else as compact JSON.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

impl RiskItem {
    /// Parsed severity, if the label is recognized.
    pub fn level(&self) -> Option<Severity> {
        Severity::parse(&self.severity)
    }

    /// CSS class for the row.
    pub fn css_class(&self) -> &'static str {
        risk_class(&self.severity)
    }
}

/// Display-ready outcome of a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisResult {
    /// Free text shown in the result textarea
    Text { body: String },
    /// Rows of the risk table
    Risks { items: Vec<RiskItem> },
}

impl AnalysisResult {
    pub fn text(body: impl Into<String>) -> Self {
        AnalysisResult::Text { body: body.into() }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the backend `/health` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Human readable status line
    #[serde(default)]
    pub message: String,
    /// "success" when the backend is up
    #[serde(default)]
    pub status: String,
    /// Whether the backend reached its model provider
    #[serde(default)]
    pub api_connected: bool,
    /// Model identifier used for analysis
    #[serde(default)]
    pub model: Option<String>,
}

/// Backend availability as shown in the navbar.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BackendStatus {
    /// Health check still in flight
    #[default]
    Checking,
    /// `/health` answered
    Online(HealthStatus),
    /// `/health` failed or returned garbage
    Offline,
}

impl BackendStatus {
    /// Badge text.
    pub fn label(&self) -> String {
        match self {
            BackendStatus::Checking => "checking…".to_string(),
            BackendStatus::Online(health) if health.api_connected => match &health.model {
                Some(model) => format!("online · {}", model),
                None => "online".to_string(),
            },
            BackendStatus::Online(_) => "degraded".to_string(),
            BackendStatus::Offline => "offline".to_string(),
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "status-checking",
            BackendStatus::Online(health) if health.api_connected => "status-online",
            BackendStatus::Online(_) => "status-degraded",
            BackendStatus::Offline => "status-offline",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for the submission flow. Every variant ends up as
/// result text, none of them is fatal.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Submit pressed with no file selected.
    #[error("No file selected")]
    NoFileSelected,

    /// The backend could not be reached.
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response; carries the backend's own message.
    #[error("{0}")]
    Server(String),

    /// Response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Format(String),

    /// The request was dropped before it completed.
    #[error("Request was interrupted before completing")]
    Interrupted,
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
