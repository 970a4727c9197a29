//! Interaction state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of a password check session completely decoupled from
//! rendering and I/O.
//!
//! This is a pure state machine: it consumes [`AppEvent`] inputs and
//! produces [`AppAction`] instructions for the embedding UI to execute.
//!
//! # Responsibilities
//!
//! - Recomputes the local evaluation on every password change.
//! - Clears any prior analysis result or error on every keystroke, so a
//!   displayed result never describes a different password than the one on
//!   screen.
//! - Enforces the single in-flight analysis request.

use secrecy::{ExposeSecret, SecretString};

use crate::analysis::AnalysisResult;
use crate::evaluator::{StrengthEvaluation, evaluate};

/// Message shown when analysis is triggered with an empty password.
pub const EMPTY_PASSWORD_MESSAGE: &str = "Please enter a password to analyze.";

/// Generic message shown when a remote analysis fails.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze password. Please try again later.";

/// Lifecycle of the remote analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No input received yet.
    Idle,
    /// Password edited since the last analysis, if any.
    Editing,
    /// One analysis request in flight.
    Requesting,
    /// Analysis finished with a result.
    Succeeded,
    /// Analysis finished with an error.
    Failed,
}

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The password input changed.
    PasswordChanged(SecretString),

    /// The show/hide toggle was pressed.
    VisibilityToggled,

    /// The user asked for a remote analysis.
    AnalyzeRequested,

    /// The in-flight analysis returned a result.
    AnalysisCompleted(AnalysisResult),

    /// The in-flight analysis failed.
    AnalysisFailed,
}

/// Actions produced by the App state machine.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Redraw the UI from the current state.
    Render,

    /// Issue one remote analysis request.
    Analyze {
        /// Password as it was when the request was triggered.
        password: SecretString,
    },
}

/// Password check session state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a rendering layer.
#[derive(Debug, Clone)]
pub struct App {
    /// Current password input.
    password: SecretString,
    /// Whether the password is rendered in clear text.
    password_visible: bool,
    /// Local evaluation of the current password.
    evaluation: StrengthEvaluation,
    /// Analysis request lifecycle.
    phase: Phase,
    /// Latest completed analysis. `None` unless phase is `Succeeded`.
    result: Option<AnalysisResult>,
    /// Current user-facing error message. `None` if no error.
    error: Option<String>,
}

impl App {
    /// Creates a session with an empty password.
    pub fn new() -> Self {
        let password = SecretString::from("");
        let evaluation = evaluate(&password);
        Self {
            password,
            password_visible: false,
            evaluation,
            phase: Phase::Idle,
            result: None,
            error: None,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::PasswordChanged(password) => {
                // Any prior analysis or error no longer describes the
                // current password.
                self.evaluation = evaluate(&password);
                self.password = password;
                self.result = None;
                self.error = None;
                self.phase = Phase::Editing;
                vec![AppAction::Render]
            }
            AppEvent::VisibilityToggled => {
                self.password_visible = !self.password_visible;
                vec![AppAction::Render]
            }
            AppEvent::AnalyzeRequested => self.request_analysis(),
            AppEvent::AnalysisCompleted(result) => {
                // A completion only applies to the password it was requested
                // for; any edit has already left Requesting.
                if self.phase != Phase::Requesting {
                    return vec![];
                }
                self.result = Some(result);
                self.phase = Phase::Succeeded;
                vec![AppAction::Render]
            }
            AppEvent::AnalysisFailed => {
                if self.phase != Phase::Requesting {
                    return vec![];
                }
                self.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
                self.phase = Phase::Failed;
                vec![AppAction::Render]
            }
        }
    }

    fn request_analysis(&mut self) -> Vec<AppAction> {
        // Trigger is disabled while a request is in flight.
        if self.phase == Phase::Requesting {
            return vec![];
        }
        if self.password.expose_secret().is_empty() {
            self.error = Some(EMPTY_PASSWORD_MESSAGE.to_string());
            return vec![AppAction::Render];
        }
        self.result = None;
        self.error = None;
        self.phase = Phase::Requesting;
        vec![
            AppAction::Analyze {
                password: self.password.clone(),
            },
            AppAction::Render,
        ]
    }

    /// Current request phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether an analysis request is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Requesting
    }

    /// Whether the analyze trigger should be enabled.
    pub fn can_analyze(&self) -> bool {
        !self.is_loading() && !self.password.expose_secret().is_empty()
    }

    /// Local per-keystroke evaluation of the current password.
    pub fn evaluation(&self) -> &StrengthEvaluation {
        &self.evaluation
    }

    /// Latest completed analysis, if one is on display.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Current user-facing error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the password should be rendered in clear text.
    pub fn password_visible(&self) -> bool {
        self.password_visible
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
