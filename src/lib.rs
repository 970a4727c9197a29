//! Password strength evaluation with AI-assisted analysis
//!
//! This library provides local password strength evaluation plus an
//! optional client that asks the Gemini API for a qualitative assessment
//! (overall strength, breach risk, feedback, detected weak patterns).
//!
//! # Features
//!
//! - `analyzer` (default): Enables the remote Gemini analysis client
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY`: Credential for the Gemini endpoint, read once when
//!   the analyzer client is constructed
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_analyzer::{App, AppEvent, evaluate};
//! use secrecy::SecretString;
//!
//! // Local, per-keystroke evaluation
//! let password = SecretString::from("MyP@ssw0rd!");
//! let evaluation = evaluate(&password);
//! println!("Score: {}", evaluation.score);
//! println!("Band: {}", evaluation.band());
//!
//! // Session state machine
//! let mut app = App::new();
//! let _actions = app.handle(AppEvent::PasswordChanged(password));
//! ```

// Internal modules
mod analysis;
mod app;
mod criteria;
mod evaluator;

#[cfg(feature = "analyzer")]
mod analyzer;
#[cfg(feature = "analyzer")]
mod dispatch;

// Public API
pub use analysis::{AnalysisResult, CompromiseRisk, StrengthLabel};
pub use app::{
    ANALYSIS_FAILED_MESSAGE, App, AppAction, AppEvent, EMPTY_PASSWORD_MESSAGE, Phase,
};
pub use criteria::{Criterion, CriterionId};
pub use evaluator::{BasicStrength, StrengthEvaluation, evaluate};

#[cfg(feature = "analyzer")]
pub use analyzer::{API_KEY_VAR, AnalyzerError, GeminiAnalyzer};
#[cfg(feature = "analyzer")]
pub use dispatch::dispatch;
