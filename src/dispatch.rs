//! Glue between the pure state machine and the remote analyzer.
//!
//! The [`App`] never performs I/O; this module executes the one effectful
//! [`AppAction`] and feeds the outcome back in as events. Per-request
//! errors are converted to [`AppEvent::AnalysisFailed`] here and never
//! propagate to the caller.

use crate::analyzer::GeminiAnalyzer;
use crate::app::{App, AppAction, AppEvent};

/// Executes `action`, returning any follow-up actions for the caller.
///
/// `Analyze` awaits the remote call and hands the result back to the state
/// machine, which clears the loading state on both paths. `Render` is the
/// embedding UI's concern and produces no follow-up here.
pub async fn dispatch(
    app: &mut App,
    analyzer: &GeminiAnalyzer,
    action: AppAction,
) -> Vec<AppAction> {
    match action {
        AppAction::Render => vec![],
        AppAction::Analyze { password } => match analyzer.analyze(&password).await {
            Ok(result) => app.handle(AppEvent::AnalysisCompleted(result)),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("password analysis failed: {}", _e);
                app.handle(AppEvent::AnalysisFailed)
            }
        },
    }
}
