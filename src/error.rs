//! Error types for controller plumbing failures.
//!
//! These errors cover defects in the environment or the markup (missing
//! window, a listener that cannot be installed) rather than submission
//! results; user-facing submission results are modeled by
//! [`SubmissionOutcome`](crate::outcome::SubmissionOutcome).

/// Errors raised while binding forms or preparing a submission.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
	/// The browser `window` object is not available.
	#[error("browser window is not available")]
	NoWindow,

	/// The `document` object is not available.
	#[error("document is not available")]
	NoDocument,

	/// A DOM selector query failed (malformed selector or detached node).
	#[error("DOM query failed: {0}")]
	Query(String),

	/// The submit event listener could not be installed on a form.
	#[error("failed to install submit listener: {0}")]
	Listener(String),

	/// The form's fields could not be serialized into a request body.
	#[error("failed to serialize form fields: {0}")]
	Serialization(String),
}
