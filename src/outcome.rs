//! Submission outcomes and HTTP response interpretation.
//!
//! The result of one submission is a [`SubmissionOutcome`]: a tagged value
//! produced by interpreting the endpoint's HTTP response (or the absence of
//! one) and consumed immediately to drive UI updates. It is never stored.
//!
//! ## Wire contract
//!
//! A success is any ok-range status; the body is ignored. A rejection is a
//! non-ok status whose body is expected to be JSON of the shape:
//!
//! ```json
//! { "errors": [ { "message": "Email is required" }, ... ] }
//! ```
//!
//! A body that is missing, empty, unparseable, or lacking the `errors` field
//! still yields a rejection; it just renders the generic fallback message.
//! Only a request that never produced a status at all is a transport failure,
//! so a malformed error body is not misreported as a connectivity problem.

use serde::Deserialize;

/// Fallback message for a rejection without usable server error details.
pub const GENERIC_ERROR_MESSAGE: &str = "Oops! There was a problem submitting your form.";

/// Message shown when the request never reached or returned from the server.
pub const CONNECTIVITY_ERROR_MESSAGE: &str =
	"Oops! There was a problem submitting your form. Please check your internet connection.";

/// Message shown when the request exceeded the configured timeout.
pub const TIMEOUT_ERROR_MESSAGE: &str = "Oops! The request timed out. Please try again.";

/// The structured error body returned by the form-processing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
	/// Server-side error descriptions, in the order the server reported them.
	#[serde(default)]
	pub errors: Vec<ErrorDetail>,
}

/// One error entry inside [`ErrorPayload`].
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
	/// Human-readable description of the rejection reason.
	#[serde(default)]
	pub message: String,
}

/// The terminal result of one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
	/// The endpoint answered with an ok-range status.
	Success,

	/// The endpoint answered with a non-ok status. `messages` holds the
	/// server's error descriptions in order; empty when the body carried
	/// no usable details.
	Rejected {
		/// Ordered error messages extracted from the response body.
		messages: Vec<String>,
	},

	/// The request never produced a response (offline, DNS, CORS, ...).
	/// `detail` is the transport layer's description, kept for logging only.
	TransportFailure {
		/// Transport-level failure description (not shown to the user).
		detail: String,
	},

	/// The request did not resolve within the configured timeout.
	TimedOut,
}

impl SubmissionOutcome {
	/// Returns `true` for [`SubmissionOutcome::Success`].
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success)
	}

	/// The user-facing message for this outcome, or `None` for a success.
	///
	/// Rejection messages are joined with `", "` into a single display
	/// string; a rejection without messages and both failure kinds render
	/// their fixed messages.
	pub fn display_message(&self) -> Option<String> {
		match self {
			Self::Success => None,
			Self::Rejected { messages } if messages.is_empty() => {
				Some(GENERIC_ERROR_MESSAGE.to_string())
			}
			Self::Rejected { messages } => Some(messages.join(", ")),
			Self::TransportFailure { .. } => Some(CONNECTIVITY_ERROR_MESSAGE.to_string()),
			Self::TimedOut => Some(TIMEOUT_ERROR_MESSAGE.to_string()),
		}
	}
}

/// Interprets an HTTP response into a [`SubmissionOutcome`].
///
/// `ok` is the ok-range flag of the response status (`200..=299`); `body` is
/// the response text, consulted only when the status is not ok.
pub fn interpret_response(ok: bool, body: &str) -> SubmissionOutcome {
	if ok {
		return SubmissionOutcome::Success;
	}

	let messages = serde_json::from_str::<ErrorPayload>(body)
		.map(|payload| {
			payload
				.errors
				.into_iter()
				.map(|detail| detail.message)
				.collect()
		})
		.unwrap_or_default();

	SubmissionOutcome::Rejected { messages }
}
