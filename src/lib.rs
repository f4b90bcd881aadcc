//! Formline - Client-Side Form Submission Controller
//!
//! A small WASM library that intercepts HTML form submissions, relays them
//! asynchronously to a third-party form-processing endpoint (e.g. Formspree),
//! and drives the surrounding UI through loading, success, and error states.
//!
//! ## Features
//!
//! - **Opt-in binding**: Only forms whose `action` matches the configured
//!   endpoint prefix are intercepted; every other form keeps native submit
//!   behavior
//! - **Native constraint validation**: Invalid forms surface the browser's
//!   built-in validation UI and never hit the network
//! - **Multipart-capable serialization**: Field values (file inputs included)
//!   are captured via `FormData` at the moment of submission
//! - **Explicit target binding**: The status and success elements for a form
//!   are resolved once, at registration time, into a [`FormTargets`] record
//! - **Hard double-submit guard**: A per-form in-flight phase rejects
//!   re-entrant submit events until the prior submission resolves
//! - **Timeout**: A hung request resolves to a dedicated `TimedOut` outcome
//!   instead of leaving the UI in its sending state indefinitely
//!
//! ## Architecture
//!
//! ```text
//! DOM submit event
//!       │
//!       ▼
//! ┌──────────────────────┐   FormData    ┌───────────────────┐
//! │ FormSubmitController │──────────────▶│ form endpoint     │
//! │  validate → send     │◀──────────────│ (opaque, HTTP)    │
//! └──────────┬───────────┘  status/JSON  └───────────────────┘
//!            │
//!            ▼
//!   SubmissionOutcome ──▶ ui: sending / success / error state
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use formline::{ControllerConfig, FormSubmitController};
//!
//! // On environment ready (e.g. from your wasm entry point):
//! let controller = FormSubmitController::new(ControllerConfig::default());
//! let bound = controller.bind_document()?;
//! formline::info_log!("bound {} form(s)", bound);
//! ```
//!
//! ## Markup contract
//!
//! For a form with id `X`, an optional status element with id `X-status`
//! receives error messages, and an optional success element with id
//! `X-success` is revealed after a successful submission. Both are optional;
//! a missing status element degrades to a blocking alert so failures are
//! never silently dropped.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod outcome;
pub mod submission;
pub mod ui;

pub use config::{
	ControllerConfig, DEFAULT_ENDPOINT_PREFIX, DEFAULT_TIMEOUT_MS, FormTargets, status_element_id,
	success_element_id,
};
pub use controller::FormSubmitController;
pub use error::SubmitError;
pub use outcome::{
	CONNECTIVITY_ERROR_MESSAGE, GENERIC_ERROR_MESSAGE, SubmissionOutcome, TIMEOUT_ERROR_MESSAGE,
	interpret_response,
};
pub use submission::{HttpMethod, SubmissionPhase, SubmissionRequest};

/// Installs a panic hook that forwards panic messages to the browser console.
///
/// Call once from your wasm entry point before binding forms. Without this,
/// WASM panics surface as an unreadable `unreachable` trap.
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
	console_error_panic_hook::set_once();
}
