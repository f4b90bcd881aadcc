//! Form binding and the submit interception pipeline.
//!
//! [`FormSubmitController`] attaches one submit interceptor per opted-in
//! form. Each interception runs a linear pipeline: suppress native
//! navigation, validate, serialize, enter the sending state, relay the
//! request, interpret the response into a
//! [`SubmissionOutcome`](crate::outcome::SubmissionOutcome), apply the
//! matching UI state, and restore the submit button.
//!
//! ## Concurrency
//!
//! The pipeline is single-threaded and event-driven with exactly one
//! suspension point: the network request (raced against the configured
//! timeout). While suspended, the event loop may deliver further submit
//! events; those are rejected by the per-form
//! [`SubmissionPhase`](crate::submission::SubmissionPhase) guard rather
//! than relying on the disabled-button cue. No cancellation exists: a
//! timed-out request runs to completion in the background and its eventual
//! result is discarded.

use crate::config::ControllerConfig;

#[cfg(target_arch = "wasm32")]
use crate::config::FormTargets;
#[cfg(target_arch = "wasm32")]
use crate::error::SubmitError;
#[cfg(target_arch = "wasm32")]
use crate::outcome::SubmissionOutcome;
#[cfg(target_arch = "wasm32")]
use crate::submission::{HttpMethod, SubmissionPhase, SubmissionRequest};
#[cfg(target_arch = "wasm32")]
use crate::ui;
#[cfg(target_arch = "wasm32")]
use crate::{error_log, info_log, warn_log};

/// Binds qualifying forms and drives their submissions.
///
/// ## Example
///
/// ```ignore
/// use formline::{ControllerConfig, FormSubmitController};
///
/// let controller = FormSubmitController::new(ControllerConfig::default());
/// let bound = controller.bind_document()?;
/// ```
#[derive(Debug, Clone)]
pub struct FormSubmitController {
	config: ControllerConfig,
}

impl FormSubmitController {
	/// Creates a controller with the given configuration.
	pub fn new(config: ControllerConfig) -> Self {
		Self { config }
	}

	/// The controller's configuration.
	pub fn config(&self) -> &ControllerConfig {
		&self.config
	}
}

#[cfg(target_arch = "wasm32")]
impl FormSubmitController {
	/// Binds every form in the document whose `action` matches the
	/// configured endpoint prefix.
	///
	/// Non-matching forms are untouched and keep native submit behavior.
	/// Returns the number of forms bound.
	pub fn bind_document(&self) -> Result<usize, SubmitError> {
		use wasm_bindgen::JsCast;

		let window = web_sys::window().ok_or(SubmitError::NoWindow)?;
		let document = window.document().ok_or(SubmitError::NoDocument)?;

		let selector = self.config.form_selector();
		let nodes = document
			.query_selector_all(&selector)
			.map_err(|err| SubmitError::Query(format!("{err:?}")))?;

		let mut bound = 0;
		for index in 0..nodes.length() {
			let Some(node) = nodes.get(index) else {
				continue;
			};
			let Ok(form) = node.dyn_into::<web_sys::HtmlFormElement>() else {
				continue;
			};

			self.register(FormTargets::discover(&form))?;
			bound += 1;
		}

		info_log!(
			"formline: bound {} form(s) matching {}",
			bound,
			self.config.endpoint_prefix
		);
		Ok(bound)
	}

	/// Installs the submit interceptor on an explicitly bound form.
	///
	/// The interceptor suppresses native navigation unconditionally, then:
	/// ignores the event while a submission is in flight, surfaces native
	/// validation UI for invalid forms (no network call, no UI state
	/// touched), and otherwise spawns the async submission pipeline.
	pub fn register(&self, targets: FormTargets) -> Result<(), SubmitError> {
		use std::cell::Cell;
		use std::rc::Rc;
		use wasm_bindgen::JsCast;
		use wasm_bindgen::prelude::Closure;

		let phase = Rc::new(Cell::new(SubmissionPhase::Idle));
		let timeout_ms = self.config.timeout_ms;
		let form = targets.form.clone();

		let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
			event.prevent_default();

			if phase.get().is_in_flight() {
				warn_log!("formline: submit ignored, a submission is already in flight");
				return;
			}

			if !targets.form.check_validity() {
				targets.form.report_validity();
				return;
			}

			phase.set(SubmissionPhase::Sending);

			let targets = targets.clone();
			let phase = Rc::clone(&phase);
			wasm_bindgen_futures::spawn_local(async move {
				run_submission(&targets, timeout_ms).await;
				phase.set(SubmissionPhase::Idle);
			});
		}) as Box<dyn FnMut(_)>);

		form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
			.map_err(|err| SubmitError::Listener(format!("{err:?}")))?;
		closure.forget(); // Listener lives as long as the form

		Ok(())
	}
}

/// Runs one submission end to end and applies the resulting UI state.
///
/// The submit button is restored on every path out of this function.
#[cfg(target_arch = "wasm32")]
async fn run_submission(targets: &FormTargets, timeout_ms: Option<u32>) {
	let request = match SubmissionRequest::from_form(&targets.form) {
		Ok(request) => request,
		Err(err) => {
			error_log!("formline: {}", err);
			return;
		}
	};

	let original_label = targets.submit_button.as_ref().map(ui::enter_sending);

	let outcome = send_with_timeout(request, timeout_ms).await;
	match &outcome {
		SubmissionOutcome::Success => ui::show_success(targets),
		other => {
			if let SubmissionOutcome::TransportFailure { detail } = other {
				warn_log!("formline: transport failure: {}", detail);
			}
			if let Some(message) = other.display_message() {
				ui::show_error(targets.status.as_ref(), &message);
			}
		}
	}

	if let (Some(button), Some(label)) = (targets.submit_button.as_ref(), original_label) {
		ui::restore_button(button, &label);
	}
}

/// Races the request against the configured timeout.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(request: SubmissionRequest, timeout_ms: Option<u32>) -> SubmissionOutcome {
	use futures_util::future::{Either, select};
	use futures_util::pin_mut;

	let send = send(request);
	match timeout_ms {
		Some(ms) => {
			let timeout = gloo_timers::future::TimeoutFuture::new(ms);
			pin_mut!(send);
			pin_mut!(timeout);
			match select(send, timeout).await {
				Either::Left((outcome, _)) => outcome,
				Either::Right(((), _)) => SubmissionOutcome::TimedOut,
			}
		}
		None => send.await,
	}
}

/// Issues the HTTP request and interprets the response.
///
/// The request carries an explicit `Accept: application/json` header. A
/// POST submission sends the serialized fields as its body; a GET
/// submission sends no body (fetch rejects one), so the fields are encoded
/// into the action URL's query string instead — the payload is never
/// silently discarded.
#[cfg(target_arch = "wasm32")]
async fn send(request: SubmissionRequest) -> SubmissionOutcome {
	use gloo_net::http::Request;

	let built = match request.method {
		HttpMethod::Get => match request.encoded_action() {
			Ok(url) => Request::get(&url).header("Accept", "application/json").build(),
			Err(err) => {
				error_log!("formline: {}", err);
				return SubmissionOutcome::TransportFailure {
					detail: err.to_string(),
				};
			}
		},
		HttpMethod::Post => Request::post(&request.action)
			.header("Accept", "application/json")
			.body(request.body),
	};

	let ready = match built {
		Ok(ready) => ready,
		Err(err) => {
			return SubmissionOutcome::TransportFailure {
				detail: format!("failed to build request: {err}"),
			};
		}
	};

	match ready.send().await {
		Ok(response) => {
			if response.ok() {
				return SubmissionOutcome::Success;
			}
			let body = response.text().await.unwrap_or_default();
			crate::outcome::interpret_response(false, &body)
		}
		Err(err) => SubmissionOutcome::TransportFailure {
			detail: err.to_string(),
		},
	}
}
