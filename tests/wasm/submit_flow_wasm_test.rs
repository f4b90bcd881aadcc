//! Submit Flow Browser Tests
//!
//! DOM-level tests for form binding, target discovery, and UI state
//! transitions. Run with a browser test runner:
//!
//! ```text
//! wasm-pack test --chrome --headless
//! ```
//!
//! Success Criteria:
//! 1. Binding attaches only to forms matching the endpoint prefix
//! 2. Target discovery resolves status/success elements by derived id
//! 3. An invalid form never enters the sending state
//! 4. Sending/success/error transitions mutate the expected nodes
//! 5. Button restoration is idempotent across submissions
//! 6. GET submissions carry the captured fields in the action URL
//! 7. The registered pipeline reports transport failures, restores the
//!    button, and rejects re-entrant submits end to end

#![cfg(target_arch = "wasm32")]

use formline::{
	CONNECTIVITY_ERROR_MESSAGE, ControllerConfig, FormSubmitController, FormTargets,
	SubmissionRequest, ui,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window()
		.expect("window")
		.document()
		.expect("document")
}

/// Clears the test document body between tests.
fn reset_body() -> Element {
	let body = document().body().expect("body");
	body.set_inner_html("");
	body.into()
}

/// Mounts a form with a submit button. `action` and `id` map onto the
/// corresponding attributes; `required_empty` adds an unfilled required
/// input so constraint validation fails.
fn mount_form(body: &Element, id: &str, action: &str, required_empty: bool) -> HtmlFormElement {
	let doc = document();
	let form: HtmlFormElement = doc
		.create_element("form")
		.expect("create form")
		.dyn_into()
		.expect("form element");
	form.set_id(id);
	form.set_attribute("action", action).expect("set action");
	form.set_attribute("method", "post").expect("set method");

	let input = doc.create_element("input").expect("create input");
	input.set_attribute("name", "email").expect("set name");
	if required_empty {
		input.set_attribute("required", "").expect("set required");
	}
	form.append_child(&input).expect("append input");

	let button = doc.create_element("button").expect("create button");
	button.set_attribute("type", "submit").expect("set type");
	button.set_inner_html("Join the team");
	form.append_child(&button).expect("append button");

	body.append_child(&form).expect("append form");
	form
}

/// Mounts a hidden status/success companion element with the given id.
fn mount_companion(body: &Element, id: &str) -> Element {
	let element = document().create_element("div").expect("create div");
	element.set_id(id);
	element.set_class_name("hidden");
	body.append_child(&element).expect("append companion");
	element
}

fn submit_button_of(form: &HtmlFormElement) -> HtmlButtonElement {
	form.query_selector("button[type=\"submit\"]")
		.expect("query")
		.expect("button present")
		.dyn_into()
		.expect("button element")
}

fn dispatch_submit(form: &HtmlFormElement) {
	let init = web_sys::EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event =
		web_sys::Event::new_with_event_init_dict("submit", &init).expect("create submit event");
	form.dispatch_event(&event).expect("dispatch");
}

// ============================================================================
// Category 1: Binding
// ============================================================================

/// Only the form whose action matches the prefix is bound.
#[wasm_bindgen_test]
fn test_bind_document_skips_non_matching_forms() {
	let body = reset_body();
	mount_form(&body, "join-form", "https://formspree.io/f/abc", false);
	mount_form(&body, "other-form", "https://example.com/contact", false);

	let controller = FormSubmitController::new(ControllerConfig::default());
	let bound = controller.bind_document().expect("bind");

	assert_eq!(bound, 1);
}

/// Binding an empty document is a no-op, not an error.
#[wasm_bindgen_test]
fn test_bind_document_without_forms() {
	reset_body();

	let controller = FormSubmitController::new(ControllerConfig::default());
	assert_eq!(controller.bind_document().expect("bind"), 0);
}

// ============================================================================
// Category 2: Target discovery
// ============================================================================

/// Discovery resolves companions by the `<form-id>-status`/`-success`
/// convention and locates the submit button.
#[wasm_bindgen_test]
fn test_discover_resolves_companions() {
	let body = reset_body();
	let form = mount_form(&body, "join-form", "https://formspree.io/f/abc", false);
	mount_companion(&body, "join-form-status");
	mount_companion(&body, "join-form-success");

	let targets = FormTargets::discover(&form);

	assert!(targets.submit_button.is_some());
	assert_eq!(
		targets.status.as_ref().map(|el| el.id()),
		Some("join-form-status".to_string())
	);
	assert_eq!(
		targets.success.as_ref().map(|el| el.id()),
		Some("join-form-success".to_string())
	);
}

/// Missing companions and a missing form id resolve to `None`.
#[wasm_bindgen_test]
fn test_discover_tolerates_missing_companions() {
	let body = reset_body();
	let bare = mount_form(&body, "", "https://formspree.io/f/abc", false);
	let targets = FormTargets::discover(&bare);
	assert!(targets.status.is_none());
	assert!(targets.success.is_none());

	let lonely = mount_form(&body, "lonely", "https://formspree.io/f/abc", false);
	let targets = FormTargets::discover(&lonely);
	assert!(targets.status.is_none());
	assert!(targets.success.is_none());
}

// ============================================================================
// Category 3: Validation short-circuit
// ============================================================================

/// An invalid form surfaces native validation only: no sending UI, no
/// status/success mutation.
#[wasm_bindgen_test]
fn test_invalid_form_never_enters_sending_state() {
	let body = reset_body();
	let form = mount_form(&body, "join-form", "https://formspree.io/f/abc", true);
	let status = mount_companion(&body, "join-form-status");
	let success = mount_companion(&body, "join-form-success");

	let controller = FormSubmitController::new(ControllerConfig::default());
	controller
		.register(FormTargets::discover(&form))
		.expect("register");

	dispatch_submit(&form);

	let button = submit_button_of(&form);
	assert!(!button.disabled());
	assert_eq!(button.inner_html(), "Join the team");
	assert_eq!(status.text_content().unwrap_or_default(), "");
	assert!(success.class_list().contains("hidden"));
	assert!(!form.class_list().contains("hidden"));
}

// ============================================================================
// Category 4: UI state transitions
// ============================================================================

/// Entering the sending state disables the button and swaps the label;
/// restoring undoes both exactly.
#[wasm_bindgen_test]
fn test_sending_state_round_trip() {
	let body = reset_body();
	let form = mount_form(&body, "join-form", "https://formspree.io/f/abc", false);
	let button = submit_button_of(&form);

	let original = ui::enter_sending(&button);
	assert!(button.disabled());
	assert!(button.inner_html().contains("Sending..."));
	assert_eq!(original, "Join the team");

	ui::restore_button(&button, &original);
	assert!(!button.disabled());
	assert_eq!(button.inner_html(), "Join the team");
}

/// Two sending round trips restore the original label each time, never a
/// previously substituted busy label.
#[wasm_bindgen_test]
fn test_sending_state_idempotent_across_submissions() {
	let body = reset_body();
	let form = mount_form(&body, "join-form", "https://formspree.io/f/abc", false);
	let button = submit_button_of(&form);

	for _ in 0..2 {
		let original = ui::enter_sending(&button);
		assert_eq!(original, "Join the team");
		ui::restore_button(&button, &original);
	}

	assert_eq!(button.inner_html(), "Join the team");
}

/// The success state clears and hides the form and reveals the success
/// element.
#[wasm_bindgen_test]
fn test_success_state_hides_form_and_reveals_success() {
	let body = reset_body();
	let form = mount_form(&body, "join-form", "https://formspree.io/f/abc", false);
	let success = mount_companion(&body, "join-form-success");

	let input: web_sys::HtmlInputElement = form
		.query_selector("input[name=\"email\"]")
		.expect("query")
		.expect("input")
		.dyn_into()
		.expect("input element");
	input.set_value("team@example.com");

	let targets = FormTargets::discover(&form);
	ui::show_success(&targets);

	assert!(form.class_list().contains("hidden"));
	assert!(!success.class_list().contains("hidden"));
	assert_eq!(input.value(), ""); // form.reset() cleared the field
}

/// A success without a bound success element skips the reveal step.
#[wasm_bindgen_test]
fn test_success_state_without_success_element() {
	let body = reset_body();
	let form = mount_form(&body, "join-form", "https://formspree.io/f/abc", false);

	let targets = FormTargets::discover(&form);
	ui::show_success(&targets);

	assert!(form.class_list().contains("hidden"));
}

// ============================================================================
// Category 5: GET field encoding
// ============================================================================

/// A GET form's captured fields are encoded into the action URL's query
/// string, replacing any query the action already declared.
#[wasm_bindgen_test]
fn test_get_submission_encodes_fields_into_action() {
	let body = reset_body();
	let form = mount_form(&body, "search-form", "https://formspree.io/f/abc?stale=1", false);
	form.set_attribute("method", "get").expect("set method");

	let input: web_sys::HtmlInputElement = form
		.query_selector("input[name=\"email\"]")
		.expect("query")
		.expect("input")
		.dyn_into()
		.expect("input element");
	input.set_value("team@example.com");

	let request = SubmissionRequest::from_form(&form).expect("capture");
	let url = request.encoded_action().expect("encode");

	assert_eq!(url, "https://formspree.io/f/abc?email=team%40example.com");
}

// ============================================================================
// Category 6: End-to-end pipeline
// ============================================================================

/// Polls the status element until it shows a message or the deadline runs
/// out.
async fn wait_for_status_text(status: &Element, max_ms: u32) -> String {
	let mut waited = 0;
	loop {
		let text = status.text_content().unwrap_or_default();
		if !text.is_empty() || waited >= max_ms {
			return text;
		}
		gloo_timers::future::TimeoutFuture::new(50).await;
		waited += 50;
	}
}

/// Drives the registered pipeline against an unreachable origin: the
/// status element receives the fixed connectivity message, the button ends
/// enabled with its original label, and the form stays intact. A second
/// submit dispatched while the first is in flight is rejected by the
/// guard; a third, after resolution, runs a fresh pipeline.
#[wasm_bindgen_test]
async fn test_pipeline_transport_failure_end_to_end() {
	let body = reset_body();
	let form = mount_form(&body, "relay-form", "http://127.0.0.1:9/submit", false);
	let status = mount_companion(&body, "relay-form-status");
	let success = mount_companion(&body, "relay-form-success");

	let controller =
		FormSubmitController::new(ControllerConfig::new("http://127.0.0.1:9").with_timeout_ms(8_000));
	controller
		.register(FormTargets::discover(&form))
		.expect("register");

	// First submit starts the pipeline; the immediate second one must be
	// swallowed by the in-flight guard. A second pipeline would stash the
	// busy label as the "original" and restore the wrong label below.
	dispatch_submit(&form);
	dispatch_submit(&form);

	let message = wait_for_status_text(&status, 10_000).await;
	assert_eq!(message, CONNECTIVITY_ERROR_MESSAGE);

	let button = submit_button_of(&form);
	assert!(!button.disabled());
	assert_eq!(button.inner_html(), "Join the team");
	assert_eq!(status.class_name(), ui::ERROR_STATUS_CLASS);
	assert!(!form.class_list().contains("hidden"));
	assert!(success.class_list().contains("hidden"));

	// The guard must have reset: a fresh submit runs a new pipeline.
	status.set_text_content(Some(""));
	dispatch_submit(&form);

	let message = wait_for_status_text(&status, 10_000).await;
	assert_eq!(message, CONNECTIVITY_ERROR_MESSAGE);
	assert!(!button.disabled());
	assert_eq!(button.inner_html(), "Join the team");
}

/// The error state populates the status element with the message and the
/// error treatment, leaving the form intact.
#[wasm_bindgen_test]
fn test_error_state_populates_status_element() {
	let body = reset_body();
	let form = mount_form(&body, "join-form", "https://formspree.io/f/abc", false);
	let status = mount_companion(&body, "join-form-status");

	ui::show_error(Some(&status), "Email is required, Invalid phone");

	assert_eq!(
		status.text_content().unwrap_or_default(),
		"Email is required, Invalid phone"
	);
	assert_eq!(status.class_name(), ui::ERROR_STATUS_CLASS);
	assert!(!status.class_list().contains("hidden"));
	assert!(!form.class_list().contains("hidden"));
}
