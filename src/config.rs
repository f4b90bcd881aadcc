//! Controller configuration and per-form target bindings.
//!
//! [`ControllerConfig`] decides which forms are intercepted (by `action`
//! prefix) and how long a request may stay in flight. [`FormTargets`] binds
//! a form to its status and success elements as an explicit record, resolved
//! once at registration time instead of by ad-hoc ID lookups on every
//! submit.
//!
//! The markup convention remains the discovery path: for a form with id `X`,
//! [`FormTargets::discover`] looks up `X-status` and `X-success`. Forms
//! without an id simply bind with no status/success elements, in which case
//! errors degrade to a blocking alert.

/// Default endpoint prefix: the known form-processing provider's base URL.
pub const DEFAULT_ENDPOINT_PREFIX: &str = "https://formspree.io";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// Configuration for a [`FormSubmitController`](crate::FormSubmitController).
#[derive(Debug, Clone)]
pub struct ControllerConfig {
	/// Forms whose `action` starts with this prefix are intercepted;
	/// everything else keeps native submit behavior.
	pub endpoint_prefix: String,

	/// Maximum time a request may stay in flight before it resolves to
	/// `TimedOut`. `None` disables the timeout; the request then resolves
	/// or rejects solely based on the transport layer.
	pub timeout_ms: Option<u32>,
}

impl Default for ControllerConfig {
	fn default() -> Self {
		Self {
			endpoint_prefix: DEFAULT_ENDPOINT_PREFIX.to_string(),
			timeout_ms: Some(DEFAULT_TIMEOUT_MS),
		}
	}
}

impl ControllerConfig {
	/// Creates a configuration for the given endpoint prefix with the
	/// default timeout.
	pub fn new(endpoint_prefix: impl Into<String>) -> Self {
		Self {
			endpoint_prefix: endpoint_prefix.into(),
			..Self::default()
		}
	}

	/// Sets the request timeout in milliseconds.
	pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
		self.timeout_ms = Some(timeout_ms);
		self
	}

	/// Disables the request timeout.
	pub fn without_timeout(mut self) -> Self {
		self.timeout_ms = None;
		self
	}

	/// Returns `true` when a form with this `action` opts into handling.
	pub fn matches_action(&self, action: &str) -> bool {
		action.starts_with(&self.endpoint_prefix)
	}

	/// The CSS selector matching every opted-in form.
	///
	/// Quotes and backslashes in the prefix are escaped so the selector
	/// stays valid for any configured URL.
	pub fn form_selector(&self) -> String {
		let escaped = self.endpoint_prefix.replace('\\', "\\\\").replace('"', "\\\"");
		format!("form[action^=\"{escaped}\"]")
	}
}

/// Derives the conventional status element id for a form id.
pub fn status_element_id(form_id: &str) -> String {
	format!("{form_id}-status")
}

/// Derives the conventional success element id for a form id.
pub fn success_element_id(form_id: &str) -> String {
	format!("{form_id}-success")
}

/// Explicit binding between a form and its UI collaborators.
///
/// Resolved once at registration; the submit pipeline never performs ID
/// lookups of its own. Every element besides the form itself is optional:
/// a missing submit button skips the button UI steps, a missing success
/// element skips the reveal step, and a missing status element falls back
/// to a blocking alert for error display.
#[derive(Debug, Clone)]
pub struct FormTargets {
	/// The bound form element.
	pub form: web_sys::HtmlFormElement,
	/// The form's submit button, driven through disabled/busy states.
	pub submit_button: Option<web_sys::HtmlButtonElement>,
	/// Element receiving error messages (`<form-id>-status` by convention).
	pub status: Option<web_sys::Element>,
	/// Element revealed on success (`<form-id>-success` by convention).
	pub success: Option<web_sys::Element>,
}

#[cfg(target_arch = "wasm32")]
impl FormTargets {
	/// Binds a form with explicitly chosen status and success elements.
	///
	/// The submit button is located within the form. Use this instead of
	/// [`FormTargets::discover`] when the markup does not follow the ID
	/// convention.
	pub fn new(
		form: &web_sys::HtmlFormElement,
		status: Option<web_sys::Element>,
		success: Option<web_sys::Element>,
	) -> Self {
		Self {
			form: form.clone(),
			submit_button: find_submit_button(form),
			status,
			success,
		}
	}

	/// Binds a form, resolving its status and success elements by the ID
	/// convention (`<form-id>-status`, `<form-id>-success`).
	pub fn discover(form: &web_sys::HtmlFormElement) -> Self {
		let document = form.owner_document();

		let form_id = form.id();
		let lookup = |id: String| -> Option<web_sys::Element> {
			if form_id.is_empty() {
				return None;
			}
			document.as_ref().and_then(|doc| doc.get_element_by_id(&id))
		};

		Self {
			form: form.clone(),
			submit_button: find_submit_button(form),
			status: lookup(status_element_id(&form_id)),
			success: lookup(success_element_id(&form_id)),
		}
	}
}

/// Locates the first `button[type="submit"]` inside a form.
#[cfg(target_arch = "wasm32")]
fn find_submit_button(form: &web_sys::HtmlFormElement) -> Option<web_sys::HtmlButtonElement> {
	use wasm_bindgen::JsCast;

	form.query_selector("button[type=\"submit\"]")
		.ok()
		.flatten()
		.and_then(|element| element.dyn_into::<web_sys::HtmlButtonElement>().ok())
}
