//! Submission request model and per-form in-flight state.
//!
//! A [`SubmissionRequest`] captures one form's contents at the moment of
//! submission: the serialized field values (`FormData`, multipart-capable,
//! file inputs included) plus the target URL and HTTP method copied from the
//! form's declared attributes. It is created on submit and dropped once the
//! request resolves.
//!
//! [`SubmissionPhase`] backs the double-submit guard: each registered form
//! tracks whether a submission is in flight, and re-entrant submit events
//! are ignored until the prior one resolves. The disabled submit button is a
//! visual cue only; the phase is the actual lock.

/// HTTP method for a form submission.
///
/// HTML forms only ever submit `GET` or `POST`; anything else declared in
/// the `method` attribute falls back to `POST`, matching how the endpoint
/// providers expect to be called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
	/// Query-string submission, no body.
	Get,
	/// Body-carrying submission (the default).
	#[default]
	Post,
}

impl HttpMethod {
	/// Parses a form `method` attribute value, case-insensitively.
	pub fn parse(raw: &str) -> Self {
		if raw.trim().eq_ignore_ascii_case("get") {
			Self::Get
		} else {
			Self::Post
		}
	}

	/// The canonical method token.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
		}
	}
}

/// Lifecycle phase of one registered form's current submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
	/// No submission in flight; submit events are accepted.
	#[default]
	Idle,
	/// A request has been issued and has not yet resolved; submit events
	/// are rejected.
	Sending,
}

impl SubmissionPhase {
	/// Returns `true` while a submission is in flight.
	pub fn is_in_flight(self) -> bool {
		matches!(self, Self::Sending)
	}
}

/// The serialized contents of one form at the moment of submission.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
	/// Target URL, taken verbatim from the form's `action`.
	pub action: String,
	/// HTTP method, taken from the form's `method` attribute.
	pub method: HttpMethod,
	/// Serialized field values, including file inputs.
	#[cfg(target_arch = "wasm32")]
	pub body: web_sys::FormData,
}

#[cfg(target_arch = "wasm32")]
impl SubmissionRequest {
	/// Captures a form's current state into a request.
	///
	/// Fails only when the browser refuses to build `FormData` for the
	/// element, which indicates a detached or malformed form.
	pub fn from_form(form: &web_sys::HtmlFormElement) -> Result<Self, crate::error::SubmitError> {
		let body = web_sys::FormData::new_with_form(form)
			.map_err(|err| crate::error::SubmitError::Serialization(format!("{err:?}")))?;

		Ok(Self {
			action: form.action(),
			method: HttpMethod::parse(&form.method()),
			body,
		})
	}

	/// The action URL with the captured fields encoded as its query string.
	///
	/// GET submissions carry no request body; per HTML form semantics the
	/// fields travel in the URL and replace any query string the action
	/// already declared. File entries collapse to their string form, as
	/// they do in a native GET submission.
	pub fn encoded_action(&self) -> Result<String, crate::error::SubmitError> {
		let params = web_sys::UrlSearchParams::new_with_str_sequence_sequence(self.body.as_ref())
			.map_err(|err| crate::error::SubmitError::Serialization(format!("{err:?}")))?;

		Ok(action_with_query(&self.action, &String::from(params.to_string())))
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl SubmissionRequest {
	/// Builds a request directly from its parts (native test constructor).
	pub fn new(action: impl Into<String>, method: HttpMethod) -> Self {
		Self {
			action: action.into(),
			method,
		}
	}
}

/// Replaces the query component of an action URL with a serialized query
/// string, per HTML GET submission semantics: a query string declared on
/// the action is replaced, not merged, and fragments are dropped.
pub fn action_with_query(action: &str, query: &str) -> String {
	let base = action.split(['?', '#']).next().unwrap_or(action);
	if query.is_empty() {
		base.to_string()
	} else {
		format!("{base}?{query}")
	}
}
