//! DOM state transitions for the submission lifecycle.
//!
//! Three UI states exist per form: sending (busy button), success (form
//! hidden, success element revealed), and error (status element populated,
//! or a blocking alert when none is bound). Every terminal path restores the
//! submit button; error paths leave the form intact so the user can correct
//! and resubmit.
//!
//! Visibility is toggled via the `hidden` class, matching the utility-class
//! styling the markup contract assumes.

use crate::config::FormTargets;

/// Class used to toggle element visibility.
pub const HIDDEN_CLASS: &str = "hidden";

/// Visual treatment applied to the status element when showing an error.
pub const ERROR_STATUS_CLASS: &str =
	"text-center mt-4 text-red-600 font-semibold p-4 bg-red-50 rounded-lg border border-red-200";

/// Busy label swapped into the submit button while a request is in flight.
pub const BUSY_LABEL_HTML: &str = r#"<svg class="animate-spin -ml-1 mr-3 h-5 w-5 text-white inline-block" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24"><circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle><path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path></svg> Sending..."#;

/// Enters the sending state on a submit button.
///
/// Disables the button and swaps its label for the busy indicator. Returns
/// the original label markup so [`restore_button`] can undo the swap.
#[cfg(target_arch = "wasm32")]
pub fn enter_sending(button: &web_sys::HtmlButtonElement) -> String {
	let original_label = button.inner_html();
	button.set_disabled(true);
	button.set_inner_html(BUSY_LABEL_HTML);
	original_label
}

/// Restores a submit button to enabled with its original label.
///
/// Runs on every terminal path of a submission, success or failure.
#[cfg(target_arch = "wasm32")]
pub fn restore_button(button: &web_sys::HtmlButtonElement, original_label: &str) {
	button.set_disabled(false);
	button.set_inner_html(original_label);
}

/// Applies the success state: clear the form, hide it, reveal the success
/// element and bring it into view smoothly.
///
/// A missing success element is not an error; the reveal step is skipped.
#[cfg(target_arch = "wasm32")]
pub fn show_success(targets: &FormTargets) {
	targets.form.reset();
	let _ = targets.form.class_list().add_1(HIDDEN_CLASS);

	if let Some(success) = &targets.success {
		let _ = success.class_list().remove_1(HIDDEN_CLASS);

		let options = web_sys::ScrollIntoViewOptions::new();
		options.set_behavior(web_sys::ScrollBehavior::Smooth);
		options.set_block(web_sys::ScrollLogicalPosition::Center);
		success.scroll_into_view_with_scroll_into_view_options(&options);
	}
}

/// Displays an error message on the bound status element.
///
/// Falls back to a blocking alert when no status element is bound, so a
/// failure is never silently dropped even if the markup is incomplete.
#[cfg(target_arch = "wasm32")]
pub fn show_error(status: Option<&web_sys::Element>, message: &str) {
	match status {
		Some(element) => {
			element.set_text_content(Some(message));
			element.set_class_name(ERROR_STATUS_CLASS);
		}
		None => {
			if let Some(window) = web_sys::window() {
				let _ = window.alert_with_message(message);
			}
		}
	}
}
