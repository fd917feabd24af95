#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::model::dtos::{FormReply, SubmitParams};

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// Common interface for form submissions
pub trait SubmitApi {
    /// Post serialized form fields to the form's action URL, flagging the
    /// request as script-initiated and forwarding the CSRF token
    async fn post_form(&self, params: &SubmitParams) -> Result<FormReply>;
}

/// Typed accessors for every page region the flows touch, so the flow logic
/// never deals in raw selectors
pub trait PageView {
    type Control: ControlView;

    // flash container
    fn flash_available(&self) -> bool;
    fn set_flash_html(&self, html: &str);
    fn clear_flash(&self);
    fn scroll_flash_into_view(&self);

    // primary quiz form
    fn quiz_form_data(&self) -> Option<SubmitParams>;
    fn quiz_submit(&self) -> Option<Self::Control>;

    // result regions
    fn set_profile_html(&self, html: &str);
    fn set_courses_html(&self, html: &str);
    /// Attach a submit listener to the freshly rendered enrollment form.
    /// Returns false when no such form exists in the courses region.
    fn bind_enrollment_form(&self) -> bool;
    fn scroll_results_into_view(&self);

    // generated enrollment form
    fn enrollment_form_data(&self) -> Option<SubmitParams>;
    fn enrollment_submit(&self) -> Option<Self::Control>;

    // field-level error annotations
    fn clear_all_field_errors(&self);
    fn clear_field_errors(&self, field: &str);
    /// Append one annotation under the field's wrapper; no-op when the page
    /// has no input with that name.
    fn append_field_error(&self, field: &str, message: &str);

    // navigation
    fn navigate(&self, url: &str);
}

/// A submit control that can be disabled while a request is in flight
pub trait ControlView {
    fn label(&self) -> String;
    fn set_label(&self, text: &str);
    fn set_enabled(&self, enabled: bool);

    /// Label captured before the control entered the busy state
    fn saved_label(&self) -> Option<String>;
    fn save_label(&self, text: &str);
    fn clear_saved_label(&self);
}
