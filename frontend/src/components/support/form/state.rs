//! Component state for the support form controller.
//!
//! Fields are `pub` because they are accessed by the `view` and `update`
//! modules.

use std::collections::HashSet;

use web_sys::XmlHttpRequest;

use common::model::attachment::UploadedFile;

use super::helpers::Field;

/// Single source of truth for the form. Mutated only from `update`, in
/// response to user actions or HTTP callbacks.
pub struct SupportForm {
    /// Controlled-input values gathered at submission time.
    pub subject: String,
    pub message: String,
    pub email: String,
    pub course: String,

    /// Attachments the helpdesk confirmed with a 201. Nothing else ever
    /// lands here.
    pub file_list: Vec<UploadedFile>,

    /// Name of the single file currently being transferred, if any.
    pub file_in_progress: Option<String>,

    /// Handle to the in-flight upload request. Held so a superseding file
    /// selection can abort it at the transport level.
    pub current_request: Option<XmlHttpRequest>,

    /// Completion of the in-flight upload, in percent.
    pub upload_progress: f64,

    /// Validation messages to display. Cleared at the start of each upload
    /// attempt and each submission pass.
    pub error_list: Vec<String>,

    /// Fields whose container gets the `has-error` class.
    pub invalid_fields: HashSet<Field>,
}

impl SupportForm {
    pub fn new() -> Self {
        Self {
            subject: String::new(),
            message: String::new(),
            email: String::new(),
            course: String::new(),
            file_list: Vec::new(),
            file_in_progress: None,
            current_request: None,
            upload_progress: 0.0,
            error_list: Vec::new(),
            invalid_fields: HashSet::new(),
        }
    }
}
