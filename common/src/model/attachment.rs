use serde::{Deserialize, Serialize};

/// An attachment that finished uploading to the helpdesk.
///
/// The token is the helpdesk's identifier for the stored file; ticket
/// submission and deletion both refer to the file through it. Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub file_name: String,
    pub file_token: String,
}
