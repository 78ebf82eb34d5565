//! Wire types and endpoint builders for the helpdesk API.
//!
//! The ticket payload follows the helpdesk's schema exactly:
//! `{"ticket": {"subject", "comment": {"body", "uploads"}, "requester",
//! "custom_fields": [{"id", "value"}]}}`. Uploads are referenced by the
//! tokens the upload endpoint returned.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::model::attachment::UploadedFile;
use crate::model::context::SupportConfig;

/// Characters left as-is when encoding a filename into the upload query
/// string: the URL "unreserved" set.
const FILENAME_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub subject: String,
    pub comment: Comment,
    /// E-mail address of the person the ticket is opened for.
    pub requester: String,
    pub custom_fields: Vec<CustomField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    /// Tokens of previously uploaded attachments.
    pub uploads: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: String,
    pub value: String,
}

/// Body of the 201 response from the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub upload: UploadToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadToken {
    pub token: String,
}

impl TicketRequest {
    /// Assembles the submission payload from validated form values and the
    /// configured course custom-field id.
    pub fn assemble(
        subject: String,
        body: String,
        requester: String,
        course: String,
        uploads: &[UploadedFile],
        config: &SupportConfig,
    ) -> Self {
        TicketRequest {
            ticket: Ticket {
                subject,
                comment: Comment {
                    body,
                    uploads: uploads.iter().map(|f| f.file_token.clone()).collect(),
                },
                requester,
                custom_fields: vec![CustomField {
                    id: config.course_field_id.clone(),
                    value: course,
                }],
            },
        }
    }
}

/// URL for uploading a new attachment. The filename travels as a query
/// parameter and is percent-encoded here.
pub fn upload_endpoint(config: &SupportConfig, file_name: &str) -> String {
    format!(
        "{}/uploads.json?filename={}",
        config.api_base_url,
        utf8_percent_encode(file_name, FILENAME_SET)
    )
}

/// URL for deleting a previously uploaded attachment by its token.
pub fn delete_endpoint(config: &SupportConfig, token: &str) -> String {
    format!("{}/uploads/{}.json", config.api_base_url, token)
}

/// URL for creating a ticket.
pub fn ticket_endpoint(config: &SupportConfig) -> String {
    format!("{}/tickets.json", config.api_base_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> SupportConfig {
        SupportConfig {
            api_base_url: "/api/support".to_string(),
            access_token: None,
            course_field_id: "114099484092".to_string(),
        }
    }

    #[test]
    fn ticket_payload_matches_wire_format() {
        let uploads = vec![UploadedFile {
            file_name: "photo.png".to_string(),
            file_token: "abc123".to_string(),
        }];
        let request = TicketRequest::assemble(
            "Grading issue".to_string(),
            "My quiz never got graded.".to_string(),
            "a@b.com".to_string(),
            "Algebra 101".to_string(),
            &uploads,
            &config(),
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "ticket": {
                    "subject": "Grading issue",
                    "comment": {
                        "body": "My quiz never got graded.",
                        "uploads": ["abc123"]
                    },
                    "requester": "a@b.com",
                    "custom_fields": [
                        {"id": "114099484092", "value": "Algebra 101"}
                    ]
                }
            })
        );
    }

    #[test]
    fn upload_response_parses_token() {
        let parsed: UploadResponse =
            serde_json::from_str(r#"{"upload": {"token": "abc123"}}"#).unwrap();
        assert_eq!(parsed.upload.token, "abc123");
    }

    #[test]
    fn upload_endpoint_encodes_the_filename() {
        assert_eq!(
            upload_endpoint(&config(), "my photo (1).png"),
            "/api/support/uploads.json?filename=my%20photo%20%281%29.png"
        );
        assert_eq!(
            upload_endpoint(&config(), "scan.pdf"),
            "/api/support/uploads.json?filename=scan.pdf"
        );
    }

    #[test]
    fn delete_and_ticket_endpoints() {
        assert_eq!(
            delete_endpoint(&config(), "abc123"),
            "/api/support/uploads/abc123.json"
        );
        assert_eq!(ticket_endpoint(&config()), "/api/support/tickets.json");
    }
}
