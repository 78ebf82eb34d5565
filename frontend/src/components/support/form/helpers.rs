//! Pure validation helpers for the support form.
//!
//! Everything here is plain data-in/data-out so it can be unit tested on
//! the host: attachment size and extension checks, the requester e-mail
//! pattern, and the submission validation pass. The user-facing messages
//! belong to these checks and live next to them.

use regex::Regex;

/// Uploads above this many bytes are rejected client-side.
pub const MAX_ATTACHMENT_BYTES: f64 = 5_000_000.0;

/// Attachment extensions the helpdesk accepts.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["gif", "png", "jpg", "jpeg", "pdf"];

const EMAIL_PATTERN: &str = r"^([a-zA-Z0-9_.+-])+@(([a-zA-Z0-9-])+\.)+([a-zA-Z0-9]{2,4})+$";

/// Form fields that can fail validation; used to mark their containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Subject,
    Message,
    Email,
}

/// The values ticket submission works from, gathered in one place instead
/// of queried out of the DOM piecemeal.
pub struct SubmissionInput {
    pub subject: String,
    pub body: String,
    pub requester: String,
    pub course: String,
}

/// Client-side checks before any upload request is sent. Size is checked
/// before extension, so an oversized file reports only the size message.
pub fn validate_attachment(file_name: &str, size: f64) -> Result<(), String> {
    if size > MAX_ATTACHMENT_BYTES {
        return Err("Please select file of less than 5 MB!".to_string());
    }
    if !ALLOWED_EXTENSIONS.contains(&extension(file_name).as_str()) {
        return Err("Please select image or pdf file!".to_string());
    }
    Ok(())
}

/// Lowercased text after the last dot; the whole name when there is none,
/// which then fails the allow-list.
fn extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Checks a submission and returns every failure with the field it belongs
/// to. An empty result means the ticket may be sent.
pub fn validate_submission(input: &SubmissionInput) -> Vec<(Field, String)> {
    let mut failures = Vec::new();

    if input.subject.is_empty() {
        failures.push((
            Field::Subject,
            "You must enter a subject before submitting.".to_string(),
        ));
    }
    if input.body.is_empty() {
        failures.push((
            Field::Message,
            "You must enter a message before submitting.".to_string(),
        ));
    }
    if input.requester.is_empty() {
        failures.push((
            Field::Email,
            "You must enter email before submitting.".to_string(),
        ));
    } else if !Regex::new(EMAIL_PATTERN).unwrap().is_match(&input.requester) {
        failures.push((
            Field::Email,
            "You must enter a valid email before submitting.".to_string(),
        ));
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(subject: &str, body: &str, requester: &str) -> SubmissionInput {
        SubmissionInput {
            subject: subject.to_string(),
            body: body.to_string(),
            requester: requester.to_string(),
            course: "Algebra 101".to_string(),
        }
    }

    #[test]
    fn attachment_over_five_megabytes_is_rejected() {
        let err = validate_attachment("photo.png", 5_000_001.0).unwrap_err();
        assert!(err.contains("5 MB"));
    }

    #[test]
    fn attachment_at_the_limit_is_accepted() {
        assert!(validate_attachment("photo.png", 5_000_000.0).is_ok());
    }

    #[test]
    fn disallowed_extension_is_rejected() {
        let err = validate_attachment("malware.exe", 1_000.0).unwrap_err();
        assert!(err.contains("image or pdf"));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(validate_attachment("SCAN.PDF", 1_000.0).is_ok());
        assert!(validate_attachment("Photo.JpEg", 1_000.0).is_ok());
    }

    #[test]
    fn file_without_extension_is_rejected() {
        assert!(validate_attachment("README", 1_000.0).is_err());
    }

    #[test]
    fn oversized_file_reports_only_the_size_error() {
        let err = validate_attachment("movie.mkv", 600_000_000.0).unwrap_err();
        assert!(err.contains("5 MB"));
    }

    #[test]
    fn valid_submission_passes() {
        assert!(validate_submission(&input("Help", "hello", "a@b.com")).is_empty());
    }

    #[test]
    fn empty_subject_blocks_submission() {
        let failures = validate_submission(&input("", "hello", "a@b.com"));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Field::Subject);
        assert!(failures[0].1.contains("subject"));
    }

    #[test]
    fn empty_body_blocks_submission() {
        let failures = validate_submission(&input("Help", "", "a@b.com"));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Field::Message);
        assert!(failures[0].1.contains("message"));
    }

    #[test]
    fn missing_email_blocks_submission() {
        let failures = validate_submission(&input("Help", "hello", ""));
        assert_eq!(failures[0].0, Field::Email);
        assert!(failures[0].1.contains("enter email"));
    }

    #[test]
    fn malformed_email_blocks_submission() {
        for bad in ["not-an-email", "a@b", "a b@c.com", "a@b..com@"] {
            let failures = validate_submission(&input("Help", "hello", bad));
            assert_eq!(failures.len(), 1, "{bad} should be rejected");
            assert_eq!(failures[0].0, Field::Email);
            assert!(failures[0].1.contains("valid email"));
        }
    }

    #[test]
    fn every_missing_field_is_reported_at_once() {
        let failures = validate_submission(&input("", "", ""));
        let fields: Vec<Field> = failures.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, vec![Field::Subject, Field::Message, Field::Email]);
    }
}
