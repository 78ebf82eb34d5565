//! The contract between the hosting page and the support form.
//!
//! The surrounding application embeds a JSON `<script>` block with the
//! serialized [`PageContext`]; the form reads it once on startup. Everything
//! the form needs from its host lives here: who is signed in, where to send
//! anonymous users to log in, where the help center lives, and the helpdesk
//! configuration.

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user, as known to the hosting application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Display names of the courses the user is enrolled in. When non-empty
    /// the form offers them in a selection control for the course field.
    #[serde(default)]
    pub courses: Vec<String>,
}

/// Helpdesk configuration injected by the host page at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportConfig {
    /// Base URL of the helpdesk API, without a trailing slash. Typically a
    /// same-origin proxy path such as `/api/support`.
    pub api_base_url: String,
    /// Bearer token for direct helpdesk access. Leave unset when the proxy
    /// attaches credentials server-side; requests then carry no
    /// Authorization header.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Id of the helpdesk custom field that carries the course identifier.
    pub course_field_id: String,
}

/// Context object supplied by the hosting page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    #[serde(default)]
    pub user: Option<UserInfo>,
    pub login_url: String,
    pub marketing_url: String,
    pub config: SupportConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_parses_with_signed_in_user() {
        let raw = r#"{
            "user": {"email": "learner@example.com", "username": "learner", "courses": ["Algebra 101"]},
            "login_url": "/login?next=/support",
            "marketing_url": "https://help.example.com",
            "config": {"api_base_url": "/api/support", "course_field_id": "114099484092"}
        }"#;
        let ctx: PageContext = serde_json::from_str(raw).unwrap();
        let user = ctx.user.unwrap();
        assert_eq!(user.email, "learner@example.com");
        assert_eq!(user.courses, vec!["Algebra 101"]);
        assert_eq!(ctx.config.access_token, None);
    }

    #[test]
    fn context_parses_without_user() {
        let raw = r#"{
            "login_url": "/login",
            "marketing_url": "https://help.example.com",
            "config": {
                "api_base_url": "https://helpdesk.example.com/api/v2",
                "access_token": "s3cret",
                "course_field_id": "42"
            }
        }"#;
        let ctx: PageContext = serde_json::from_str(raw).unwrap();
        assert!(ctx.user.is_none());
        assert_eq!(ctx.config.access_token.as_deref(), Some("s3cret"));
    }
}
