use serde::{Deserialize, Serialize};
use validator::Validate;

/// Host the share links point at unless `SHARE_HOST` overrides it.
pub const DEFAULT_SHARE_HOST: &str = "www.vastdime.com";

/// Username/title pair identifying a shared program.
///
/// Values are interpolated into the link verbatim. Callers are responsible
/// for passing URL-safe strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ShareLinkData {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
}

impl ShareLinkData {
    pub fn new(username: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            title: title.into(),
        }
    }

    /// Builds `<host>/editor?username=<username>&title=<title>`.
    pub fn link(&self, host: &str) -> String {
        format!(
            "{}/editor?username={}&title={}",
            host.trim_end_matches('/'),
            self.username,
            self.title
        )
    }
}
