/// localStorage key the login flow stores the bearer token under.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where the submission workflow gets its bearer token from. Passed in as a
/// capability so the workflow stays testable without a browser storage
/// environment.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

/// Token source backed by browser localStorage. The token is read at call
/// time, never cached, so a login/logout in another part of the app is
/// picked up by the next submission.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokens;

impl TokenSource for BrowserTokens {
    fn token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let value = storage.get_item(TOKEN_STORAGE_KEY).ok()??;
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }
}
