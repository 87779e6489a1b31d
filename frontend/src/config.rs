pub struct Config;

impl Config {
    /// Local storage key holding the signed-in user's profile snapshot
    pub const USER_STORAGE_KEY: &'static str = "user";
    /// Local storage key holding the session id sent as a bearer token
    pub const SESSION_STORAGE_KEY: &'static str = "session_id";
    /// Delay between the last keystroke and the search request
    pub const SEARCH_DEBOUNCE_MS: u32 = 300;

    pub fn api_base_url() -> String {
        // Always relative: Trunk proxies /api/ in development, nginx does in production
        "".to_string()
    }
}
