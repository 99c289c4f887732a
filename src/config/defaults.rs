use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://context7.com/api/v2";

pub const USER_AGENT: &str = "Context7-Skill/1.0";

pub const API_KEY_ENV: &str = "CONTEXT7_API_KEY";
pub const API_URL_ENV: &str = "CONTEXT7_API_URL";
pub const TIMEOUT_ENV: &str = "CONTEXT7_TIMEOUT";

pub const KEY_FILE_NAME: &str = ".env";

/// `.env` next to the running executable, if the executable path is known.
pub fn default_key_file() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(KEY_FILE_NAME)))
}
