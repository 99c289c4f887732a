//! API key resolution.
//!
//! The environment variable always wins. The key file is only read when the
//! variable is unset or empty, and a missing or unmatched file is not an error.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

static KEY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CONTEXT7_API_KEY\s*=\s*(.+)").expect("key line regex"));

static SURROUNDING_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["']|["']$"#).expect("quote regex"));

/// Where the resolved key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    KeyFile,
}

/// Resolve the key from the value of `CONTEXT7_API_KEY`, then `key_file`.
pub fn resolve_api_key(
    env_value: Option<String>,
    key_file: Option<&Path>,
) -> Option<(String, KeySource)> {
    resolve_api_key_with(env_value, key_file, |path| fs::read_to_string(path))
}

/// [`resolve_api_key`] with the key file read through `read_file`.
pub fn resolve_api_key_with<F>(
    env_value: Option<String>,
    key_file: Option<&Path>,
    read_file: F,
) -> Option<(String, KeySource)>
where
    F: FnOnce(&Path) -> io::Result<String>,
{
    if let Some(key) = env_value.filter(|k| !k.is_empty()) {
        return Some((key, KeySource::Environment));
    }

    let path = key_file?;
    let contents = match read_file(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "key file not readable");
            return None;
        }
    };

    parse_key_file(&contents).map(|key| (key, KeySource::KeyFile))
}

/// Extract the first `CONTEXT7_API_KEY = value` assignment from `contents`.
pub fn parse_key_file(contents: &str) -> Option<String> {
    let captures = KEY_LINE.captures(contents)?;
    let raw = captures.get(1)?.as_str().trim();
    let key = SURROUNDING_QUOTES.replace_all(raw, "");

    if key.is_empty() {
        None
    } else {
        Some(key.into_owned())
    }
}
