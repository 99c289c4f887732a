use context7_api::cli::Args;
use context7_api::config::{
    ApiConfig, Config, FileConfig, API_KEY_ENV, API_URL_ENV, DEFAULT_API_BASE, TIMEOUT_ENV,
    USER_AGENT,
};
use context7_api::error::Context7Error;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn args_without_key_file(temp_dir: &TempDir) -> Args {
    Args {
        env_file: Some(
            temp_dir
                .path()
                .join("missing.env")
                .to_string_lossy()
                .into_owned(),
        ),
        ..Args::default()
    }
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::resolve(
        &args_without_key_file(&temp_dir),
        &FileConfig::default(),
        env_from(&[]),
    );

    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.api_key, None);
    assert_eq!(config.timeout_secs, None);
    assert_eq!(config.user_agent, USER_AGENT);
}

#[test]
fn test_cli_overrides_env_and_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = args_without_key_file(&temp_dir);
    args.api_url = Some("http://cli.local/api/".to_string());
    args.timeout = Some(5);

    let file_config = FileConfig {
        api: ApiConfig {
            base_url: Some("http://file.local".to_string()),
            key_file: None,
            timeout_secs: Some(30),
        },
    };

    let config = Config::resolve(
        &args,
        &file_config,
        env_from(&[(API_URL_ENV, "http://env.local"), (TIMEOUT_ENV, "10")]),
    );

    assert_eq!(config.api_base, "http://cli.local/api");
    assert_eq!(config.timeout_secs, Some(5));
}

#[test]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_config = FileConfig {
        api: ApiConfig {
            base_url: Some("http://file.local".to_string()),
            key_file: None,
            timeout_secs: Some(30),
        },
    };

    let config = Config::resolve(
        &args_without_key_file(&temp_dir),
        &file_config,
        env_from(&[(API_URL_ENV, "http://env.local"), (TIMEOUT_ENV, "10")]),
    );

    assert_eq!(config.api_base, "http://env.local");
    assert_eq!(config.timeout_secs, Some(10));
}

#[test]
fn test_invalid_timeout_env_falls_back_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_config = FileConfig {
        api: ApiConfig {
            timeout_secs: Some(30),
            ..ApiConfig::default()
        },
    };

    let config = Config::resolve(
        &args_without_key_file(&temp_dir),
        &file_config,
        env_from(&[(TIMEOUT_ENV, "soon")]),
    );

    assert_eq!(config.timeout_secs, Some(30));
}

#[test]
fn test_api_key_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::resolve(
        &args_without_key_file(&temp_dir),
        &FileConfig::default(),
        env_from(&[(API_KEY_ENV, "ctx7sk-env")]),
    );

    assert_eq!(config.api_key.as_deref(), Some("ctx7sk-env"));
}

#[test]
fn test_api_key_from_configured_key_file() {
    let temp_dir = TempDir::new().unwrap();
    let key_file = temp_dir.path().join("context7.env");
    fs::write(&key_file, "CONTEXT7_API_KEY = \"abc123\"\n").unwrap();

    let file_config = FileConfig {
        api: ApiConfig {
            key_file: Some(key_file.to_string_lossy().into_owned()),
            ..ApiConfig::default()
        },
    };

    let config = Config::resolve(&Args::default(), &file_config, env_from(&[]));
    assert_eq!(config.api_key.as_deref(), Some("abc123"));
}

#[test]
fn test_load_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("context7.yaml");
    fs::write(
        &path,
        "api:\n  base_url: http://localhost:9000/api/v2\n  timeout_secs: 15\n",
    )
    .unwrap();

    let config = FileConfig::load_from(&path).unwrap();
    assert_eq!(
        config.api.base_url.as_deref(),
        Some("http://localhost:9000/api/v2")
    );
    assert_eq!(config.api.timeout_secs, Some(15));
    assert_eq!(config.api.key_file, None);
}

#[test]
fn test_load_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".context7.json");
    fs::write(&path, r#"{"api": {"key_file": "/etc/context7/.env"}}"#).unwrap();

    let config = FileConfig::load_from(&path).unwrap();
    assert_eq!(config.api.key_file.as_deref(), Some("/etc/context7/.env"));
}

#[test]
fn test_load_malformed_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("context7.yaml");
    fs::write(&path, "api: [unterminated\n").unwrap();

    let err = FileConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse YAML config file"));
}

#[test]
fn test_malformed_yaml_surfaces_as_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".context7.yml");
    fs::write(&path, "api:\n  timeout_secs: [1, 2\n").unwrap();

    let err = Context7Error::from(FileConfig::load_from(&path).unwrap_err());
    match err {
        Context7Error::ConfigError(msg) => {
            assert!(msg.starts_with("Failed to parse YAML config file"));
            assert!(msg.contains(".context7.yml"));
        }
        other => panic!("expected ConfigError, got {:?}", other),
    }
}
