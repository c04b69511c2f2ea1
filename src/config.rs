use std::collections::HashMap;
use std::env;
use std::fs;

use url::Url;

/// Config file path override; defaults to `sonar.conf` in the working
/// directory. A `.env` file is honoured for this variable.
const CONFIG_PATH_VAR: &str = "SONAR_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "sonar.conf";

const KEY_WIFI_SSID: &str = "WIFI_SSID";
const KEY_WIFI_PASS: &str = "WIFI_PASS";
const KEY_API_URL: &str = "API_URL";

/// Connection and reporting parameters, loaded once at startup and
/// read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    pub wifi_ssid: String,
    pub wifi_pass: String,
    pub api_url: String,
}

impl Config {
    /// Load and validate the configuration from the KEY=VALUE file.
    ///
    /// All three keys are required and must be non-empty; `API_URL` must
    /// parse as a URL. Any violation fails here, before the sampling
    /// loop starts.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // Load environment variables
        dotenv::dotenv().ok();

        let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

        Self::from_contents(&contents)
    }

    /// Build a Config from raw file contents. Split out of `load` so the
    /// parsing and validation rules are testable without a filesystem.
    pub fn from_contents(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let entries = parse_config(contents);

        let wifi_ssid = require_key(&entries, KEY_WIFI_SSID)?;
        let wifi_pass = require_key(&entries, KEY_WIFI_PASS)?;
        let api_url = require_key(&entries, KEY_API_URL)?;

        Url::parse(&api_url).map_err(|e| format!("{} is not a valid URL: {}", KEY_API_URL, e))?;

        Ok(Config {
            wifi_ssid,
            wifi_pass,
            api_url,
        })
    }
}

/// Parse line-oriented KEY=VALUE text.
///
/// Blank lines and lines starting with `#` are ignored; keys and values
/// are trimmed. Duplicate keys overwrite unconditionally, so the last
/// assignment wins.
fn parse_config(contents: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            if !key.is_empty() {
                entries.insert(key.to_string(), value.to_string());
            }
        }
    }

    entries
}

fn require_key(entries: &HashMap<String, String>, key: &str) -> Result<String, String> {
    match entries.get(key) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        Some(_) => Err(format!("Config key {} is empty", key)),
        None => Err(format!("Config key {} is missing", key)),
    }
}
