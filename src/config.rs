//! Configuration: optional JSON file, then command-line overrides.
//!
//! File shape (every key optional):
//! {
//!   "spec": "https://.../spec3.json",
//!   "timeout_secs": 30,
//!   "policy": { "methods": ["post", "get", "put", "delete"],
//!               "body_media_type": "application/x-www-form-urlencoded" },
//!   "telemetry": { "json": false }
//! }

use crate::Result;
use crate::model::DerivePolicy;
use crate::spec::load::DEFAULT_SPEC_URL;
use crate::spec::{Method, SpecSource};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "AppConfig::default_spec")]
    pub spec: String,
    #[serde(default = "AppConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub policy: DerivePolicy,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Emit log lines as JSON objects.
    #[serde(default)]
    pub json: bool,
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub spec: Option<String>,
    pub methods: Vec<Method>,
    pub media_type: Option<String>,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spec: Self::default_spec(),
            timeout_secs: Self::default_timeout_secs(),
            policy: DerivePolicy::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl AppConfig {
    fn default_spec() -> String {
        DEFAULT_SPEC_URL.to_string()
    }

    fn default_timeout_secs() -> u64 {
        30
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(spec) = overrides.spec {
            self.spec = spec;
        }
        if !overrides.methods.is_empty() {
            self.policy.methods = overrides.methods;
        }
        if let Some(media_type) = overrides.media_type {
            self.policy.body_media_type = media_type;
        }
        self.telemetry.json |= overrides.log_json;
    }

    pub fn source(&self) -> SpecSource {
        SpecSource::parse(&self.spec)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let mut cfg: AppConfig = serde_json::from_str(&raw)
        .with_context(|| format!("invalid config json in {}", path.display()))?;

    // Blank values fall back to defaults rather than disabling everything.
    let defaults = AppConfig::default();
    if cfg.spec.trim().is_empty() {
        cfg.spec = defaults.spec;
    }
    if cfg.policy.methods.is_empty() {
        cfg.policy.methods = defaults.policy.methods;
    }
    if cfg.policy.body_media_type.trim().is_empty() {
        cfg.policy.body_media_type = defaults.policy.body_media_type;
    }
    if cfg.timeout_secs == 0 {
        cfg.timeout_secs = defaults.timeout_secs;
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn no_file_means_defaults() {
        let cfg = load_config(None).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.source(), SpecSource::default());
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn file_values_and_blank_fallbacks() {
        let file = write_config(
            r#"{
                "spec": "./spec3.json",
                "timeout_secs": 0,
                "policy": { "methods": [], "body_media_type": "application/json" },
                "telemetry": { "json": true }
            }"#,
        );
        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.spec, "./spec3.json");
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.policy.methods, DerivePolicy::default().methods);
        assert_eq!(cfg.policy.body_media_type, "application/json");
        assert!(cfg.telemetry.json);
    }

    #[test]
    fn partial_policy_keeps_other_defaults() {
        let file = write_config(r#"{ "policy": { "methods": ["patch", "post"] } }"#);
        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.policy.methods, vec![Method::Patch, Method::Post]);
        assert_eq!(cfg.policy.body_media_type, DerivePolicy::default().body_media_type);
        assert_eq!(cfg.spec, DEFAULT_SPEC_URL);
    }

    #[test]
    fn invalid_json_is_reported() {
        let file = write_config("{ nope");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config json"));
    }

    #[test]
    fn overrides_win() {
        let mut cfg = AppConfig::default();
        cfg.apply(Overrides {
            spec: Some("local.json".to_string()),
            methods: vec![Method::Get],
            media_type: None,
            log_json: true,
        });
        assert_eq!(cfg.source(), SpecSource::parse("local.json"));
        assert_eq!(cfg.policy.methods, vec![Method::Get]);
        assert_eq!(cfg.policy.body_media_type, DerivePolicy::default().body_media_type);
        assert!(cfg.telemetry.json);
    }
}
