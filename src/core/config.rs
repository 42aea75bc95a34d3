use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ScoutConfig — file-based config loader (cite-scout.json) with env-var fallback
// ---------------------------------------------------------------------------

pub const ENV_CONFIG_PATH: &str = "CITE_SCOUT_CONFIG";
pub const ENV_PORT: &str = "CITE_SCOUT_PORT";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "CITE_SCOUT_FETCH_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "CITE_SCOUT_USER_AGENT";

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Top-level config loaded from `cite-scout.json`.
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct ScoutConfig {
    /// HTTP listen port. Overridden by `--port`.
    pub port: Option<u16>,
    /// Upper bound on a single page fetch, connect included.
    pub fetch_timeout_secs: Option<u64>,
    /// Identification string presented to the analysed site.
    pub user_agent: Option<String>,
}

impl ScoutConfig {
    /// Port: JSON field → `CITE_SCOUT_PORT` / `PORT` env → 5000.
    pub fn resolve_port(&self) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        for k in [ENV_PORT, "PORT"] {
            if let Ok(v) = std::env::var(k) {
                if let Ok(p) = v.trim().parse::<u16>() {
                    return p;
                }
            }
        }
        DEFAULT_PORT
    }

    /// Fetch timeout: JSON field → `CITE_SCOUT_FETCH_TIMEOUT_SECS` env → 10s.
    pub fn resolve_fetch_timeout(&self) -> Duration {
        let secs = self
            .fetch_timeout_secs
            .or_else(|| {
                std::env::var(ENV_FETCH_TIMEOUT_SECS)
                    .ok()
                    .and_then(|v| v.trim().parse().ok())
            })
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// User agent: JSON field → `CITE_SCOUT_USER_AGENT` env → built-in desktop Chrome string.
    pub fn resolve_user_agent(&self) -> String {
        if let Some(ua) = &self.user_agent {
            if !ua.trim().is_empty() {
                return ua.trim().to_string();
            }
        }
        std::env::var(ENV_USER_AGENT)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| crate::scraping::headers::BROWSER_USER_AGENT.to_string())
    }
}

/// Load `cite-scout.json` from standard locations.
///
/// Search order (first found wins):
/// 1. `CITE_SCOUT_CONFIG` env var path
/// 2. `./cite-scout.json`
/// 3. `../cite-scout.json`
///
/// Missing file → `ScoutConfig::default()` (silent, env-var fallbacks apply).
/// Parse error → log a warning, return `ScoutConfig::default()`.
pub fn load_scout_config() -> ScoutConfig {
    let mut candidates = vec![
        PathBuf::from("cite-scout.json"),
        PathBuf::from("../cite-scout.json"),
    ];
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        candidates.insert(0, PathBuf::from(env_path));
    }

    for path in &candidates {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        return parse_scout_config(&contents).unwrap_or_else(|e| {
            tracing::warn!(
                "cite-scout.json parse error at {}: {} (using defaults)",
                path.display(),
                e
            );
            ScoutConfig::default()
        });
    }

    ScoutConfig::default()
}

pub fn parse_scout_config(contents: &str) -> Result<ScoutConfig, serde_json::Error> {
    let cfg = serde_json::from_str::<ScoutConfig>(contents)?;
    tracing::info!("cite-scout.json loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_values_take_precedence() {
        let cfg = parse_scout_config(
            r#"{"port": 8088, "fetch_timeout_secs": 3, "user_agent": "TestAgent/1.0"}"#,
        )
        .unwrap();
        assert_eq!(cfg.resolve_port(), 8088);
        assert_eq!(cfg.resolve_fetch_timeout(), Duration::from_secs(3));
        assert_eq!(cfg.resolve_user_agent(), "TestAgent/1.0");
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let cfg = ScoutConfig {
            fetch_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(
            cfg.resolve_fetch_timeout(),
            Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse_scout_config("{ port: }").is_err());
    }
}
