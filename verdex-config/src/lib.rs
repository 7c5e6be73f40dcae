//! Environment-driven configuration for the Verdex server.
//!
//! Loading never fails on a malformed optional value; it falls back to the
//! default and records a warning for the caller to log at startup.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Development-only gateway secret. Real deployments must set
/// `PAYMENT_SECRET`; loading warns whenever this fallback is in use.
const DEV_PAYMENT_SECRET: &str = "verdex-dev-secret";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSettings {
    /// Public key id handed to the hosted checkout widget.
    pub key_id: String,
    /// Shared secret for callback signature verification.
    pub secret: String,
}

/// Server configuration loaded from environment variables (and a `.env`
/// file when present).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerSettings,

    /// Root for durable local state and uploaded images.
    pub data_dir: PathBuf,

    /// Optional JSON catalog replacing the built-in seed.
    pub seed_file: Option<PathBuf>,

    /// CORS origins; empty means allow any (development posture).
    pub cors_allowed_origins: Vec<String>,

    pub payment: PaymentSettings,

    /// How long a checkout attempt waits for payment confirmation.
    pub checkout_window: Duration,

    pub dev_mode: bool,
}

/// One non-fatal problem found while loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, message: impl Into<String>, hint: Option<&str>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: hint.map(str::to_string),
        });
    }
}

/// A loaded configuration plus everything worth telling the operator.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load from the process environment, reading `.env` first if present.
    pub fn load(&self) -> anyhow::Result<ConfigLoad> {
        dotenvy::dotenv().ok();
        let vars: HashMap<String, String> = std::env::vars().collect();
        Ok(load_from(&vars))
    }
}

fn load_from(vars: &HashMap<String, String>) -> ConfigLoad {
    let mut warnings = ConfigWarnings::default();
    let get = |key: &str| vars.get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let host = get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
    let port = match get("SERVER_PORT") {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warnings.push(
                format!("SERVER_PORT {raw:?} is not a port number"),
                Some("falling back to 3000"),
            );
            3000
        }),
        None => 3000,
    };

    let data_dir = PathBuf::from(get("DATA_DIR").unwrap_or_else(|| "./data".to_string()));
    let seed_file = get("SEED_FILE").map(PathBuf::from);

    let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let key_id = get("PAYMENT_KEY_ID").unwrap_or_else(|| "rzp_test_placeholder".to_string());
    let secret = get("PAYMENT_SECRET").unwrap_or_else(|| {
        warnings.push(
            "PAYMENT_SECRET is not set; using the built-in development secret",
            Some("set PAYMENT_SECRET before exposing checkout to a real gateway"),
        );
        DEV_PAYMENT_SECRET.to_string()
    });

    let checkout_window = match get("CHECKOUT_WINDOW") {
        Some(raw) => humantime::parse_duration(&raw).unwrap_or_else(|_| {
            warnings.push(
                format!("CHECKOUT_WINDOW {raw:?} is not a duration"),
                Some("use forms like 300s or 5m; falling back to 5m"),
            );
            Duration::from_secs(300)
        }),
        None => Duration::from_secs(300),
    };

    let dev_mode = get("DEV_MODE")
        .map(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    ConfigLoad {
        config: Config {
            server: ServerSettings { host, port },
            data_dir,
            seed_file,
            cors_allowed_origins,
            payment: PaymentSettings { key_id, secret },
            checkout_window,
            dev_mode,
        },
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_with_an_empty_environment() {
        let load = load_from(&HashMap::new());
        assert_eq!(load.config.server.host, "0.0.0.0");
        assert_eq!(load.config.server.port, 3000);
        assert_eq!(load.config.checkout_window, Duration::from_secs(300));
        assert!(!load.config.dev_mode);
        // Missing payment secret is worth one warning.
        assert_eq!(load.warnings.items.len(), 1);
    }

    #[test]
    fn malformed_port_warns_and_falls_back() {
        let load = load_from(&vars(&[
            ("SERVER_PORT", "not-a-port"),
            ("PAYMENT_SECRET", "s3cret"),
        ]));
        assert_eq!(load.config.server.port, 3000);
        assert_eq!(load.warnings.items.len(), 1);
        assert!(load.warnings.items[0].message.contains("SERVER_PORT"));
    }

    #[test]
    fn checkout_window_parses_humantime_forms() {
        let load = load_from(&vars(&[
            ("CHECKOUT_WINDOW", "2m 30s"),
            ("PAYMENT_SECRET", "s3cret"),
        ]));
        assert_eq!(load.config.checkout_window, Duration::from_secs(150));
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn cors_origins_split_on_commas() {
        let load = load_from(&vars(&[
            ("CORS_ALLOWED_ORIGINS", "https://a.test, https://b.test"),
            ("PAYMENT_SECRET", "s3cret"),
        ]));
        assert_eq!(
            load.config.cors_allowed_origins,
            vec!["https://a.test", "https://b.test"]
        );
    }
}
