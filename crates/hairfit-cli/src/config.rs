use std::path::PathBuf;

/// CLI configuration, loaded from environment variables.
pub struct Config {
    /// TOML catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Extension of the detection sidecar written next to each image.
    pub landmarks_suffix: String,
    /// Fall back to the simplified estimate when landmark analysis fails.
    pub allow_fallback: bool,
    /// Seed for the fallback jitter; random when unset.
    pub fallback_seed: Option<u64>,
}

impl Config {
    /// Load configuration from `HAIRFIT_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self {
            catalog_path: std::env::var("HAIRFIT_CATALOG_PATH").ok().map(PathBuf::from),
            landmarks_suffix: std::env::var("HAIRFIT_LANDMARKS_SUFFIX")
                .unwrap_or_else(|_| "landmarks.json".to_string()),
            allow_fallback: env_bool("HAIRFIT_ALLOW_FALLBACK", true),
            fallback_seed: env_u64("HAIRFIT_FALLBACK_SEED"),
        }
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key).map(|v| v != "0").unwrap_or(default)
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
