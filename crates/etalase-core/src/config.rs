use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // The bin id and master key together are the only credential this service
    // holds; both live server-side and are never echoed to clients.
    let jsonbin_bin_id = require("JSONBIN_BIN_ID")?;
    let jsonbin_api_key = require("JSONBIN_API_KEY")?;

    let env = parse_environment(&or_default("ETALASE_ENV", "development"));
    let bind_addr = parse_addr("ETALASE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("ETALASE_LOG_LEVEL", "info");
    let jsonbin_base_url = or_default("ETALASE_JSONBIN_BASE_URL", "https://api.jsonbin.io/v3");
    let upstream_timeout_secs = parse_u64("ETALASE_UPSTREAM_TIMEOUT_SECS", "10")?;
    let cache_ttl_secs = parse_u64("ETALASE_CACHE_TTL_SECS", "10")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        jsonbin_bin_id,
        jsonbin_api_key,
        jsonbin_base_url,
        upstream_timeout_secs,
        cache_ttl_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("JSONBIN_BIN_ID", "65f1c0e2dc74654018a1b2c3");
        m.insert("JSONBIN_API_KEY", "$2a$10$test-master-key");
        m
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_bin_id() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "JSONBIN_BIN_ID"),
            "expected MissingEnvVar(JSONBIN_BIN_ID), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("JSONBIN_BIN_ID", "65f1c0e2dc74654018a1b2c3");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "JSONBIN_API_KEY"),
            "expected MissingEnvVar(JSONBIN_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_applies_defaults() {
        let map = full_env();
        let config = build_app_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.jsonbin_base_url, "https://api.jsonbin.io/v3");
        assert_eq!(config.upstream_timeout_secs, 10);
        assert_eq!(config.cache_ttl_secs, 10);
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map = full_env();
        map.insert("ETALASE_ENV", "production");
        map.insert("ETALASE_BIND_ADDR", "127.0.0.1:8080");
        map.insert("ETALASE_CACHE_TTL_SECS", "30");
        let config = build_app_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(config.env, Environment::Production);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.cache_ttl_secs, 30);
    }

    #[test]
    fn build_app_config_rejects_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("ETALASE_BIND_ADDR", "not-an-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ETALASE_BIND_ADDR"),
            "expected InvalidEnvVar(ETALASE_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_non_numeric_ttl() {
        let mut map = full_env();
        map.insert("ETALASE_CACHE_TTL_SECS", "ten");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ETALASE_CACHE_TTL_SECS"),
            "expected InvalidEnvVar(ETALASE_CACHE_TTL_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let map = full_env();
        let config = build_app_config(lookup_from_map(&map)).expect("config should build");
        let debug = format!("{config:?}");
        assert!(!debug.contains("65f1c0e2dc74654018a1b2c3"));
        assert!(!debug.contains("test-master-key"));
    }
}
