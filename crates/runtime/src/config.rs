//! Runtime configuration
//!
//! ## Configuration (Environment Variables)
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DYNVAL_JSON_INDENT` | `2` | Spaces per nesting level for pretty `json_stringify` |
//! | `DYNVAL_REGEX_SIZE_LIMIT` | `10485760` | Compiled-program size limit handed to the regex engine |
//!
//! Unparseable values fall back to the default. `DYNVAL_JSON_INDENT` above
//! 16 is treated as unparseable.
//!
//! ## Example
//!
//! ```bash
//! # Four-space JSON, and a tighter bound on pathological patterns
//! DYNVAL_JSON_INDENT=4 DYNVAL_REGEX_SIZE_LIMIT=1048576 ./my-program
//! ```
//!
//! The environment is read once, on first use, and cached for the life of
//! the process. Operations that depend on configuration also have a
//! `*_with` form taking an explicit [`RuntimeConfig`].

use std::sync::OnceLock;

pub const JSON_INDENT_VAR: &str = "DYNVAL_JSON_INDENT";
pub const REGEX_SIZE_LIMIT_VAR: &str = "DYNVAL_REGEX_SIZE_LIMIT";

const DEFAULT_JSON_INDENT: usize = 2;
const MAX_JSON_INDENT: usize = 16;
const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Spaces per level when `json_stringify` pretty-prints
    pub json_indent: usize,
    /// Upper bound on a compiled regex program, in bytes
    pub regex_size_limit: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            json_indent: DEFAULT_JSON_INDENT,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let json_indent = std::env::var(JSON_INDENT_VAR)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&v| v <= MAX_JSON_INDENT)
            .unwrap_or(DEFAULT_JSON_INDENT);

        let regex_size_limit = std::env::var(REGEX_SIZE_LIMIT_VAR)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or(DEFAULT_REGEX_SIZE_LIMIT);

        let config = Self {
            json_indent,
            regex_size_limit,
        };
        tracing::trace!(?config, "loaded runtime configuration");
        config
    }
}

/// The process-wide configuration, loaded from the environment on first call
pub fn runtime_config() -> &'static RuntimeConfig {
    CONFIG.get_or_init(RuntimeConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: env mutation is confined to #[serial] tests
        unsafe {
            std::env::remove_var(JSON_INDENT_VAR);
            std::env::remove_var(REGEX_SIZE_LIMIT_VAR);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let config = RuntimeConfig::from_env();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.json_indent, 2);
        assert_eq!(config.regex_size_limit, 10_485_760);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        // SAFETY: #[serial] keeps other env tests out
        unsafe {
            std::env::set_var(JSON_INDENT_VAR, "4");
            std::env::set_var(REGEX_SIZE_LIMIT_VAR, " 4096 ");
        }
        let config = RuntimeConfig::from_env();
        assert_eq!(config.json_indent, 4);
        assert_eq!(config.regex_size_limit, 4096);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear_env();
        // SAFETY: #[serial] keeps other env tests out
        unsafe {
            std::env::set_var(JSON_INDENT_VAR, "wide");
            std::env::set_var(REGEX_SIZE_LIMIT_VAR, "0");
        }
        let config = RuntimeConfig::from_env();
        assert_eq!(config, RuntimeConfig::default());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_json_indent_is_capped() {
        clear_env();
        // SAFETY: #[serial] keeps other env tests out
        unsafe {
            std::env::set_var(JSON_INDENT_VAR, "16");
        }
        assert_eq!(RuntimeConfig::from_env().json_indent, 16);

        // SAFETY: #[serial] keeps other env tests out
        unsafe {
            std::env::set_var(JSON_INDENT_VAR, "18446744073709551615");
        }
        assert_eq!(RuntimeConfig::from_env().json_indent, DEFAULT_JSON_INDENT);
        clear_env();
    }
}
