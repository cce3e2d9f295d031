/// Logging settings read from the environment. Engine behaviour has no
/// knobs here: lazily created learners always start in assessment mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub log_level: String,
    pub file_logs: bool,
    pub log_dir: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            file_logs: false,
            log_dir: "./logs".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unknown or missing values fall back to the
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("RUST_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_level);

        let file_logs = lookup("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.file_logs);

        let log_dir = lookup("LOG_DIR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_dir);

        Self {
            log_level,
            file_logs,
            log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("RUST_LOG", "mastery_engine=debug"),
            ("ENABLE_FILE_LOGS", "1"),
            ("LOG_DIR", "/var/log/mastery"),
        ]));

        assert_eq!(config.log_level, "mastery_engine=debug");
        assert!(config.file_logs);
        assert_eq!(config.log_dir, "/var/log/mastery");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("RUST_LOG", "  "),
            ("ENABLE_FILE_LOGS", "yes"),
            ("LOG_DIR", ""),
        ]));

        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_mode_variables_are_ignored() {
        let config = EngineConfig::from_lookup(lookup_from(&[("MASTERY_DEFAULT_MODE", "sandbox")]));
        assert_eq!(config, EngineConfig::default());
    }
}
