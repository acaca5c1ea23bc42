//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RedactorConfig;
use crate::domain::errors::RedactorError;
use crate::domain::result::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Configuration file used when none is given
pub const DEFAULT_CONFIG_PATH: &str = "pii-redactor.toml";

lazy_static! {
    static ref ENV_PLACEHOLDER: Regex = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
}

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RedactorConfig
/// 4. Applies environment variable overrides (REDACTOR_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`RedactorError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, parsing fails, or validation
/// fails.
///
/// # Examples
///
/// ```no_run
/// use pii_redactor::config::loader::load_config;
///
/// let config = load_config("pii-redactor.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RedactorConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RedactorError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RedactorError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: RedactorConfig = toml::from_str(&contents)
        .map_err(|e| RedactorError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration, falling back to defaults when the default file is absent.
///
/// An explicitly chosen path that does not exist is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<RedactorConfig> {
    let path = path.as_ref();

    if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
        tracing::debug!(
            config_path = %path.display(),
            "Configuration file not found, using built-in defaults"
        );
        let mut config = RedactorConfig::default();
        finish(&mut config)?;
        return Ok(config);
    }

    load_config(path)
}

fn finish(config: &mut RedactorConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        RedactorError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut missing_vars: Vec<String> = Vec::new();

    let lines: Vec<String> = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }

            ENV_PLACEHOLDER
                .replace_all(line, |cap: &regex::Captures<'_>| {
                    let var_name = &cap[1];
                    std::env::var(var_name).unwrap_or_else(|_| {
                        if !missing_vars.iter().any(|v| v == var_name) {
                            missing_vars.push(var_name.to_string());
                        }
                        cap[0].to_string()
                    })
                })
                .into_owned()
        })
        .collect();

    if !missing_vars.is_empty() {
        return Err(RedactorError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    let mut result = lines.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    Ok(result)
}

fn parse_env<T: std::str::FromStr>(name: &str, val: &str) -> Result<T> {
    val.parse().map_err(|_| {
        RedactorError::Configuration(format!("Invalid value for {name}: '{val}'"))
    })
}

/// Applies environment variable overrides using REDACTOR_* prefix
///
/// Environment variables follow the pattern: REDACTOR_<SECTION>_<KEY>
/// For example: REDACTOR_BATCH_CHUNK_SIZE, REDACTOR_APPLICATION_DRY_RUN
fn apply_env_overrides(config: &mut RedactorConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("REDACTOR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("REDACTOR_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_env("REDACTOR_APPLICATION_DRY_RUN", &val)?;
    }

    // Batch overrides
    if let Ok(val) = std::env::var("REDACTOR_BATCH_ID_COLUMN") {
        config.batch.id_column = val;
    }
    if let Ok(val) = std::env::var("REDACTOR_BATCH_DATA_COLUMN") {
        config.batch.data_column = val;
    }
    if let Ok(val) = std::env::var("REDACTOR_BATCH_OUTPUT_PATH") {
        config.batch.output_path = val;
    }
    if let Ok(val) = std::env::var("REDACTOR_BATCH_PARALLELISM") {
        config.batch.parallelism = parse_env("REDACTOR_BATCH_PARALLELISM", &val)?;
    }
    if let Ok(val) = std::env::var("REDACTOR_BATCH_CHUNK_SIZE") {
        config.batch.chunk_size = parse_env("REDACTOR_BATCH_CHUNK_SIZE", &val)?;
    }

    // Audit overrides
    config
        .audit
        .apply_env_overrides()
        .map_err(|e| RedactorError::Configuration(e.to_string()))?;

    // Logging overrides
    if let Ok(val) = std::env::var("REDACTOR_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("REDACTOR_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("REDACTOR_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("REDACTOR_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("REDACTOR_LOADER_TEST_VAR", "out.csv");
        let input = "output_path = \"${REDACTOR_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "output_path = \"out.csv\"");
        std::env::remove_var("REDACTOR_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("REDACTOR_LOADER_MISSING_VAR");
        let input = "output_path = \"${REDACTOR_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("REDACTOR_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("REDACTOR_LOADER_COMMENTED_VAR");
        let input = "# output_path = \"${REDACTOR_LOADER_COMMENTED_VAR}\"\nx = 1\n";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-redactor.toml");
        assert!(matches!(result, Err(RedactorError::Configuration(_))));
    }

    #[test]
    fn test_load_config_or_default_explicit_missing_path() {
        let result = load_config_or_default("/definitely/not/here.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[batch]
id_column = "id"
data_column = "payload"
output_path = "clean.csv"
parallelism = 2
chunk_size = 50

[audit]
enabled = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.batch.id_column, "id");
        assert_eq!(config.batch.data_column, "payload");
        assert_eq!(config.batch.chunk_size, 50);
        assert!(!config.audit.enabled);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[batch]\nparallelism = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("parallelism"));
    }
}
