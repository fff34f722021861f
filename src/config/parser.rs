use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_schema_script")]
    pub schema_script: PathBuf,
    #[serde(default = "default_seed_script")]
    pub seed_script: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            filename: default_filename(),
            table: default_table(),
            schema_script: default_schema_script(),
            seed_script: default_seed_script(),
        }
    }
}

impl DatabaseConfig {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.filename)
    }
}

/// Bounds of the customer subset the average and the listing are computed over.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_min_customer_id")]
    pub min_customer_id: i32,
    #[serde(default = "default_max_customer_id")]
    pub max_customer_id: i32,
    #[serde(default = "default_min_total_value")]
    pub min_total_value: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_customer_id: default_min_customer_id(),
            max_customer_id: default_max_customer_id(),
            min_total_value: default_min_total_value(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Loads `CONFIG_PATH` when set, else `config.yaml` if present, else built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("CONFIG_PATH") {
            return Self::load_from_file(path);
        }

        if Path::new(DEFAULT_CONFIG_PATH).is_file() {
            return Self::load_from_file(DEFAULT_CONFIG_PATH);
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("REPORT_DATABASE_FILENAME") {
            self.database.filename = value;
        }
        if let Ok(value) = std::env::var("REPORT_DATA_DIR") {
            self.database.data_dir = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var("REPORT_LOG_LEVEL") {
            self.logging.level = value;
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("Data")
}

fn default_filename() -> String {
    "test.db".to_string()
}

fn default_table() -> String {
    "tb_customer_account".to_string()
}

fn default_schema_script() -> PathBuf {
    PathBuf::from("Data/TableSource.sql")
}

fn default_seed_script() -> PathBuf {
    PathBuf::from("Data/DataSource.sql")
}

fn default_min_customer_id() -> i32 {
    1500
}

fn default_max_customer_id() -> i32 {
    2700
}

fn default_min_total_value() -> f64 {
    560.0
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::{Config, LogFormat};
    use crate::config::ConfigError;

    #[test]
    fn defaults_match_the_bundled_data_layout() {
        let config = Config::default();

        assert_eq!(config.database.database_path(), PathBuf::from("Data/test.db"));
        assert_eq!(config.database.table, "tb_customer_account");
        assert_eq!(config.database.schema_script, PathBuf::from("Data/TableSource.sql"));
        assert_eq!(config.database.seed_script, PathBuf::from("Data/DataSource.sql"));
        assert_eq!(config.report.min_customer_id, 1500);
        assert_eq!(config.report.max_customer_id, 2700);
        assert_eq!(config.report.min_total_value, 560.0);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_keys() {
        let config = Config::from_yaml(
            r#"
database:
  filename: customers.db
logging:
  format: json
"#,
        )
        .expect("parse config");

        assert_eq!(config.database.filename, "customers.db");
        assert_eq!(config.database.data_dir, PathBuf::from("Data"));
        assert_eq!(config.report.max_customer_id, 2700);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn unknown_log_format_is_a_parse_error() {
        let result = Config::from_yaml("logging:\n  format: xml\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn inverted_customer_range_is_rejected() {
        let config = Config::from_yaml(
            r#"
report:
  min_customer_id: 3000
  max_customer_id: 1000
"#,
        )
        .expect("parse config");

        let err = config.validate().expect_err("range must be rejected");
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
        assert!(err.to_string().contains("min_customer_id"));
    }

    #[test]
    fn empty_filename_is_rejected() {
        let mut config = Config::default();
        config.database.filename = "  ".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn load_from_file_reads_yaml() {
        let mut file = NamedTempFile::new().expect("temp config file");
        writeln!(
            file,
            "database:\n  data_dir: /tmp/report-data\n  table: accounts\nreport:\n  min_total_value: 100.5"
        )
        .expect("write config");

        let config = Config::load_from_file(file.path()).expect("load config");

        assert_eq!(config.database.table, "accounts");
        assert_eq!(config.report.min_total_value, 100.5);
    }

    #[test]
    fn load_from_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = Config::load_from_file(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
