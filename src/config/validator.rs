use thiserror::Error;

use super::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.filename.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "database.filename cannot be empty".to_string(),
            ));
        }

        if self.database.table.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "database.table cannot be empty".to_string(),
            ));
        }

        if self.database.schema_script.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "database.schema_script cannot be empty".to_string(),
            ));
        }

        if self.database.seed_script.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "database.seed_script cannot be empty".to_string(),
            ));
        }

        if self.report.min_customer_id > self.report.max_customer_id {
            return Err(ConfigError::InvalidConfig(format!(
                "report.min_customer_id ({}) must not exceed report.max_customer_id ({})",
                self.report.min_customer_id, self.report.max_customer_id
            )));
        }

        if !self.report.min_total_value.is_finite() {
            return Err(ConfigError::InvalidConfig(
                "report.min_total_value must be a finite number".to_string(),
            ));
        }

        Ok(())
    }
}
