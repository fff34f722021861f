pub use self::parser::{Config, LogFormat, LoggingConfig, ReportConfig};
pub use self::validator::ConfigError;

mod parser;
mod validator;
