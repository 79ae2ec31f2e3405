// Configuration management for routetable
// Supports CLI arguments, config file (TOML), and environment variables

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;

use crate::error::{AppError, AppResult};

const DEFAULT_DATA_FILE: &str = "routetable.data";
const DEFAULT_CONFIG_FILE: &str = "routetable.toml";

/// Decode a protobuf-encoded routing table and print its routes
#[derive(Parser, Debug, Clone)]
#[command(name = "routetable")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Encoded routing table file [default: routetable.data]
    #[arg(short, long, env = "ROUTETABLE_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace) [default: warn]
    #[arg(short, long, env = "ROUTETABLE_LOG", global = true)]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "ROUTETABLE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// How routes are printed [default: text]
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print all routes and the destination of the first one (default)
    Show,

    /// Write a sample routing table to the data file
    Create {
        /// Number of random /24 routes appended after the sample routes
        #[arg(long, default_value = "0")]
        random: usize,
    },

    /// Find the route for a destination network
    Lookup {
        network: String,

        #[arg(long, default_value = "")]
        mask: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration file structure (TOML format)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Data file settings
    #[serde(default)]
    pub data: DataConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Encoded routing table file
    #[serde(default = "default_data_file")]
    pub file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            file: default_data_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

/// Merged configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_level: Level,
    pub format: OutputFormat,
    pub command: Command,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources (CLI args, config file, defaults)
    /// Priority: CLI args / environment variables > Config file > Defaults
    pub fn load() -> anyhow::Result<Self> {
        let cli_args = CliArgs::parse();

        let (config_file, source) = match &cli_args.config {
            Some(config_path) => (read_config_file(config_path)?, Some(config_path.clone())),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    (read_config_file(&path)?, Some(path))
                } else {
                    (ConfigFile::default(), None)
                }
            }
        };

        let mut config = Config::merge(cli_args, config_file)?;
        config.source = source;
        Ok(config)
    }

    /// Merge CLI arguments over a parsed config file
    pub fn merge(cli_args: CliArgs, config_file: ConfigFile) -> AppResult<Self> {
        let data_file = cli_args.file.unwrap_or(config_file.data.file);
        let format = cli_args.format.unwrap_or(config_file.output.format);
        let log_level = parse_log_level(
            cli_args
                .log_level
                .as_deref()
                .unwrap_or(&config_file.logging.level),
        )?;
        let command = cli_args.command.unwrap_or(Command::Show);

        Ok(Config {
            data_file,
            log_level,
            format,
            command,
            source: None,
        })
    }
}

fn read_config_file(path: &std::path::Path) -> AppResult<ConfigFile> {
    let config_content = std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<ConfigFile>(&config_content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
}

fn parse_log_level(level_str: &str) -> AppResult<Level> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(AppError::Config(format!("Invalid log level: {}", level_str))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.data.file, PathBuf::from("routetable.data"));
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("info"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("DEBUG"), Ok(Level::DEBUG)));
        assert!(matches!(parse_log_level("invalid"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_config_file_from_toml() {
        let config: ConfigFile = toml::from_str(
            r#"
            [data]
            file = "/var/lib/routes.data"

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.data.file, PathBuf::from("/var/lib/routes.data"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_merge_prefers_cli() {
        let mut file = ConfigFile::default();
        file.data.file = PathBuf::from("from-file.data");
        file.output.format = OutputFormat::Json;

        let cli = CliArgs {
            file: Some(PathBuf::from("from-cli.data")),
            log_level: Some("debug".to_string()),
            config: None,
            format: None,
            command: None,
        };
        let config = Config::merge(cli, file).unwrap();

        assert_eq!(config.data_file, PathBuf::from("from-cli.data"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.command, Command::Show);
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = args(&["routetable", "create", "--random", "3"]);
        assert_eq!(cli.command, Some(Command::Create { random: 3 }));

        let cli = args(&["routetable", "lookup", "192.168.100.0", "--mask", "255.255.255.0"]);
        assert_eq!(
            cli.command,
            Some(Command::Lookup {
                network: "192.168.100.0".to_string(),
                mask: "255.255.255.0".to_string(),
            })
        );
    }
}
