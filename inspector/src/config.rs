use core::fmt;
use std::fmt::Display;
use std::path::PathBuf;

use shared::log_config::LogConfig;

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON with camelCase protobuf field names
    Json,
    /// Raw protobuf bytes
    Protobuf,
}

impl Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Human,
    Debug,
    Json,
}

impl Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(clap::Parser, Debug)]
pub struct AppConfig {
    #[clap(long, env, help = "Saved account balance response")]
    pub input: PathBuf,

    #[clap(long, env, default_value_t = InputFormat::Json)]
    pub input_format: InputFormat,

    #[clap(long, env, default_value_t = OutputStyle::Human)]
    pub output: OutputStyle,

    #[clap(flatten)]
    pub log: LogConfig,
}
