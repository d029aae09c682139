/// Runtime configuration, read from flags with environment fallbacks.
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use crate::code::ExhaustionPolicy;

pub const DEFAULT_CATEGORIES_URL: &str = "http://localhost:3000/categories";
pub const DEFAULT_INPUTS_URL: &str = "http://localhost:3000/user-inputs";

#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Category service endpoint
    #[arg(long, env = "LABELR_CATEGORIES_URL", default_value = DEFAULT_CATEGORIES_URL, global = true)]
    pub categories_url: String,

    /// User input service endpoint
    #[arg(long, env = "LABELR_INPUTS_URL", default_value = DEFAULT_INPUTS_URL, global = true)]
    pub inputs_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "LABELR_TIMEOUT_SECS", default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// What to do once category codes run past Z99
    #[arg(long, env = "LABELR_ON_EXHAUSTED", value_enum, default_value_t = ExhaustionPolicy::Saturate, global = true)]
    pub on_exhausted: ExhaustionPolicy,

    /// Directory for log files
    #[arg(long, env = "LABELR_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `labelr=trace`
    #[arg(long, env = "LABELR_LOG", default_value = "info", global = true)]
    pub log_level: String,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the log directory inside the user's data directory.
    /// Falls back to `./logs` when no data dir is found.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join("labelr").join("logs"),
            None => PathBuf::from("logs"),
        }
    }
}
