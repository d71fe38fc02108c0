use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub dataset: Dataset,
	pub security: Security,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
	/// Relative paths are resolved against the directory of the config file by `load`.
	pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
	#[serde(default = "default_bind_localhost_only")]
	pub bind_localhost_only: bool,
	/// The single credential accepted in the `AccessToken` request header.
	pub access_token: String,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_bind_localhost_only() -> bool {
	true
}
