use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Access token is missing or does not match.")]
	Unauthorized,
	#[error("Invalid order_field {value:?}; expected Id, Age or Name.")]
	InvalidOrderField { value: String },
	#[error("Failed to read dataset at {path:?}.")]
	ReadDataset { path: PathBuf, source: std::io::Error },
	#[error("Failed to decode dataset: {message}")]
	DecodeDataset { message: String },
}
impl Error {
	/// Whether the failure is caused by the server side rather than the request.
	pub fn is_internal(&self) -> bool {
		matches!(self, Self::ReadDataset { .. } | Self::DecodeDataset { .. })
	}
}
