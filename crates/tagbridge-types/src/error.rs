//! Error type shared by the API layer and source adapters.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

pub type TbResult<T> = std::result::Result<T, Error>;

/// Failure envelope: `{"error": "<message>"}`
#[derive(Clone, Debug, Serialize)]
pub struct ApiError {
	pub error: Box<str>,
}

#[derive(Debug)]
pub enum Error {
	/// The requested tag does not exist in the source
	NotFound,
	/// Operation disabled by the permission configuration
	Denied(&'static str),
	/// Request body did not decode as the expected shape
	InvalidPayload,
	/// The source rejected the operation
	Upstream(Box<str>),
	/// Bad or missing configuration, fatal at startup
	Config(Box<str>),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "tag not found"),
			Error::Denied(msg) => write!(f, "{}", msg),
			Error::InvalidPayload => write!(f, "Invalid request payload"),
			Error::Upstream(msg) => write!(f, "{}", msg),
			Error::Config(msg) => write!(f, "configuration error: {}", msg),
			Error::Io(err) => write!(f, "I/O error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let (status, message) = match self {
			Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
			Error::Denied(_) | Error::InvalidPayload | Error::Upstream(_) => {
				(StatusCode::BAD_REQUEST, self.to_string())
			}
			Error::Config(_) | Error::Io(_) => {
				(StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
			}
		};

		(status, Json(ApiError { error: message.into() })).into_response()
	}
}


// vim: ts=4
