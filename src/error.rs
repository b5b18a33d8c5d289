//! Client-level error types shared by the token manager and the tariff requester.

// self
use crate::{_prelude::*, http::Endpoint, tariff::ApiError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Variants separate transport, status, decode and business failures so callers can branch on
/// the failure kind without matching on message text.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] ReqwestError),
	/// Request body could not be serialized.
	#[error(transparent)]
	Encode(#[from] serde_json::Error),

	/// Carrier answered with a status other than `200 OK`; the body is not inspected.
	#[error("{status}")]
	Status {
		/// Endpoint that produced the status.
		endpoint: Endpoint,
		/// Status returned by the carrier.
		status: StatusCode,
	},
	/// Response body does not match the expected JSON shape.
	#[error("{source}")]
	Decode {
		/// Endpoint whose response failed to decode.
		endpoint: Endpoint,
		/// Structured parsing failure including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Carrier accepted the request but rejected it in the response payload.
	#[error(transparent)]
	Api(ApiError),
}
impl Error {
	/// Returns the HTTP status carried by the failure.
	///
	/// [`Error::Status`] always has one. [`Error::Transport`] has one only when the wrapped
	/// reqwest error was produced from a response (for example by `error_for_status`).
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Transport(e) => e.status(),
			_ => None,
		}
	}

	/// Returns the endpoint involved in the failure, when known.
	pub fn endpoint(&self) -> Option<Endpoint> {
		match self {
			Self::Status { endpoint, .. } | Self::Decode { endpoint, .. } => Some(*endpoint),
			_ => None,
		}
	}

	/// Returns the carrier business error, if this is one.
	pub fn api_error(&self) -> Option<&ApiError> {
		match self {
			Self::Api(e) => Some(e),
			_ => None,
		}
	}

	/// Returns `true` when the failure happened before any HTTP response arrived.
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Transport(_))
	}
}
impl From<ApiError> for Error {
	fn from(e: ApiError) -> Self {
		Self::Api(e)
	}
}

/// Configuration and validation failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Rejected input.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Access token contains bytes that cannot be sent in an HTTP header.
	#[error("Access token cannot be used as an HTTP header value.")]
	InvalidAccessToken,
	/// Base URL parses but cannot carry request paths.
	#[error("Base URL `{url}` must use http or https.")]
	UnsupportedBaseUrl {
		/// Rejected input.
		url: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
