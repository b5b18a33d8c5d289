//! Transport helpers shared by every carrier call.
//!
//! The client talks to exactly two endpoints. Each response goes through the same pipeline:
//! `ensure_success` rejects anything but `200 OK` without reading the body, then
//! `decode_json` buffers the body and decodes it with path-aware error reporting.

// crates.io
use reqwest::{Response, header::HeaderValue};
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError};

/// Carrier endpoints reachable through the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// OAuth client-credentials token endpoint.
	Token,
	/// Tariff list calculator.
	TariffList,
}
impl Endpoint {
	/// Path appended to the client's base URL.
	pub const fn path(self) -> &'static str {
		match self {
			Endpoint::Token => "/oauth/token",
			Endpoint::TariffList => "/calculator/tarifflist",
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::Token => "token",
			Endpoint::TariffList => "tariff_list",
		}
	}

	/// Joins the endpoint path onto `base`, keeping any path prefix such as `/v2`.
	pub fn url(self, base: &Url) -> String {
		format!("{}{}", base.as_str().trim_end_matches('/'), self.path())
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Builds the `Authorization: Bearer <token>` header value, marked sensitive.
pub(crate) fn bearer(token: &TokenSecret) -> Result<HeaderValue> {
	let mut value = HeaderValue::try_from(format!("Bearer {}", token.expose()))
		.map_err(|_| Error::from(ConfigError::InvalidAccessToken))?;

	value.set_sensitive(true);

	Ok(value)
}

/// Rejects every status other than `200 OK`.
pub(crate) fn ensure_success(endpoint: Endpoint, response: Response) -> Result<Response> {
	let status = response.status();

	if status == StatusCode::OK {
		Ok(response)
	} else {
		#[cfg(feature = "tracing")]
		tracing::warn!(
			endpoint = endpoint.as_str(),
			status = status.as_u16(),
			"Carrier returned a non-success status."
		);

		Err(Error::Status { endpoint, status })
	}
}

/// Reads the full body and decodes it as `T`.
pub(crate) async fn decode_json<T>(endpoint: Endpoint, response: Response) -> Result<T>
where
	T: DeserializeOwned,
{
	let bytes = response.bytes().await?;

	decode_slice(endpoint, &bytes)
}

pub(crate) fn decode_slice<T>(endpoint: Endpoint, bytes: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let de = &mut serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(de).map_err(|source| Error::Decode { endpoint, source })
}
