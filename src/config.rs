//! Carrier hosts and client-wide defaults.

// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, error::ConfigError};

/// Production API root.
pub const BASE_URL_V2: &str = "https://api.cdek.ru/v2";
/// Sandbox API root used for integration testing against the carrier.
pub const BASE_URL_V2_TEST: &str = "https://api.edu.cdek.ru/v2";
/// Request timeout applied to every call made by a client.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(60);

/// Carrier deployment a client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
	/// Live carrier API.
	#[default]
	Production,
	/// Carrier's public sandbox with test credentials.
	Sandbox,
}
impl Environment {
	/// API root for this environment.
	pub const fn base_url(self) -> &'static str {
		match self {
			Environment::Production => BASE_URL_V2,
			Environment::Sandbox => BASE_URL_V2_TEST,
		}
	}
}

/// Parses and validates a base URL that endpoint paths are appended to.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw)
		.map_err(|source| ConfigError::InvalidBaseUrl { url: raw.to_owned(), source })?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		_ => Err(ConfigError::UnsupportedBaseUrl { url: raw.to_owned() }),
	}
}
