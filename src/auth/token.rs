//! Access token record plus the client-credentials wire shapes.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Bearer token currently held by a [`Client`](crate::client::Client).
///
/// Expiry metadata is informational only; the client never refreshes on its own. Call
/// [`Client::refresh_token`](crate::client::Client::refresh_token) to replace the token.
#[derive(Clone)]
pub struct AccessToken {
	/// Bearer secret attached to every tariff request.
	pub secret: TokenSecret,
	/// Token type reported by the carrier (usually `bearer`).
	pub token_type: Option<String>,
	/// Scope string reported by the carrier.
	pub scope: Option<String>,
	/// Instant the token response was received.
	pub issued_at: OffsetDateTime,
	/// Lifetime reported by the carrier, if any.
	pub expires_in: Option<Duration>,
}
impl AccessToken {
	/// Wraps a bare secret issued now without expiry metadata.
	pub fn new(secret: impl Into<String>) -> Self {
		Self {
			secret: TokenSecret::new(secret),
			token_type: None,
			scope: None,
			issued_at: OffsetDateTime::now_utc(),
			expires_in: None,
		}
	}

	/// Absolute expiry derived from `issued_at + expires_in`, when both are known.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		self.expires_in.and_then(|lifetime| self.issued_at.checked_add(lifetime))
	}

	/// Returns `true` if the reported lifetime has elapsed at `instant`.
	///
	/// Tokens without a reported lifetime never count as expired.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at().is_some_and(|expires_at| instant >= expires_at)
	}

	/// Convenience helper that checks expiry against the current UTC instant.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}

	pub(crate) fn from_response(response: TokenResponse, issued_at: OffsetDateTime) -> Self {
		let expires_in = response.expires_in.filter(|secs| *secs > 0).map(Duration::seconds);

		Self {
			secret: response.access_token,
			token_type: response.token_type,
			scope: response.scope,
			issued_at,
			expires_in,
		}
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("secret", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("scope", &self.scope)
			.field("issued_at", &self.issued_at)
			.field("expires_in", &self.expires_in)
			.finish()
	}
}

/// Form body sent to the token endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
	pub grant_type: &'static str,
	pub client_id: &'a str,
	pub client_secret: &'a str,
}
impl<'a> TokenRequest<'a> {
	pub const GRANT_TYPE: &'static str = "client_credentials";

	pub fn client_credentials(client_id: &'a str, client_secret: &'a TokenSecret) -> Self {
		Self { grant_type: Self::GRANT_TYPE, client_id, client_secret: client_secret.expose() }
	}
}

/// JSON body returned by the token endpoint; unknown fields such as `jti` are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
	pub access_token: TokenSecret,
	#[serde(default)]
	pub token_type: Option<String>,
	#[serde(default)]
	pub expires_in: Option<i64>,
	#[serde(default)]
	pub scope: Option<String>,
}
