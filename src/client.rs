//! Carrier client: owns the transport, the credential pair, and the held access token.
//!
//! A [`Client`] only exists once a token has been obtained; every constructor performs the
//! client-credentials exchange up front and fails if it does not succeed. Clones share the
//! transport and the token cell, so a refresh through one clone is visible to all of them.

mod builder;
mod tariff;
mod token;

pub use builder::ClientBuilder;

// std
use std::time::Duration as StdDuration;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenSecret},
};

/// Authenticated handle to the CDEK v2 API.
#[derive(Clone)]
pub struct Client {
	http_client: ReqwestClient,
	base_url: Url,
	timeout: StdDuration,
	client_id: String,
	client_secret: TokenSecret,
	token: Arc<RwLock<AccessToken>>,
	refresh_guard: Arc<AsyncMutex<()>>,
}
impl Client {
	/// Connects to the production API and obtains an access token.
	pub async fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Result<Self> {
		Self::builder(client_id, client_secret).connect().await
	}

	/// Connects to `base_url` (for example [`BASE_URL_V2_TEST`](crate::config::BASE_URL_V2_TEST))
	/// and obtains an access token.
	pub async fn with_base_url(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		base_url: impl Into<String>,
	) -> Result<Self> {
		Self::builder(client_id, client_secret).base_url(base_url).connect().await
	}

	/// Returns a builder for clients that need a custom host, timeout, or transport.
	pub fn builder(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> ClientBuilder {
		ClientBuilder::new(client_id, client_secret)
	}

	/// API root every endpoint path is appended to.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// OAuth client identifier.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Timeout applied to every request.
	pub fn timeout(&self) -> StdDuration {
		self.timeout
	}

	/// Snapshot of the token currently attached to requests.
	pub fn access_token(&self) -> AccessToken {
		self.token.read().clone()
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("base_url", &self.base_url.as_str())
			.field("timeout", &self.timeout)
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret)
			.field("token", &*self.token.read())
			.finish()
	}
}
