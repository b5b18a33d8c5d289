// std
use std::time::Duration as StdDuration;
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	client::{Client, token},
	config::{self, DEFAULT_TIMEOUT, Environment},
	error::ConfigError,
};

/// Builder for [`Client`] values.
///
/// Defaults to the production host, [`DEFAULT_TIMEOUT`], and a freshly built reqwest client.
#[derive(Debug)]
pub struct ClientBuilder {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: TokenSecret,
	/// API root, validated on [`connect`](Self::connect).
	pub base_url: String,
	/// Timeout applied to every request.
	pub timeout: StdDuration,
	/// Caller-provided transport; built on demand when absent.
	pub http_client: Option<ReqwestClient>,
}
impl ClientBuilder {
	/// Creates a builder for the provided credential pair.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: TokenSecret::new(client_secret),
			base_url: Environment::default().base_url().to_owned(),
			timeout: DEFAULT_TIMEOUT,
			http_client: None,
		}
	}

	/// Overrides the API root.
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();

		self
	}

	/// Targets one of the carrier's published environments.
	pub fn environment(self, environment: Environment) -> Self {
		self.base_url(environment.base_url())
	}

	/// Overrides the request timeout.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Reuses an existing reqwest client (connection pool, proxies, TLS settings).
	///
	/// The builder's timeout is still applied per request.
	pub fn http_client(mut self, client: ReqwestClient) -> Self {
		self.http_client = Some(client);

		self
	}

	/// Validates the configuration, obtains an access token, and returns the ready client.
	pub async fn connect(self) -> Result<Client> {
		let base_url = config::parse_base_url(&self.base_url)?;
		let http_client = match self.http_client {
			Some(client) => client,
			None => ReqwestClient::builder()
				.timeout(self.timeout)
				.build()
				.map_err(ConfigError::http_client_build)?,
		};
		let access_token = token::obtain(
			&http_client,
			&base_url,
			self.timeout,
			&self.client_id,
			&self.client_secret,
			"connect",
		)
		.await?;

		Ok(Client {
			http_client,
			base_url,
			timeout: self.timeout,
			client_id: self.client_id,
			client_secret: self.client_secret,
			token: Arc::new(RwLock::new(access_token)),
			refresh_guard: Arc::new(AsyncMutex::new(())),
		})
	}
}
