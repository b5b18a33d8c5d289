//! Client-credentials exchange against the carrier's token endpoint.

// std
use std::time::Duration as StdDuration;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenRequest, TokenResponse, TokenSecret},
	client::Client,
	http::{self, Endpoint},
	obs,
};

impl Client {
	/// Performs a fresh client-credentials exchange and replaces the held token.
	///
	/// Concurrent refreshes through this client (or its clones) run one at a time. Requests
	/// already in flight keep the token they started with. On failure the previous token stays
	/// in place.
	pub async fn refresh_token(&self) -> Result<AccessToken> {
		let _refresh = self.refresh_guard.lock().await;
		let access_token = obtain(
			&self.http_client,
			&self.base_url,
			self.timeout,
			&self.client_id,
			&self.client_secret,
			"refresh_token",
		)
		.await?;

		*self.token.write() = access_token.clone();

		Ok(access_token)
	}
}

/// Posts the form-encoded client-credentials grant and decodes the issued token.
pub(super) async fn obtain(
	http_client: &ReqwestClient,
	base_url: &Url,
	timeout: StdDuration,
	client_id: &str,
	client_secret: &TokenSecret,
	stage: &'static str,
) -> Result<AccessToken> {
	const ENDPOINT: Endpoint = Endpoint::Token;

	obs::observe(ENDPOINT, stage, async move {
		let response = http_client
			.post(ENDPOINT.url(base_url))
			.timeout(timeout)
			.form(&TokenRequest::client_credentials(client_id, client_secret))
			.send()
			.await?;
		let response = http::ensure_success(ENDPOINT, response)?;
		let issued_at = OffsetDateTime::now_utc();
		let body: TokenResponse = http::decode_json(ENDPOINT, response).await?;
		let access_token = AccessToken::from_response(body, issued_at);

		#[cfg(feature = "tracing")]
		tracing::debug!(
			token_type = ?access_token.token_type,
			expires_in = ?access_token.expires_in,
			"Access token obtained."
		);

		Ok(access_token)
	})
	.await
}
