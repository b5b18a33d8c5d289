//! Tariff list calculation.

// crates.io
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
// self
use crate::{
	_prelude::*,
	client::Client,
	http::{self, Endpoint},
	obs,
	tariff::{Package, TariffCode, TariffListRequest, TariffListResponse},
};

impl Client {
	/// Prices every tariff the carrier offers between two addresses for `packages`.
	///
	/// Addresses are free-form and interpreted by the carrier. Tariffs come back in response
	/// order and may be empty. When the carrier reports business errors, only the first one is
	/// returned as [`Error::Api`].
	pub async fn get_shipping_cost(
		&self,
		from_address: &str,
		to_address: &str,
		packages: &[Package],
	) -> Result<Vec<TariffCode>> {
		const ENDPOINT: Endpoint = Endpoint::TariffList;

		obs::observe(ENDPOINT, "get_shipping_cost", async move {
			let body =
				serde_json::to_vec(&TariffListRequest::new(from_address, to_address, packages))?;
			let token = self.token.read().secret.clone();
			let authorization = http::bearer(&token)?;
			let response = self
				.http_client
				.post(ENDPOINT.url(&self.base_url))
				.timeout(self.timeout)
				.header(CONTENT_TYPE, "application/json")
				.header(AUTHORIZATION, authorization)
				.body(body)
				.send()
				.await?;
			let response = http::ensure_success(ENDPOINT, response)?;
			let payload: TariffListResponse = http::decode_json(ENDPOINT, response).await?;
			let tariffs = payload.into_result()?;

			#[cfg(feature = "tracing")]
			tracing::debug!(tariffs = tariffs.len(), "Tariff list received.");

			Ok(tariffs)
		})
		.await
	}
}
