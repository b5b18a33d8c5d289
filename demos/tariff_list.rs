//! Demonstrates connecting a client and pricing a parcel against a local mock of the carrier.
//!
//! Point `base_url` at [`BASE_URL_V2_TEST`] with the carrier's published sandbox credentials to
//! run the same flow against the real sandbox.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use cdek_client::{client::Client, config::BASE_URL_V2_TEST, tariff::Package};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/oauth/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"bearer\",\"expires_in\":3599}",
			);
		})
		.await;
	let tariff_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2/calculator/tarifflist")
				.header("authorization", "Bearer demo-access");
			then.status(200).header("content-type", "application/json").body(
				"{\"tariff_codes\":[{\"tariff_code\":136,\"tariff_name\":\"Parcel warehouse-warehouse\",\"tariff_description\":\"Economy\",\"delivery_mode\":4,\"delivery_sum\":415.5,\"period_min\":2,\"period_max\":4}],\"errors\":[]}",
			);
		})
		.await;

	println!("Sandbox host for real credentials: {BASE_URL_V2_TEST}.");

	let client = Client::with_base_url("demo-client", "demo-secret", server.url("/v2")).await?;
	let tariffs = client
		.get_shipping_cost("Moscow", "Novosibirsk", &[Package::new(10, 10, 10, 500)])
		.await?;

	for tariff in &tariffs {
		println!(
			"{} ({}): {} in {}-{} days.",
			tariff.name, tariff.code, tariff.delivery_sum, tariff.period_min, tariff.period_max
		);
	}

	token_mock.assert_async().await;
	tariff_mock.assert_async().await;

	Ok(())
}
