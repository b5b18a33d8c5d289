// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use cdek_client::{
	client::Client,
	error::Error,
	http::Endpoint,
	tariff::{ApiError, Package},
};

const TOKEN: &str = "tariff-test-token";

async fn connect(server: &MockServer) -> Client {
	server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/oauth/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(format!("{{\"access_token\":\"{TOKEN}\",\"token_type\":\"bearer\"}}"));
		})
		.await;

	Client::with_base_url("tariff-client", "tariff-secret", server.url("/v2"))
		.await
		.expect("Client construction should succeed against the mock token endpoint.")
}

#[tokio::test]
async fn tariff_request_carries_bearer_and_nested_body() {
	let server = MockServer::start_async().await;
	let client = connect(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2/calculator/tarifflist")
				.header("authorization", format!("Bearer {TOKEN}"))
				.header("content-type", "application/json")
				.json_body(json!({
					"from_location": { "address": "Moscow" },
					"to_location": { "address": "Novosibirsk" },
					"packages": [{ "length": 10, "width": 10, "height": 10, "weight": 5 }],
				}));
			then.status(200).json_body(json!({ "tariff_codes": [], "errors": [] }));
		})
		.await;
	let tariffs = client
		.get_shipping_cost("Moscow", "Novosibirsk", &[Package::new(10, 10, 10, 5)])
		.await
		.expect("Well-formed request should succeed.");

	assert!(tariffs.is_empty());

	mock.assert_async().await;
}

#[tokio::test]
async fn tariffs_are_returned_in_response_order() {
	let server = MockServer::start_async().await;
	let client = connect(&server).await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/calculator/tarifflist");
			then.status(200).json_body(json!({
				"tariff_codes": [
					{
						"tariff_code": 139,
						"tariff_name": "Parcel door-door",
						"tariff_description": "Express",
						"delivery_mode": 1,
						"delivery_sum": 1210.0,
						"period_min": 3,
						"period_max": 5,
					},
					{
						"tariff_code": 136,
						"tariff_name": "Parcel warehouse-warehouse",
						"tariff_description": "Economy",
						"delivery_mode": 4,
						"delivery_sum": 415.5,
						"period_min": 2,
						"period_max": 4,
					},
				],
			}));
		})
		.await;
	let tariffs = client
		.get_shipping_cost("Moscow", "Novosibirsk", &[Package::new(20, 15, 10, 1_500)])
		.await
		.expect("Tariff list should decode.");

	assert_eq!(tariffs.len(), 2);
	assert_eq!(tariffs[0].code, 139);
	assert_eq!(tariffs[0].name, "Parcel door-door");
	assert_eq!(tariffs[0].delivery_sum, 1210.0);
	assert_eq!(tariffs[1].code, 136);
	assert_eq!(tariffs[1].description, "Economy");
	assert_eq!((tariffs[1].period_min, tariffs[1].period_max), (2, 4));
}

#[tokio::test]
async fn empty_package_list_is_forwarded_to_the_carrier() {
	let server = MockServer::start_async().await;
	let client = connect(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/calculator/tarifflist").json_body(json!({
				"from_location": { "address": "Kazan" },
				"to_location": { "address": "Omsk" },
				"packages": [],
			}));
			then.status(200).json_body(json!({
				"errors": [{ "code": "v2_field_is_empty", "message": "packages" }],
			}));
		})
		.await;
	let err = client
		.get_shipping_cost("Kazan", "Omsk", &[])
		.await
		.expect_err("Carrier rejects an empty package list.");

	assert_eq!(err.to_string(), "v2_field_is_empty packages");

	mock.assert_async().await;
}

#[tokio::test]
async fn only_the_first_business_error_is_reported() {
	// The carrier may return several errors; the client deliberately surfaces the first only.
	let server = MockServer::start_async().await;
	let client = connect(&server).await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/calculator/tarifflist");
			then.status(200).json_body(json!({
				"tariff_codes": [{ "tariff_code": 1 }],
				"errors": [
					{ "code": "E1", "message": "bad address" },
					{ "code": "E2", "message": "other" },
				],
			}));
		})
		.await;
	let err = client
		.get_shipping_cost("Nowhere", "Novosibirsk", &[Package::new(10, 10, 10, 5)])
		.await
		.expect_err("Business errors must fail the call.");

	assert_eq!(err.to_string(), "E1 bad address");
	assert_eq!(err.api_error(), Some(&ApiError::new("E1", "bad address")));
}

#[tokio::test]
async fn non_success_status_yields_status_line() {
	let server = MockServer::start_async().await;
	let client = connect(&server).await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/calculator/tarifflist");
			then.status(401).json_body(json!({ "tariff_codes": [{ "tariff_code": 1 }] }));
		})
		.await;
	let err = client
		.get_shipping_cost("Moscow", "Novosibirsk", &[Package::new(10, 10, 10, 5)])
		.await
		.expect_err("401 must fail the call.");

	assert_eq!(err.to_string(), "401 Unauthorized");
	assert_eq!(err.endpoint(), Some(Endpoint::TariffList));
}

#[tokio::test]
async fn malformed_tariff_payload_is_a_decode_error() {
	let server = MockServer::start_async().await;
	let client = connect(&server).await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/calculator/tarifflist");
			then.status(200).json_body(json!({ "tariff_codes": [{ "delivery_sum": "cheap" }] }));
		})
		.await;
	let err = client
		.get_shipping_cost("Moscow", "Novosibirsk", &[Package::new(10, 10, 10, 5)])
		.await
		.expect_err("String price should fail to decode.");

	match &err {
		Error::Decode { endpoint, .. } => assert_eq!(*endpoint, Endpoint::TariffList),
		other => panic!("Unexpected error variant: {other:?}."),
	}
	assert!(err.to_string().starts_with("tariff_codes[0].delivery_sum"), "{err}");
}

#[tokio::test]
async fn null_errors_and_fields_read_as_absent() {
	let server = MockServer::start_async().await;
	let client = connect(&server).await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/calculator/tarifflist");
			then.status(200).json_body(json!({
				"tariff_codes": [{ "tariff_code": 1, "tariff_description": null }],
				"errors": null,
			}));
		})
		.await;
	let tariffs = client
		.get_shipping_cost("Moscow", "Novosibirsk", &[Package::new(10, 10, 10, 5)])
		.await
		.expect("Null errors should not fail the call.");

	assert_eq!(tariffs.len(), 1);
	assert_eq!(tariffs[0].code, 1);
	assert_eq!(tariffs[0].description, "");
}

#[tokio::test]
async fn refreshed_token_is_used_by_later_requests() {
	let server = MockServer::start_async().await;
	let mut initial = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/oauth/token");
			then.status(200).json_body(json!({ "access_token": "initial-token" }));
		})
		.await;
	let client = Client::with_base_url("tariff-client", "tariff-secret", server.url("/v2"))
		.await
		.expect("Client construction should succeed against the mock token endpoint.");

	initial.delete_async().await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/oauth/token");
			then.status(200).json_body(json!({ "access_token": "rotated-token" }));
		})
		.await;

	let tariff_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2/calculator/tarifflist")
				.header("authorization", "Bearer rotated-token");
			then.status(200).json_body(json!({ "tariff_codes": [{ "tariff_code": 7 }] }));
		})
		.await;

	client.refresh_token().await.expect("Refresh should succeed.");

	let tariffs = client
		.get_shipping_cost("Moscow", "Novosibirsk", &[Package::new(10, 10, 10, 5)])
		.await
		.expect("Request with the rotated token should succeed.");

	assert_eq!(tariffs.len(), 1);
	assert_eq!(tariffs[0].code, 7);

	tariff_mock.assert_async().await;
}
