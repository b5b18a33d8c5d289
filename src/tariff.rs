//! Tariff calculator models and their wire shapes.

// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// Package dimensions sent to the calculator.
///
/// Units follow carrier conventions (centimetres for sides, grams for weight). Values are not
/// validated locally; the carrier rejects what it cannot price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Package {
	/// Length of the package.
	pub length: u32,
	/// Width of the package.
	pub width: u32,
	/// Height of the package.
	pub height: u32,
	/// Gross weight of the package.
	pub weight: u32,
}
impl Package {
	/// Creates a package from its dimensions and weight.
	pub const fn new(length: u32, width: u32, height: u32, weight: u32) -> Self {
		Self { length, width, height, weight }
	}
}

/// A shipping service tier priced by the carrier.
///
/// Fields missing from the response or sent as `null` decode to their zero value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffCode {
	/// Carrier tariff identifier.
	#[serde(rename = "tariff_code", deserialize_with = "null_as_default")]
	pub code: i64,
	/// Human-readable tariff name.
	#[serde(rename = "tariff_name", deserialize_with = "null_as_default")]
	pub name: String,
	/// Longer tariff description.
	#[serde(rename = "tariff_description", deserialize_with = "null_as_default")]
	pub description: String,
	/// Carrier delivery mode (door-to-door, warehouse-to-door, ...).
	#[serde(deserialize_with = "null_as_default")]
	pub delivery_mode: i64,
	/// Delivery price.
	#[serde(deserialize_with = "null_as_default")]
	pub delivery_sum: f64,
	/// Minimum delivery time in days.
	#[serde(deserialize_with = "null_as_default")]
	pub period_min: i64,
	/// Maximum delivery time in days.
	#[serde(deserialize_with = "null_as_default")]
	pub period_max: i64,
}

/// Business error returned by the carrier inside an otherwise successful response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("{code} {message}")]
#[serde(default)]
pub struct ApiError {
	/// Carrier error code.
	#[serde(deserialize_with = "null_as_default")]
	pub code: String,
	/// Carrier error message.
	#[serde(deserialize_with = "null_as_default")]
	pub message: String,
}
impl ApiError {
	/// Creates a new error pair.
	pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { code: code.into(), message: message.into() }
	}
}

#[derive(Debug, Serialize)]
pub(crate) struct Location<'a> {
	pub address: &'a str,
}

/// JSON body sent to the tariff list endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct TariffListRequest<'a> {
	pub from_location: Location<'a>,
	pub to_location: Location<'a>,
	pub packages: &'a [Package],
}
impl<'a> TariffListRequest<'a> {
	pub fn new(from: &'a str, to: &'a str, packages: &'a [Package]) -> Self {
		Self {
			from_location: Location { address: from },
			to_location: Location { address: to },
			packages,
		}
	}
}

/// JSON body returned by the tariff list endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TariffListResponse {
	#[serde(deserialize_with = "null_as_default")]
	pub tariff_codes: Vec<TariffCode>,
	#[serde(deserialize_with = "null_as_default")]
	pub errors: Vec<ApiError>,
}
impl TariffListResponse {
	/// Splits the payload into tariffs or the first reported business error.
	///
	/// Only the first entry of `errors` is surfaced; later entries are dropped.
	pub fn into_result(self) -> Result<Vec<TariffCode>, ApiError> {
		match self.errors.into_iter().next() {
			Some(e) => Err(e),
			None => Ok(self.tariff_codes),
		}
	}
}

/// Reads an explicit `null` as the type's zero value, the same way a missing field is read.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
