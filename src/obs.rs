//! Optional observability helpers for carrier calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `cdek.call` with the `call` (endpoint) and
//!   `stage` (call site) fields.
//! - Enable `metrics` to increment the `cdek_client_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

// self
use crate::{_prelude::*, http::Endpoint};

/// Runs one carrier call with its span and its attempt/success/failure counters.
///
/// `stage` names the call site (`connect`, `refresh_token`, `get_shipping_cost`).
pub(crate) async fn observe<T, Fut>(endpoint: Endpoint, stage: &'static str, call: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	self::metrics::record(endpoint, CallOutcome::Attempt);

	let result = self::tracing::traced(endpoint, stage, call).await;

	self::metrics::record(endpoint, CallOutcome::of(&result));

	result
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}

	/// Maps a finished operation onto its outcome label.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => CallOutcome::Success,
			Err(_) => CallOutcome::Failure,
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
