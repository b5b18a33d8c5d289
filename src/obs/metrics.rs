// self
use crate::{http::Endpoint, obs::CallOutcome};

/// Bumps `cdek_client_call_total` on the global recorder, when one is installed.
pub(super) fn record(endpoint: Endpoint, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"cdek_client_call_total",
		"call" => endpoint.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (endpoint, outcome);
}
