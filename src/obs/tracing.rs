// self
use crate::{_prelude::*, http::Endpoint};

/// Drives `call` inside a `cdek.call` span and logs its failure.
///
/// Without the `tracing` feature the future is awaited as is.
pub(super) async fn traced<T, Fut>(endpoint: Endpoint, stage: &'static str, call: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	#[cfg(feature = "tracing")]
	{
		use tracing::Instrument;

		let span = tracing::info_span!("cdek.call", call = endpoint.as_str(), stage);

		async move {
			let result = call.await;

			if let Err(e) = &result {
				tracing::debug!(error = %e, "Carrier call failed.");
			}

			result
		}
		.instrument(span)
		.await
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, stage);

		call.await
	}
}
