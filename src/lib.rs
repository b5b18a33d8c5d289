//! Async client for the CDEK v2 API: client-credentials authentication plus the shipping tariff
//! calculator, with redacted secrets and transport-aware observability.
//!
//! ```no_run
//! # async fn demo() -> cdek_client::error::Result<()> {
//! use cdek_client::{client::Client, tariff::Package};
//!
//! let client = Client::new("client-id", "client-secret").await?;
//! let tariffs = client
//! 	.get_shipping_cost("Moscow", "Novosibirsk", &[Package::new(10, 10, 10, 5)])
//! 	.await?;
//!
//! for tariff in tariffs {
//! 	println!("{} costs {}.", tariff.name, tariff.delivery_sum);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod tariff;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError, StatusCode};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
