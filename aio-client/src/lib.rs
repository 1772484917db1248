//! Thin REST client for an Adafruit-IO-style cloud telemetry service.
//!
//! The client composes resource paths, attaches the `X-AIO-KEY`
//! authentication header and exchanges JSON payloads for feed, data point
//! and group resources. All network I/O is delegated to an injected
//! [`Transport`] collaborator; [`HttpTransport`] is the reqwest-backed
//! default.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use aio_client::{Client, HttpTransport};
//!
//! # async fn demo() -> aio_client::Result<()> {
//! let transport = Arc::new(HttpTransport::new()?);
//! let client = Client::new("alice", "aio-key", transport)?;
//!
//! client.send_data("temperature", 72.5).await?;
//! let latest = client.receive_data("temperature").await?;
//! println!("latest value: {}", latest.value);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod model;
pub mod transport;

mod validate;

pub use client::{Client, DEFAULT_BASE_URL};
pub use errors::{Error, Result};
pub use model::{DataPoint, NewGroup};
pub use transport::{HttpTransport, RawResponse, Transport};
