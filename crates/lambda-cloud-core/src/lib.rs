//! # lambda-cloud-core
//!
//! Core types and utilities for working with the Lambda Cloud API.
//!
//! This crate provides configuration, the provider error taxonomy, typed
//! identifiers and the request dispatcher shared by every endpoint of the
//! [`lambda-cloud`](https://docs.rs/lambda-cloud) client.
//!
//! ## Modules
//!
//! - [`config`] - Client configuration (base URL and API key)
//! - [`error`] - Error types and the provider error code set
//! - [`ids`] - Strongly-typed identifiers for Lambda Cloud resources
//! - [`transport`] - HTTP transport seam and its reqwest implementation
//! - [`dispatch`] - Request dispatch and response classification

#![cfg_attr(not(test), deny(missing_docs))]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod ids;
pub mod transport;

// Re-export commonly used types
pub use config::{LambdaCloudConfig, DEFAULT_BASE_PATH};
pub use dispatch::{Dispatcher, HttpMethod};
pub use error::{Error, ErrorCode, ErrorDetail, ErrorResponse, Result};
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
