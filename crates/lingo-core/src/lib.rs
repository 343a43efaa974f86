//! # lingo-core
//!
//! Core building blocks for talking to the Linode v4 API.
//!
//! This crate provides the shared request-dispatch layer that every resource
//! client in the workspace sits on top of: authenticated request
//! construction, the busy-retry loop with exponential backoff, the standard
//! list and error envelopes, and the error taxonomy surfaced to callers.
//!
//! ## Modules
//!
//! - [`error`] - Error types and the structured API error envelope
//! - [`backoff`] - Exponential backoff controller for busy retries
//! - [`client`] - The API dispatcher and its four-verb capability trait
//! - [`page`] - Paginated list envelope returned by collection endpoints
//! - [`time`] - Timestamp codec for the API's date format
//! - [`config`] - Client configuration with validation

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backoff;
pub mod client;
pub mod config;
pub mod error;
pub mod page;
pub mod time;

// Re-export commonly used types
pub use backoff::Backoff;
pub use client::{ApiClient, ApiClientBuilder, Dispatch};
pub use error::{ApiError, ApiErrors, Error, Result};
pub use page::Page;
pub use time::Timestamp;
