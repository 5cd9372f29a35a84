//! HTTP client module
//!
//! Thin wrapper over reqwest used to talk to the search index.
//!
//! # Features
//!
//! - **Default Headers**: Credentials attached to every request
//! - **Status Classification**: 4xx/5xx responses become `Error::HttpStatus`
//! - **JSON Helpers**: Serialize request bodies and parse responses

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
