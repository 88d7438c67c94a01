//! HTTP client
//!
//! A thin wrapper over reqwest used by the search fetcher. One request per
//! call, no internal retry or caching; failures surface as [`crate::Error`]
//! values distinguishable from a successful empty response.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
