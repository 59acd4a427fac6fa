//! HTTP transport module
//!
//! Provides the HTTP client every API call goes through.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Quota Pacing**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Credentials**: Bearer token attachment on every request

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{QuotaConfig, RateLimiter};
