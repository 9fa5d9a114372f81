//! # emoji-provider
//!
//! `reqwest` implementation of the [`MeaningProvider`](emoji_core::MeaningProvider) port.
//!
//! Upstream contract: `GET {url}?emoji=<char>` answering `{"meaning": "..."}`.

mod http;

pub use http::{HttpMeaningProvider, ProviderError};
