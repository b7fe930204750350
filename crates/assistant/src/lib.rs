//! AI assistant exchange - question forwarding and answer state
//!
//! This crate owns the question/answer cycle against the backend's AI
//! endpoint:
//! - `client` - the pluggable `AssistantClient` trait
//! - `http` - the reqwest implementation posting to `/api/ai`
//! - `exchange` - the pending/answer state machine driving one exchange
//!
//! The assistant is strictly a display feature. It never touches the rep
//! roster or its derived view; the two share nothing but the backend host.

pub mod client;
pub mod exchange;
pub mod http;

pub use client::AssistantClient;
pub use exchange::{AskExchange, FALLBACK_ANSWER};
pub use http::HttpAssistantClient;
