//! Minimal client for the Gemini `generateContent` REST endpoint.

mod client;
mod config;
mod decode;
mod error;
mod models;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use decode::decode_fenced_json;
pub use error::{GeminiError, GeminiResult};
