//! # Vesper
//!
//! A term-weighted intent classifier for voice command assistants.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Flexible text analysis pipeline
//! - TF-IDF intent centroids with cosine-similarity matching
//! - Confidence threshold with an explicit `"unknown"` fallback
//! - Pluggable command executors for dispatching recognized intents

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod dispatch;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
