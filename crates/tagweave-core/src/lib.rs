//! Core library for tagweave.
//!
//! This crate provides the tag cloud pipeline used by the `tagweave` CLI and
//! any downstream consumers: tokenization, frequency counting, top-N
//! selection, font scaling, and HTML rendering.
//!
//! # Modules
//!
//! - [`tokenizer`] - Word/separator run extraction
//! - [`frequency`] - Case-insensitive word frequency counting
//! - [`select`] - Deterministic top-N selection
//! - [`scale`] - Frequency to font-size mapping
//! - [`html`] - Document rendering
//! - [`cloud`] - The assembled pipeline
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use tagweave_core::TagCloud;
//!
//! let cloud = TagCloud::build("the cat sat on the mat. The cat ran.", 3);
//! let html = cloud.to_html("input.txt");
//! assert!(html.contains("class=\"f48\""));
//! ```
#![deny(unsafe_code)]

pub mod cloud;
pub mod config;
pub mod error;
pub mod frequency;
pub mod html;
pub mod scale;
pub mod select;
pub mod tokenizer;

pub use cloud::{CloudReport, TagCloud};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{CloudError, CloudResult, ConfigError, ConfigResult};
pub use select::{Selection, WordCount};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
