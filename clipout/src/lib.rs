//! # clipout - Write-Only System Clipboard Sink
//!
//! A thin, fallible wrapper over the OS clipboard for applications that only
//! ever push text out (command batches, report snippets, identifiers).
//!
//! ## Key Features
//! - Lazy clipboard handle acquisition (no cost until first write)
//! - Every failure mapped to a typed [`ClipError`], never a panic
//! - Clean one-method API for TUI integration

pub mod error;
pub mod sink;

// Re-export main types for easy use
pub use error::{ClipError, ClipResult};
pub use sink::TextSink;
