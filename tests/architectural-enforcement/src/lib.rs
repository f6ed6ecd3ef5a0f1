//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce the structural
//! promises the design rests on:
//! - The core crate stays free of rendering dependencies
//! - Production code uses async I/O
//!
//! These tests walk the source tree; they catch violations early, before a
//! reviewer has to.

#![allow(dead_code)]

use std::path::PathBuf;

/// Root of the workspace, resolved from this crate's manifest location
pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .canonicalize()
        .expect("workspace root resolves")
}

/// The portion of a source file before any `#[cfg(test)]` module
///
/// Test code is exempt from the production-only policies, and in this
/// codebase test modules sit at the bottom of each file.
pub fn production_portion(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(idx) => &content[..idx],
        None => content,
    }
}
