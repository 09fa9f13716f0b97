//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Gazette page builders producing raw page text
//! - PDF fixture builders
//! - Custom assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
