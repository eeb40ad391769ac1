//! Common test utilities for minard.
//!
//! This module provides shared fixtures for testing classification and
//! selection against a scripted map widget.

// Re-export all common test utilities
pub mod ports;
pub mod test_data;
