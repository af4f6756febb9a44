//! Validation core for a conformance test harness.
//!
//! The surrounding CLI collects its flags into a [`settings::Settings`]
//! store and calls into this crate before any test execution begins:
//!
//! - **[`args`]**: structural validation of pass-through runner flags plus
//!   the focus default.
//! - **[`version`]**: normalization of discovered cluster versions to a
//!   canonical `vMAJOR.MINOR.PATCH` form.
//!
//! Both entry points are synchronous and deterministic. They touch nothing
//! beyond the in-memory store handed to them and return typed errors
//! ([`error`]) the caller can match on instead of string-inspecting.

pub mod args;
pub mod error;
pub mod logging;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod version;
