//! Core types and error handling
//!
//! This module contains the foundational types shared by every filem
//! operation: the [`FilemError`] enum covering each failure mode, the
//! [`ErrorContext`] wrapper used to present errors to the terminal, and the
//! [`user_friendly_error`] conversion used by the top-level reporter in
//! `main`.

pub mod error;

pub use error::{ErrorContext, FilemError, user_friendly_error};
