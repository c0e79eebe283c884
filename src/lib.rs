//! CureLink configuration layer
//!
//! Resolves the immutable settings snapshot for the CureLink appointments
//! platform from environment variables and static defaults. The snapshot is
//! built exactly once at process start and is read-only afterwards; every
//! optional input has a deterministic fallback, so resolution never fails on
//! missing variables.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod env;
pub mod error;
pub mod settings;
pub mod telemetry;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{Error, Result};
pub use settings::Settings;
