//! # Kinesis-Core
//!
//! Core types and utilities for the Kinesis real-time gesture
//! classification engine: landmark frames as delivered by an upstream
//! hand/pose detector, the gesture result model, and the small set of
//! 3D geometry helpers the classifiers are built on.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result};
pub use geometry::*;
pub use types::*;
