//! ts-core: stable foundation for thermoscale.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error type for all thermoscale crates)
//! - units (uom SI temperature types for boundary interop)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TsError, TsResult};
pub use numeric::*;
pub use units::*;
