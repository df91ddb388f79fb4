//! ts-registry: temperature scale registration and promotion for thermoscale.
//!
//! Provides:
//! - Scale descriptors (affine maps between surface values and Kelvin)
//! - A registry keyed by case-insensitive name, last write wins
//! - Stable handles that pin the descriptor they were issued with
//! - Promotion rules deciding the scale of mixed-scale arithmetic
//! - The process-wide default registry seeded with Kelvin, Celsius,
//!   Fahrenheit, and Rankine
//!
//! # Example
//!
//! ```
//! use ts_registry::{define_scale, lookup_scale};
//!
//! let romer = define_scale("Romer", 0.525, -135.90375, "°Rø").unwrap();
//! let found = lookup_scale("romer").unwrap();
//! assert_eq!(found.id(), romer.id());
//! assert_eq!(found.symbol(), "°Rø");
//! ```

pub mod default;
pub mod promote;
pub mod registry;
pub mod scale;

// Re-exports: nice ergonomics for downstream crates
pub use default::{
    celsius, define_promotion, define_scale, fahrenheit, kelvin, lookup_scale, rankine,
    registered_scales, result_scale,
};
pub use promote::PromotionTable;
pub use registry::ScaleRegistry;
pub use scale::{Scale, ScaleHandle, ScaleId};
