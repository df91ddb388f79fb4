//! ts-quantity: absolute temperatures and temperature differences.
//!
//! Both quantity kinds store a canonical Kelvin value and render through a
//! scale handle from `ts-registry`. They differ in validity and in
//! conversion: absolute temperatures are floored at 0 K and convert with
//! slope and intercept, differences are unbounded and follow the slope
//! alone. Mixed arithmetic is wired through the standard operators; see
//! [`ops`](crate::ops) for the permitted combinations.
//!
//! # Example
//!
//! ```
//! use ts_quantity::{Temperature, TemperatureDelta};
//! use ts_registry::{celsius, kelvin};
//!
//! let warmed = (Temperature::new(&celsius(), 5.0).unwrap()
//!     + TemperatureDelta::from_kelvin(&kelvin(), 2.0).unwrap())
//! .unwrap();
//! assert_eq!(format!("{warmed}"), "280.15 K");
//! ```

pub mod delta;
pub mod ops;
pub mod temperature;

pub use delta::TemperatureDelta;
pub use temperature::{ABSOLUTE_ZERO_K, Temperature};
