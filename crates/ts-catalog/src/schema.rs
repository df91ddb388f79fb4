//! Catalog file schema.
//!
//! A catalog declares extra scales (and optionally promotion rules) in
//! YAML or JSON, so tools can carry site-specific scales without code:
//!
//! ```yaml
//! version: 1
//! scales:
//!   - name: Reaumur
//!     symbol: "°Ré"
//!     slope: 0.8
//!     intercept: -218.52
//! promotions:
//!   - scale_a: Reaumur
//!     scale_b: Celsius
//!     result: Celsius
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleCatalog {
    pub version: u32,
    #[serde(default)]
    pub scales: Vec<ScaleDef>,
    #[serde(default)]
    pub promotions: Vec<PromotionDef>,
}

/// One affine scale: `surface = slope * kelvin + intercept`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleDef {
    pub name: String,
    pub symbol: String,
    pub slope: f64,
    pub intercept: f64,
}

/// Result scale for one unordered operand pair.
///
/// The three names may refer to scales from this catalog or to scales
/// already registered (the stock ones included); they are resolved at
/// install time, after the catalog's own scales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromotionDef {
    pub scale_a: String,
    pub scale_b: String,
    pub result: String,
}
