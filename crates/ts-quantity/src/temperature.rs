use core::fmt;

use ts_core::units::{SiTemperature, k};
use ts_core::{Real, TsError, TsResult, ensure_finite};
use ts_registry::{ScaleHandle, lookup_scale};

/// Lowest canonical value an absolute temperature may take, in Kelvin.
pub const ABSOLUTE_ZERO_K: Real = 0.0;

/// An absolute temperature: a canonical Kelvin value viewed through a scale.
///
/// Values are immutable once built; arithmetic and conversion produce new
/// quantities. The handle pins the descriptor the quantity was created
/// with, so re-registering a scale name afterwards does not shift existing
/// quantities.
#[derive(Clone, PartialEq)]
pub struct Temperature {
    scale: ScaleHandle,
    kelvin: Real,
}

impl Temperature {
    /// Build from a surface value in `scale`.
    ///
    /// Fails with [`TsError::BelowAbsoluteZero`] when the canonical value
    /// lands below 0 K, and with [`TsError::NonFinite`] on NaN or infinity.
    pub fn new(scale: &ScaleHandle, value: Real) -> TsResult<Self> {
        let value = ensure_finite(value, "temperature value")?;
        Self::from_kelvin(scale, scale.to_kelvin(value))
    }

    /// Build from a canonical Kelvin value, viewed through `scale`.
    pub fn from_kelvin(scale: &ScaleHandle, kelvin: Real) -> TsResult<Self> {
        let kelvin = ensure_finite(kelvin, "temperature in kelvin")?;
        if kelvin < ABSOLUTE_ZERO_K {
            return Err(TsError::BelowAbsoluteZero { kelvin });
        }
        Ok(Self {
            scale: scale.clone(),
            kelvin,
        })
    }

    /// Surface value in this quantity's own scale.
    pub fn value(&self) -> Real {
        self.scale.from_kelvin(self.kelvin)
    }

    /// Canonical Kelvin value.
    pub fn kelvin(&self) -> Real {
        self.kelvin
    }

    /// The scale this quantity renders in.
    pub fn scale(&self) -> &ScaleHandle {
        &self.scale
    }

    /// The same physical temperature viewed through another scale.
    ///
    /// Only the view changes; the canonical value is carried over without
    /// a surface round trip, so chained conversions do not drift.
    pub fn in_scale(&self, scale: &ScaleHandle) -> Temperature {
        Temperature {
            scale: scale.clone(),
            kelvin: self.kelvin,
        }
    }

    /// Resolve `name` in the default registry and view through that scale.
    ///
    /// Any scale registered by the time of the call is a valid target;
    /// fails with [`TsError::UnknownScale`] otherwise.
    pub fn in_named(&self, name: &str) -> TsResult<Temperature> {
        Ok(self.in_scale(&lookup_scale(name)?))
    }

    /// This temperature as a uom SI quantity.
    pub fn to_si(&self) -> SiTemperature {
        k(self.kelvin)
    }

    /// Build from a uom SI temperature, viewed through `scale`.
    pub fn from_si(scale: &ScaleHandle, t: SiTemperature) -> TsResult<Self> {
        use uom::si::thermodynamic_temperature::kelvin;
        Self::from_kelvin(scale, t.get::<kelvin>())
    }
}

/// Renders as `<value> <symbol>`, e.g. `23.0 °C`.
impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.value(), self.scale.symbol())
    }
}

/// Renders as `<ScaleName>(<value>)`, e.g. `Celsius(23.0)`.
impl fmt::Debug for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.scale.name(), self.value())
    }
}
