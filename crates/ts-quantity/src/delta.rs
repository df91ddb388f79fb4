use core::fmt;

use ts_core::units::{SiTemperatureInterval, dk};
use ts_core::{Real, TsResult, ensure_finite};
use ts_registry::{ScaleHandle, lookup_scale};

/// A temperature difference tied to a scale.
///
/// Differences share their scale's slope but not its intercept, and have no
/// lower bound: a change of -500 °C is meaningful even though -500 °C is
/// not a valid absolute temperature. Canonically stored in Kelvin like
/// [`Temperature`], minus the absolute-zero floor.
///
/// [`Temperature`]: crate::temperature::Temperature
#[derive(Clone, PartialEq)]
pub struct TemperatureDelta {
    scale: ScaleHandle,
    kelvin: Real,
}

impl TemperatureDelta {
    /// Build from a surface difference in `scale`.
    pub fn new(scale: &ScaleHandle, value: Real) -> TsResult<Self> {
        let value = ensure_finite(value, "temperature delta value")?;
        Self::from_kelvin(scale, scale.delta_to_kelvin(value))
    }

    /// Build from a Kelvin difference, viewed through `scale`.
    pub fn from_kelvin(scale: &ScaleHandle, kelvin: Real) -> TsResult<Self> {
        let kelvin = ensure_finite(kelvin, "temperature delta in kelvin")?;
        Ok(Self {
            scale: scale.clone(),
            kelvin,
        })
    }

    /// Arithmetic-internal constructor, skipping the finiteness check.
    /// Delta sums follow IEEE float semantics: extreme operands saturate
    /// to infinity, and the validated constructors reject such a value the
    /// moment it feeds back into an absolute temperature.
    pub(crate) fn from_kelvin_raw(scale: ScaleHandle, kelvin: Real) -> Self {
        Self { scale, kelvin }
    }

    /// Surface difference in this delta's own scale.
    pub fn value(&self) -> Real {
        self.scale.delta_from_kelvin(self.kelvin)
    }

    /// Canonical Kelvin difference.
    pub fn kelvin(&self) -> Real {
        self.kelvin
    }

    /// The scale this delta renders in.
    pub fn scale(&self) -> &ScaleHandle {
        &self.scale
    }

    /// The same difference viewed through another scale.
    pub fn in_scale(&self, scale: &ScaleHandle) -> TemperatureDelta {
        TemperatureDelta {
            scale: scale.clone(),
            kelvin: self.kelvin,
        }
    }

    /// Resolve `name` in the default registry and view through that scale.
    pub fn in_named(&self, name: &str) -> TsResult<TemperatureDelta> {
        Ok(self.in_scale(&lookup_scale(name)?))
    }

    /// This difference as a uom SI interval.
    pub fn to_si(&self) -> SiTemperatureInterval {
        dk(self.kelvin)
    }

    /// Build from a uom SI interval, viewed through `scale`.
    pub fn from_si(scale: &ScaleHandle, d: SiTemperatureInterval) -> TsResult<Self> {
        use uom::si::temperature_interval::kelvin;
        Self::from_kelvin(scale, d.get::<kelvin>())
    }
}

/// Renders as `<ScaleName>.Delta(<value>)`, e.g. `Kelvin.Delta(2.0)`.
///
/// Unlike [`Temperature`], a delta never prints as a bare value with a
/// symbol; the rendering always marks it as a difference.
///
/// [`Temperature`]: crate::temperature::Temperature
impl fmt::Display for TemperatureDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.Delta({:?})", self.scale.name(), self.value())
    }
}

impl fmt::Debug for TemperatureDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::{Tolerances, TsError, nearly_equal};
    use ts_registry::{celsius, fahrenheit, kelvin};

    #[test]
    fn deltas_have_no_lower_bound() {
        let d = TemperatureDelta::new(&celsius(), -500.0).unwrap();
        assert_eq!(d.kelvin(), -500.0);
        assert_eq!(d.in_scale(&kelvin()).value(), -500.0);
    }

    #[test]
    fn conversion_ignores_the_intercept() {
        // 9 Fahrenheit degrees are 5 Kelvin, not a point on either scale
        let d = TemperatureDelta::new(&fahrenheit(), 9.0).unwrap();
        assert!(nearly_equal(d.kelvin(), 5.0, Tolerances::default()));

        let c = d.in_scale(&celsius());
        assert!(nearly_equal(c.value(), 5.0, Tolerances::default()));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(TemperatureDelta::new(&kelvin(), f64::NAN).is_err());
        assert!(TemperatureDelta::from_kelvin(&kelvin(), f64::INFINITY).is_err());
    }

    #[test]
    fn in_named_resolves_through_default_registry() {
        let d = TemperatureDelta::from_kelvin(&kelvin(), 5.0).unwrap();
        let f = d.in_named("fahrenheit").unwrap();
        assert!(nearly_equal(f.value(), 9.0, Tolerances::default()));

        let err = d.in_named("venusian").unwrap_err();
        assert!(matches!(err, TsError::UnknownScale { name } if name == "venusian"));
    }

    #[test]
    fn rendering_marks_the_quantity_as_a_delta() {
        let d = TemperatureDelta::from_kelvin(&kelvin(), 2.0).unwrap();
        assert_eq!(format!("{d}"), "Kelvin.Delta(2.0)");
        assert_eq!(format!("{d:?}"), "Kelvin.Delta(2.0)");

        let c = TemperatureDelta::new(&celsius(), -1.5).unwrap();
        assert_eq!(format!("{c}"), "Celsius.Delta(-1.5)");
    }

    #[test]
    fn si_round_trip_preserves_kelvin() {
        let d = TemperatureDelta::new(&fahrenheit(), 9.0).unwrap();
        let back = TemperatureDelta::from_si(&fahrenheit(), d.to_si()).unwrap();
        assert_eq!(back.kelvin(), d.kelvin());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use ts_core::{Tolerances, nearly_equal};
    use ts_registry::{celsius, fahrenheit, kelvin, rankine};

    proptest! {
        #[test]
        fn delta_conversion_is_linear(a in -1000.0_f64..1000.0, b in -1000.0_f64..1000.0) {
            let tol = Tolerances::default();
            for scale in [kelvin(), celsius(), fahrenheit(), rankine()] {
                let da = TemperatureDelta::new(&scale, a).unwrap();
                let db = TemperatureDelta::new(&scale, b).unwrap();
                let sum = TemperatureDelta::new(&scale, a + b).unwrap();
                prop_assert!(nearly_equal(da.kelvin() + db.kelvin(), sum.kelvin(), tol));
            }
        }

        #[test]
        fn surface_round_trip_recovers_value(value in -1000.0_f64..1000.0) {
            let tol = Tolerances::default();
            for scale in [kelvin(), celsius(), fahrenheit(), rankine()] {
                let d = TemperatureDelta::new(&scale, value).unwrap();
                prop_assert!(nearly_equal(d.value(), value, tol));
            }
        }
    }
}
