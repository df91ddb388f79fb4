// ts-core/src/units.rs

use crate::numeric::Real;
use uom::si::f64::{
    TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

/// Absolute temperature in the SI ecosystem (uom, f64, canonical Kelvin).
pub type SiTemperature = UomThermodynamicTemperature;

/// Temperature difference in the SI ecosystem.
///
/// uom keeps intervals distinct from absolute temperatures; thermoscale
/// preserves that split, so deltas cross the boundary as intervals.
pub type SiTemperatureInterval = UomTemperatureInterval;

#[inline]
pub fn k(v: Real) -> SiTemperature {
    use uom::si::thermodynamic_temperature::kelvin;
    SiTemperature::new::<kelvin>(v)
}

#[inline]
pub fn dk(v: Real) -> SiTemperatureInterval {
    use uom::si::temperature_interval::kelvin;
    SiTemperatureInterval::new::<kelvin>(v)
}
