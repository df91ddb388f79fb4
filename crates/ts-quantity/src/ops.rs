//! Operator table for mixed-quantity arithmetic.
//!
//! All arithmetic happens on the canonical Kelvin values; the result's
//! scale comes from the default registry's promotion table, which falls
//! back to the left operand's scale. Operations that can land below
//! absolute zero return a `TsResult` instead of a bare quantity:
//!
//! - temperature + delta, temperature - delta: fallible `Temperature`
//! - temperature - temperature: infallible `TemperatureDelta`
//! - delta + delta, delta - delta: infallible `TemperatureDelta`
//! - delta + temperature: commutes with temperature + delta
//! - temperature + temperature: always invalid (no physical meaning)
//!
//! Subtracting a temperature from a delta is deliberately not implemented;
//! that expression has no reading as either quantity kind.

use std::ops::{Add, Sub};

use ts_core::{TsError, TsResult};
use ts_registry::result_scale;

use crate::delta::TemperatureDelta;
use crate::temperature::Temperature;

impl Add<TemperatureDelta> for Temperature {
    type Output = TsResult<Temperature>;

    fn add(self, rhs: TemperatureDelta) -> TsResult<Temperature> {
        let scale = result_scale(self.scale(), rhs.scale());
        Temperature::from_kelvin(&scale, self.kelvin() + rhs.kelvin())
    }
}

impl Sub<TemperatureDelta> for Temperature {
    type Output = TsResult<Temperature>;

    fn sub(self, rhs: TemperatureDelta) -> TsResult<Temperature> {
        let scale = result_scale(self.scale(), rhs.scale());
        Temperature::from_kelvin(&scale, self.kelvin() - rhs.kelvin())
    }
}

impl Add<Temperature> for TemperatureDelta {
    type Output = TsResult<Temperature>;

    /// Commutes to the temperature + delta case, promotion fallback
    /// included, so `d + t` and `t + d` agree on the result scale.
    fn add(self, rhs: Temperature) -> TsResult<Temperature> {
        rhs + self
    }
}

impl Sub<Temperature> for Temperature {
    type Output = TemperatureDelta;

    fn sub(self, rhs: Temperature) -> TemperatureDelta {
        let scale = result_scale(self.scale(), rhs.scale());
        // both operands are finite and >= 0 K; the difference cannot overflow
        TemperatureDelta::from_kelvin_raw(scale, self.kelvin() - rhs.kelvin())
    }
}

impl Add<Temperature> for Temperature {
    type Output = TsResult<Temperature>;

    fn add(self, _rhs: Temperature) -> TsResult<Temperature> {
        Err(TsError::InvalidOperation {
            what: "cannot add two absolute temperatures",
        })
    }
}

impl Add<TemperatureDelta> for TemperatureDelta {
    type Output = TemperatureDelta;

    fn add(self, rhs: TemperatureDelta) -> TemperatureDelta {
        let scale = result_scale(self.scale(), rhs.scale());
        TemperatureDelta::from_kelvin_raw(scale, self.kelvin() + rhs.kelvin())
    }
}

impl Sub<TemperatureDelta> for TemperatureDelta {
    type Output = TemperatureDelta;

    fn sub(self, rhs: TemperatureDelta) -> TemperatureDelta {
        let scale = result_scale(self.scale(), rhs.scale());
        TemperatureDelta::from_kelvin_raw(scale, self.kelvin() - rhs.kelvin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_registry::{celsius, kelvin, rankine};

    #[test]
    fn adding_two_temperatures_is_invalid() {
        let a = Temperature::new(&celsius(), 20.0).unwrap();
        let b = Temperature::new(&celsius(), 30.0).unwrap();
        let err = (a + b).unwrap_err();
        assert!(matches!(err, TsError::InvalidOperation { .. }));
    }

    #[test]
    fn delta_plus_temperature_commutes() {
        let t = Temperature::new(&celsius(), 5.0).unwrap();
        let d = TemperatureDelta::from_kelvin(&kelvin(), 2.0).unwrap();

        let left = (t.clone() + d.clone()).unwrap();
        let right = (d + t).unwrap();
        assert_eq!(left.kelvin(), right.kelvin());
        assert_eq!(left.scale().id(), right.scale().id());

        // commuting covers the fallback too: the temperature side wins
        let r = Temperature::new(&rankine(), 500.0).unwrap();
        let dc = TemperatureDelta::new(&celsius(), 1.0).unwrap();
        let commuted = (dc + r).unwrap();
        assert_eq!(commuted.scale().id(), rankine().id());
    }

    #[test]
    fn unruled_pair_keeps_the_left_operand_scale() {
        // no stock promotion rule covers (rankine, celsius)
        let r = Temperature::new(&rankine(), 918.67).unwrap();
        let d = TemperatureDelta::new(&celsius(), 10.0).unwrap();

        let sum = (r + d).unwrap();
        assert_eq!(sum.scale().id(), rankine().id());
    }

    #[test]
    fn subtraction_below_absolute_zero_fails() {
        let t = Temperature::from_kelvin(&kelvin(), 10.0).unwrap();
        let d = TemperatureDelta::from_kelvin(&kelvin(), 20.0).unwrap();
        let err = (t - d).unwrap_err();
        assert!(matches!(err, TsError::BelowAbsoluteZero { kelvin } if kelvin == -10.0));
    }

    #[test]
    fn extreme_delta_sums_saturate() {
        let a = TemperatureDelta::from_kelvin(&kelvin(), f64::MAX).unwrap();
        let b = TemperatureDelta::from_kelvin(&kelvin(), f64::MAX).unwrap();
        let sum = a + b;
        assert!(sum.kelvin().is_infinite());

        // the saturated value is refused at the next validated boundary
        let t = Temperature::from_kelvin(&kelvin(), 0.0).unwrap();
        let err = (t + sum).unwrap_err();
        assert!(matches!(err, TsError::NonFinite { .. }));
    }
}
