use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use ts_core::{Real, TsError, TsResult};

use crate::promote::PromotionTable;
use crate::scale::{Scale, ScaleHandle, ScaleId};

/// Mutable collection of scale descriptors plus their promotion rules.
///
/// Names match case-insensitively and the original spelling is kept for
/// display. Registering a name that already exists replaces the stored
/// descriptor (last write wins) while keeping its [`ScaleId`]; handles
/// issued before the replacement keep the descriptor they were issued with.
#[derive(Debug, Default)]
pub struct ScaleRegistry {
    slots: Vec<Arc<Scale>>,
    by_name: HashMap<String, ScaleId>,
    promotions: PromotionTable,
}

/// Handles of the stock scales, captured while seeding a registry.
pub(crate) struct BuiltinScales {
    pub kelvin: ScaleHandle,
    pub celsius: ScaleHandle,
    pub fahrenheit: ScaleHandle,
    pub rankine: ScaleHandle,
}

impl ScaleRegistry {
    /// Empty registry: no scales, no promotion rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with Kelvin, Celsius, Fahrenheit, and Rankine
    /// plus the stock promotion rules:
    ///
    /// - (Kelvin, Celsius) resolves to Kelvin
    /// - (Fahrenheit, Celsius) resolves to Celsius
    /// - (Fahrenheit, Kelvin) resolves to Kelvin
    pub fn with_builtins() -> Self {
        Self::seeded().0
    }

    pub(crate) fn seeded() -> (Self, BuiltinScales) {
        let mut reg = Self::new();
        let kelvin = reg.insert(Scale {
            name: "Kelvin".to_string(),
            symbol: "K".to_string(),
            slope: 1.0,
            intercept: 0.0,
        });
        let celsius = reg.insert(Scale {
            name: "Celsius".to_string(),
            symbol: "°C".to_string(),
            slope: 1.0,
            intercept: -273.15,
        });
        let fahrenheit = reg.insert(Scale {
            name: "Fahrenheit".to_string(),
            symbol: "°F".to_string(),
            slope: 1.8,
            intercept: -459.67,
        });
        let rankine = reg.insert(Scale {
            name: "Rankine".to_string(),
            symbol: "°R".to_string(),
            slope: 1.8,
            intercept: 0.0,
        });

        reg.register_promotion(&kelvin, &celsius, &kelvin);
        reg.register_promotion(&fahrenheit, &celsius, &celsius);
        reg.register_promotion(&fahrenheit, &kelvin, &kelvin);

        let builtins = BuiltinScales {
            kelvin,
            celsius,
            fahrenheit,
            rankine,
        };
        (reg, builtins)
    }

    /// Validate and register a scale, returning its handle.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        slope: Real,
        intercept: Real,
        symbol: impl Into<String>,
    ) -> TsResult<ScaleHandle> {
        let scale = Scale::new(name, slope, intercept, symbol)?;
        Ok(self.insert(scale))
    }

    /// Place an already-validated scale (last write wins per name).
    pub fn insert(&mut self, scale: Scale) -> ScaleHandle {
        let key = scale.key();
        let scale = Arc::new(scale);
        match self.by_name.get(&key) {
            Some(&id) => {
                debug!("Replacing scale definition for {} (id {})", scale.name(), id);
                self.slots[id.index() as usize] = Arc::clone(&scale);
                ScaleHandle { id, scale }
            }
            None => {
                let id = ScaleId::from_index(self.slots.len() as u32);
                debug!("Registered scale {} (id {})", scale.name(), id);
                self.slots.push(Arc::clone(&scale));
                self.by_name.insert(key, id);
                ScaleHandle { id, scale }
            }
        }
    }

    /// Look a scale up by case-insensitive name.
    pub fn lookup(&self, name: &str) -> TsResult<ScaleHandle> {
        match self.by_name.get(&name.to_ascii_lowercase()) {
            Some(&id) => Ok(ScaleHandle {
                id,
                scale: Arc::clone(&self.slots[id.index() as usize]),
            }),
            None => Err(TsError::UnknownScale {
                name: name.to_string(),
            }),
        }
    }

    /// Current descriptor for an id, if this registry minted it.
    pub fn get(&self, id: ScaleId) -> Option<ScaleHandle> {
        self.slots.get(id.index() as usize).map(|scale| ScaleHandle {
            id,
            scale: Arc::clone(scale),
        })
    }

    /// Set (or overwrite) the promotion rule for an unordered scale pair.
    pub fn register_promotion(&mut self, a: &ScaleHandle, b: &ScaleHandle, result: &ScaleHandle) {
        debug!("Promotion rule: ({}, {}) -> {}", a.name(), b.name(), result.name());
        self.promotions.insert(a, b, result);
    }

    /// Scale an arithmetic result over `(lhs, rhs)` is expressed in.
    pub fn result_scale(&self, lhs: &ScaleHandle, rhs: &ScaleHandle) -> ScaleHandle {
        self.promotions.result_scale(lhs, rhs)
    }

    /// The promotion rule table.
    pub fn promotions(&self) -> &PromotionTable {
        &self.promotions
    }

    /// Handles of every registered scale, in registration order.
    pub fn handles(&self) -> Vec<ScaleHandle> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, scale)| ScaleHandle {
                id: ScaleId::from_index(index as u32),
                scale: Arc::clone(scale),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_registered() {
        let reg = ScaleRegistry::with_builtins();
        assert_eq!(reg.len(), 4);
        for name in ["Kelvin", "Celsius", "Fahrenheit", "Rankine"] {
            let handle = reg.lookup(name).unwrap();
            assert_eq!(handle.name(), name);
        }
        assert_eq!(reg.promotions().len(), 3);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let reg = ScaleRegistry::with_builtins();
        let a = reg.lookup("celsius").unwrap();
        let b = reg.lookup("CELSIUS").unwrap();
        assert_eq!(a.id(), b.id());
        // display spelling is the registered one
        assert_eq!(b.name(), "Celsius");
    }

    #[test]
    fn lookup_unknown_name_fails() {
        let reg = ScaleRegistry::with_builtins();
        let err = reg.lookup("Klingon").unwrap_err();
        assert!(matches!(err, TsError::UnknownScale { name } if name == "Klingon"));
    }

    #[test]
    fn register_then_lookup_round_trip() {
        let mut reg = ScaleRegistry::new();
        let newton = reg.register("Newton", 0.33, -90.1395, "°N").unwrap();
        let found = reg.lookup("newton").unwrap();
        assert_eq!(found.id(), newton.id());
        assert_eq!(found.slope(), 0.33);
        assert_eq!(found.symbol(), "°N");
    }

    #[test]
    fn register_rejects_invalid_scale() {
        let mut reg = ScaleRegistry::new();
        assert!(reg.register("Flat", 0.0, 1.0, "F").is_err());
        assert!(reg.register("", 1.0, 0.0, "?").is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn reregistration_keeps_id_and_swaps_descriptor() {
        let mut reg = ScaleRegistry::with_builtins();
        let before = reg.lookup("rankine").unwrap();

        let after = reg.register("Rankine", 2.0, 1.0, "°R2").unwrap();
        assert_eq!(after.id(), before.id());
        assert_eq!(reg.len(), 4);

        // the old handle still carries the descriptor it was issued with
        assert_eq!(before.slope(), 1.8);
        assert_eq!(before.symbol(), "°R");

        let current = reg.lookup("rankine").unwrap();
        assert_eq!(current.slope(), 2.0);
        assert_eq!(current.symbol(), "°R2");
    }

    #[test]
    fn get_by_id_tracks_current_descriptor() {
        let mut reg = ScaleRegistry::with_builtins();
        let id = reg.lookup("celsius").unwrap().id();

        reg.register("Celsius", 1.0, -273.0, "°C*").unwrap();
        let current = reg.get(id).unwrap();
        assert_eq!(current.intercept(), -273.0);

        let missing = ScaleId::from_index(999);
        assert!(reg.get(missing).is_none());
    }

    #[test]
    fn stock_promotion_rules_resolve() {
        let reg = ScaleRegistry::with_builtins();
        let k = reg.lookup("kelvin").unwrap();
        let c = reg.lookup("celsius").unwrap();
        let f = reg.lookup("fahrenheit").unwrap();

        assert_eq!(reg.result_scale(&c, &k).name(), "Kelvin");
        assert_eq!(reg.result_scale(&k, &c).name(), "Kelvin");
        assert_eq!(reg.result_scale(&f, &c).name(), "Celsius");
        assert_eq!(reg.result_scale(&f, &k).name(), "Kelvin");
    }

    #[test]
    fn unruled_pair_falls_back_to_lhs() {
        let reg = ScaleRegistry::with_builtins();
        let r = reg.lookup("rankine").unwrap();
        let c = reg.lookup("celsius").unwrap();

        assert_eq!(reg.result_scale(&r, &c).name(), "Rankine");
        assert_eq!(reg.result_scale(&c, &r).name(), "Celsius");
    }

    #[test]
    fn rules_match_names_not_registry_ids() {
        let reg = ScaleRegistry::with_builtins();

        let mut other = ScaleRegistry::new();
        let newton = other.register("Newton", 0.33, -90.1395, "°N").unwrap();
        let delisle = other.register("Delisle", -1.5, 559.725, "°De").unwrap();

        // the fresh registry reuses ids 0 and 1, same as kelvin and celsius
        assert_eq!(newton.id(), reg.lookup("kelvin").unwrap().id());
        assert_eq!(delisle.id(), reg.lookup("celsius").unwrap().id());

        // no rule names this pair, so the left operand wins despite the ids
        assert_eq!(reg.result_scale(&newton, &delisle).name(), "Newton");
        assert_eq!(reg.result_scale(&delisle, &newton).name(), "Delisle");
    }

    #[test]
    fn handles_preserve_registration_order() {
        let reg = ScaleRegistry::with_builtins();
        let names: Vec<_> = reg.handles().iter().map(|h| h.name().to_string()).collect();
        assert_eq!(names, ["Kelvin", "Celsius", "Fahrenheit", "Rankine"]);
    }
}
