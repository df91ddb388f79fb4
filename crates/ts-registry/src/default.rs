//! Process-wide default registry.
//!
//! The quantity types resolve names and promotion rules against one shared
//! registry that starts out seeded with the stock scales. `define_scale`
//! and `define_promotion` extend it at any point during the process
//! lifetime; writes are serialized by a single lock while reads share it.

use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ts_core::{Real, TsResult};

use crate::registry::{BuiltinScales, ScaleRegistry};
use crate::scale::ScaleHandle;

struct DefaultRegistry {
    registry: RwLock<ScaleRegistry>,
    builtins: BuiltinScales,
}

static DEFAULT: LazyLock<DefaultRegistry> = LazyLock::new(|| {
    let (registry, builtins) = ScaleRegistry::seeded();
    DefaultRegistry {
        registry: RwLock::new(registry),
        builtins,
    }
});

fn read() -> RwLockReadGuard<'static, ScaleRegistry> {
    match DEFAULT.registry.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write() -> RwLockWriteGuard<'static, ScaleRegistry> {
    match DEFAULT.registry.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Register a scale in the process-wide registry.
///
/// Re-registering an existing name replaces its definition for future
/// lookups; handles issued earlier keep the old descriptor.
pub fn define_scale(
    name: impl Into<String>,
    slope: Real,
    intercept: Real,
    symbol: impl Into<String>,
) -> TsResult<ScaleHandle> {
    write().register(name, slope, intercept, symbol)
}

/// Set (or overwrite) a promotion rule in the process-wide registry.
pub fn define_promotion(a: &ScaleHandle, b: &ScaleHandle, result: &ScaleHandle) {
    write().register_promotion(a, b, result);
}

/// Resolve a scale by case-insensitive name in the process-wide registry.
pub fn lookup_scale(name: &str) -> TsResult<ScaleHandle> {
    read().lookup(name)
}

/// Scale an arithmetic result over `(lhs, rhs)` is expressed in, per the
/// process-wide rule table (left operand's scale when no rule matches).
pub fn result_scale(lhs: &ScaleHandle, rhs: &ScaleHandle) -> ScaleHandle {
    read().result_scale(lhs, rhs)
}

/// Every scale currently registered process-wide, in registration order.
pub fn registered_scales() -> Vec<ScaleHandle> {
    read().handles()
}

/// The stock Kelvin scale (slope 1, intercept 0, symbol `K`).
pub fn kelvin() -> ScaleHandle {
    DEFAULT.builtins.kelvin.clone()
}

/// The stock Celsius scale (slope 1, intercept -273.15, symbol `°C`).
pub fn celsius() -> ScaleHandle {
    DEFAULT.builtins.celsius.clone()
}

/// The stock Fahrenheit scale (slope 1.8, intercept -459.67, symbol `°F`).
pub fn fahrenheit() -> ScaleHandle {
    DEFAULT.builtins.fahrenheit.clone()
}

/// The stock Rankine scale (slope 1.8, intercept 0, symbol `°R`).
pub fn rankine() -> ScaleHandle {
    DEFAULT.builtins.rankine.clone()
}
