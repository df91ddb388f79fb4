use core::fmt;
use core::num::NonZeroU32;
use std::ops::Deref;
use std::sync::Arc;

use ts_core::{Real, TsError, TsResult, ensure_finite};

/// An affine temperature scale.
///
/// The coefficients map canonical Kelvin to the scale's surface value:
///
/// ```text
/// surface = slope * kelvin + intercept
/// ```
///
/// Kelvin itself is `slope = 1, intercept = 0`; Fahrenheit is
/// `slope = 1.8, intercept = -459.67`. Differences follow the slope alone,
/// since the intercept cancels when two surface values are subtracted.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub(crate) name: String,
    pub(crate) symbol: String,
    pub(crate) slope: Real,
    pub(crate) intercept: Real,
}

impl Scale {
    /// Validated constructor; the only public way to build a `Scale`.
    ///
    /// Rejects empty names, non-finite coefficients, and a zero slope
    /// (a zero slope would map every temperature to the same value).
    pub fn new(
        name: impl Into<String>,
        slope: Real,
        intercept: Real,
        symbol: impl Into<String>,
    ) -> TsResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TsError::InvalidArg {
                what: "scale name must not be empty",
            });
        }
        ensure_finite(slope, "scale slope")?;
        ensure_finite(intercept, "scale intercept")?;
        if slope == 0.0 {
            return Err(TsError::InvalidArg {
                what: "scale slope must be nonzero",
            });
        }
        Ok(Self {
            name,
            symbol: symbol.into(),
            slope,
            intercept,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn slope(&self) -> Real {
        self.slope
    }

    pub fn intercept(&self) -> Real {
        self.intercept
    }

    /// Registry key. Scale names match case-insensitively.
    pub(crate) fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    /// Surface value in this scale to canonical Kelvin.
    #[inline]
    pub fn to_kelvin(&self, surface: Real) -> Real {
        (surface - self.intercept) / self.slope
    }

    /// Canonical Kelvin to a surface value in this scale.
    #[inline]
    pub fn from_kelvin(&self, kelvin: Real) -> Real {
        self.slope * kelvin + self.intercept
    }

    /// Surface difference to a Kelvin difference (slope only).
    #[inline]
    pub fn delta_to_kelvin(&self, surface_delta: Real) -> Real {
        surface_delta / self.slope
    }

    /// Kelvin difference to a surface difference (slope only).
    #[inline]
    pub fn delta_from_kelvin(&self, kelvin_delta: Real) -> Real {
        self.slope * kelvin_delta
    }
}

/// Compact, stable identifier minted by a [`ScaleRegistry`] in
/// registration order.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<ScaleId>` to be pointer-optimized
///
/// An id stays put when its name is re-registered, so quantities created
/// before a redefinition still compare and promote consistently.
///
/// [`ScaleRegistry`]: crate::registry::ScaleRegistry
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScaleId(NonZeroU32);

impl ScaleId {
    /// Create a ScaleId from a 0-based index by storing index+1.
    pub(crate) fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub(crate) fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaleId({})", self.index())
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Shared reference to a registered scale.
///
/// A handle freezes the descriptor it was issued with: re-registering the
/// same name later swaps the registry slot but leaves existing handles (and
/// any quantities built from them) rendering exactly as before. Handles
/// deref to [`Scale`], so conversion methods and accessors are available
/// directly.
#[derive(Clone, PartialEq)]
pub struct ScaleHandle {
    pub(crate) id: ScaleId,
    pub(crate) scale: Arc<Scale>,
}

impl ScaleHandle {
    pub fn id(&self) -> ScaleId {
        self.id
    }
}

impl Deref for ScaleHandle {
    type Target = Scale;

    fn deref(&self) -> &Scale {
        &self.scale
    }
}

impl fmt::Debug for ScaleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaleHandle({}, {:?})", self.scale.name, self.id)
    }
}
