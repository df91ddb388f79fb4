use std::collections::HashMap;

use crate::scale::ScaleHandle;

/// Rule table deciding which scale the result of mixed-scale arithmetic is
/// expressed in.
///
/// Rules are keyed by the unordered, case-insensitive pair of scale names:
/// a rule for (Fahrenheit, Celsius) answers both `F + C` and `C + F`.
/// Names identify scales here, not ids. Ids are minted per registry, so
/// handles from a caller-owned registry would otherwise collide with the
/// stock rules of the process-wide one. When no rule matches, the left
/// operand's scale wins.
#[derive(Debug, Clone, Default)]
pub struct PromotionTable {
    rules: HashMap<(String, String), ScaleHandle>,
}

impl PromotionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) the rule for the unordered pair `(a, b)`.
    pub fn insert(&mut self, a: &ScaleHandle, b: &ScaleHandle, result: &ScaleHandle) {
        self.rules.insert(pair_key(a, b), result.clone());
    }

    /// Rule lookup for the unordered pair, if one was registered.
    pub fn get(&self, a: &ScaleHandle, b: &ScaleHandle) -> Option<&ScaleHandle> {
        self.rules.get(&pair_key(a, b))
    }

    /// Scale an arithmetic result over `(lhs, rhs)` is expressed in: the
    /// registered rule, or `lhs`'s own scale as the fallback.
    pub fn result_scale(&self, lhs: &ScaleHandle, rhs: &ScaleHandle) -> ScaleHandle {
        self.get(lhs, rhs).cloned().unwrap_or_else(|| lhs.clone())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Normalize a pair so (a, b) and (b, a) share one table slot.
fn pair_key(a: &ScaleHandle, b: &ScaleHandle) -> (String, String) {
    let a = a.key();
    let b = b.key();
    if b < a { (b, a) } else { (a, b) }
}
