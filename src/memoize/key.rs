use std::hash::{Hash, Hasher};


/// Hashable `f64` for memo keys.
///
/// Equality is on the bit pattern with `-0.0` folded onto `0.0`, so every
/// NaN payload is its own key and `NaN == NaN` for cache purposes.
#[derive(Debug, Copy, Clone)]
pub struct FloatKey(pub f64);

impl FloatKey {
    #[inline]
    fn bits(self) -> u64 {
        if self.0 == 0.0 { 0 } else { self.0.to_bits() }
    }

    pub fn value(self) -> f64 { self.0 }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool { self.bits() == other.bits() }
}
impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) { self.bits().hash(state) }
}

impl From<f64> for FloatKey {
    fn from(v: f64) -> Self { FloatKey(v) }
}
