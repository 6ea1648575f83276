//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.


/// Most methods use heuristic defaults from [`Algorithm::default_max_iter`].
/// This cap is only applied when a bracket algorithm’s theoretical iteration bound
/// would otherwise exceed it (e.g. [`BracketFamily::Bisection`]).
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    Newton
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - [`BracketFamily::Bisection`] returns `None`, meaning “compute the
    ///   theoretical bound instead”, clamped to [`GLOBAL_MAX_ITER_FALLBACK`].
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => None,
            Algorithm::Open(OpenFamily::Secant)          => Some(100),
            Algorithm::Open(OpenFamily::Newton)          => Some(100),
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::Secant)          => "secant",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}


/// Theoretical number of bisections needed to shrink `[a, b]` strictly below `x_tol`.
///
/// `floor(log2((b - a) / x_tol)) + 1`, or `0` if the bracket is already narrow.
/// A ratio that is an exact power of two still needs one more halving.
pub(crate) fn bisection_theoretical_iter(a: f64, b: f64, x_tol: f64) -> usize {
    let w0 = b - a;
    if w0 < x_tol {
        0
    } else {
        // saturating cast when `w0` overflows
        ((w0 / x_tol).log2().floor() + 1.0) as usize
    }
}
