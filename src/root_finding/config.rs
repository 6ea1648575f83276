//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerances and iteration limits,
//! used by all root-finding configs.
//!
//! [`CommonCfg`]: universal fields
//! ├ `x_tol`    : bracket width (bisection) or step size (open methods) tolerance
//! ├ `y_tol`    : function-value tolerance
//! └ `max_iter` : iteration cap (optional)
//!
//! Some algorithms have additional arguments (e.g. bisection's residual
//! bound, newton's finite-difference scheme).


pub const DEFAULT_X_TOL : f64 = 1e-8;
pub const DEFAULT_Y_TOL : f64 = 1e-8;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    x_tol: f64,
    y_tol: f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            x_tol    : DEFAULT_X_TOL,
            y_tol    : DEFAULT_Y_TOL,
            max_iter : None
        }
    }

    // getters
    pub fn x_tol(&self)    -> f64 { self.x_tol }
    pub fn y_tol(&self)    -> f64 { self.y_tol }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal)
    pub(crate) fn with_x_tol    (&mut self, v: f64)   { self.x_tol    = v; }
    pub(crate) fn with_y_tol    (&mut self, v: f64)   { self.y_tol    = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_x_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidXTol { got: v }
                    );
                }
                self.common.with_x_tol(v);
                Ok(self)
            }
            pub fn set_y_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v < 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidYTol { got: v }
                    );
                }
                self.common.with_y_tol(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] pub fn x_tol(&self)    -> f64 { self.common.x_tol() }
            #[inline] pub fn y_tol(&self)    -> f64 { self.common.y_tol() }
            #[inline] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg;
