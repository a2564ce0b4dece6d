//! TVD flux limiters.
//!
//! ## Purpose
//!
//! This module implements the flux-limiter functions `psi(d1, d2)` used by
//! finite-volume schemes to blend low- and high-order fluxes, where `d1` and
//! `d2` are consecutive slopes and `r = d1 / d2`.
//!
//! ## Design notes
//!
//! * **Shared contract**: Every limiter except `total` and `null` returns 0
//!   when `d1 * d2 <= SMALL` (opposite-signed or vanishing slopes), otherwise a
//!   bounded function of `r`.
//! * **Selection**: [`FluxLimiter`] names each limiter for configuration and
//!   maps to a plain function pointer for runtime dispatch.
//!
//! ## Invariants
//!
//! * `psi(d, d) == 1` for every limiter except `total`.
//! * All limiters are pure functions of their two arguments.

// External dependencies
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::scalar::Scalar;

// ============================================================================
// Limiter Functions
// ============================================================================

/// Slope ratio `d1 / d2`, or `None` when the slopes do not share a sign.
#[inline]
fn ratio<T: Scalar>(d1: T, d2: T) -> Option<T> {
    if d1 * d2 <= T::SMALL {
        None
    } else {
        Some(d1 / d2)
    }
}

/// Total limiter: always 0 (first-order upwind).
#[inline]
pub fn total<T: Scalar>(_d1: T, _d2: T) -> T {
    T::zero()
}

/// Null limiter: always 1 (second-order upwind).
#[inline]
pub fn null<T: Scalar>(_d1: T, _d2: T) -> T {
    T::one()
}

/// Centred limiter: `r`.
#[inline]
pub fn centred<T: Scalar>(d1: T, d2: T) -> T {
    ratio(d1, d2).unwrap_or_else(T::zero)
}

/// Superbee limiter: `max(min(2r, 1), min(r, 2))`.
#[inline]
pub fn superbee<T: Scalar>(d1: T, d2: T) -> T {
    let Some(r) = ratio(d1, d2) else {
        return T::zero();
    };
    let two = T::lit(2.0);
    (r + r).min(T::one()).max(r.min(two))
}

/// Minmod limiter: `min(r, 1)`.
#[inline]
pub fn minmod<T: Scalar>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or_else(T::zero, |r| r.min(T::one()))
}

/// Van Leer limiter: `2r / (1 + r)`.
#[inline]
pub fn van_leer<T: Scalar>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or_else(T::zero, |r| (r + r) / (T::one() + r))
}

/// Van Albada limiter: `r (r + 1) / (r^2 + 1)`.
#[inline]
pub fn van_albada<T: Scalar>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or_else(T::zero, |r| r * (r + T::one()) / (r * r + T::one()))
}

/// Minsuper limiter: `min(r, 2)`.
#[inline]
pub fn minsuper<T: Scalar>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or_else(T::zero, |r| r.min(T::lit(2.0)))
}

/// Supermin limiter: `min(2r, 1)`.
#[inline]
pub fn supermin<T: Scalar>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or_else(T::zero, |r| (r + r).min(T::one()))
}

/// Monotonized central limiter: `min(2r, (1 + r) / 2, 2)`.
#[inline]
pub fn monotonized_central<T: Scalar>(d1: T, d2: T) -> T {
    let Some(r) = ratio(d1, d2) else {
        return T::zero();
    };
    let two = T::lit(2.0);
    if r >= T::lit(3.0) {
        two
    } else if r >= T::lit(1.0 / 3.0) {
        T::lit(0.5) * (r + T::one())
    } else {
        r + r
    }
}

/// Mean limiter: `(1 + r) / 2`.
#[inline]
pub fn mean<T: Scalar>(d1: T, d2: T) -> T {
    ratio(d1, d2).map_or_else(T::zero, |r| T::lit(0.5) * (r + T::one()))
}

// ============================================================================
// Selector
// ============================================================================

/// Named flux limiter, for scheme configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FluxLimiter {
    /// [`total`]
    Total,

    /// [`null`]
    Null,

    /// [`centred`]
    Centred,

    /// [`superbee`]
    Superbee,

    /// [`minmod`]
    #[default]
    Minmod,

    /// [`van_leer`]
    VanLeer,

    /// [`van_albada`]
    VanAlbada,

    /// [`minsuper`]
    Minsuper,

    /// [`supermin`]
    Supermin,

    /// [`monotonized_central`]
    MonotonizedCentral,

    /// [`mean`]
    Mean,
}

impl FluxLimiter {
    /// Every limiter, in declaration order.
    pub const ALL: [FluxLimiter; 11] = [
        Self::Total,
        Self::Null,
        Self::Centred,
        Self::Superbee,
        Self::Minmod,
        Self::VanLeer,
        Self::VanAlbada,
        Self::Minsuper,
        Self::Supermin,
        Self::MonotonizedCentral,
        Self::Mean,
    ];

    /// Function pointer implementing this limiter.
    pub fn function<T: Scalar>(self) -> fn(T, T) -> T {
        match self {
            Self::Total => total::<T>,
            Self::Null => null::<T>,
            Self::Centred => centred::<T>,
            Self::Superbee => superbee::<T>,
            Self::Minmod => minmod::<T>,
            Self::VanLeer => van_leer::<T>,
            Self::VanAlbada => van_albada::<T>,
            Self::Minsuper => minsuper::<T>,
            Self::Supermin => supermin::<T>,
            Self::MonotonizedCentral => monotonized_central::<T>,
            Self::Mean => mean::<T>,
        }
    }

    /// Evaluate this limiter.
    #[inline]
    pub fn apply<T: Scalar>(self, d1: T, d2: T) -> T {
        (self.function::<T>())(d1, d2)
    }

    /// Whether the limiter enforces the TVD sign condition.
    pub fn is_sign_limited(self) -> bool {
        !matches!(self, Self::Total | Self::Null)
    }
}
