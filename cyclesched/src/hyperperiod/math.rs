/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Pure arithmetic helpers: GCD and checked LCM.
//!
//! These are free functions rather than methods so they can be used and tested
//! independently of the scheduler.  Both 32-bit and 64-bit signed integers are
//! supported through the sealed [`Integer`] trait; every operation works on
//! absolute values and returns the unsigned magnitude type (`u32` / `u64`), so
//! `|i32::MIN|` is representable and no sign juggling leaks into callers.

use std::fmt;
use std::ops::{Div, Rem};

use thiserror::Error;

// ── Error type ────────────────────────────────────────────────────────────────

/// LCM overflowed the magnitude type of the inputs.
///
/// Both operands are widened to `u64` so one variant serves every width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("LCM overflow computing lcm({a}, {b})")]
    Overflow { a: u64, b: u64 },
}

// ── Numeric traits ────────────────────────────────────────────────────────────

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned magnitude an [`Integer`] folds into.
pub trait Magnitude:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::Display
    + Rem<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Lossless widening used for error reporting.
    fn widen(self) -> u64;
}

/// Signed integer width accepted by [`gcd`], [`lcm`], [`gcd_of`] and [`lcm_of`].
pub trait Integer: sealed::Sealed + Copy {
    type Magnitude: Magnitude;

    /// Absolute value as an unsigned magnitude.
    fn magnitude(self) -> Self::Magnitude;
}

macro_rules! impl_integer {
    ($signed:ty => $unsigned:ty) => {
        impl Magnitude for $unsigned {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$unsigned>::checked_mul(self, rhs)
            }

            fn widen(self) -> u64 {
                u64::from(self)
            }
        }

        impl Integer for $signed {
            type Magnitude = $unsigned;

            fn magnitude(self) -> $unsigned {
                self.unsigned_abs()
            }
        }
    };
}

impl_integer!(i32 => u32);
impl_integer!(i64 => u64);

// ── Pairwise operations ───────────────────────────────────────────────────────

/// Iterative Euclidean GCD over magnitudes.  `gcd(0, 0) == 0`.
fn gcd_magnitude<M: Magnitude>(mut a: M, mut b: M) -> M {
    while b != M::ZERO {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Checked LCM over magnitudes.  Either input `0` gives `Ok(0)`.
///
/// Uses `(a / gcd(a, b)) * b` so the division happens first; the final
/// multiplication is still checked.
fn lcm_magnitude<M: Magnitude>(a: M, b: M) -> Result<M, MathError> {
    if a == M::ZERO || b == M::ZERO {
        return Ok(M::ZERO);
    }

    let reduced = a / gcd_magnitude(a, b);
    reduced.checked_mul(b).ok_or(MathError::Overflow {
        a: a.widen(),
        b: b.widen(),
    })
}

/// Greatest common divisor of `|x|` and `|y|`.
pub fn gcd<T: Integer>(x: T, y: T) -> T::Magnitude {
    gcd_magnitude(x.magnitude(), y.magnitude())
}

/// Least common multiple of `|x|` and `|y|`; `0` when either input is `0`.
///
/// # Errors
/// [`MathError::Overflow`] if the result does not fit the magnitude type.
pub fn lcm<T: Integer>(x: T, y: T) -> Result<T::Magnitude, MathError> {
    lcm_magnitude(x.magnitude(), y.magnitude())
}

// ── Slice folds ───────────────────────────────────────────────────────────────

/// GCD of every value in `values`, folded left to right.
///
/// Returns `0` for an empty slice.  Stops as soon as the running result is `1`,
/// since no further value can lower it.
pub fn gcd_of<T: Integer>(values: &[T]) -> T::Magnitude {
    let mut iter = values.iter().map(|v| v.magnitude());
    let Some(mut acc) = iter.next() else {
        return <T::Magnitude as Magnitude>::ZERO;
    };
    for v in iter {
        if acc == <T::Magnitude as Magnitude>::ONE {
            break;
        }
        acc = gcd_magnitude(v, acc);
    }
    acc
}

/// LCM of every value in `values`, folded left to right.
///
/// Returns `Ok(0)` for an empty slice.  A `0` anywhere makes the result `0`, at
/// which point the fold stops.
///
/// # Errors
/// [`MathError::Overflow`] on the first pairwise overflow.
pub fn lcm_of<T: Integer>(values: &[T]) -> Result<T::Magnitude, MathError> {
    let mut iter = values.iter().map(|v| v.magnitude());
    let Some(mut acc) = iter.next() else {
        return Ok(<T::Magnitude as Magnitude>::ZERO);
    };
    for v in iter {
        if acc == <T::Magnitude as Magnitude>::ZERO {
            break;
        }
        acc = lcm_magnitude(v, acc)?;
    }
    Ok(acc)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
