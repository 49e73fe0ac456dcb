//! # Unit Types
//!
//! Type-safe wrappers for the units the ELF procedure works in. They are thin
//! `f64` newtypes that serialize as plain numbers.
//!
//! ## Metric Units
//!
//! The analysis follows Thai practice (DPT 1301/1302):
//! - Length: meters (m)
//! - Force: tonne-force (tf), optionally reported in kilonewtons (kN)
//! - Distributed load: tonne-force per meter (tf/m)
//!
//! ## Example
//!
//! ```rust
//! use elf_core::units::{Kilonewtons, Meters, TonneForce, TonnesPerMeter};
//!
//! let weight = TonnesPerMeter(1.5) * Meters(12.0);
//! assert_eq!(weight, TonneForce(18.0));
//!
//! let kn: Kilonewtons = TonneForce(1.0).into();
//! assert!((kn.0 - 9.80665).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravity, kN per tonne-force
pub const KN_PER_TONNE_FORCE: f64 = 9.80665;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// ============================================================================
// Force Units
// ============================================================================

/// Force in tonne-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonneForce(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<TonneForce> for Kilonewtons {
    fn from(tf: TonneForce) -> Self {
        Kilonewtons(tf.0 * KN_PER_TONNE_FORCE)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed load in tonne-force per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonnesPerMeter(pub f64);

/// Line load times tributary length gives the level weight
impl Mul<Meters> for TonnesPerMeter {
    type Output = TonneForce;
    fn mul(self, rhs: Meters) -> TonneForce {
        TonneForce(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|v| v.0).sum())
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(TonneForce);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(TonnesPerMeter);
