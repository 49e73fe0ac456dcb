//! # Vertical Distribution of Seismic Forces
//!
//! Allocates the base shear over the levels above the base in proportion to
//! wx·hx^k, then accumulates story shear from the roof down.
//!
//! ## Base Level
//!
//! The base (hx = 0) carries no lateral force and its weight is excluded
//! from the effective seismic weight and from Σwx·hx^k.
//!
//! ## Example
//!
//! ```rust
//! use elf_core::seismic::distribution::{distribute, Level};
//!
//! let levels = vec![
//!     Level::new("Base/FL1", 0.0, 12.0),
//!     Level::new("FL 2", 3.5, 12.0),
//!     Level::new("Roof", 7.0, 12.0),
//! ];
//! let dist = distribute(levels, 0.05, 1.0);
//!
//! assert_eq!(dist.w_effective, 24.0);
//! assert!((dist.base_shear - 1.2).abs() < 1e-12);
//! assert!((dist.levels[0].vx - 1.2).abs() < 1e-12);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

/// One floor level of the distribution, base first in every sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Level label ("Base/FL1", "FL 2", ..., "Roof")
    pub name: String,

    /// Height above the base hx (m)
    pub hx: f64,

    /// Seismic weight at the level wx (tf)
    pub wx: f64,

    /// wx·hx^k
    pub wx_hx_k: f64,

    /// Vertical distribution factor Cvx
    pub cvx: f64,

    /// Lateral force Fx (tf)
    pub fx: f64,

    /// Story shear Vx (tf)
    pub vx: f64,
}

impl Level {
    /// New level with force and shear fields zeroed
    pub fn new(name: impl Into<String>, hx: f64, wx: f64) -> Self {
        Level {
            name: name.into(),
            hx,
            wx,
            wx_hx_k: 0.0,
            cvx: 0.0,
            fx: 0.0,
            vx: 0.0,
        }
    }

    /// True for levels that participate in the distribution (hx > 0)
    pub fn is_above_base(&self) -> bool {
        self.hx > 0.0
    }
}

/// Levels with forces and shears populated, plus the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalDistribution {
    /// Levels, base first
    pub levels: Vec<Level>,

    /// Effective seismic weight W (tf), base excluded
    pub w_effective: f64,

    /// Base shear V = Cs·W (tf)
    pub base_shear: f64,

    /// Σwx·hx^k over levels above the base
    pub sum_w_h_k: f64,
}

/// Distribute base shear `cs`·W over `levels` (ordered base-to-roof) with
/// exponent `k`.
///
/// Weights are not validated here; a negative wx yields a signed force.
pub fn distribute(mut levels: Vec<Level>, cs: f64, k: f64) -> VerticalDistribution {
    let w_effective: f64 = levels
        .iter()
        .filter(|l| l.is_above_base())
        .map(|l| l.wx)
        .sum();
    let base_shear = cs * w_effective;

    let mut sum_w_h_k = 0.0;
    for level in levels.iter_mut().filter(|l| l.is_above_base()) {
        level.wx_hx_k = level.wx * level.hx.powf(k);
        sum_w_h_k += level.wx_hx_k;
    }

    for level in levels.iter_mut() {
        if level.is_above_base() && sum_w_h_k != 0.0 {
            level.cvx = level.wx_hx_k / sum_w_h_k;
            level.fx = level.cvx * base_shear;
        } else {
            level.cvx = 0.0;
            level.fx = 0.0;
        }
    }

    // Roof down: each story resists every force applied at or above it
    let mut cumulative = 0.0;
    for level in levels.iter_mut().rev() {
        cumulative += level.fx;
        level.vx = cumulative;
    }

    debug!(
        "Distributed V = {:.4} over {} levels (W = {:.4}, sum wx*hx^k = {:.4})",
        base_shear,
        levels.len(),
        w_effective,
        sum_w_h_k
    );

    VerticalDistribution {
        levels,
        w_effective,
        base_shear,
        sum_w_h_k,
    }
}
