//! # Piecewise-Linear Table Lookup
//!
//! Linear interpolation over a breakpoint table with flat extrapolation:
//! values below the first breakpoint take the first ordinate, values above
//! the last breakpoint take the last ordinate.

use crate::errors::{CalcError, CalcResult};

/// Interpolate `ys` at `x` over strictly increasing breakpoints `xs`.
///
/// # Errors
///
/// Returns `InvalidInput` when the table has fewer than two points, when
/// `xs` and `ys` differ in length, when `xs` is not strictly increasing, or
/// when `x` is not finite.
///
/// # Example
///
/// ```rust
/// use elf_core::seismic::interpolation::interpolate;
///
/// let xs = [0.25, 0.50, 0.75];
/// let ys = [1.6, 1.4, 1.2];
///
/// assert_eq!(interpolate(0.10, &xs, &ys).unwrap(), 1.6);
/// assert_eq!(interpolate(0.50, &xs, &ys).unwrap(), 1.4);
/// assert!((interpolate(0.625, &xs, &ys).unwrap() - 1.3).abs() < 1e-12);
/// ```
pub fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> CalcResult<f64> {
    validate_table(xs, ys)?;
    if !x.is_finite() {
        return Err(CalcError::invalid_input(
            "x",
            x.to_string(),
            "Interpolation argument must be finite",
        ));
    }

    let last = xs.len() - 1;
    if x <= xs[0] {
        return Ok(ys[0]);
    }
    if x >= xs[last] {
        return Ok(ys[last]);
    }

    // First breakpoint strictly above x closes the bracketing interval
    let upper = xs.partition_point(|&bp| bp <= x);
    let lower = upper - 1;
    let (x0, x1) = (xs[lower], xs[upper]);
    let (y0, y1) = (ys[lower], ys[upper]);

    Ok(y0 + (x - x0) * (y1 - y0) / (x1 - x0))
}

fn validate_table(xs: &[f64], ys: &[f64]) -> CalcResult<()> {
    if xs.len() < 2 {
        return Err(CalcError::invalid_input(
            "xs",
            format!("{:?}", xs),
            "Interpolation table needs at least 2 breakpoints",
        ));
    }
    if xs.len() != ys.len() {
        return Err(CalcError::invalid_input(
            "ys",
            format!("{} values for {} breakpoints", ys.len(), xs.len()),
            "Table ordinates must match breakpoints one-to-one",
        ));
    }
    if xs.windows(2).any(|pair| !(pair[1] > pair[0])) {
        return Err(CalcError::invalid_input(
            "xs",
            format!("{:?}", xs),
            "Breakpoints must be strictly increasing",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const XS: [f64; 5] = [0.1, 0.2, 0.3, 0.4, 0.5];
    const YS: [f64; 5] = [2.4, 2.0, 1.8, 1.6, 1.5];

    #[test]
    fn test_clamps_below_first_breakpoint() {
        assert_eq!(interpolate(0.0, &XS, &YS).unwrap(), 2.4);
        assert_eq!(interpolate(-3.0, &XS, &YS).unwrap(), 2.4);
    }

    #[test]
    fn test_clamps_above_last_breakpoint() {
        assert_eq!(interpolate(0.5, &XS, &YS).unwrap(), 1.5);
        assert_eq!(interpolate(9.0, &XS, &YS).unwrap(), 1.5);
    }

    #[test]
    fn test_exact_breakpoints() {
        for (x, y) in XS.iter().zip(YS.iter()) {
            assert!((interpolate(*x, &XS, &YS).unwrap() - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_midpoint() {
        // Halfway between 2.0 and 1.8
        let y = interpolate(0.25, &XS, &YS).unwrap();
        assert!((y - 1.9).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_short_table() {
        let err = interpolate(0.3, &[0.1], &[1.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_non_increasing_breakpoints() {
        assert!(interpolate(0.3, &[0.1, 0.1, 0.5], &[1.0, 2.0, 3.0]).is_err());
        assert!(interpolate(0.3, &[0.5, 0.2], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert!(interpolate(0.3, &[0.1, 0.5], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_rejects_nan_argument() {
        assert!(interpolate(f64::NAN, &XS, &YS).is_err());
    }
}
