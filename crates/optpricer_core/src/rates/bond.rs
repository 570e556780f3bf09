//! Bond prices by discounting cash flows at a flat yield to maturity.
//!
//! Yields are periodically compounded: a yield `y` with `m` payments per
//! year discounts period `i` by `(1 + y/m)^i`.

use crate::types::{DomainError, PricingError};

/// Price of a zero-coupon bond paying `face` after `periods` years.
///
/// ```text
/// P = F / (1 + y)^n
/// ```
///
/// # Errors
///
/// - [`DomainError::InvalidParameter`] if an input is not finite or
///   `1 + ytm <= 0`
/// - [`PricingError::NumericalDegeneracy`] if the discounted value
///   overflows
///
/// # Examples
///
/// ```rust
/// use optpricer_core::rates::zero_coupon_bond_price;
///
/// let price = zero_coupon_bond_price(2, 0.05, 100.0).unwrap();
/// assert!((price - 100.0 / 1.1025).abs() < 1e-12);
/// ```
pub fn zero_coupon_bond_price(periods: u32, ytm: f64, face: f64) -> Result<f64, PricingError> {
    check_finite("face", face)?;
    let base = discount_base(ytm, 1)?;
    let price = face * base.powf(-f64::from(periods));
    if !price.is_finite() {
        return Err(PricingError::NumericalDegeneracy(format!(
            "zero-coupon price is {} after {} periods at {}",
            price, periods, ytm
        )));
    }
    Ok(price)
}

/// Price of a fixed-coupon bond.
///
/// ```text
/// P = Σ_{i=1}^{n·m} (c·F/m) / (1 + y/m)^i  +  F / (1 + y/m)^{n·m}
/// ```
///
/// # Arguments
///
/// * `years` - Years to maturity (n)
/// * `coupon_rate` - Annual coupon rate (c)
/// * `frequency` - Coupon payments per year (m)
/// * `ytm` - Annual yield to maturity (y)
/// * `face` - Face value (F)
///
/// # Errors
///
/// [`DomainError::InvalidParameter`] if `frequency` is zero, an input is
/// not finite, `years · frequency` does not fit in `u32`, or
/// `1 + ytm/frequency <= 0`.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::rates::coupon_bond_price;
///
/// // Coupon equal to yield prices at par
/// let price = coupon_bond_price(10, 0.06, 2, 0.06, 1000.0).unwrap();
/// assert!((price - 1000.0).abs() < 1e-9);
/// ```
pub fn coupon_bond_price(
    years: u32,
    coupon_rate: f64,
    frequency: u32,
    ytm: f64,
    face: f64,
) -> Result<f64, PricingError> {
    if frequency == 0 {
        return Err(DomainError::invalid("frequency", "must be at least 1").into());
    }
    check_finite("coupon_rate", coupon_rate)?;
    check_finite("face", face)?;
    let base = discount_base(ytm, frequency)?;

    let m = f64::from(frequency);
    let n_periods = years.checked_mul(frequency).ok_or_else(|| {
        DomainError::invalid(
            "frequency",
            format!("{} years at {} payments per year overflows the period count", years, frequency),
        )
    })?;
    let coupon = coupon_rate * face / m;

    let mut price = 0.0;
    let mut discount = 1.0;
    for _ in 0..n_periods {
        discount /= base;
        price += coupon * discount;
    }
    price += face * discount;

    Ok(price)
}

fn check_finite(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::invalid(name, format!("must be finite, got {}", value)).into())
    }
}

fn discount_base(ytm: f64, frequency: u32) -> Result<f64, PricingError> {
    check_finite("ytm", ytm)?;
    let base = 1.0 + ytm / f64::from(frequency);
    if base <= 0.0 {
        return Err(DomainError::invalid(
            "ytm",
            format!("per-period yield must exceed -100%, got {}", ytm),
        )
        .into());
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_coupon_zero_periods_is_face() {
        assert_eq!(zero_coupon_bond_price(0, 0.07, 100.0).unwrap(), 100.0);
    }

    #[test]
    fn test_zero_coupon_known_value() {
        let price = zero_coupon_bond_price(10, 0.05, 1000.0).unwrap();
        assert_relative_eq!(price, 1000.0 / 1.05_f64.powi(10), epsilon = 1e-9);
        assert_relative_eq!(price, 613.913_253_540_759, epsilon = 1e-6);
    }

    #[test]
    fn test_coupon_bond_at_par() {
        let price = coupon_bond_price(5, 0.04, 4, 0.04, 100.0).unwrap();
        assert_relative_eq!(price, 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_coupon_bond_premium_and_discount() {
        let premium = coupon_bond_price(10, 0.08, 2, 0.06, 100.0).unwrap();
        let discount = coupon_bond_price(10, 0.04, 2, 0.06, 100.0).unwrap();
        assert!(premium > 100.0);
        assert!(discount < 100.0);
    }

    #[test]
    fn test_coupon_bond_matches_explicit_sum() {
        let (n, c, m, y, f) = (3u32, 0.05, 2u32, 0.07, 1000.0);
        let per = 1.0 + y / f64::from(m);
        let mut expected = 0.0;
        for i in 1..=(n * m) {
            expected += (c * f / f64::from(m)) / per.powi(i as i32);
        }
        expected += f / per.powi((n * m) as i32);

        assert_relative_eq!(
            coupon_bond_price(n, c, m, y, f).unwrap(),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_coupon_rate_bond_equals_zero_coupon() {
        let coupon = coupon_bond_price(7, 0.0, 1, 0.03, 100.0).unwrap();
        let zero = zero_coupon_bond_price(7, 0.03, 100.0).unwrap();
        assert_relative_eq!(coupon, zero, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_coupon_long_horizon_discounts_towards_zero() {
        let far = zero_coupon_bond_price(u32::MAX, 0.05, 100.0).unwrap();
        assert!((0.0..1e-12).contains(&far), "price = {}", far);

        let past_i32 = zero_coupon_bond_price(1 << 31, 0.05, 100.0).unwrap();
        assert!((0.0..1e-12).contains(&past_i32), "price = {}", past_i32);

        assert_eq!(zero_coupon_bond_price(u32::MAX, 0.0, 100.0).unwrap(), 100.0);
    }

    #[test]
    fn test_zero_coupon_overflow_reports_degeneracy() {
        let err = zero_coupon_bond_price(u32::MAX, -0.5, 100.0).unwrap_err();
        assert!(matches!(err, PricingError::NumericalDegeneracy(_)));
    }

    #[test]
    fn test_coupon_period_count_overflow_rejected() {
        let err = coupon_bond_price(u32::MAX, 0.05, 2, 0.05, 100.0).unwrap_err();
        assert!(matches!(
            err,
            PricingError::Domain(DomainError::InvalidParameter { name: "frequency", .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(coupon_bond_price(5, 0.05, 0, 0.05, 100.0).unwrap_err().is_domain());
        assert!(coupon_bond_price(5, 0.05, 2, -3.0, 100.0).is_err());
        assert!(zero_coupon_bond_price(5, -1.0, 100.0).is_err());
        assert!(zero_coupon_bond_price(5, f64::NAN, 100.0).is_err());
        assert!(zero_coupon_bond_price(5, 0.05, f64::INFINITY).is_err());
    }
}
