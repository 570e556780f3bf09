//! Closed-form fixed income prices.

pub mod bond;

pub use bond::{coupon_bond_price, zero_coupon_bond_price};
