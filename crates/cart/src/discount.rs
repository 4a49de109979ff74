//! Named discount codes mapping to flat fractional rates.
//!
//! The table is fixed once built; there is no runtime mutation.

use std::collections::HashMap;

use thiserror::Error;

use crate::error::{CartError, CartResult};

/// A rate outside `[0, 1]` was supplied when building a policy.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("discount rate for {code} must be between 0 and 1, got {rate}")]
pub struct DiscountRateError {
    pub code: String,
    pub rate: f64,
}

/// Static lookup of discount codes to fractional rates (0.10 = 10% off).
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountPolicy {
    rates: HashMap<String, f64>,
}

impl DiscountPolicy {
    /// `DISCOUNT10` and `DISCOUNT20`.
    pub fn standard() -> Self {
        Self {
            rates: HashMap::from([
                ("DISCOUNT10".to_string(), 0.10),
                ("DISCOUNT20".to_string(), 0.20),
            ]),
        }
    }

    pub fn new<I, S>(rates: I) -> Result<Self, DiscountRateError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = HashMap::new();
        for (code, rate) in rates {
            let code = code.into();
            if !(0.0..=1.0).contains(&rate) {
                return Err(DiscountRateError { code, rate });
            }
            table.insert(code, rate);
        }
        Ok(Self { rates: table })
    }

    pub fn rate(&self, code: &str) -> CartResult<f64> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| CartError::InvalidDiscountCode {
                code: code.to_string(),
            })
    }

    /// Apply `code` to the whole-cart `total`. No code means no discount.
    pub fn apply(&self, total: f64, code: Option<&str>) -> CartResult<f64> {
        match code {
            None => Ok(total),
            Some(code) => {
                let rate = self.rate(code)?;
                Ok(total - total * rate)
            }
        }
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
