//! Exact money amounts.
//!
//! Prices are held as integer centavos so that totals never drift. The
//! persisted form is a plain JSON number in reais (`70`, `70.5`), matching
//! what the storefront has always written.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TypeError, TypeResult};

/// Largest whole-reais amount a [`Price`] may hold. Below this bound a
/// decimal amount survives the trip through `f64` with centavo precision.
const MAX_REAIS: u64 = 1_000_000_000_000;

/// A non-negative amount of money in centavos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// The zero amount.
    pub const ZERO: Price = Price(0);

    /// Largest amount that can be persisted and read back unchanged.
    pub const MAX: Price = Price(MAX_REAIS * 100);

    /// Create a price from whole centavos.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create a price from whole reais.
    pub const fn from_reais(reais: u64) -> Self {
        Self(reais * 100)
    }

    /// Parse a decimal reais amount, rounding to the nearest centavo.
    pub fn from_decimal(reais: f64) -> TypeResult<Self> {
        if !reais.is_finite() || reais < 0.0 || reais > MAX_REAIS as f64 {
            return Err(TypeError::InvalidPrice(reais.to_string()));
        }
        Ok(Self((reais * 100.0).round() as u64))
    }

    /// Exact whole-reais amount, bounded by [`Price::MAX`].
    pub fn from_whole_reais(reais: u64) -> TypeResult<Self> {
        if reais > MAX_REAIS {
            return Err(TypeError::InvalidPrice(reais.to_string()));
        }
        Ok(Self(reais * 100))
    }

    /// Returns `Ok` if this amount can be persisted and read back unchanged.
    pub fn check_persistable(self) -> TypeResult<Self> {
        if self > Self::MAX {
            return Err(TypeError::InvalidPrice(format!(
                "{self} exceeds the maximum of {}",
                Self::MAX
            )));
        }
        Ok(self)
    }

    /// Amount in centavos.
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Amount in reais as a float, for display and serialization only.
    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity. Returns `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(quantity)).map(Self)
    }

    /// Add two prices. Returns `None` on overflow.
    pub fn checked_add(self, other: Price) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_decimal())
        }
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative amount in reais")
    }

    fn visit_u64<E: de::Error>(self, reais: u64) -> Result<Price, E> {
        Price::from_whole_reais(reais).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, reais: i64) -> Result<Price, E> {
        let reais = u64::try_from(reais)
            .map_err(|_| E::custom(TypeError::InvalidPrice(reais.to_string())))?;
        self.visit_u64(reais)
    }

    fn visit_f64<E: de::Error>(self, reais: f64) -> Result<Price, E> {
        Price::from_decimal(reais).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}
