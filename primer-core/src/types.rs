//! Core types for the sales exercises
//!
//! Money is held as `Decimal` so revenue sums are exact.

use crate::{input::TokenReader, Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;

/// Book identifier, the grouping key for transactions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    /// Create new ISBN
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One sales transaction, or the running total of several
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Book sold
    pub isbn: Isbn,

    /// Copies sold
    pub units: u32,

    /// Total revenue for those copies
    pub revenue: Decimal,
}

impl SalesRecord {
    /// Create a record from its totals
    pub fn new(isbn: Isbn, units: u32, revenue: Decimal) -> Self {
        Self {
            isbn,
            units,
            revenue,
        }
    }

    /// Create a record from a sale of `units` copies at `price` each
    pub fn from_sale(isbn: Isbn, units: u32, price: Decimal) -> Result<Self> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(Error::InvalidInput(format!(
                "negative price {} for {}",
                price, isbn
            )));
        }

        let revenue = price
            .checked_mul(Decimal::from(units))
            .ok_or_else(|| Error::Overflow(isbn.to_string()))?;

        Ok(Self::new(isbn, units, revenue))
    }

    /// Read one `ISBN UNITS PRICE` transaction
    ///
    /// Returns `Ok(None)` when input ends before an ISBN. Input that ends
    /// after the ISBN is a truncated record and reported as an error.
    pub fn read<R: BufRead>(reader: &mut TokenReader<R>) -> Result<Option<Self>> {
        let Some(isbn) = reader.next_token()? else {
            return Ok(None);
        };
        let units: u32 = reader.expect_parsed("units sold")?;
        let price: Decimal = reader.expect_parsed("price")?;

        Self::from_sale(Isbn::new(isbn), units, price).map(Some)
    }

    /// Add another transaction for the same book into this one
    ///
    /// Leaves `self` unchanged on error.
    pub fn combine(&mut self, other: &SalesRecord) -> Result<&mut Self> {
        if self.isbn != other.isbn {
            return Err(Error::IsbnMismatch {
                left: self.isbn.to_string(),
                right: other.isbn.to_string(),
            });
        }

        let units = self
            .units
            .checked_add(other.units)
            .ok_or_else(|| Error::Overflow(self.isbn.to_string()))?;
        let revenue = self
            .revenue
            .checked_add(other.revenue)
            .ok_or_else(|| Error::Overflow(self.isbn.to_string()))?;

        self.units = units;
        self.revenue = revenue;
        Ok(self)
    }

    /// Average price per copy, `None` when nothing was sold
    pub fn avg_price(&self) -> Option<Decimal> {
        if self.units == 0 {
            None
        } else {
            Some(self.revenue / Decimal::from(self.units))
        }
    }
}

impl fmt::Display for SalesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.isbn, self.units, self.revenue)?;
        match self.avg_price() {
            Some(avg) => write!(f, "{}", avg),
            None => write!(f, "(no sales)"),
        }
    }
}
