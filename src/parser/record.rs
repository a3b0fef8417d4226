//! Transaction record model.
//!
//! Products and regions are closed enumerations. Month keys truncate a
//! calendar date to year-month granularity and order chronologically.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category sold in a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Product {
    Laptop,
    Mouse,
    Monitor,
    Keyboard,
}

impl Product {
    /// Every product, in catalogue order
    pub const ALL: [Product; 4] = [
        Product::Laptop,
        Product::Mouse,
        Product::Monitor,
        Product::Keyboard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Laptop => "Laptop",
            Self::Mouse => "Mouse",
            Self::Monitor => "Monitor",
            Self::Keyboard => "Keyboard",
        }
    }

    /// Look up a product by label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sales region of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// Every region, in catalogue order
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }

    /// Look up a region by label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single sales event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar day of the sale
    pub date: NaiveDate,

    pub product: Product,

    pub region: Region,

    /// Sale amount, never negative
    pub sales: f64,

    /// Profit on the sale, may be negative
    pub profit: f64,
}

impl TransactionRecord {
    pub fn new(date: NaiveDate, product: Product, region: Region, sales: f64, profit: f64) -> Self {
        Self {
            date,
            product,
            region,
            sales,
            profit,
        }
    }

    /// Check the numeric invariants of the record
    ///
    /// # Errors
    /// A human-readable reason when `sales` is negative or either amount
    /// is not finite.
    pub fn validate(&self) -> Result<(), String> {
        if !self.sales.is_finite() {
            return Err(format!("sales must be a finite number, got {}", self.sales));
        }
        if self.sales < 0.0 {
            return Err(format!("sales must not be negative, got {}", self.sales));
        }
        if !self.profit.is_finite() {
            return Err(format!("profit must be a finite number, got {}", self.profit));
        }
        Ok(())
    }

    /// Month this record is grouped under for trend aggregation
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Calendar month used as a grouping key
///
/// Ordering is chronological: by year, then by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Build a key, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Truncate a date to its month
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| format!("month key must look like YYYY-MM, got '{}'", s))?;

        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in month key '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month in month key '{}'", s))?;

        Self::new(year, month).ok_or_else(|| format!("month out of range in '{}'", s))
    }
}

impl TryFrom<String> for MonthKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}
