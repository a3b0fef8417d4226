//! Seeded sample data generator.
//!
//! Draws dates, products, regions and amounts uniformly at random.
//! The same settings always produce the same records.

use super::RecordSource;
use crate::parser::{Product, Region, TransactionRecord};
use crate::utils::config::{
    DEFAULT_DAY_SPAN, DEFAULT_ROW_COUNT, DEFAULT_SEED, DEFAULT_START_DATE, PROFIT_RANGE,
    SALES_RANGE,
};
use crate::utils::error::ParseError;
use chrono::{Days, NaiveDate};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Sample generator settings
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGenerator {
    /// Random seed for reproducibility
    pub seed: u64,

    /// Number of records to generate
    pub rows: usize,

    /// First day dates are drawn from
    pub start_date: NaiveDate,

    /// Number of consecutive days dates are drawn from
    pub day_span: u32,

    /// Half-open range for sales amounts
    pub sales_range: (f64, f64),

    /// Half-open range for profit amounts
    pub profit_range: (f64, f64),
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rows: DEFAULT_ROW_COUNT,
            start_date: DEFAULT_START_DATE,
            day_span: DEFAULT_DAY_SPAN,
            sales_range: SALES_RANGE,
            profit_range: PROFIT_RANGE,
        }
    }
}

impl SampleGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Check the settings before drawing anything
    ///
    /// # Errors
    /// * `ParseError::InvalidSettings` - empty day span, empty or
    ///   non-finite ranges, or a sales range reaching below zero
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.day_span == 0 {
            return Err(ParseError::InvalidSettings("day span must be at least 1".to_string()));
        }

        for (name, (lo, hi)) in [("sales", self.sales_range), ("profit", self.profit_range)] {
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(ParseError::InvalidSettings(format!(
                    "{} range must be finite and non-empty, got [{}, {})",
                    name, lo, hi
                )));
            }
        }

        if self.sales_range.0 < 0.0 {
            return Err(ParseError::InvalidSettings(
                "sales range must not include negative amounts".to_string(),
            ));
        }

        let last_offset = u64::from(self.day_span - 1);
        if self.start_date.checked_add_days(Days::new(last_offset)).is_none() {
            return Err(ParseError::InvalidSettings(
                "date range overflows the calendar".to_string(),
            ));
        }

        Ok(())
    }

    /// Generate the records, sorted by date
    ///
    /// **Public** - main entry point for sample data
    pub fn generate(&self) -> Result<Vec<TransactionRecord>, ParseError> {
        self.validate()?;

        info!("Generating {} sample records (seed {})", self.rows, self.seed);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut records = Vec::with_capacity(self.rows);

        for _ in 0..self.rows {
            records.push(self.draw_record(&mut rng)?);
        }

        // Stable: same-day records keep their draw order
        records.sort_by_key(|r| r.date);

        debug!("Generated {} records", records.len());

        Ok(records)
    }

    /// Draw one record
    ///
    /// **Private** - internal helper for generate
    fn draw_record(&self, rng: &mut StdRng) -> Result<TransactionRecord, ParseError> {
        let offset = rng.random_range(0..self.day_span);
        let date = self
            .start_date
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| {
                ParseError::InvalidSettings("date range overflows the calendar".to_string())
            })?;

        let product = Product::ALL[rng.random_range(0..Product::ALL.len())];
        let region = Region::ALL[rng.random_range(0..Region::ALL.len())];
        let sales = rng.random_range(self.sales_range.0..self.sales_range.1);
        let profit = rng.random_range(self.profit_range.0..self.profit_range.1);

        Ok(TransactionRecord::new(date, product, region, sales, profit))
    }
}

impl RecordSource for SampleGenerator {
    fn load_records(&self) -> Result<Vec<TransactionRecord>, ParseError> {
        self.generate()
    }

    fn describe(&self) -> String {
        format!("sample generator (seed {}, {} rows)", self.seed, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_records() {
        let a = SampleGenerator::new().with_rows(50).generate().unwrap();
        let b = SampleGenerator::new().with_rows(50).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_differs() {
        let a = SampleGenerator::new().with_seed(1).with_rows(50).generate().unwrap();
        let b = SampleGenerator::new().with_seed(2).with_rows(50).generate().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_records_in_bounds_and_sorted() {
        let generator = SampleGenerator::new();
        let records = generator.generate().unwrap();
        let last_day = generator.start_date + Days::new(u64::from(generator.day_span - 1));

        assert_eq!(records.len(), DEFAULT_ROW_COUNT);
        assert!(records.windows(2).all(|w| w[0].date <= w[1].date));

        for record in &records {
            assert!(record.validate().is_ok());
            assert!(record.date >= generator.start_date && record.date <= last_day);
            assert!(record.sales >= SALES_RANGE.0 && record.sales < SALES_RANGE.1);
            assert!(record.profit >= PROFIT_RANGE.0 && record.profit < PROFIT_RANGE.1);
        }
    }

    #[test]
    fn test_default_start_date() {
        let generator = SampleGenerator::default();
        assert_eq!(generator.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(generator.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_zero_rows_is_empty_store() {
        let records = SampleGenerator::new().with_rows(0).generate().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let generator = SampleGenerator {
            sales_range: (500.0, 100.0),
            ..Default::default()
        };
        assert!(generator.generate().is_err());

        let generator = SampleGenerator {
            sales_range: (-10.0, 100.0),
            ..Default::default()
        };
        assert!(generator.validate().is_err());

        let generator = SampleGenerator {
            day_span: 0,
            ..Default::default()
        };
        assert!(generator.validate().is_err());
    }
}
