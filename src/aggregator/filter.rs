//! Filter stage: narrow the record store to a region/product selection.

use crate::parser::{Product, Region, TransactionRecord};
use log::{debug, warn};
use std::collections::BTreeSet;

/// Regions and products chosen by the user
///
/// An empty set on either side selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub regions: BTreeSet<Region>,
    pub products: BTreeSet<Product>,
}

impl FilterSelection {
    pub fn new(
        regions: impl IntoIterator<Item = Region>,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        Self {
            regions: regions.into_iter().collect(),
            products: products.into_iter().collect(),
        }
    }

    /// Select every region and every product
    pub fn all() -> Self {
        Self::new(Region::ALL, Product::ALL)
    }

    /// Build a selection from user-supplied labels
    ///
    /// Labels outside the known enumerations match nothing; they are
    /// logged and dropped rather than treated as errors.
    pub fn from_labels<'a>(
        region_labels: impl IntoIterator<Item = &'a str>,
        product_labels: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let regions = region_labels
            .into_iter()
            .filter_map(|label| {
                let region = Region::from_label(label);
                if region.is_none() {
                    warn!("Unknown region '{}' matches no records", label);
                }
                region
            })
            .collect();

        let products = product_labels
            .into_iter()
            .filter_map(|label| {
                let product = Product::from_label(label);
                if product.is_none() {
                    warn!("Unknown product '{}' matches no records", label);
                }
                product
            })
            .collect();

        Self { regions, products }
    }

    /// True if the record's region AND product are both selected
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        self.regions.contains(&record.region) && self.products.contains(&record.product)
    }

    /// True if the selection can match no record at all
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() || self.products.is_empty()
    }
}

/// Apply a selection to the record store
///
/// **Public** - main entry point for the filter stage
///
/// The result preserves the relative order of the input.
pub fn apply_filter<'a>(
    records: &'a [TransactionRecord],
    selection: &FilterSelection,
) -> Vec<&'a TransactionRecord> {
    if selection.is_empty() {
        debug!("Empty selection, no records pass the filter");
        return Vec::new();
    }

    let filtered: Vec<&TransactionRecord> = records
        .iter()
        .filter(|r| selection.matches(r))
        .collect();

    debug!("Filter kept {} of {} records", filtered.len(), records.len());

    filtered
}
