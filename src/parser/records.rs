//! Record file parser.
//!
//! Parses raw JSON record files into validated transaction records.
//! Every row is checked individually so a bad row is reported by index
//! instead of being dropped.

use super::record::{Product, Region, TransactionRecord};
use crate::utils::config::RECORD_LIST_FIELD_NAMES;
use crate::utils::error::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use serde::Deserialize;

/// Raw record row as it appears in a JSON file
#[derive(Debug, Clone, Deserialize)]
struct RawRecord {
    #[serde(alias = "Date")]
    date: String,

    #[serde(alias = "Product")]
    product: String,

    #[serde(alias = "Region")]
    region: String,

    #[serde(alias = "Sales")]
    sales: serde_json::Value,

    #[serde(alias = "Profit")]
    profit: serde_json::Value,
}

/// Parse a JSON document into transaction records
///
/// **Public** - main entry point for record parsing
///
/// Accepts either a top-level array of rows or an object holding the
/// array under one of the known list field names.
///
/// # Errors
/// * `ParseError::InvalidRecord` - a row is missing a field, has an unknown
///   label, an unparseable date, or an invalid amount
pub fn parse_records(raw: &serde_json::Value) -> Result<Vec<TransactionRecord>, ParseError> {
    let rows = extract_rows(raw)?;
    debug!("Parsing {} raw record rows", rows.len());

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            parse_row(row).map_err(|reason| ParseError::InvalidRecord { index, reason })
        })
        .collect()
}

/// Locate the array of rows inside the document
///
/// **Private** - internal helper for parse_records
fn extract_rows(raw: &serde_json::Value) -> Result<&Vec<serde_json::Value>, ParseError> {
    match raw {
        serde_json::Value::Array(rows) => Ok(rows),
        serde_json::Value::Object(obj) => RECORD_LIST_FIELD_NAMES
            .iter()
            .find_map(|field| obj.get(*field).and_then(|v| v.as_array()))
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "expected an array of records or an object with one of: {}",
                    RECORD_LIST_FIELD_NAMES.join(", ")
                ))
            }),
        _ => Err(ParseError::InvalidFormat(
            "record document must be a JSON array or object".to_string(),
        )),
    }
}

/// Parse and validate one row
///
/// **Private** - internal helper for parse_records
fn parse_row(row: &serde_json::Value) -> Result<TransactionRecord, String> {
    let raw: RawRecord = serde_json::from_value(row.clone()).map_err(|e| e.to_string())?;

    let date = parse_date(&raw.date)?;
    let product = Product::from_label(&raw.product)
        .ok_or_else(|| format!("unknown product '{}'", raw.product))?;
    let region = Region::from_label(&raw.region)
        .ok_or_else(|| format!("unknown region '{}'", raw.region))?;
    let sales = parse_json_f64(&raw.sales).map_err(|e| format!("sales: {}", e))?;
    let profit = parse_json_f64(&raw.profit).map_err(|e| format!("profit: {}", e))?;

    let record = TransactionRecord::new(date, product, region, sales, profit);
    record.validate()?;
    Ok(record)
}

/// Parse a calendar date
///
/// Accepts `YYYY-MM-DD`, naive timestamps (`YYYY-MM-DDTHH:MM:SS`) and
/// RFC 3339 timestamps; timestamps are truncated to their date.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }

    Err(format!("unparseable date '{}'", value))
}

/// Parse a numeric amount from a JSON number or numeric string
///
/// **Private** - internal helper
fn parse_json_f64(value: &serde_json::Value) -> Result<f64, String> {
    match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("number out of range: {}", n)),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("not a number: '{}'", s)),
        other => Err(format!("expected a number, got {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_array_of_records() {
        let raw = json!([
            {"date": "2024-01-05", "product": "Laptop", "region": "North",
                "sales": 1000.0, "profit": 200.0},
            {"date": "2024-01-20", "product": "Mouse", "region": "South",
                "sales": "50", "profit": -10}
        ]);

        let records = parse_records(&raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product, Product::Laptop);
        assert_eq!(records[1].sales, 50.0);
        assert_eq!(records[1].profit, -10.0);
    }

    #[test]
    fn test_parse_wrapped_records_with_capitalized_keys() {
        let raw = json!({
            "records": [
                {"Date": "2024-03-01T00:00:00", "Product": "Monitor", "Region": "East",
                    "Sales": 300, "Profit": 12.5}
            ]
        });

        let records = parse_records(&raw).unwrap();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(records[0].region, Region::East);
    }

    #[test]
    fn test_bad_date_reports_index() {
        let raw = json!([
            {"date": "2024-01-05", "product": "Laptop", "region": "North", "sales": 1, "profit": 1},
            {"date": "yesterday", "product": "Laptop", "region": "North", "sales": 1, "profit": 1}
        ]);

        match parse_records(&raw) {
            Err(ParseError::InvalidRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("yesterday"));
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_sales_is_error() {
        let raw = json!([
            {"date": "2024-01-05", "product": "Laptop", "region": "North",
                "sales": "lots", "profit": 1}
        ]);
        assert!(parse_records(&raw).is_err());
    }

    #[test]
    fn test_negative_sales_is_error() {
        let raw = json!([
            {"date": "2024-01-05", "product": "Laptop", "region": "North", "sales": -5, "profit": 1}
        ]);
        assert!(parse_records(&raw).is_err());
    }

    #[test]
    fn test_unknown_product_is_error() {
        let raw = json!([
            {"date": "2024-01-05", "product": "Tablet", "region": "North", "sales": 5, "profit": 1}
        ]);
        assert!(parse_records(&raw).is_err());
    }

    #[test]
    fn test_missing_field_is_error() {
        let raw = json!([{"date": "2024-01-05", "product": "Laptop", "region": "North",
            "sales": 5}]);
        assert!(parse_records(&raw).is_err());
    }

    #[test]
    fn test_scalar_document_is_format_error() {
        assert!(matches!(parse_records(&json!(42)), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse_records(&json!("hello")), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_object_without_record_list_is_format_error() {
        match parse_records(&json!({"items": []})) {
            Err(ParseError::InvalidFormat(reason)) => assert!(reason.contains("records")),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rfc3339_date() {
        let date = parse_date("2024-02-10T23:30:00+02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }
}
