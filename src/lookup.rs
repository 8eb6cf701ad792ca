//! Category lookup tables loaded from the encoded sales data

use crate::error::{ForecastError, Result};
use polars::prelude::*;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

const PRODUCT_NAME_COLUMN: &str = "product_name";
const PRODUCT_CODE_COLUMN: &str = "product_encoded";
const CITY_NAME_COLUMN: &str = "city";
const CITY_CODE_COLUMN: &str = "city_encoded";

/// Immutable category-to-code mappings, loaded once at process start.
///
/// The codes are the label encodings the model was fitted against; the
/// tables are read from the same encoded data file the training run
/// produced, deduplicated by name/code pair.
#[derive(Debug, Clone)]
pub struct LookupTables {
    products: HashMap<String, i64>,
    cities: HashMap<String, i64>,
}

impl LookupTables {
    /// Load lookup tables from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        // Use polars DataFrame reader directly
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::from_dataframe(df)
    }

    /// Build lookup tables from an existing DataFrame
    pub fn from_dataframe(df: DataFrame) -> Result<Self> {
        let products = Self::extract_pairs(&df, PRODUCT_NAME_COLUMN, PRODUCT_CODE_COLUMN)?;
        let cities = Self::extract_pairs(&df, CITY_NAME_COLUMN, CITY_CODE_COLUMN)?;

        Ok(Self { products, cities })
    }

    /// Extract a deduplicated name-to-code mapping from two columns.
    ///
    /// The first occurrence of a name wins, matching the resolution order
    /// of the encoded data the tables were built from.
    fn extract_pairs(df: &DataFrame, name_column: &str, code_column: &str) -> Result<HashMap<String, i64>> {
        for required in [name_column, code_column] {
            if !df.get_column_names().iter().any(|c| *c == required) {
                return Err(ForecastError::DataError(format!(
                    "Missing required column {:?} in lookup data",
                    required
                )));
            }
        }

        let names = df.column(name_column)?.utf8()?;
        let codes = df.column(code_column)?.cast(&DataType::Int64)?;
        let codes = codes.i64()?;

        let mut pairs = HashMap::new();
        for (name, code) in names.into_iter().zip(codes.into_iter()) {
            match (name, code) {
                (Some(name), Some(code)) => {
                    pairs.entry(name.to_string()).or_insert(code);
                }
                _ => {
                    return Err(ForecastError::DataError(format!(
                        "Null entry in lookup columns {:?}/{:?}",
                        name_column, code_column
                    )));
                }
            }
        }

        if pairs.is_empty() {
            return Err(ForecastError::DataError(format!(
                "No rows in lookup columns {:?}/{:?}",
                name_column, code_column
            )));
        }

        Ok(pairs)
    }

    /// Resolve a product name to its fitted category code
    pub fn product_code(&self, name: &str) -> Result<i64> {
        self.products
            .get(name)
            .copied()
            .ok_or_else(|| ForecastError::LookupMiss {
                kind: "product",
                name: name.to_string(),
            })
    }

    /// Resolve a city name to its fitted category code
    pub fn city_code(&self, name: &str) -> Result<i64> {
        self.cities
            .get(name)
            .copied()
            .ok_or_else(|| ForecastError::LookupMiss {
                kind: "city",
                name: name.to_string(),
            })
    }

    /// All known product names, sorted
    pub fn product_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.products.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All known city names, sorted
    pub fn city_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of distinct products
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of distinct cities
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}
