//! Sales totals from a price catalogue and a list of sale records
//!
//! Both inputs are JSON arrays. Records are checked one at a time: a
//! malformed record or an unknown product is skipped with a warning and
//! the rest of the ledger is still totalled.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub price: f64,
}

/// One line of the sales ledger
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "SALE_ID", default)]
    pub sale_id: Option<Value>,

    #[serde(rename = "SALE_Date", default)]
    pub sale_date: Option<String>,

    #[serde(rename = "Product", default)]
    pub product: Option<String>,

    #[serde(rename = "Quantity", default)]
    pub quantity: Option<f64>,

    /// The record as written, kept when a field had the wrong type
    #[serde(skip)]
    pub raw: Option<Value>,
}

impl SaleRecord {
    /// Product name and quantity, if every field is present and non-empty
    fn usable(&self) -> Option<(&str, f64)> {
        if self.raw.is_some() {
            return None;
        }
        let id_present = self.sale_id.as_ref().is_some_and(is_truthy);
        let date_present = self.sale_date.as_deref().is_some_and(|d| !d.is_empty());
        let product = self.product.as_deref().filter(|p| !p.is_empty())?;
        let quantity = self.quantity.filter(|q| *q != 0.0)?;
        (id_present && date_present).then_some((product, quantity))
    }

    /// Keep whichever fields have the expected type, plus the original JSON
    fn salvage(item: Value) -> Self {
        let text = |name: &str| item.get(name).and_then(Value::as_str).map(str::to_owned);
        let sale_date = text("SALE_Date");
        let product = text("Product");
        let sale_id = item.get("SALE_ID").cloned();
        let quantity = item.get("Quantity").and_then(Value::as_f64);
        Self {
            sale_id,
            sale_date,
            product,
            quantity,
            raw: Some(item),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Products indexed by lower-cased title; the first entry for a title wins
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    prices: HashMap<String, f64>,
}

impl Catalogue {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut prices = HashMap::new();
        for product in products {
            prices.entry(product.title.to_lowercase()).or_insert(product.price);
        }
        Self { prices }
    }

    /// Case-insensitive price lookup
    pub fn price(&self, title: &str) -> Option<f64> {
        self.prices.get(&title.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Result of totalling a ledger
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesTotal {
    pub total: f64,
    /// Records that contributed to the total
    pub counted: usize,
    /// Records with a missing or empty field
    pub invalid: Vec<SaleRecord>,
    /// Product names with no (or a zero) catalogue price
    pub unmatched: Vec<String>,
}

/// Total `price * quantity` over every usable record
pub fn compute_total(catalogue: &Catalogue, records: &[SaleRecord]) -> SalesTotal {
    let mut result = SalesTotal::default();

    for record in records {
        let Some((product, quantity)) = record.usable() else {
            warn!(?record, "Invalid sale record");
            result.invalid.push(record.clone());
            continue;
        };

        match catalogue.price(product).filter(|p| *p != 0.0) {
            Some(price) => {
                result.total += price * quantity;
                result.counted += 1;
            }
            None => {
                warn!(product, "Product not found in price catalogue");
                result.unmatched.push(product.to_string());
            }
        }
    }

    result
}

fn read_array(path: &Path) -> CoreResult<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    let items: Vec<Value> = serde_json::from_str(&text).map_err(|source| CoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if items.is_empty() {
        return Err(CoreError::EmptyInput(path.display().to_string()));
    }
    Ok(items)
}

/// Load a catalogue; entries without a string title and numeric price are skipped
pub fn load_catalogue(path: impl AsRef<Path>) -> CoreResult<Catalogue> {
    let products = read_array(path.as_ref())?
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Product>(item.clone()) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(%item, error = %e, "Ignoring malformed catalogue entry");
                None
            }
        });
    Ok(Catalogue::new(products))
}

/// Load sale records. A record whose fields have the wrong type is kept
/// as an invalid record carrying the original JSON.
pub fn load_sales(path: impl AsRef<Path>) -> CoreResult<Vec<SaleRecord>> {
    Ok(read_array(path.as_ref())?
        .into_iter()
        .map(|item| match serde_json::from_value::<SaleRecord>(item.clone()) {
            Ok(record) => record,
            Err(e) => {
                warn!(%item, error = %e, "Malformed sale record");
                SaleRecord::salvage(item)
            }
        })
        .collect())
}
