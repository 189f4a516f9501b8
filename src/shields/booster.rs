//! Shield booster baseline selection

use crate::core::error::{DataError, Result};
use crate::engineering::{Attribute, AttributeRecord};

/// First catalog entry with `rating`, as an engineering baseline.
///
/// Every booster attribute must be present and numeric on the chosen entry.
pub fn baseline_booster(entries: &[serde_json::Value], rating: &str) -> Result<AttributeRecord> {
    let entry = entries
        .iter()
        .find(|entry| entry.get("rating").and_then(|r| r.as_str()) == Some(rating))
        .ok_or_else(|| DataError::missing("shield boosters", format!("rating {}", rating)))?;

    let symbol = entry
        .get("symbol")
        .and_then(|s| s.as_str())
        .ok_or_else(|| DataError::malformed(format!("shield booster {}", rating), "symbol"))?;

    let mut record = AttributeRecord::new(symbol);
    for attribute in Attribute::BOOSTER {
        let value = entry
            .get(attribute.as_str())
            .and_then(|v| v.as_f64())
            .ok_or_else(|| DataError::malformed(symbol, attribute.as_str()))?;
        record.set(attribute, value);
    }
    Ok(record)
}
