//! Shipyard table: in-game ship name -> internal symbol
//!
//! Parsed from the FDevIDs `shipyard.csv` (`id,symbol,name`). Columns are
//! located through the header row.

use ahash::AHashMap;

use crate::core::error::{DataError, Result};

#[derive(Debug, Clone, Default)]
pub struct Shipyard {
    /// Lower-cased display name -> symbol
    by_name: AHashMap<String, String>,
}

impl Shipyard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CSV text. The first row must name `symbol` and `name` columns.
    pub fn from_csv(content: &str) -> Result<Self> {
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());
        let header = lines
            .next()
            .map(split_record)
            .ok_or_else(|| DataError::malformed("shipyard", "header"))?;
        let column = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| DataError::malformed("shipyard", name))
        };
        let symbol_col = column("symbol")?;
        let name_col = column("name")?;

        let mut shipyard = Shipyard::new();
        for line in lines {
            let fields = split_record(line);
            match (fields.get(symbol_col), fields.get(name_col)) {
                (Some(symbol), Some(name)) => shipyard.insert(name, symbol),
                _ => return Err(DataError::malformed(line, "symbol/name")),
            }
        }
        Ok(shipyard)
    }

    /// First entry for a name wins
    pub fn insert(&mut self, name: &str, symbol: &str) {
        self.by_name
            .entry(name.trim().to_lowercase())
            .or_insert_with(|| symbol.trim().to_string());
    }

    /// Case-insensitive lookup by display name
    pub fn symbol_for(&self, name: &str) -> Result<&str> {
        self.by_name
            .get(&name.to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| DataError::missing("shipyard", name))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}

/// Split one CSV record, honouring double-quoted fields and `""` escapes
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}
