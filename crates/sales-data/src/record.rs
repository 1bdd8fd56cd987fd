//! Sales row model and cell normalisation.
//!
//! Every cell is optional. Blank cells, the usual spreadsheet "not available"
//! spellings, and numbers that fail to parse (or parse to a non-finite value)
//! all become `None`, which serialises as JSON `null`.
//!
//! Header columns outside [`COLUMNS`] are kept as text cells and serialise
//! after the modelled keys, in header order.

use std::collections::HashMap;
use std::sync::Arc;

use csv::StringRecord;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::DatasetError;

/// Header names of the columns every sales row carries, in file order.
pub const COLUMNS: [&str; 11] = [
    "Rank",
    "Name",
    "Platform",
    "Year",
    "Genre",
    "Publisher",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
    "Global_Sales",
];

/// Cell spellings treated as a missing value.
const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Largest magnitude below which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One immutable row of the sales dataset.
///
/// Serialises with the original header names as keys. Missing values are
/// always present as `null`; they are never skipped. Unmodelled columns
/// follow the modelled ones as string-or-null keys.
///
/// # Examples
/// ```
/// use sales_data::SalesDataset;
///
/// let csv = "Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales\n\
///            1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74\n";
/// let dataset = SalesDataset::from_reader(csv.as_bytes()).expect("valid csv");
/// let record = &dataset.records()[0];
/// assert_eq!(record.name(), Some("Wii Sports"));
/// assert_eq!(record.year(), Some(2006));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    #[serde(rename = "Rank")]
    rank: Option<u32>,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Platform")]
    platform: Option<String>,
    #[serde(rename = "Year")]
    year: Option<i32>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Publisher")]
    publisher: Option<String>,
    #[serde(rename = "NA_Sales")]
    na_sales: Option<f64>,
    #[serde(rename = "EU_Sales")]
    eu_sales: Option<f64>,
    #[serde(rename = "JP_Sales")]
    jp_sales: Option<f64>,
    #[serde(rename = "Other_Sales")]
    other_sales: Option<f64>,
    #[serde(rename = "Global_Sales")]
    global_sales: Option<f64>,
    #[serde(flatten)]
    extra: ExtraCells,
}

/// Cells from header columns the row model does not name.
///
/// Column names are shared by every row of a dataset.
#[derive(Debug, Clone, PartialEq)]
struct ExtraCells {
    names: Arc<[String]>,
    values: Vec<Option<String>>,
}

impl ExtraCells {
    fn get(&self, column: &str) -> Option<Option<&str>> {
        self.names
            .iter()
            .position(|name| name == column)
            .map(|index| self.values.get(index).and_then(Option::as_deref))
    }
}

impl Serialize for ExtraCells {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.names.len()))?;
        for (name, value) in self.names.iter().zip(&self.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl SalesRecord {
    /// Position in the source ranking.
    #[must_use]
    pub const fn rank(&self) -> Option<u32> {
        self.rank
    }

    /// Game title.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Release platform.
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// Release year.
    #[must_use]
    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    /// Genre label.
    #[must_use]
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// Publisher name.
    #[must_use]
    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    /// North American sales in millions of units.
    #[must_use]
    pub const fn na_sales(&self) -> Option<f64> {
        self.na_sales
    }

    /// European sales in millions of units.
    #[must_use]
    pub const fn eu_sales(&self) -> Option<f64> {
        self.eu_sales
    }

    /// Japanese sales in millions of units.
    #[must_use]
    pub const fn jp_sales(&self) -> Option<f64> {
        self.jp_sales
    }

    /// Rest-of-world sales in millions of units.
    #[must_use]
    pub const fn other_sales(&self) -> Option<f64> {
        self.other_sales
    }

    /// Worldwide sales in millions of units.
    #[must_use]
    pub const fn global_sales(&self) -> Option<f64> {
        self.global_sales
    }

    /// Text of an unmodelled column's cell.
    ///
    /// Returns `None` both for unknown columns and for missing cells.
    #[must_use]
    pub fn extra(&self, column: &str) -> Option<&str> {
        self.extra.get(column).flatten()
    }

    /// Whether the cell under header `column` is missing.
    ///
    /// Columns the row does not carry count as missing.
    #[must_use]
    pub fn is_missing(&self, column: &str) -> bool {
        match column {
            "Rank" => self.rank.is_none(),
            "Name" => self.name.is_none(),
            "Platform" => self.platform.is_none(),
            "Year" => self.year.is_none(),
            "Genre" => self.genre.is_none(),
            "Publisher" => self.publisher.is_none(),
            "NA_Sales" => self.na_sales.is_none(),
            "EU_Sales" => self.eu_sales.is_none(),
            "JP_Sales" => self.jp_sales.is_none(),
            "Other_Sales" => self.other_sales.is_none(),
            "Global_Sales" => self.global_sales.is_none(),
            other => self.extra.get(other).flatten().is_none(),
        }
    }
}

/// Position of each column within a particular file's header row.
#[derive(Debug, Clone)]
pub(crate) struct ColumnLayout {
    keys: Vec<String>,
    positions: [usize; COLUMNS.len()],
    extra_names: Arc<[String]>,
    extra_positions: Vec<usize>,
}

impl ColumnLayout {
    /// Locate every required column, failing on the first one that is absent.
    ///
    /// Repeated header names get a `.1`, `.2`, ... suffix so every column
    /// keeps a distinct key.
    pub(crate) fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let keys = distinct_keys(headers);
        let mut positions = [0; COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(COLUMNS) {
            *slot = keys
                .iter()
                .position(|key| key == column)
                .ok_or(DatasetError::MissingColumn { column })?;
        }
        let extra_positions: Vec<usize> = (0..keys.len())
            .filter(|position| !positions.contains(position))
            .collect();
        let extra_names = extra_positions
            .iter()
            .filter_map(|&position| keys.get(position).cloned())
            .collect();
        Ok(Self {
            keys,
            positions,
            extra_names,
            extra_positions,
        })
    }

    /// Column keys in header order.
    pub(crate) fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Decode one CSV row. Short rows yield `None` for the trailing cells.
    pub(crate) fn decode(&self, row: &StringRecord) -> SalesRecord {
        let [rank, name, platform, year, genre, publisher, na, eu, jp, other, global] =
            self.positions.map(|position| row.get(position));
        SalesRecord {
            rank: integer_cell(rank).and_then(|value| u32::try_from(value).ok()),
            name: text_cell(name),
            platform: text_cell(platform),
            year: integer_cell(year).and_then(|value| i32::try_from(value).ok()),
            genre: text_cell(genre),
            publisher: text_cell(publisher),
            na_sales: number_cell(na),
            eu_sales: number_cell(eu),
            jp_sales: number_cell(jp),
            other_sales: number_cell(other),
            global_sales: number_cell(global),
            extra: ExtraCells {
                names: Arc::clone(&self.extra_names),
                values: self
                    .extra_positions
                    .iter()
                    .map(|&position| text_cell(row.get(position)))
                    .collect(),
            },
        }
    }
}

fn distinct_keys(headers: &StringRecord) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    headers
        .iter()
        .map(|header| {
            let name = header.trim();
            let repeats = seen.entry(name).or_insert(0);
            let key = if *repeats == 0 {
                name.to_owned()
            } else {
                format!("{name}.{repeats}")
            };
            *repeats += 1;
            key
        })
        .collect()
}

fn present(raw: Option<&str>) -> Option<&str> {
    let trimmed = raw?.trim();
    if MISSING_MARKERS.contains(&trimmed) {
        None
    } else {
        Some(trimmed)
    }
}

fn text_cell(raw: Option<&str>) -> Option<String> {
    present(raw).map(str::to_owned)
}

fn number_cell(raw: Option<&str>) -> Option<f64> {
    present(raw)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Integers may be written as `2006` or, after a float round-trip, `2006.0`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is integral and within the exactly representable range"
)]
fn integer_cell(raw: Option<&str>) -> Option<i64> {
    let text = present(raw)?;
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let value = number_cell(Some(text))?;
    let whole = value.trunc();
    (whole.to_bits() == value.to_bits() && whole.abs() <= MAX_EXACT_INTEGER)
        .then_some(whole as i64)
}
