//! Aggregate queries over a [`SalesDataset`].
//!
//! Aggregations skip missing values instead of propagating them, so every
//! total is a finite number and every ranking only lists present categories.
//! Rankings are stable: equal counts or totals keep data order.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::dataset::SalesDataset;
use crate::record::SalesRecord;

/// Number of categories listed in each ranking of [`Summary`].
pub const SUMMARY_TOP_N: usize = 5;

/// Default number of rows returned by [`SalesDataset::top_sellers`].
pub const DEFAULT_TOP_SELLERS: usize = 10;

/// Default number of platforms returned by [`SalesDataset::sales_by_platform`].
pub const DEFAULT_TOP_PLATFORMS: usize = 10;

/// Default number of publishers returned by [`SalesDataset::sales_by_publisher`].
pub const DEFAULT_TOP_PUBLISHERS: usize = 10;

/// A category label with the number of rows carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category label.
    pub name: String,
    /// Number of rows with this label.
    pub count: usize,
}

/// Headline statistics for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of rows in the dataset.
    pub total_games: usize,
    /// Sum of present global sales figures.
    pub total_global_sales: f64,
    /// Most frequent genres, most frequent first.
    pub top_genres: Vec<CategoryCount>,
    /// Most frequent platforms, most frequent first.
    pub top_platforms: Vec<CategoryCount>,
}

/// Shape of the dataset plus its sales total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// Number of rows.
    pub rows: usize,
    /// Number of header columns.
    pub columns: usize,
    /// Sum of present global sales figures; zero when there are none.
    pub total_global_sales: f64,
}

/// A best-selling title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSeller {
    /// Game title.
    pub name: Option<String>,
    /// Release platform.
    pub platform: Option<String>,
    /// Release year.
    pub year: Option<i32>,
    /// Genre label.
    pub genre: Option<String>,
    /// Worldwide sales in millions of units.
    pub global_sales: f64,
}

/// Worldwide sales for one release year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSales {
    /// Release year.
    pub year: i32,
    /// Worldwide sales in millions of units.
    pub global_sales: f64,
}

/// Worldwide sales for one category label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    /// Category label.
    pub name: String,
    /// Worldwide sales in millions of units.
    pub global_sales: f64,
}

/// Number of missing cells under one header column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMissing {
    /// Header name.
    pub column: String,
    /// Rows whose cell in this column is missing.
    pub missing: usize,
}

/// Sales totals per region, in millions of units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalSales {
    /// North America.
    pub na: f64,
    /// Europe.
    pub eu: f64,
    /// Japan.
    pub jp: f64,
    /// Rest of the world.
    pub other: f64,
}

impl SalesDataset {
    /// Row count, global sales total, and the top genres and platforms.
    ///
    /// # Examples
    /// ```
    /// use sales_data::SalesDataset;
    ///
    /// let csv = "Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales\n\
    ///            1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74\n\
    ///            2,Super Mario Bros.,NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24\n\
    ///            3,Mario Kart Wii,Wii,2008,Racing,Nintendo,15.85,12.88,3.79,3.31,35.82\n";
    /// let dataset = SalesDataset::from_reader(csv.as_bytes()).expect("valid csv");
    /// let summary = dataset.summary();
    /// assert_eq!(summary.total_games, 3);
    /// assert_eq!(summary.top_platforms[0].name, "Wii");
    /// assert_eq!(summary.top_platforms[0].count, 2);
    /// ```
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            total_games: self.len(),
            total_global_sales: self.total_global_sales(),
            top_genres: top_categories(self.records(), SalesRecord::genre, SUMMARY_TOP_N),
            top_platforms: top_categories(self.records(), SalesRecord::platform, SUMMARY_TOP_N),
        }
    }

    /// Row and column counts plus the global sales total.
    #[must_use]
    pub fn overview(&self) -> Overview {
        Overview {
            rows: self.len(),
            columns: self.column_count(),
            total_global_sales: self.total_global_sales(),
        }
    }

    /// Sum of every present global sales figure.
    #[must_use]
    pub fn total_global_sales(&self) -> f64 {
        sum_sales(self.records().iter().filter_map(SalesRecord::global_sales))
    }

    /// The `limit` titles with the highest global sales.
    ///
    /// Rows without a global sales figure are never listed.
    #[must_use]
    pub fn top_sellers(&self, limit: usize) -> Vec<TopSeller> {
        let mut ranked: Vec<(&SalesRecord, f64)> = self
            .records()
            .iter()
            .filter_map(|record| record.global_sales().map(|sales| (record, sales)))
            .collect();
        ranked.sort_by(|(_, left), (_, right)| right.total_cmp(left));
        ranked
            .into_iter()
            .take(limit)
            .map(|(record, global_sales)| TopSeller {
                name: record.name().map(str::to_owned),
                platform: record.platform().map(str::to_owned),
                year: record.year(),
                genre: record.genre().map(str::to_owned),
                global_sales,
            })
            .collect()
    }

    /// Global sales per release year, oldest first.
    #[must_use]
    pub fn sales_by_year(&self) -> Vec<YearSales> {
        let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
        for record in self.records() {
            if let (Some(year), Some(sales)) = (record.year(), record.global_sales()) {
                let total = totals.entry(year).or_insert(0.0);
                *total = add_sales(*total, sales);
            }
        }
        totals
            .into_iter()
            .map(|(year, global_sales)| YearSales { year, global_sales })
            .collect()
    }

    /// Global sales per platform, best-selling first, at most `limit` entries.
    #[must_use]
    pub fn sales_by_platform(&self, limit: usize) -> Vec<CategorySales> {
        let mut totals = category_sales(self.records(), SalesRecord::platform);
        totals.truncate(limit);
        totals
    }

    /// Global sales per publisher, best-selling first, at most `limit` entries.
    #[must_use]
    pub fn sales_by_publisher(&self, limit: usize) -> Vec<CategorySales> {
        let mut totals = category_sales(self.records(), SalesRecord::publisher);
        totals.truncate(limit);
        totals
    }

    /// Missing-cell count for every header column, in header order.
    ///
    /// Uses the same normalisation as [`SalesDataset::records`], so a count
    /// matches the number of `null` values serialised under that key.
    #[must_use]
    pub fn missing_counts(&self) -> Vec<ColumnMissing> {
        self.columns()
            .iter()
            .map(|column| ColumnMissing {
                column: column.clone(),
                missing: self
                    .records()
                    .iter()
                    .filter(|record| record.is_missing(column))
                    .count(),
            })
            .collect()
    }

    /// Global sales per genre, best-selling first.
    #[must_use]
    pub fn sales_by_genre(&self) -> Vec<CategorySales> {
        category_sales(self.records(), SalesRecord::genre)
    }

    /// Sales totals for each region.
    #[must_use]
    pub fn regional_sales(&self) -> RegionalSales {
        let records = self.records();
        RegionalSales {
            na: sum_sales(records.iter().filter_map(SalesRecord::na_sales)),
            eu: sum_sales(records.iter().filter_map(SalesRecord::eu_sales)),
            jp: sum_sales(records.iter().filter_map(SalesRecord::jp_sales)),
            other: sum_sales(records.iter().filter_map(SalesRecord::other_sales)),
        }
    }
}

/// Counts labels in data order, then ranks them by descending count.
fn top_categories<'a>(
    records: &'a [SalesRecord],
    label: fn(&'a SalesRecord) -> Option<&'a str>,
    limit: usize,
) -> Vec<CategoryCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for name in records.iter().filter_map(label) {
        if let Some(count) = slots.get(name).and_then(|slot| counts.get_mut(*slot)) {
            count.count += 1;
        } else {
            slots.insert(name, counts.len());
            counts.push(CategoryCount {
                name: name.to_owned(),
                count: 1,
            });
        }
    }
    counts.sort_by(|left, right| right.count.cmp(&left.count));
    counts.truncate(limit);
    counts
}

/// Totals global sales per label in data order, then ranks by descending total.
fn category_sales<'a>(
    records: &'a [SalesRecord],
    label: fn(&'a SalesRecord) -> Option<&'a str>,
) -> Vec<CategorySales> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategorySales> = Vec::new();
    for record in records {
        let (Some(name), Some(sales)) = (label(record), record.global_sales()) else {
            continue;
        };
        if let Some(entry) = slots.get(name).and_then(|slot| totals.get_mut(*slot)) {
            entry.global_sales = add_sales(entry.global_sales, sales);
        } else {
            slots.insert(name, totals.len());
            totals.push(CategorySales {
                name: name.to_owned(),
                global_sales: sales,
            });
        }
    }
    totals.sort_by(|left, right| right.global_sales.total_cmp(&left.global_sales));
    totals
}

#[expect(clippy::float_arithmetic, reason = "sales figures are f64 quantities")]
fn add_sales(total: f64, sales: f64) -> f64 {
    total + sales
}

/// Sums finite sales figures, starting from positive zero so an empty input
/// yields `0.0` rather than `-0.0`.
fn sum_sales(values: impl Iterator<Item = f64>) -> f64 {
    let total = values.fold(0.0, add_sales);
    if total.is_finite() { total } else { 0.0 }
}
