//! Read-only video game sales dataset.
//!
//! This crate loads the `vgsales.csv` table once and answers aggregate queries
//! over it. It is independent of backend domain types so the HTTP service and
//! any offline tooling can share it.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading the dataset from a CSV file or any byte stream
//! - Normalising missing cells to `None` (serialised as JSON `null`)
//! - Headline statistics (row counts, sales totals, top genres and platforms)
//! - Sales breakdowns by year, platform, publisher, genre, and region
//! - Per-column missing-value counts
//!
//! # Example
//!
//! ```
//! use sales_data::SalesDataset;
//!
//! let csv = "Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales\n\
//!            1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74\n\
//!            2,Unreleased,PS2,N/A,Action,N/A,,,,,\n";
//!
//! let dataset = SalesDataset::from_reader(csv.as_bytes()).expect("valid csv");
//! let overview = dataset.overview();
//!
//! assert_eq!(overview.rows, 2);
//! assert_eq!(overview.columns, 11);
//! assert!((overview.total_global_sales - 82.74).abs() < 1e-9);
//! ```

mod dataset;
mod error;
mod record;
mod stats;

pub use dataset::SalesDataset;
pub use error::DatasetError;
pub use record::{COLUMNS, SalesRecord};
pub use stats::{
    CategoryCount, CategorySales, ColumnMissing, DEFAULT_TOP_PLATFORMS, DEFAULT_TOP_PUBLISHERS,
    DEFAULT_TOP_SELLERS, Overview, RegionalSales, SUMMARY_TOP_N, Summary, TopSeller, YearSales,
};
