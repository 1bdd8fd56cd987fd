//! Driving port for read-only sales statistics.
//!
//! The dataset is in memory and immutable, so queries are synchronous and
//! infallible. Handlers hold the port behind an `Arc` and serialise results
//! directly.

use sales_data::{
    CategorySales, ColumnMissing, Overview, RegionalSales, SalesRecord, Summary, TopSeller,
    YearSales,
};

/// Query surface over the loaded sales dataset.
pub trait SalesQuery: Send + Sync {
    /// Headline counts, totals, and the top genres and platforms.
    fn summary(&self) -> Summary;

    /// Row count, column count, and total global sales.
    fn overview(&self) -> Overview;

    /// Every row in file order with missing cells as `None`.
    fn records(&self) -> &[SalesRecord];

    /// The `limit` best-selling rows.
    fn top_sellers(&self, limit: usize) -> Vec<TopSeller>;

    /// Global sales per release year, ascending by year.
    fn sales_by_year(&self) -> Vec<YearSales>;

    /// Global sales per platform, best first, at most `limit` entries.
    fn sales_by_platform(&self, limit: usize) -> Vec<CategorySales>;

    /// Global sales per publisher, best first, at most `limit` entries.
    fn sales_by_publisher(&self, limit: usize) -> Vec<CategorySales>;

    /// Global sales per genre, best first.
    fn sales_by_genre(&self) -> Vec<CategorySales>;

    /// Sales totals per region.
    fn regional_sales(&self) -> RegionalSales;

    /// Missing-cell count per header column, in header order.
    fn missing_counts(&self) -> Vec<ColumnMissing>;
}
