//! Sales query port backed by the in-memory dataset.

use sales_data::{
    CategorySales, ColumnMissing, Overview, RegionalSales, SalesDataset, SalesRecord, Summary,
    TopSeller, YearSales,
};

use crate::domain::ports::SalesQuery;

impl SalesQuery for SalesDataset {
    fn summary(&self) -> Summary {
        SalesDataset::summary(self)
    }

    fn overview(&self) -> Overview {
        SalesDataset::overview(self)
    }

    fn records(&self) -> &[SalesRecord] {
        SalesDataset::records(self)
    }

    fn top_sellers(&self, limit: usize) -> Vec<TopSeller> {
        SalesDataset::top_sellers(self, limit)
    }

    fn sales_by_year(&self) -> Vec<YearSales> {
        SalesDataset::sales_by_year(self)
    }

    fn sales_by_platform(&self, limit: usize) -> Vec<CategorySales> {
        SalesDataset::sales_by_platform(self, limit)
    }

    fn sales_by_publisher(&self, limit: usize) -> Vec<CategorySales> {
        SalesDataset::sales_by_publisher(self, limit)
    }

    fn sales_by_genre(&self) -> Vec<CategorySales> {
        SalesDataset::sales_by_genre(self)
    }

    fn regional_sales(&self) -> RegionalSales {
        SalesDataset::regional_sales(self)
    }

    fn missing_counts(&self) -> Vec<ColumnMissing> {
        SalesDataset::missing_counts(self)
    }
}
