//! OpenAPI schema definitions for domain and dataset types.
//!
//! Domain types and the `sales-data` crate remain framework-agnostic by not
//! deriving `ToSchema`. This module provides the schema definitions required
//! for OpenAPI documentation using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their corresponding
//! types but live in the inbound adapter layer where framework concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa during OpenAPI generation"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "limit must be between 1 and 100")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`sales_data::CategoryCount`].
#[derive(ToSchema)]
#[schema(as = sales_data::CategoryCount)]
pub struct CategoryCountSchema {
    /// Category label.
    #[schema(example = "Action")]
    name: String,
    /// Number of games with this label.
    #[schema(example = 3316)]
    count: u64,
}

/// OpenAPI schema for [`sales_data::Summary`].
#[derive(ToSchema)]
#[schema(as = sales_data::Summary)]
pub struct SummarySchema {
    /// Number of games in the dataset.
    #[schema(example = 16598)]
    total_games: u64,
    /// Worldwide sales in millions of units.
    #[schema(example = 8920.44)]
    total_global_sales: f64,
    /// Up to five most frequent genres.
    top_genres: Vec<CategoryCountSchema>,
    /// Up to five most frequent platforms.
    top_platforms: Vec<CategoryCountSchema>,
}

/// OpenAPI schema for [`sales_data::Overview`].
#[derive(ToSchema)]
#[schema(as = sales_data::Overview)]
pub struct OverviewSchema {
    /// Number of rows.
    #[schema(example = 16598)]
    rows: u64,
    /// Number of header columns.
    #[schema(example = 11)]
    columns: u64,
    /// Worldwide sales in millions of units; zero when none are recorded.
    #[schema(example = 8920.44)]
    total_global_sales: f64,
}

/// OpenAPI schema for [`sales_data::SalesRecord`].
///
/// Keys match the CSV header. Missing cells are `null`, never omitted.
/// Header columns beyond these follow as string-or-null keys.
#[derive(ToSchema)]
#[schema(as = sales_data::SalesRecord)]
pub struct SalesRecordSchema {
    #[schema(rename = "Rank", example = 1)]
    rank: Option<u32>,
    #[schema(rename = "Name", example = "Wii Sports")]
    name: Option<String>,
    #[schema(rename = "Platform", example = "Wii")]
    platform: Option<String>,
    #[schema(rename = "Year", example = 2006)]
    year: Option<i32>,
    #[schema(rename = "Genre", example = "Sports")]
    genre: Option<String>,
    #[schema(rename = "Publisher", example = "Nintendo")]
    publisher: Option<String>,
    #[schema(rename = "NA_Sales", example = 41.49)]
    na_sales: Option<f64>,
    #[schema(rename = "EU_Sales", example = 29.02)]
    eu_sales: Option<f64>,
    #[schema(rename = "JP_Sales", example = 3.77)]
    jp_sales: Option<f64>,
    #[schema(rename = "Other_Sales", example = 8.46)]
    other_sales: Option<f64>,
    #[schema(rename = "Global_Sales", example = 82.74)]
    global_sales: Option<f64>,
}

/// OpenAPI schema for [`sales_data::TopSeller`].
#[derive(ToSchema)]
#[schema(as = sales_data::TopSeller)]
pub struct TopSellerSchema {
    #[schema(example = "Wii Sports")]
    name: Option<String>,
    #[schema(example = "Wii")]
    platform: Option<String>,
    #[schema(example = 2006)]
    year: Option<i32>,
    #[schema(example = "Sports")]
    genre: Option<String>,
    /// Worldwide sales in millions of units.
    #[schema(example = 82.74)]
    global_sales: f64,
}

/// OpenAPI schema for [`sales_data::YearSales`].
#[derive(ToSchema)]
#[schema(as = sales_data::YearSales)]
pub struct YearSalesSchema {
    #[schema(example = 2008)]
    year: i32,
    #[schema(example = 678.9)]
    global_sales: f64,
}

/// OpenAPI schema for [`sales_data::CategorySales`].
#[derive(ToSchema)]
#[schema(as = sales_data::CategorySales)]
pub struct CategorySalesSchema {
    #[schema(example = "PS2")]
    name: String,
    #[schema(example = 1255.64)]
    global_sales: f64,
}

/// OpenAPI schema for [`sales_data::ColumnMissing`].
#[derive(ToSchema)]
#[schema(as = sales_data::ColumnMissing)]
pub struct ColumnMissingSchema {
    #[schema(example = "Year")]
    column: String,
    /// Rows whose cell is missing.
    #[schema(example = 271)]
    missing: u64,
}

/// OpenAPI schema for [`sales_data::RegionalSales`].
#[derive(ToSchema)]
#[schema(as = sales_data::RegionalSales)]
pub struct RegionalSalesSchema {
    /// North America.
    na: f64,
    /// Europe.
    eu: f64,
    /// Japan.
    jp: f64,
    /// Rest of the world.
    other: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
        for code in ["invalid_request", "not_found", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }

    #[test]
    fn record_schema_uses_csv_header_keys() {
        let schema_json = schema_to_json::<SalesRecordSchema>();
        for column in sales_data::COLUMNS {
            assert!(
                schema_json.contains(&format!("\"{column}\"")),
                "missing {column}"
            );
        }
    }

    #[rstest]
    #[case(SummarySchema::name(), "sales_data.Summary")]
    #[case(OverviewSchema::name(), "sales_data.Overview")]
    #[case(TopSellerSchema::name(), "sales_data.TopSeller")]
    #[case(RegionalSalesSchema::name(), "sales_data.RegionalSales")]
    fn dataset_schemas_are_named_after_their_types(
        #[case] name: std::borrow::Cow<'static, str>,
        #[case] expected: &str,
    ) {
        assert_eq!(name, expected);
    }
}
