//! Dataset statistics API handlers.
//!
//! ```text
//! GET /api/summary
//! GET /api/overview
//! GET /api/top-games
//! GET /api/top-sellers?limit=10
//! GET /api/sales/by-year
//! GET /api/sales/by-platform?limit=10
//! GET /api/sales/by-publisher?limit=10
//! GET /api/sales/by-genre
//! GET /api/sales/regions
//! GET /api/missing
//! ```
//!
//! These read-only endpoints are not session-gated.

use actix_web::{HttpResponse, get, web};
use sales_data::{DEFAULT_TOP_PLATFORMS, DEFAULT_TOP_PUBLISHERS, DEFAULT_TOP_SELLERS};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CategorySalesSchema, ColumnMissingSchema, ErrorSchema, OverviewSchema, RegionalSalesSchema,
    SalesRecordSchema, SummarySchema, TopSellerSchema, YearSalesSchema,
};
use crate::inbound::http::state::HttpState;

/// Largest `limit` accepted by the ranked endpoints.
pub const MAX_LIMIT: usize = 100;

/// Optional result-size query parameter.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Number of entries to return, between 1 and 100.
    #[param(minimum = 1, maximum = 100)]
    pub limit: Option<usize>,
}

impl LimitQuery {
    fn resolve(&self, default: usize) -> Result<usize, Error> {
        match self.limit {
            None => Ok(default),
            Some(limit) if (1..=MAX_LIMIT).contains(&limit) => Ok(limit),
            Some(limit) => Err(Error::invalid_request(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            ))
            .with_details(json!({ "field": "limit", "value": limit }))),
        }
    }
}

/// Headline statistics.
#[utoipa::path(
    get,
    path = "/api/summary",
    responses(
        (status = 200, description = "Dataset summary", body = SummarySchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["stats"],
    operation_id = "summary",
    security([])
)]
#[get("/api/summary")]
pub async fn summary(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(state.sales.summary())
}

/// Dataset shape and sales total.
#[utoipa::path(
    get,
    path = "/api/overview",
    responses(
        (status = 200, description = "Dataset overview", body = OverviewSchema)
    ),
    tags = ["stats"],
    operation_id = "overview",
    security([])
)]
#[get("/api/overview")]
pub async fn overview(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(state.sales.overview())
}

/// Every row of the dataset with missing cells as `null`.
#[utoipa::path(
    get,
    path = "/api/top-games",
    responses(
        (status = 200, description = "All rows in file order", body = [SalesRecordSchema])
    ),
    tags = ["stats"],
    operation_id = "topGames",
    security([])
)]
#[get("/api/top-games")]
pub async fn top_games(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(state.sales.records())
}

/// Best-selling titles.
#[utoipa::path(
    get,
    path = "/api/top-sellers",
    params(LimitQuery),
    responses(
        (status = 200, description = "Best sellers, highest first", body = [TopSellerSchema]),
        (status = 400, description = "Invalid limit", body = ErrorSchema)
    ),
    tags = ["stats"],
    operation_id = "topSellers",
    security([])
)]
#[get("/api/top-sellers")]
pub async fn top_sellers(
    state: web::Data<HttpState>,
    query: web::Query<LimitQuery>,
) -> ApiResult<HttpResponse> {
    let limit = query.resolve(DEFAULT_TOP_SELLERS)?;
    Ok(HttpResponse::Ok().json(state.sales.top_sellers(limit)))
}

/// Worldwide sales per release year.
#[utoipa::path(
    get,
    path = "/api/sales/by-year",
    responses(
        (status = 200, description = "Sales per year, ascending", body = [YearSalesSchema])
    ),
    tags = ["stats"],
    operation_id = "salesByYear",
    security([])
)]
#[get("/api/sales/by-year")]
pub async fn sales_by_year(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(state.sales.sales_by_year())
}

/// Worldwide sales per platform.
#[utoipa::path(
    get,
    path = "/api/sales/by-platform",
    params(LimitQuery),
    responses(
        (status = 200, description = "Sales per platform, highest first", body = [CategorySalesSchema]),
        (status = 400, description = "Invalid limit", body = ErrorSchema)
    ),
    tags = ["stats"],
    operation_id = "salesByPlatform",
    security([])
)]
#[get("/api/sales/by-platform")]
pub async fn sales_by_platform(
    state: web::Data<HttpState>,
    query: web::Query<LimitQuery>,
) -> ApiResult<HttpResponse> {
    let limit = query.resolve(DEFAULT_TOP_PLATFORMS)?;
    Ok(HttpResponse::Ok().json(state.sales.sales_by_platform(limit)))
}

/// Worldwide sales per publisher.
#[utoipa::path(
    get,
    path = "/api/sales/by-publisher",
    params(LimitQuery),
    responses(
        (status = 200, description = "Sales per publisher, highest first", body = [CategorySalesSchema]),
        (status = 400, description = "Invalid limit", body = ErrorSchema)
    ),
    tags = ["stats"],
    operation_id = "salesByPublisher",
    security([])
)]
#[get("/api/sales/by-publisher")]
pub async fn sales_by_publisher(
    state: web::Data<HttpState>,
    query: web::Query<LimitQuery>,
) -> ApiResult<HttpResponse> {
    let limit = query.resolve(DEFAULT_TOP_PUBLISHERS)?;
    Ok(HttpResponse::Ok().json(state.sales.sales_by_publisher(limit)))
}

/// Worldwide sales per genre.
#[utoipa::path(
    get,
    path = "/api/sales/by-genre",
    responses(
        (status = 200, description = "Sales per genre, highest first", body = [CategorySalesSchema])
    ),
    tags = ["stats"],
    operation_id = "salesByGenre",
    security([])
)]
#[get("/api/sales/by-genre")]
pub async fn sales_by_genre(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(state.sales.sales_by_genre())
}

/// Sales totals per region.
#[utoipa::path(
    get,
    path = "/api/sales/regions",
    responses(
        (status = 200, description = "Regional sales totals", body = RegionalSalesSchema)
    ),
    tags = ["stats"],
    operation_id = "regionalSales",
    security([])
)]
#[get("/api/sales/regions")]
pub async fn regional_sales(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(state.sales.regional_sales())
}

/// Missing-value counts per header column.
#[utoipa::path(
    get,
    path = "/api/missing",
    responses(
        (status = 200, description = "Missing cells per column, in header order", body = [ColumnMissingSchema])
    ),
    tags = ["stats"],
    operation_id = "missingValues",
    security([])
)]
#[get("/api/missing")]
pub async fn missing_values(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(state.sales.missing_counts())
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
