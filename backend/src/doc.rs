//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the service. It registers:
//!
//! - **Paths**: the HTML pages, auth form posts, statistics API, and health
//!   checks
//! - **Schemas**: wrappers for the domain error and the dataset aggregates so
//!   neither `crate::domain` nor `sales-data` depends on utoipa
//! - **Security**: session cookie authentication scheme
//!
//! The generated specification is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::auth::{LoginForm, SignupForm};
use crate::inbound::http::schemas::{
    CategoryCountSchema, CategorySalesSchema, ColumnMissingSchema, ErrorCodeSchema, ErrorSchema,
    OverviewSchema, RegionalSalesSchema, SalesRecordSchema, SummarySchema, TopSellerSchema,
    YearSalesSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login or POST /signup.",
            ))),
        );
    }
}

/// OpenAPI document for the service.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Video game sales API",
        description = "Session-gated dashboard plus read-only sales statistics and health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::pages::home,
        crate::inbound::http::pages::auth_page,
        crate::inbound::http::pages::login_page,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::logout,
        crate::inbound::http::stats::summary,
        crate::inbound::http::stats::overview,
        crate::inbound::http::stats::top_games,
        crate::inbound::http::stats::top_sellers,
        crate::inbound::http::stats::sales_by_year,
        crate::inbound::http::stats::sales_by_platform,
        crate::inbound::http::stats::sales_by_publisher,
        crate::inbound::http::stats::sales_by_genre,
        crate::inbound::http::stats::regional_sales,
        crate::inbound::http::stats::missing_values,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LoginForm,
        SignupForm,
        CategoryCountSchema,
        SummarySchema,
        OverviewSchema,
        SalesRecordSchema,
        TopSellerSchema,
        YearSalesSchema,
        CategorySalesSchema,
        RegionalSalesSchema,
        ColumnMissingSchema,
    )),
    tags(
        (name = "pages", description = "Server-rendered HTML pages"),
        (name = "auth", description = "Signup, login, and logout form handlers"),
        (name = "stats", description = "Read-only sales statistics"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
