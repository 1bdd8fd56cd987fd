//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::auth::{login, logout, signup};
use crate::inbound::http::error::{not_found, query_error_handler};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::pages::{auth_page, home, login_page};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::stats::{
    missing_values, overview, regional_sales, sales_by_genre, sales_by_platform,
    sales_by_publisher, sales_by_year, summary, top_games, top_sellers,
};

/// Session cookie lifetime.
const SESSION_TTL_HOURS: i64 = 2;

/// Everything the application factory needs per worker.
#[derive(Clone)]
pub struct AppDependencies {
    /// Shared readiness state.
    pub health_state: web::Data<HealthState>,
    /// Session gate and dataset handles.
    pub http_state: web::Data<HttpState>,
    /// Cookie encryption key.
    pub key: Key,
    /// Whether session cookies carry `Secure`.
    pub cookie_secure: bool,
    /// Session cookie `SameSite` policy.
    pub same_site: SameSite,
}

/// Assemble the application: session cookies, tracing, pages, form posts,
/// the statistics API, health checks, and the JSON 404 fallback.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(actix_web::cookie::time::Duration::hours(SESSION_TTL_HOURS)),
        )
        .build();

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(session)
        .wrap(Trace)
        .service(home)
        .service(auth_page)
        .service(login_page)
        .service(login)
        .service(signup)
        .service(logout)
        .service(summary)
        .service(overview)
        .service(top_games)
        .service(top_sellers)
        .service(sales_by_year)
        .service(sales_by_platform)
        .service(sales_by_publisher)
        .service(sales_by_genre)
        .service(regional_sales)
        .service(missing_values)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(not_found))
}

/// Construct an Actix HTTP server using the provided state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state marked ready once the listener
///   is bound.
/// - `http_state`: session gate and dataset handles shared by all workers.
/// - `config`: session cookie settings and bind address.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests;
