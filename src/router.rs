use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::role::require_admin;
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::cart::router::init_cart_router;
use crate::modules::categories::router::init_categories_router;
use crate::modules::customers::router::init_customers_router;
use crate::modules::discounts::router::init_discounts_router;
use crate::modules::orders::router::init_orders_router;
use crate::modules::payments::router::init_payments_router;
use crate::modules::products::router::init_products_router;
use crate::modules::reviews::router::init_reviews_router;
use crate::modules::shipping::router::init_shipping_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/products", init_products_router())
                .nest("/categories", init_categories_router())
                .nest("/cart", init_cart_router())
                .nest("/discounts", init_discounts_router())
                .nest("/orders", init_orders_router())
                .nest("/shipping", init_shipping_router())
                .nest("/payments", init_payments_router())
                .nest("/customers", init_customers_router())
                .nest("/reviews", init_reviews_router())
                .nest(
                    "/admin",
                    init_admin_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                ),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
