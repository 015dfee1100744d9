//! Route table, middleware stack and OpenAPI document.

use axum::{
    extract::Request,
    http::HeaderName,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        auth::{LoginDto, TokenDto},
        car::{CarDto, CarRequestDto},
        engine::{EngineDto, EngineRequestDto},
    },
    server::{
        controller::{auth, car, engine, health},
        middleware::auth::require_auth,
        state::AppState,
    },
};

/// Header carrying the per-request trace identifier.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

#[derive(OpenApi)]
#[openapi(
    info(title = "Carzone", description = "Car and engine inventory API"),
    paths(
        auth::login,
        health::health,
        car::get_car_by_id,
        car::get_cars_by_brand,
        car::create_car,
        car::update_car,
        car::delete_car,
        engine::get_engine_by_id,
        engine::create_engine,
        engine::update_engine,
        engine::delete_engine,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        LoginDto,
        TokenDto,
        CarDto,
        CarRequestDto,
        EngineDto,
        EngineRequestDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Token issuance"),
        (name = "health", description = "Liveness"),
        (name = "car", description = "Car management"),
        (name = "engine", description = "Engine management"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the application router.
///
/// Car and engine routes sit behind `require_auth`; login, health and the API docs are
/// public. Every response echoes an `x-trace-id` header, generated when the client
/// did not send one.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/cars", post(car::create_car))
        .route(
            "/cars/{id}",
            get(car::get_car_by_id)
                .put(car::update_car)
                .delete(car::delete_car),
        )
        .route("/cars/brand/{brand}", get(car::get_cars_by_brand))
        .route("/engines", post(engine::create_engine))
        .route(
            "/engines/{id}",
            get(engine::get_engine_by_id)
                .put(engine::update_engine)
                .delete(engine::delete_engine),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let trace_id = HeaderName::from_static(TRACE_ID_HEADER);

    Router::new()
        .route("/login", post(auth::login))
        .route("/health", get(health::health))
        .merge(protected)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(PropagateRequestIdLayer::new(trace_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let trace_id = request
                    .headers()
                    .get(TRACE_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    trace_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(trace_id, MakeRequestUuid))
}
