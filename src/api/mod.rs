// API layer - HTTP endpoints
pub mod health;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;

use poem::{middleware::Tracing, Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// Compose the HTTP application
///
/// Item and health endpoints sit at the root, Swagger UI under `/docs` and the
/// raw OpenAPI document at `/openapi.json`.
pub fn build_app(app_data: &AppData, server_url: &str) -> impl Endpoint + use<> {
    let health_api = HealthApi::new(
        app_data.service_name.clone(),
        app_data.item_store.backend_name(),
    );
    let items_api = ItemsApi::new(app_data.item_store.clone());

    let api_service = OpenApiService::new(
        (health_api, items_api),
        "Item Catalog API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url.to_string());

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .with(Tracing)
}
