// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::score_password,
        crate::api::handlers::generator::analyze_password,
        crate::api::handlers::generator::list_classes
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::StrengthRequest,
            crate::api::types::StrengthResponse,
            crate::api::types::ClassInfo,
            crate::api::types::ClassListResponse,
            crate::models::CharacterClass,
            crate::models::StrengthTier,
            crate::models::StrengthAssessment
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Password generator with strength estimation",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config, port: u16) -> std::io::Result<()> {
    let address = config.api_address.clone();
    log::info!("Starting Passforge API server on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_generator_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/generator/password", "/generator/strength", "/generator/analysis/{pwd}", "/generator/classes"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
