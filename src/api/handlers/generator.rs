// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};

use crate::api::types::{
    ClassInfo, ClassListResponse, PasswordGenerationRequest, PasswordGenerationResponse,
    StrengthRequest, StrengthResponse,
};
use crate::core::config::Config;
use crate::generators::{strength, PasswordGenerator};
use crate::models::{CharacterClass, GenerationRequest};

/// Generate a password
///
/// Generates a password from the requested length and character classes.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password, or the no-selection result", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid length", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let length = generation_req.length.unwrap_or(config.default_length);

    // Validate options
    if let Err(e) = config.check_length(length) {
        warn!("Rejected generation request: {}", e);
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e.to_string()));
    }

    let classes = generation_req.classes(&config.default_classes);
    let any_enabled = !classes.is_empty();
    let request = match GenerationRequest::new(length, classes) {
        Ok(request) => request,
        Err(e) => {
            return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e.to_string()));
        }
    };

    let generator = PasswordGenerator::new(config.rng_source);
    let generated = generator.generate_password(&request);
    let strength = generator.analyze_password_strength(&generated, length, any_enabled);
    debug!("Generated password for length {}: {}", length, strength.tier);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        no_selection: generated.is_no_selection(),
        password: generated.as_password().map(str::to_string),
        length: Some(length),
        strength: Some(strength),
        error: None,
    })
}

/// Score a password
///
/// Scores a password against a target length, the way the widget does after
/// every change.
#[utoipa::path(
    post,
    path = "/generator/strength",
    tag = "Generator",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Strength assessment", body = StrengthResponse)
    )
)]
pub async fn score_password(req: web::Json<StrengthRequest>) -> impl Responder {
    let target_length = req.target_length.unwrap_or_else(|| req.password.chars().count());
    let assessment = strength::score_str(&req.password, target_length, req.any_enabled.unwrap_or(true));

    HttpResponse::Ok().json(StrengthResponse {
        success: true,
        label: assessment.tier.label().to_string(),
        strength: assessment,
    })
}

/// Analyze password strength
///
/// Scores a URL-encoded password using its own length as the target length.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze")
    ),
    responses(
        (status = 200, description = "Strength assessment", body = StrengthResponse)
    )
)]
pub async fn analyze_password(path: web::Path<String>) -> impl Responder {
    let password = path.into_inner();

    // URL decode the password if needed
    let decoded_password = match urlencoding::decode(&password) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => password,
    };

    let assessment = strength::score_str(&decoded_password, decoded_password.chars().count(), true);

    HttpResponse::Ok().json(StrengthResponse {
        success: true,
        label: assessment.tier.label().to_string(),
        strength: assessment,
    })
}

/// List character classes
///
/// Returns every character class with its alphabet and the accepted length range.
#[utoipa::path(
    get,
    path = "/generator/classes",
    tag = "Generator",
    responses(
        (status = 200, description = "Character classes", body = ClassListResponse)
    )
)]
pub async fn list_classes(config: web::Data<Config>) -> impl Responder {
    let classes = CharacterClass::ALL
        .into_iter()
        .map(|class| ClassInfo {
            class,
            alphabet: class.alphabet().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(ClassListResponse {
        success: true,
        classes,
        min_length: config.min_length,
        max_length: config.max_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::configure_routes;
    use crate::models::{StrengthTier, SYMBOL_CHARS};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Config::default()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn generates_with_defaults() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({}))
            .to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        assert!(!resp.no_selection);
        let password = resp.password.unwrap();
        assert_eq!(password.len(), 16);
        assert_eq!(resp.strength.unwrap().tier, StrengthTier::Strong);
    }

    #[actix_web::test]
    async fn honours_requested_classes() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({"length": 8, "uppercase": false, "digits": false, "symbols": false}))
            .to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        let password = resp.password.unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        let strength = resp.strength.unwrap();
        assert_eq!(strength.tier, StrengthTier::Weak);
        assert_eq!(strength.active_bars, 2);
    }

    #[actix_web::test]
    async fn no_classes_is_not_an_error() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({"uppercase": false, "lowercase": false, "digits": false, "symbols": false}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: PasswordGenerationResponse = test::read_body_json(resp).await;
        assert!(body.success);
        assert!(body.no_selection);
        assert!(body.password.is_none());
        let strength = body.strength.unwrap();
        assert_eq!(strength.tier, StrengthTier::NoSelection);
        assert_eq!(strength.active_bars, 0);
    }

    #[actix_web::test]
    async fn rejects_out_of_range_length() {
        let app = app!();
        for length in [0, 3, 65, 1000] {
            let req = test::TestRequest::post()
                .uri("/generator/password")
                .set_json(json!({"length": length}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "length {length}");
            let body: PasswordGenerationResponse = test::read_body_json(resp).await;
            assert!(!body.success);
            assert!(body.error.is_some());
        }
    }

    #[actix_web::test]
    async fn scores_against_target_length() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/generator/strength")
            .set_json(json!({"password": "abcdefghijklmnopqrst", "target_length": 20}))
            .to_request();
        let resp: StrengthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.strength.diversity_score, 1);
        assert_eq!(resp.strength.tier, StrengthTier::Weak);
        assert_eq!(resp.label, "WEAK");

        let req = test::TestRequest::post()
            .uri("/generator/strength")
            .set_json(json!({"password": "Aa1!", "any_enabled": false}))
            .to_request();
        let resp: StrengthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.strength.tier, StrengthTier::NoSelection);
        assert_eq!(resp.label, "SELECT OPTIONS");
    }

    #[actix_web::test]
    async fn analysis_decodes_path() {
        let app = app!();
        // "Ab1!Ab1!Ab1!" URL-encoded
        let req = test::TestRequest::get()
            .uri("/generator/analysis/Ab1%21Ab1%21Ab1%21")
            .to_request();
        let resp: StrengthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.strength.diversity_score, 4);
        assert_eq!(resp.strength.tier, StrengthTier::Strong);
    }

    #[actix_web::test]
    async fn lists_classes() {
        let app = app!();
        let req = test::TestRequest::get().uri("/generator/classes").to_request();
        let resp: ClassListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.classes.len(), 4);
        assert_eq!(resp.classes[3].alphabet, SYMBOL_CHARS);
        assert_eq!((resp.min_length, resp.max_length), (4, 64));
    }
}
