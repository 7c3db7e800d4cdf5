//! Integration tests for the pricing catalog: articles and libraries.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{build_test_app, delete, get, post, put};

async fn seed_article(app: &axum::Router, libelle: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/v1/articles",
        json!({ "libelle": libelle, "unite": "m3", "prix": 120.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed article failed: {body}");
    body["id"].as_i64().expect("article id missing")
}

async fn seed_library(app: &axum::Router, nom: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/v1/bibliotheques",
        json!({ "nom": nom, "portee": "Entreprise" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed library failed: {body}");
    body["id"].as_i64().expect("library id missing")
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn article_create_echoes_the_row(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = post(
        &app,
        "/api/v1/articles",
        json!({ "libelle": "Beton C25/30", "lot": "Gros oeuvre", "unite": "m3", "prix": 120.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["libelle"], "Beton C25/30");
    assert_eq!(body["unite"], "m3");
    assert_eq!(body["prix"], 120.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn article_unite_defaults_to_unitless(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = post(
        &app,
        "/api/v1/articles",
        json!({ "libelle": "Porte interieure" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["unite"], "u");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn article_rejects_negative_price(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = post(
        &app,
        "/api/v1/articles",
        json!({ "libelle": "Beton", "prix": -5.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn library_rejects_unknown_scope(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = post(
        &app,
        "/api/v1/bibliotheques",
        json!({ "nom": "Ma biblio", "portee": "Galactique" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn library_collects_articles_and_counts_them(pool: PgPool) {
    let app = build_test_app(pool);
    let article_id = seed_article(&app, "Beton C25/30").await;
    let library_id = seed_library(&app, "Gros oeuvre").await;

    let (status, _) = post(
        &app,
        &format!("/api/v1/bibliotheques/{library_id}/articles"),
        json!({ "idArticle": article_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/api/v1/bibliotheques").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["articlesCount"], 1);

    let (_, body) = get(&app, &format!("/api/v1/bibliotheques/{library_id}")).await;
    assert_eq!(body["portee"], "Entreprise");
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["id"].as_i64(), Some(article_id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn adding_unknown_article_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let library_id = seed_library(&app, "Gros oeuvre").await;

    let (status, body) = post(
        &app,
        &format!("/api/v1/bibliotheques/{library_id}/articles"),
        json!({ "idArticle": 999999 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn removing_article_twice_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let article_id = seed_article(&app, "Beton C25/30").await;
    let library_id = seed_library(&app, "Gros oeuvre").await;
    post(
        &app,
        &format!("/api/v1/bibliotheques/{library_id}/articles"),
        json!({ "idArticle": article_id }),
    )
    .await;

    let uri = format!("/api/v1/bibliotheques/{library_id}/articles/{article_id}");
    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_library_leaves_its_articles(pool: PgPool) {
    let app = build_test_app(pool);
    let article_id = seed_article(&app, "Beton C25/30").await;
    let library_id = seed_library(&app, "Gros oeuvre").await;
    post(
        &app,
        &format!("/api/v1/bibliotheques/{library_id}/articles"),
        json!({ "idArticle": article_id }),
    )
    .await;

    let (status, _) = delete(&app, &format!("/api/v1/bibliotheques/{library_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, &format!("/api/v1/bibliotheques/{library_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The article survives the library.
    let (status, body) = get(&app, &format!("/api/v1/articles/{article_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["libelle"], "Beton C25/30");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_an_article_detaches_it_from_libraries(pool: PgPool) {
    let app = build_test_app(pool);
    let article_id = seed_article(&app, "Beton C25/30").await;
    let library_id = seed_library(&app, "Gros oeuvre").await;
    post(
        &app,
        &format!("/api/v1/bibliotheques/{library_id}/articles"),
        json!({ "idArticle": article_id }),
    )
    .await;

    let (status, _) = delete(&app, &format!("/api/v1/articles/{article_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/api/v1/bibliotheques/{library_id}")).await;
    assert!(body["articles"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn library_update_applies_partial_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let library_id = seed_library(&app, "Gros oeuvre").await;

    let (status, _) = put(
        &app,
        &format!("/api/v1/bibliotheques/{library_id}"),
        json!({ "nom": "Second oeuvre" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/api/v1/bibliotheques/{library_id}")).await;
    assert_eq!(body["nom"], "Second oeuvre");
    assert_eq!(body["portee"], "Entreprise");
}
