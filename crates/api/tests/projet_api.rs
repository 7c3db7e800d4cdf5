//! Integration tests for the `/projects` endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{build_test_app, delete, get, post, put, seed_project, seed_user};

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_returns_201_with_id(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let app = build_test_app(pool);

    let (status, body) = post(
        &app,
        "/api/v1/projects",
        json!({ "nom": "Villa A", "client": "Client SA", "idAuteur": author }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Projet cree avec succes");
    assert!(body["idProjet"].is_i64());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_blank_nom(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let app = build_test_app(pool);

    let (status, body) = post(
        &app,
        "/api/v1/projects",
        json!({ "nom": "   ", "client": "Client SA", "idAuteur": author }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_project_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = get(&app, "/api/v1/projects/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_nests_plans_versions_and_documents(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let app = build_test_app(pool);
    let project_id = seed_project(&app, "Villa A", author).await;

    let (status, body) = post(
        &app,
        &format!("/api/v1/projects/{project_id}/plans"),
        json!({ "nom": "RDC" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let plan_id = body["idPlan"].as_i64().unwrap();

    let (status, body) = post(
        &app,
        &format!("/api/v1/projects/{project_id}/plans/{plan_id}/versions"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["numero"], 2);

    let (status, _) = post(
        &app,
        &format!("/api/v1/projects/{project_id}/documents"),
        json!({ "nom": "permis.pdf", "type": "application/pdf", "taille": "84 KB" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, &format!("/api/v1/projects/{project_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statut"], "En_attente");
    assert_eq!(body["plans"].as_array().unwrap().len(), 1);
    assert_eq!(body["plans"][0]["versions"].as_array().unwrap().len(), 2);
    assert_eq!(body["documents"].as_array().unwrap().len(), 1);
    assert_eq!(body["documents"][0]["type"], "application/pdf");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_carries_plan_counts_and_tags(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let app = build_test_app(pool);
    let project_id = seed_project(&app, "Villa A", author).await;

    post(
        &app,
        &format!("/api/v1/projects/{project_id}/plans"),
        json!({ "nom": "RDC" }),
    )
    .await;
    post(
        &app,
        &format!("/api/v1/projects/{project_id}/tags"),
        json!({ "nom": "Urgent" }),
    )
    .await;

    let (status, body) = get(&app, &format!("/api/v1/projects?userId={author}")).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["plansCount"], 1);
    assert_eq!(rows[0]["tags"], "Urgent");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_rejects_empty_payload(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let app = build_test_app(pool);
    let project_id = seed_project(&app, "Villa A", author).await;

    let (status, body) = put(&app, &format!("/api/v1/projects/{project_id}"), json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_rejects_unknown_statut_label(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let app = build_test_app(pool);
    let project_id = seed_project(&app, "Villa A", author).await;

    // The closed status enum rejects the label during deserialization,
    // before the handler runs.
    let (status, _) = put(
        &app,
        &format!("/api/v1/projects/{project_id}"),
        json!({ "statut": "Banane" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_statut_and_is_visible_in_detail(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let app = build_test_app(pool);
    let project_id = seed_project(&app, "Villa A", author).await;

    let (status, body) = put(
        &app,
        &format!("/api/v1/projects/{project_id}"),
        json!({ "statut": "En_cours" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Projet mis a jour avec succes");

    let (_, body) = get(&app, &format!("/api/v1/projects/{project_id}")).await;
    assert_eq!(body["statut"], "En_cours");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn member_sees_shared_project_in_list(pool: PgPool) {
    let alice = seed_user(&pool, "alice@metr.fr").await;
    let bob = seed_user(&pool, "bob@metr.fr").await;
    let app = build_test_app(pool);
    let project_id = seed_project(&app, "Villa A", alice).await;

    let (status, _) = post(
        &app,
        &format!("/api/v1/projects/{project_id}/members"),
        json!({ "idUtilisateur": bob, "role": "editeur" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, &format!("/api/v1/projects?userId={bob}")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = delete(
        &app,
        &format!("/api/v1/projects/{project_id}/members/{bob}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/api/v1/projects?userId={bob}")).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tag_detach_then_repeat_returns_404(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let app = build_test_app(pool);
    let project_id = seed_project(&app, "Villa A", author).await;

    let (status, body) = post(
        &app,
        &format!("/api/v1/projects/{project_id}/tags"),
        json!({ "nom": "Urgent" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let tag_id = body["idTag"].as_i64().unwrap();

    let (status, _) = delete(
        &app,
        &format!("/api/v1/projects/{project_id}/tags/{tag_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = delete(
        &app,
        &format!("/api/v1/projects/{project_id}/tags/{tag_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
