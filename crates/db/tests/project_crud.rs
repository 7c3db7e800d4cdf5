//! Integration tests for project CRUD against a real Postgres database.

use sqlx::PgPool;

use metr_db::models::project::{CreateProject, UpdateProject};
use metr_db::models::statut::ProjectStatus;
use metr_db::models::user::CreateUser;
use metr_db::repositories::{MembershipRepo, PlanRepo, ProjectRepo, TagRepo, UserRepo};

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            nom: "Testeur".to_string(),
        },
    )
    .await
    .expect("user insert failed")
    .id
}

fn new_project(nom: &str, id_auteur: i64) -> CreateProject {
    CreateProject {
        nom: nom.to_string(),
        client: "Client SA".to_string(),
        reference_interne: None,
        typologie: None,
        adresse: None,
        date_livraison: None,
        statut: None,
        id_auteur,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_to_en_attente(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let project = ProjectRepo::create(&pool, &new_project("Villa A", author))
        .await
        .unwrap();

    assert_eq!(project.statut, ProjectStatus::EnAttente);
    assert_eq!(project.nom, "Villa A");
    assert_eq!(project.client.as_deref(), Some("Client SA"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_honors_explicit_statut(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let mut input = new_project("Villa B", author);
    input.statut = Some(ProjectStatus::EnCours);

    let project = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(project.statut, ProjectStatus::EnCours);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_missing_returns_none(pool: PgPool) {
    let found = ProjectRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_provided_fields(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let created = ProjectRepo::create(&pool, &new_project("Villa A", author))
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        created.id,
        &UpdateProject {
            nom: Some("Villa A bis".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("project should exist");

    assert_eq!(updated.nom, "Villa A bis");
    // Untouched fields keep their values.
    assert_eq!(updated.client, created.client);
    assert_eq!(updated.statut, created.statut);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_same_statut_still_stamps_updated_at(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let created = ProjectRepo::create(&pool, &new_project("Villa A", author))
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        created.id,
        &UpdateProject {
            statut: Some(created.statut),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("project should exist");

    assert_eq!(updated.statut, created.statut);
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(
        &pool,
        999_999,
        &UpdateProject {
            nom: Some("fantome".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_for_user_includes_owned_and_shared(pool: PgPool) {
    let alice = seed_user(&pool, "alice@metr.fr").await;
    let bob = seed_user(&pool, "bob@metr.fr").await;

    let owned = ProjectRepo::create(&pool, &new_project("Villa A", alice))
        .await
        .unwrap();
    let shared = ProjectRepo::create(&pool, &new_project("Immeuble B", bob))
        .await
        .unwrap();
    let unrelated = ProjectRepo::create(&pool, &new_project("Hangar C", bob))
        .await
        .unwrap();

    MembershipRepo::add(&pool, shared.id, alice, "lecteur")
        .await
        .unwrap();

    let listed = ProjectRepo::list_for_user(&pool, alice).await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|p| p.id).collect();

    assert_eq!(listed.len(), 2);
    assert!(ids.contains(&owned.id));
    assert!(ids.contains(&shared.id));
    assert!(!ids.contains(&unrelated.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_carries_plan_count_and_tag_names(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let project = ProjectRepo::create(&pool, &new_project("Villa A", author))
        .await
        .unwrap();

    for nom in ["RDC", "Etage 1"] {
        PlanRepo::create_with_initial_version(
            &pool,
            project.id,
            &metr_db::models::plan::CreatePlan {
                nom: nom.to_string(),
                niveau: None,
                zone: None,
            },
        )
        .await
        .unwrap();
    }

    let urgent = TagRepo::create_or_get(&pool, "Urgent").await.unwrap();
    let beton = TagRepo::create_or_get(&pool, "Beton").await.unwrap();
    TagRepo::attach(&pool, project.id, urgent.id).await.unwrap();
    TagRepo::attach(&pool, project.id, beton.id).await.unwrap();

    let listed = ProjectRepo::list_for_user(&pool, author).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].plans_count, 2);
    let tags = listed[0].tags.as_deref().expect("tags should aggregate");
    assert!(tags.contains("Beton"), "{tags}");
    assert!(tags.contains("Urgent"), "{tags}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_most_recently_modified_first(pool: PgPool) {
    let author = seed_user(&pool, "a@metr.fr").await;
    let first = ProjectRepo::create(&pool, &new_project("Villa A", author))
        .await
        .unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Immeuble B", author))
        .await
        .unwrap();

    // Touching the older project moves it to the front.
    ProjectRepo::update(
        &pool,
        first.id,
        &UpdateProject {
            nom: Some("Villa A bis".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let listed = ProjectRepo::list_for_user(&pool, author).await.unwrap();
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}
