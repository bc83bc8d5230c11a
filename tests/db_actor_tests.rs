mod common;

use folio::FolioError;
use folio::db::{AboutPatch, ExperiencePatch, SkillPatch, UserCreate};
use folio_schema::{ExperienceChanges, NewExperience, NewSkill, SkillCategory, SkillChanges};

fn new_experience(title: &str) -> NewExperience {
    NewExperience {
        title: title.to_string(),
        company: "Acme".to_string(),
        period: "2021 - 2023".to_string(),
        description: "Built things".to_string(),
    }
}

#[tokio::test]
async fn experience_rows_round_trip_through_the_actor() {
    let db = folio::db::spawn(&common::temp_database_url("db-exp"))
        .await
        .unwrap();

    assert!(db.list_experiences().await.unwrap().is_empty());

    let first = db.create_experience(new_experience("First")).await.unwrap();
    assert_eq!(first.created_at, first.updated_at);
    assert!(!first.id.is_empty());
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = db.create_experience(new_experience("Second")).await.unwrap();
    assert_ne!(first.id, second.id);

    // Newest first.
    let titles: Vec<_> = db
        .list_experiences()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["Second", "First"]);

    let patched = db
        .patch_experience(ExperiencePatch {
            id: first.id.clone(),
            changes: ExperienceChanges {
                title: Some("First (renamed)".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(patched.title, "First (renamed)");
    assert_eq!(patched.company, "Acme");
    assert_eq!(patched.created_at, first.created_at);
    assert!(patched.updated_at >= first.updated_at);

    db.delete_experience(first.id.clone()).await.unwrap();
    assert!(matches!(
        db.delete_experience(first.id.clone()).await,
        Err(FolioError::NotFound { entity: "experience", .. })
    ));
    assert!(matches!(
        db.patch_experience(ExperiencePatch {
            id: first.id,
            changes: ExperienceChanges::default(),
        })
        .await,
        Err(FolioError::NotFound { .. })
    ));
    assert_eq!(db.list_experiences().await.unwrap().len(), 1);
}

#[tokio::test]
async fn skills_are_ordered_by_category_then_name() {
    let db = folio::db::spawn(&common::temp_database_url("db-skill"))
        .await
        .unwrap();

    for (name, category) in [
        ("React", SkillCategory::Frontend),
        ("Rust", SkillCategory::Backend),
        ("Postgres", SkillCategory::Database),
        ("Go", SkillCategory::Backend),
    ] {
        db.create_skill(NewSkill {
            name: name.to_string(),
            category,
        })
        .await
        .unwrap();
    }

    let listed: Vec<_> = db
        .list_skills()
        .await
        .unwrap()
        .into_iter()
        .map(|s| (s.category, s.name))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("Backend".to_string(), "Go".to_string()),
            ("Backend".to_string(), "Rust".to_string()),
            ("Database".to_string(), "Postgres".to_string()),
            ("Frontend".to_string(), "React".to_string()),
        ]
    );

    let go = db
        .list_skills()
        .await
        .unwrap()
        .into_iter()
        .find(|s| s.name == "Go")
        .unwrap();
    let moved = db
        .patch_skill(SkillPatch {
            id: go.id.clone(),
            changes: SkillChanges {
                name: None,
                category: Some(SkillCategory::DevOps),
            },
        })
        .await
        .unwrap();
    assert_eq!(moved.category, "DevOps");
    assert_eq!(moved.name, "Go");

    db.delete_skill(go.id.clone()).await.unwrap();
    assert!(db.delete_skill(go.id).await.is_err());
}

#[tokio::test]
async fn about_is_a_singleton() {
    let db = folio::db::spawn(&common::temp_database_url("db-about"))
        .await
        .unwrap();

    assert!(db.get_about().await.unwrap().is_none());

    let created = db.create_about("Hello".to_string()).await.unwrap();
    assert!(matches!(
        db.create_about("Again".to_string()).await,
        Err(FolioError::AboutExists)
    ));

    let saved = db.upsert_about("Updated".to_string()).await.unwrap();
    assert_eq!(saved.id, created.id);
    assert_eq!(saved.content, "Updated");
    assert_eq!(saved.created_at, created.created_at);

    let patched = db
        .patch_about(AboutPatch {
            id: created.id.clone(),
            content: Some("Patched".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(patched.content, "Patched");

    let stored = db.get_about().await.unwrap().unwrap();
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.content, "Patched");
}

#[tokio::test]
async fn upsert_creates_about_when_missing() {
    let db = folio::db::spawn(&common::temp_database_url("db-about-upsert"))
        .await
        .unwrap();

    let saved = db.upsert_about("First save".to_string()).await.unwrap();
    assert_eq!(saved.created_at, saved.updated_at);
    assert_eq!(db.get_about().await.unwrap().unwrap().id, saved.id);
}

#[tokio::test]
async fn users_are_unique_by_email() {
    let db = folio::db::spawn(&common::temp_database_url("db-user"))
        .await
        .unwrap();

    let create = UserCreate {
        email: "a@example.com".to_string(),
        name: None,
        password_hash: "$argon2id$placeholder".to_string(),
    };
    let created = db.create_user_if_absent(create.clone()).await.unwrap();
    assert!(created.is_some());
    assert!(db.create_user_if_absent(create).await.unwrap().is_none());

    let found = db
        .find_user_by_email("a@example.com".to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.identity().email, "a@example.com");
    assert!(
        db.find_user_by_email("b@example.com".to_string())
            .await
            .unwrap()
            .is_none()
    );
}
