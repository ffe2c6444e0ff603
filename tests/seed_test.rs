//! These tests write to a real database. They run only when `COSMOS_MONGO_URL`
//! is set (directly or via `.env`) and use the `pettrack_seed_test` database.

use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::Database;
use pettrack_seed::config::{database, settings::Settings};
use pettrack_seed::modules::followup::{model::Followup, seed::seed_followups};
use pettrack_seed::modules::reward::{model::Reward, seed::seed_rewards};
use pettrack_seed::replace_collection;

const TEST_DATABASE: &str = "pettrack_seed_test";

async fn setup_test_db() -> Option<Database> {
    dotenvy::dotenv().ok();

    let settings = match Settings::from_lookup(|key| match key {
        "COSMOS_DB_NAME" => Some(TEST_DATABASE.to_string()),
        _ => std::env::var(key).ok(),
    }) {
        Ok(settings) => settings,
        Err(_) => {
            eprintln!("COSMOS_MONGO_URL not set, skipping");
            return None;
        }
    };

    Some(database::connect(&settings).await.unwrap())
}

async fn fetch_in_insert_order<T>(db: &Database, name: &str) -> Vec<T>
where
    T: serde::de::DeserializeOwned + Unpin + Send + Sync,
{
    db.collection::<T>(name)
        .find(doc! {})
        .sort(doc! { "_id": 1 })
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_replace_collection_count_matches_input() {
    let Some(db) = setup_test_db().await else { return };
    let name = "replace_count";

    let records = vec![doc! { "n": 1 }, doc! { "n": 2 }, doc! { "n": 3 }, doc! { "n": 4 }];
    let inserted = replace_collection(&db, name, &records).await.unwrap();

    assert_eq!(inserted, 4);
    let stored = db.collection::<Document>(name).count_documents(doc! {}).await.unwrap();
    assert_eq!(stored, 4);
}

#[tokio::test]
async fn test_replace_collection_removes_extra_documents() {
    let Some(db) = setup_test_db().await else { return };
    let name = "replace_extra";

    seed_rewards(&db, name).await.unwrap();
    db.collection::<Document>(name)
        .insert_one(doc! { "title": "Unrelated", "cost": 1 })
        .await
        .unwrap();

    seed_rewards(&db, name).await.unwrap();

    let stored = db
        .collection::<Document>(name)
        .count_documents(doc! { "title": "Unrelated" })
        .await
        .unwrap();
    assert_eq!(stored, 0);
    let rewards: Vec<Reward> = fetch_in_insert_order(&db, name).await;
    assert_eq!(rewards.len(), 3);
}

#[tokio::test]
async fn test_empty_records_leave_collection_empty() {
    let Some(db) = setup_test_db().await else { return };
    let name = "replace_empty";

    replace_collection(&db, name, &[doc! { "n": 1 }]).await.unwrap();
    let inserted = replace_collection::<Document>(&db, name, &[]).await.unwrap();

    assert_eq!(inserted, 0);
    let stored = db.collection::<Document>(name).count_documents(doc! {}).await.unwrap();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn test_seed_end_to_end() {
    let Some(db) = setup_test_db().await else { return };
    let followups_name = "e2e_followups";
    let rewards_name = "e2e_rewards";

    assert_eq!(seed_followups(&db, followups_name).await.unwrap(), 3);
    assert_eq!(seed_rewards(&db, rewards_name).await.unwrap(), 3);

    let followups: Vec<Followup> = fetch_in_insert_order(&db, followups_name).await;
    let pets: Vec<&str> = followups.iter().map(|f| f.pet_name.as_str()).collect();
    assert_eq!(pets, vec!["Rocky", "Luna", "Milo"]);

    let rewards: Vec<Reward> = fetch_in_insert_order(&db, rewards_name).await;
    let titles: Vec<&str> = rewards.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Cepillo profesional", "Desparasitación (1 aplicación)", "Snack saludable (pack)"]
    );
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let Some(db) = setup_test_db().await else { return };
    let followups_name = "idempotent_followups";
    let rewards_name = "idempotent_rewards";

    seed_followups(&db, followups_name).await.unwrap();
    seed_rewards(&db, rewards_name).await.unwrap();
    let first_followups: Vec<Followup> = fetch_in_insert_order(&db, followups_name).await;
    let first_rewards: Vec<Reward> = fetch_in_insert_order(&db, rewards_name).await;

    seed_followups(&db, followups_name).await.unwrap();
    seed_rewards(&db, rewards_name).await.unwrap();
    let second_followups: Vec<Followup> = fetch_in_insert_order(&db, followups_name).await;
    let second_rewards: Vec<Reward> = fetch_in_insert_order(&db, rewards_name).await;

    assert_eq!(first_followups, second_followups);
    assert_eq!(first_rewards, second_rewards);
    assert_eq!(second_followups.len(), 3);
    assert_eq!(second_rewards.len(), 3);
}
