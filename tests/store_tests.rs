//! Store-level tests against a real on-disk SQLite database.

use pawdex::db::{AddOutcome, Store};

async fn temp_store() -> Store {
    let db_path =
        std::env::temp_dir().join(format!("pawdex-store-test-{}.db", uuid::Uuid::new_v4()));

    Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to open store")
}

#[tokio::test]
async fn test_ping() {
    let store = temp_store().await;
    store.ping().await.expect("ping failed");
}

#[tokio::test]
async fn test_add_then_list_contains_it_exactly_once() {
    let store = temp_store().await;

    let outcome = store
        .add_favourite("https://img/1.jpg", "beagle")
        .await
        .unwrap();
    assert!(matches!(outcome, AddOutcome::Added(_)));

    let favourites = store.list_favourites().await.unwrap();
    assert_eq!(favourites.len(), 1);
    assert_eq!(favourites[0].image_url, "https://img/1.jpg");
    assert_eq!(favourites[0].breed, "beagle");
}

#[tokio::test]
async fn test_duplicate_add_is_a_distinct_outcome() {
    let store = temp_store().await;

    let first = store
        .add_favourite("https://img/1.jpg", "beagle")
        .await
        .unwrap();
    assert!(matches!(first, AddOutcome::Added(_)));

    let second = store
        .add_favourite("https://img/1.jpg", "husky")
        .await
        .unwrap();
    assert_eq!(second, AddOutcome::Duplicate);

    // The duplicate attempt must not have touched the table.
    let favourites = store.list_favourites().await.unwrap();
    assert_eq!(favourites.len(), 1);
    assert_eq!(favourites[0].breed, "beagle");
}

#[tokio::test]
async fn test_ids_keep_increasing_after_removal() {
    let store = temp_store().await;

    let AddOutcome::Added(first_id) = store
        .add_favourite("https://img/1.jpg", "beagle")
        .await
        .unwrap()
    else {
        panic!("expected insert");
    };

    assert_eq!(store.remove_favourite("https://img/1.jpg").await.unwrap(), 1);

    let AddOutcome::Added(second_id) = store
        .add_favourite("https://img/2.jpg", "beagle")
        .await
        .unwrap()
    else {
        panic!("expected insert");
    };

    assert!(second_id > first_id);
}

#[tokio::test]
async fn test_remove_returns_count() {
    let store = temp_store().await;

    store
        .add_favourite("https://img/1.jpg", "beagle")
        .await
        .unwrap();

    assert_eq!(store.remove_favourite("https://img/1.jpg").await.unwrap(), 1);
    assert_eq!(store.remove_favourite("https://img/1.jpg").await.unwrap(), 0);
    assert!(store.list_favourites().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_missing_leaves_state_unchanged() {
    let store = temp_store().await;

    store
        .add_favourite("https://img/1.jpg", "beagle")
        .await
        .unwrap();

    assert_eq!(
        store
            .remove_favourite("https://img/unknown.jpg")
            .await
            .unwrap(),
        0
    );
    assert_eq!(store.list_favourites().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_orders_most_recent_first() {
    let store = temp_store().await;

    for url in [
        "https://img/a.jpg",
        "https://img/b.jpg",
        "https://img/c.jpg",
    ] {
        store.add_favourite(url, "beagle").await.unwrap();
    }

    let urls: Vec<String> = store
        .list_favourites()
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.image_url)
        .collect();

    assert_eq!(
        urls,
        vec![
            "https://img/c.jpg",
            "https://img/b.jpg",
            "https://img/a.jpg"
        ]
    );
}
