//! Integration tests for pool setup and migrations

use melodia_storage::StorageError;

#[tokio::test]
async fn test_invalid_url_is_connection_error() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_url = format!(
        "sqlite://{}?mode=sideways",
        temp_dir.path().join("test.db").display()
    );

    let err = melodia_storage::create_pool(&db_url, 1).await.unwrap_err();

    assert!(matches!(err, StorageError::Connection(_)));
    let core: melodia_core::MelodiaError = err.into();
    assert!(matches!(core, melodia_core::MelodiaError::Storage(_)));
}

#[tokio::test]
async fn test_migrations_are_rerunnable() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let pool = melodia_storage::create_pool(&db_url, 1).await.unwrap();

    melodia_storage::run_migrations(&pool).await.unwrap();
    melodia_storage::run_migrations(&pool).await.unwrap();

    let tables: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('songs', 'playlists', 'playlist_songs')",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(tables, 3);
}
