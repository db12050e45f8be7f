//! Integration tests for playlists vertical slice
//!
//! Tests playlist operations including:
//! - Draft-by-default creation and description bounds
//! - Idempotent publishing, including concurrent callers
//! - Insert-or-ignore song membership
//! - Listing filters and ordering
//! - Cascading deletes


use melodia_core::{types::*, EntityKind, MelodiaError};
use test_helpers::*;

fn description(len: usize) -> String {
    "x".repeat(len)
}

#[tokio::test]
async fn test_create_playlist_is_draft() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = melodia_storage::playlists::create(
        pool,
        CreatePlaylist::new("Road Trip", description(52)),
    )
    .await
    .expect("Failed to create playlist");

    assert_eq!(playlist.name, "Road Trip");
    assert!(!playlist.is_published);
    assert!(playlist.published_at.is_none());
    assert!(playlist.songs.is_empty());
    assert_eq!(playlist.status(), PlaylistStatus::Draft);

    let retrieved = melodia_storage::playlists::get_by_id(pool, playlist.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(retrieved, playlist);
}

#[tokio::test]
async fn test_description_bounds() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    for len in [50, 255] {
        melodia_storage::playlists::create(pool, CreatePlaylist::new("Edge", description(len)))
            .await
            .unwrap_or_else(|e| panic!("len {len} should be accepted: {e}"));
    }

    for len in [49, 256] {
        let err =
            melodia_storage::playlists::create(pool, CreatePlaylist::new("Edge", description(len)))
                .await
                .unwrap_err();
        assert!(matches!(err, MelodiaError::Validation(_)), "len {len}");
    }

    let all = melodia_storage::playlists::get_all(pool, PublishedFilter::All)
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_road_trip_scenario() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = melodia_storage::playlists::create(
        pool,
        CreatePlaylist::new("Road Trip", description(52)),
    )
    .await
    .unwrap();
    assert!(!playlist.is_published);

    let published = melodia_storage::playlists::publish(pool, playlist.id)
        .await
        .unwrap();
    assert!(published.is_published);
    assert!(published.published_at.is_some());

    let err = melodia_storage::playlists::add_song(pool, playlist.id, SongId::new(7))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MelodiaError::NotFound {
            entity: EntityKind::Song,
            id: 7
        }
    ));
}

#[tokio::test]
async fn test_publish_is_idempotent() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = create_test_playlist(pool, "Chill").await;

    let first = melodia_storage::playlists::publish(pool, playlist.id)
        .await
        .unwrap();
    tick().await;
    let second = melodia_storage::playlists::publish(pool, playlist.id)
        .await
        .unwrap();

    assert!(second.is_published);
    assert_eq!(second.published_at, first.published_at);
    assert_eq!(second.updated_at, first.updated_at);
}

#[tokio::test]
async fn test_publish_missing_playlist() {
    let test_db = TestDb::new().await;

    let err = melodia_storage::playlists::publish(test_db.pool(), PlaylistId::new(5))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        MelodiaError::NotFound {
            entity: EntityKind::Playlist,
            id: 5
        }
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_publish_converges() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool().clone();

    let playlist_id = create_test_playlist(&pool, "Race").await.id;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move { melodia_storage::playlists::publish(&pool, playlist_id).await })
        })
        .collect();

    let mut published_at = Vec::new();
    for handle in handles {
        let result = handle.await.expect("task panicked").expect("publish failed");
        assert!(result.is_published);
        published_at.push(result.published_at);
    }

    assert!(published_at.iter().all(|p| *p == published_at[0]));
}

#[tokio::test]
async fn test_add_song_is_idempotent() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = create_test_song(pool, "Hey Jude", "The Beatles").await;
    let playlist = create_test_playlist(pool, "Classics").await;

    let first = melodia_storage::playlists::add_song(pool, playlist.id, song.id)
        .await
        .unwrap();
    assert_eq!(first.songs.len(), 1);
    assert!(first.updated_at >= playlist.updated_at);

    tick().await;
    let second = melodia_storage::playlists::add_song(pool, playlist.id, song.id)
        .await
        .unwrap();

    assert_eq!(second.songs.len(), 1);
    assert_eq!(second.songs[0].added_at, first.songs[0].added_at);
    assert_eq!(second.updated_at, first.updated_at);
    assert_eq!(count_memberships(pool).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_add_song_keeps_one_membership() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool().clone();

    let song_id = create_test_song(&pool, "Contended", "Artist").await.id;
    let playlist_id = create_test_playlist(&pool, "Race").await.id;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move {
                melodia_storage::playlists::add_song(&pool, playlist_id, song_id).await
            })
        })
        .collect();

    let mut added_at = Vec::new();
    for handle in handles {
        let result = handle.await.expect("task panicked").expect("add_song failed");
        assert_eq!(result.songs.len(), 1);
        assert_eq!(result.songs[0].id, song_id);
        added_at.push(result.songs[0].added_at);
    }

    assert_eq!(count_memberships(&pool).await, 1);
    assert!(added_at.iter().all(|a| *a == added_at[0]));
}

#[tokio::test]
async fn test_add_song_expands_song_details() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = create_test_song(pool, "Bohemian Rhapsody", "Queen").await;
    let playlist = create_test_playlist(pool, "Rock").await;

    let updated = melodia_storage::playlists::add_song(pool, playlist.id, song.id)
        .await
        .unwrap();

    let member = &updated.songs[0];
    assert_eq!(member.id, song.id);
    assert_eq!(member.title, "Bohemian Rhapsody");
    assert_eq!(member.artist, "Queen");
}

#[tokio::test]
async fn test_membership_is_per_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = create_test_song(pool, "Shared", "Artist").await;
    let p1 = create_test_playlist(pool, "One").await;
    let p2 = create_test_playlist(pool, "Two").await;

    melodia_storage::playlists::add_song(pool, p1.id, song.id)
        .await
        .unwrap();
    melodia_storage::playlists::add_song(pool, p2.id, song.id)
        .await
        .unwrap();

    for id in [p1.id, p2.id] {
        let playlist = melodia_storage::playlists::get_by_id(pool, id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(playlist.songs.len(), 1);
        assert!(playlist.contains(song.id));
    }
}

#[tokio::test]
async fn test_songs_ordered_newest_membership_first() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = create_test_playlist(pool, "Ordered").await;
    let s1 = create_test_song(pool, "One", "Artist").await;
    let s2 = create_test_song(pool, "Two", "Artist").await;
    let s3 = create_test_song(pool, "Three", "Artist").await;

    for song in [&s1, &s2, &s3] {
        melodia_storage::playlists::add_song(pool, playlist.id, song.id)
            .await
            .unwrap();
        tick().await;
    }

    let playlist = melodia_storage::playlists::get_by_id(pool, playlist.id)
        .await
        .unwrap()
        .unwrap();
    let ids: Vec<SongId> = playlist.songs.iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![s3.id, s2.id, s1.id]);
}

#[tokio::test]
async fn test_add_song_missing_song_reported_first() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    // Neither exists
    let err = melodia_storage::playlists::add_song(pool, PlaylistId::new(1), SongId::new(1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MelodiaError::NotFound {
            entity: EntityKind::Song,
            ..
        }
    ));

    // Song exists, playlist does not
    let song = create_test_song(pool, "Orphan", "Artist").await;
    let err = melodia_storage::playlists::add_song(pool, PlaylistId::new(99), song.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MelodiaError::NotFound {
            entity: EntityKind::Playlist,
            id: 99
        }
    ));

    assert_eq!(count_memberships(pool).await, 0);
}

#[tokio::test]
async fn test_list_published_filter() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let a = create_test_playlist(pool, "A").await;
    tick().await;
    let b = create_test_playlist(pool, "B").await;
    tick().await;
    let c = create_test_playlist(pool, "C").await;

    // Publish C before B so publish order differs from creation order
    melodia_storage::playlists::publish(pool, c.id).await.unwrap();
    tick().await;
    melodia_storage::playlists::publish(pool, b.id).await.unwrap();

    let published = melodia_storage::playlists::get_all(pool, PublishedFilter::Published)
        .await
        .unwrap();
    let ids: Vec<PlaylistId> = published.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![b.id, c.id]);
    assert!(published.iter().all(|p| p.is_published));

    let all = melodia_storage::playlists::get_all(pool, PublishedFilter::All)
        .await
        .unwrap();
    let ids: Vec<PlaylistId> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[tokio::test]
async fn test_list_includes_songs() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = create_test_song(pool, "Listed", "Artist").await;
    let draft = create_test_playlist(pool, "Draft").await;
    let public = create_test_playlist(pool, "Public").await;

    melodia_storage::playlists::add_song(pool, draft.id, song.id)
        .await
        .unwrap();
    melodia_storage::playlists::add_song(pool, public.id, song.id)
        .await
        .unwrap();
    melodia_storage::playlists::publish(pool, public.id)
        .await
        .unwrap();

    let all = melodia_storage::playlists::get_all(pool, PublishedFilter::All)
        .await
        .unwrap();
    assert!(all.iter().all(|p| p.contains(song.id)));

    let published = melodia_storage::playlists::get_all(pool, PublishedFilter::Published)
        .await
        .unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].songs.len(), 1);
}

#[tokio::test]
async fn test_delete_playlist_cascades() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = create_test_song(pool, "Survivor", "Artist").await;
    let playlist = create_test_playlist(pool, "Doomed").await;
    melodia_storage::playlists::add_song(pool, playlist.id, song.id)
        .await
        .unwrap();

    melodia_storage::playlists::delete(pool, playlist.id)
        .await
        .unwrap();

    assert!(melodia_storage::playlists::get_by_id(pool, playlist.id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(count_memberships(pool).await, 0);

    // Songs are not owned by playlists
    assert!(melodia_storage::songs::get_by_id(pool, song.id)
        .await
        .unwrap()
        .is_some());

    let err = melodia_storage::playlists::delete(pool, playlist.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MelodiaError::NotFound {
            entity: EntityKind::Playlist,
            ..
        }
    ));
}

#[tokio::test]
async fn test_storage_context_maps_missing_to_not_found() {
    use melodia_core::CatalogStorage;
    use melodia_storage::LocalStorageContext;

    let test_db = TestDb::new().await;
    let storage = LocalStorageContext::new(test_db.pool().clone());

    let err = storage.get_playlist(PlaylistId::new(3)).await.unwrap_err();
    assert!(matches!(
        err,
        MelodiaError::NotFound {
            entity: EntityKind::Playlist,
            id: 3
        }
    ));

    let err = storage.get_song(SongId::new(4)).await.unwrap_err();
    assert!(matches!(
        err,
        MelodiaError::NotFound {
            entity: EntityKind::Song,
            id: 4
        }
    ));
}
