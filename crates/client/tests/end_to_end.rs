use std::net::SocketAddr;

use client::vm::{chapter_progress, overall_stats, resolve_chapter, ChapterSelection};
use client::{ApiClient, ClientError, CurriculumStore};
use curriculum_core::model::TopicId;
use storage::repository::Storage;
use storage::seed::seed_if_empty;

async fn spawn_server() -> SocketAddr {
    let storage = Storage::in_memory();
    seed_if_empty(storage.curriculum.as_ref())
        .await
        .expect("seed");
    let app = server::create_router(storage);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

#[tokio::test]
async fn fetches_cached_tree_and_resolves_navigation() {
    let addr = spawn_server().await;
    let mut store = CurriculumStore::new(ApiClient::new(format!("http://{addr}")));

    let tree = store.curriculum().await.expect("fetch");
    assert_eq!(tree.len(), 8);

    // no route param: redirect to the very first chapter
    let first_chapter = tree[0].chapters[0].id;
    assert_eq!(
        resolve_chapter(tree, None),
        ChapterSelection::Redirect(first_chapter)
    );

    assert!(store.is_cached());
}

#[tokio::test]
async fn toggle_invalidates_and_refetch_rederives_progress() {
    let addr = spawn_server().await;
    let mut store = CurriculumStore::new(ApiClient::new(format!("http://{addr}")));

    let tree = store.curriculum().await.expect("fetch");
    let chapter_id = tree[0].chapters[0].id;
    let concept = &tree[0].chapters[0].concepts[0];
    let topic_ids: Vec<TopicId> = concept.topics.iter().map(|t| t.id).collect();
    assert!(!topic_ids.is_empty());
    assert_eq!(overall_stats(tree).completed_concepts, 0);

    // complete every topic of the first concept
    for id in &topic_ids {
        let updated = store.toggle_topic(*id, true).await.expect("toggle");
        assert!(updated.completed);
        assert!(!store.is_cached());
    }

    let tree = store.curriculum().await.expect("refetch");
    let stats = overall_stats(tree);
    assert_eq!(stats.completed_concepts, 1);

    match resolve_chapter(tree, Some(chapter_id)) {
        ChapterSelection::Selected { chapter, .. } => {
            let vm = chapter_progress(chapter);
            assert_eq!(vm.completed, topic_ids.len());
            assert!(vm.total > vm.completed);
            assert!(!vm.done);
        }
        other => panic!("unexpected selection: {other:?}"),
    }
}

#[tokio::test]
async fn toggle_unknown_topic_keeps_cache_and_surfaces_not_found() {
    let addr = spawn_server().await;
    let mut store = CurriculumStore::new(ApiClient::new(format!("http://{addr}")));

    store.curriculum().await.expect("fetch");
    assert!(store.is_cached());

    let err = store
        .toggle_topic(TopicId::new(9_999_999), true)
        .await
        .expect_err("missing topic");
    assert!(matches!(err, ClientError::TopicNotFound));

    // a failed toggle does not discard the last known tree
    assert!(store.is_cached());
}
