use curriculum_core::model::TopicId;
use curriculum_core::progress;
use storage::repository::{CurriculumRepository, NewChapter, NewConcept, NewTopic, NewUnit};
use storage::seed::seed_if_empty;
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

async fn insert_branch(repo: &SqliteRepository) -> (TopicId, TopicId) {
    let unit_id = repo
        .insert_unit(NewUnit {
            title: "UNIDADE 1: A QUÍMICA DA VIDA".to_string(),
            order: 1,
            color: Some("blue".to_string()),
            symbol: Some("Atom".to_string()),
        })
        .await
        .unwrap();
    let chapter_id = repo
        .insert_chapter(NewChapter {
            unit_id,
            title: "Capítulo 1".to_string(),
            order: 1,
        })
        .await
        .unwrap();
    let concept_id = repo
        .insert_concept(NewConcept {
            chapter_id,
            title: "CONCEITO 1.1".to_string(),
            order: 1,
            summary: None,
        })
        .await
        .unwrap();
    let t1 = repo
        .insert_topic(NewTopic {
            concept_id,
            title: "Tema A".to_string(),
            order: 1,
        })
        .await
        .unwrap();
    let t2 = repo
        .insert_topic(NewTopic {
            concept_id,
            title: "Tema B".to_string(),
            order: 2,
        })
        .await
        .unwrap();
    (t1, t2)
}

#[tokio::test]
async fn sqlite_roundtrips_the_tree_in_order() {
    let repo = connect("memdb_tree").await;
    insert_branch(&repo).await;

    let tree = repo.full_curriculum().await.expect("fetch");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].symbol.as_deref(), Some("Atom"));
    let topics = &tree[0].chapters[0].concepts[0].topics;
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].title, "Tema A");
    assert_eq!(topics[1].title, "Tema B");
    assert!(topics.iter().all(|t| !t.completed));
}

#[tokio::test]
async fn sqlite_toggle_returns_updated_row_and_spares_others() {
    let repo = connect("memdb_toggle").await;
    let (t1, t2) = insert_branch(&repo).await;

    let updated = repo.set_topic_completed(t1, true).await.unwrap().unwrap();
    assert_eq!(updated.id, t1);
    assert!(updated.completed);

    let tree = repo.full_curriculum().await.unwrap();
    let topics = &tree[0].chapters[0].concepts[0].topics;
    assert!(topics.iter().find(|t| t.id == t1).unwrap().completed);
    assert!(!topics.iter().find(|t| t.id == t2).unwrap().completed);

    // completed flag flips back and forth, last writer wins
    let reverted = repo.set_topic_completed(t1, false).await.unwrap().unwrap();
    assert!(!reverted.completed);
}

#[tokio::test]
async fn sqlite_toggle_unknown_id_is_none() {
    let repo = connect("memdb_missing").await;
    insert_branch(&repo).await;

    let missing = repo
        .set_topic_completed(TopicId::new(424_242), true)
        .await
        .unwrap();
    assert!(missing.is_none());

    let count = progress::curriculum_topics(&repo.full_curriculum().await.unwrap());
    assert_eq!(count.completed, 0);
}

#[tokio::test]
async fn sqlite_seed_is_idempotent() {
    let repo = connect("memdb_seed").await;

    assert!(seed_if_empty(&repo).await.unwrap());
    assert!(!seed_if_empty(&repo).await.unwrap());

    assert_eq!(repo.count_units().await.unwrap(), 8);
    let tree = repo.full_curriculum().await.unwrap();
    let count = progress::curriculum_topics(&tree);
    assert_eq!(count.total, 342);
    assert_eq!(count.completed, 0);
}
