use async_trait::async_trait;
use curriculum_core::model::{
    Chapter, ChapterId, Concept, ConceptId, Topic, TopicId, Unit, UnitId,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters. Absence of a row is not an error;
/// lookups that can miss return `Option` instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Insert shape for a unit. Ids are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUnit {
    pub title: String,
    pub order: u32,
    pub color: Option<String>,
    pub symbol: Option<String>,
}

/// Insert shape for a chapter.
#[derive(Debug, Clone)]
pub struct NewChapter {
    pub unit_id: UnitId,
    pub title: String,
    pub order: u32,
}

/// Insert shape for a concept.
#[derive(Debug, Clone)]
pub struct NewConcept {
    pub chapter_id: ChapterId,
    pub title: String,
    pub order: u32,
    pub summary: Option<String>,
}

/// Insert shape for a topic. Topics always start uncompleted.
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub concept_id: ConceptId,
    pub title: String,
    pub order: u32,
}

/// Repository contract for the curriculum tree.
///
/// The tree is write-once apart from `Topic.completed`: rows are inserted by
/// the seed routine and never deleted or structurally modified afterwards.
#[async_trait]
pub trait CurriculumRepository: Send + Sync {
    /// Number of unit rows. The seed routine treats any non-zero count as
    /// "already seeded".
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on a failed query.
    async fn count_units(&self) -> Result<u64, StorageError>;

    /// Insert a unit, returning its generated id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be stored.
    async fn insert_unit(&self, unit: NewUnit) -> Result<UnitId, StorageError>;

    /// Insert a chapter under an existing unit.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be stored.
    async fn insert_chapter(&self, chapter: NewChapter) -> Result<ChapterId, StorageError>;

    /// Insert a concept under an existing chapter.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be stored.
    async fn insert_concept(&self, concept: NewConcept) -> Result<ConceptId, StorageError>;

    /// Insert a topic under an existing concept, starting uncompleted.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be stored.
    async fn insert_topic(&self, topic: NewTopic) -> Result<TopicId, StorageError>;

    /// Fetch the entire tree, every level sorted ascending by its order
    /// field. Always all-or-nothing; there is no partial fetch.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on a failed query.
    async fn full_curriculum(&self) -> Result<Vec<Unit>, StorageError>;

    /// Set a topic's completed flag, returning the updated record, or
    /// `Ok(None)` when the id does not exist. Last writer wins.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on a failed update.
    async fn set_topic_completed(
        &self,
        id: TopicId,
        completed: bool,
    ) -> Result<Option<Topic>, StorageError>;
}

/// Nest flat rows into the unit tree, each level sorted by its order field.
///
/// The child vectors on the flat rows are ignored; backends pass rows with
/// empty children and this fills them in.
pub(crate) fn assemble_tree(
    mut units: Vec<Unit>,
    mut chapters: Vec<Chapter>,
    mut concepts: Vec<Concept>,
    mut topics: Vec<Topic>,
) -> Vec<Unit> {
    topics.sort_by_key(|t| t.order);
    concepts.sort_by_key(|c| c.order);
    chapters.sort_by_key(|c| c.order);
    units.sort_by_key(|u| u.order);

    for topic in topics {
        if let Some(concept) = concepts.iter_mut().find(|c| c.id == topic.concept_id) {
            concept.topics.push(topic);
        }
    }
    for concept in concepts {
        if let Some(chapter) = chapters.iter_mut().find(|c| c.id == concept.chapter_id) {
            chapter.concepts.push(concept);
        }
    }
    for chapter in chapters {
        if let Some(unit) = units.iter_mut().find(|u| u.id == chapter.unit_id) {
            unit.chapters.push(chapter);
        }
    }
    units
}

#[derive(Default)]
struct InMemoryInner {
    units: Vec<Unit>,
    chapters: Vec<Chapter>,
    concepts: Vec<Concept>,
    topics: Vec<Topic>,
    next_unit_id: u64,
    next_chapter_id: u64,
    next_concept_id: u64,
    next_topic_id: u64,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    inner: Arc<Mutex<InMemoryInner>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, InMemoryInner>, StorageError> {
        self.inner
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl CurriculumRepository for InMemoryRepository {
    async fn count_units(&self) -> Result<u64, StorageError> {
        let len = self.lock()?.units.len();
        Ok(u64::try_from(len).unwrap_or(u64::MAX))
    }

    async fn insert_unit(&self, unit: NewUnit) -> Result<UnitId, StorageError> {
        let mut guard = self.lock()?;
        guard.next_unit_id += 1;
        let id = UnitId::new(guard.next_unit_id);
        guard.units.push(Unit {
            id,
            title: unit.title,
            order: unit.order,
            color: unit.color,
            symbol: unit.symbol,
            chapters: Vec::new(),
        });
        Ok(id)
    }

    async fn insert_chapter(&self, chapter: NewChapter) -> Result<ChapterId, StorageError> {
        let mut guard = self.lock()?;
        guard.next_chapter_id += 1;
        let id = ChapterId::new(guard.next_chapter_id);
        guard.chapters.push(Chapter {
            id,
            unit_id: chapter.unit_id,
            title: chapter.title,
            order: chapter.order,
            concepts: Vec::new(),
        });
        Ok(id)
    }

    async fn insert_concept(&self, concept: NewConcept) -> Result<ConceptId, StorageError> {
        let mut guard = self.lock()?;
        guard.next_concept_id += 1;
        let id = ConceptId::new(guard.next_concept_id);
        guard.concepts.push(Concept {
            id,
            chapter_id: concept.chapter_id,
            title: concept.title,
            order: concept.order,
            summary: concept.summary,
            topics: Vec::new(),
        });
        Ok(id)
    }

    async fn insert_topic(&self, topic: NewTopic) -> Result<TopicId, StorageError> {
        let mut guard = self.lock()?;
        guard.next_topic_id += 1;
        let id = TopicId::new(guard.next_topic_id);
        guard.topics.push(Topic {
            id,
            concept_id: topic.concept_id,
            title: topic.title,
            order: topic.order,
            completed: false,
        });
        Ok(id)
    }

    async fn full_curriculum(&self) -> Result<Vec<Unit>, StorageError> {
        let guard = self.lock()?;
        Ok(assemble_tree(
            guard.units.clone(),
            guard.chapters.clone(),
            guard.concepts.clone(),
            guard.topics.clone(),
        ))
    }

    async fn set_topic_completed(
        &self,
        id: TopicId,
        completed: bool,
    ) -> Result<Option<Topic>, StorageError> {
        let mut guard = self.lock()?;
        match guard.topics.iter_mut().find(|t| t.id == id) {
            Some(topic) => {
                topic.completed = completed;
                Ok(Some(topic.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Aggregates the curriculum repository behind a trait object for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub curriculum: Arc<dyn CurriculumRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            curriculum: Arc::new(InMemoryRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_small(repo: &InMemoryRepository) -> (ConceptId, TopicId, TopicId) {
        let unit_id = repo
            .insert_unit(NewUnit {
                title: "U1".to_string(),
                order: 1,
                color: Some("blue".to_string()),
                symbol: Some("Atom".to_string()),
            })
            .await
            .unwrap();
        let chapter_id = repo
            .insert_chapter(NewChapter {
                unit_id,
                title: "C1".to_string(),
                order: 1,
            })
            .await
            .unwrap();
        let concept_id = repo
            .insert_concept(NewConcept {
                chapter_id,
                title: "K1".to_string(),
                order: 1,
                summary: None,
            })
            .await
            .unwrap();
        let t1 = repo
            .insert_topic(NewTopic {
                concept_id,
                title: "T1".to_string(),
                order: 1,
            })
            .await
            .unwrap();
        let t2 = repo
            .insert_topic(NewTopic {
                concept_id,
                title: "T2".to_string(),
                order: 2,
            })
            .await
            .unwrap();
        (concept_id, t1, t2)
    }

    #[tokio::test]
    async fn count_units_tracks_inserts() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.count_units().await.unwrap(), 0);

        seed_small(&repo).await;
        assert_eq!(repo.count_units().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn topics_start_uncompleted() {
        let repo = InMemoryRepository::new();
        seed_small(&repo).await;

        let tree = repo.full_curriculum().await.unwrap();
        let topics = &tree[0].chapters[0].concepts[0].topics;
        assert_eq!(topics.len(), 2);
        assert!(topics.iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn toggle_updates_only_the_target_topic() {
        let repo = InMemoryRepository::new();
        let (_, t1, t2) = seed_small(&repo).await;

        let updated = repo.set_topic_completed(t1, true).await.unwrap().unwrap();
        assert!(updated.completed);
        assert_eq!(updated.id, t1);

        let tree = repo.full_curriculum().await.unwrap();
        let topics = &tree[0].chapters[0].concepts[0].topics;
        assert!(topics.iter().find(|t| t.id == t1).unwrap().completed);
        assert!(!topics.iter().find(|t| t.id == t2).unwrap().completed);
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_none() {
        let repo = InMemoryRepository::new();
        seed_small(&repo).await;

        let missing = repo
            .set_topic_completed(TopicId::new(9999), true)
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn tree_levels_sort_by_order() {
        let repo = InMemoryRepository::new();
        // insert out of order; the tree must still come back ordered
        let unit_id = repo
            .insert_unit(NewUnit {
                title: "U".to_string(),
                order: 1,
                color: None,
                symbol: None,
            })
            .await
            .unwrap();
        for (title, order) in [("second", 2), ("first", 1)] {
            repo.insert_chapter(NewChapter {
                unit_id,
                title: title.to_string(),
                order,
            })
            .await
            .unwrap();
        }

        let tree = repo.full_curriculum().await.unwrap();
        let titles: Vec<_> = tree[0].chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }
}
