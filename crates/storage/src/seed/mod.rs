//! One-time population of the curriculum from the hardcoded dataset.

use crate::repository::{CurriculumRepository, NewChapter, NewConcept, NewTopic, NewUnit, StorageError};

mod data;

/// A unit in the seed literal. Literal order becomes the order field.
pub(crate) struct SeedUnit {
    pub title: &'static str,
    pub color: &'static str,
    pub symbol: &'static str,
    pub chapters: &'static [SeedChapter],
}

pub(crate) struct SeedChapter {
    pub title: &'static str,
    pub concepts: &'static [SeedConcept],
}

pub(crate) struct SeedConcept {
    pub title: &'static str,
    pub topics: &'static [&'static str],
}

fn order(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1)
}

/// Insert the fixed curriculum if the store is empty.
///
/// Idempotent by existence check only: if any unit row exists the whole seed
/// is skipped, with no content diffing. Inserts run parent before child so
/// foreign keys resolve. Returns `true` when the curriculum was inserted.
///
/// # Errors
///
/// Propagates the first failed insert; there is no partial-seed recovery.
pub async fn seed_if_empty(repo: &dyn CurriculumRepository) -> Result<bool, StorageError> {
    if repo.count_units().await? > 0 {
        return Ok(false);
    }

    for (u_idx, unit) in data::CAMPBELL_CURRICULUM.iter().enumerate() {
        let unit_id = repo
            .insert_unit(NewUnit {
                title: unit.title.to_string(),
                order: order(u_idx),
                color: Some(unit.color.to_string()),
                symbol: Some(unit.symbol.to_string()),
            })
            .await?;

        for (c_idx, chapter) in unit.chapters.iter().enumerate() {
            let chapter_id = repo
                .insert_chapter(NewChapter {
                    unit_id,
                    title: chapter.title.to_string(),
                    order: order(c_idx),
                })
                .await?;

            for (k_idx, concept) in chapter.concepts.iter().enumerate() {
                let concept_id = repo
                    .insert_concept(NewConcept {
                        chapter_id,
                        title: concept.title.to_string(),
                        order: order(k_idx),
                        summary: None,
                    })
                    .await?;

                for (t_idx, topic) in concept.topics.iter().enumerate() {
                    repo.insert_topic(NewTopic {
                        concept_id,
                        title: (*topic).to_string(),
                        order: order(t_idx),
                    })
                    .await?;
                }
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;
    use curriculum_core::progress;

    #[tokio::test]
    async fn seeds_the_full_curriculum_once() {
        let repo = InMemoryRepository::new();

        let seeded = seed_if_empty(&repo).await.unwrap();
        assert!(seeded);

        let tree = repo.full_curriculum().await.unwrap();
        assert_eq!(tree.len(), 8);
        assert_eq!(tree[0].title, "UNIDADE 1: A QUÍMICA DA VIDA");
        assert_eq!(tree[0].color.as_deref(), Some("blue"));
        assert_eq!(tree[0].chapters.len(), 5);

        let count = progress::curriculum_topics(&tree);
        assert_eq!(count.total, 342);
        assert_eq!(count.completed, 0);
    }

    #[tokio::test]
    async fn second_seed_is_a_no_op() {
        let repo = InMemoryRepository::new();

        assert!(seed_if_empty(&repo).await.unwrap());
        assert!(!seed_if_empty(&repo).await.unwrap());

        let tree = repo.full_curriculum().await.unwrap();
        assert_eq!(tree.len(), 8);
        let concepts: usize = tree
            .iter()
            .flat_map(|u| &u.chapters)
            .map(|c| c.concepts.len())
            .sum();
        assert_eq!(concepts, 142);
    }

    #[tokio::test]
    async fn seed_orders_follow_literal_order() {
        let repo = InMemoryRepository::new();
        seed_if_empty(&repo).await.unwrap();

        let tree = repo.full_curriculum().await.unwrap();
        for unit in &tree {
            for (idx, chapter) in unit.chapters.iter().enumerate() {
                assert_eq!(chapter.order as usize, idx + 1);
            }
        }
    }
}
