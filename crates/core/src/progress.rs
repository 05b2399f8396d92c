//! Progress aggregation over the curriculum tree.
//!
//! Completion rolls up from topics: a concept, chapter, unit, or the whole
//! curriculum is some ratio of completed topics to total topics in its
//! subtree. Percentages are rounded to whole numbers and an empty subtree is
//! always 0%, never a division by zero.

use crate::model::{Chapter, Concept, Unit};

/// Completed/total topic tally for some subtree of the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicCount {
    pub completed: usize,
    pub total: usize,
}

impl TopicCount {
    /// Rounded completion percentage in `0..=100`. Empty tallies are 0.
    #[must_use]
    pub fn percent(self) -> u8 {
        percent(self.completed, self.total)
    }

    fn add(&mut self, other: TopicCount) {
        self.completed += other.completed;
        self.total += other.total;
    }
}

/// Rounded percentage of `completed` over `total`, 0 when `total` is 0.
#[must_use]
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (completed as f64 / total as f64 * 100.0).round() as u8;
    pct
}

/// Topic tally for a single concept.
#[must_use]
pub fn concept_topics(concept: &Concept) -> TopicCount {
    TopicCount {
        completed: concept.topics.iter().filter(|t| t.completed).count(),
        total: concept.topics.len(),
    }
}

/// Topic tally across every concept of a chapter.
#[must_use]
pub fn chapter_topics(chapter: &Chapter) -> TopicCount {
    let mut count = TopicCount::default();
    for concept in &chapter.concepts {
        count.add(concept_topics(concept));
    }
    count
}

/// Topic tally across every chapter of a unit.
#[must_use]
pub fn unit_topics(unit: &Unit) -> TopicCount {
    let mut count = TopicCount::default();
    for chapter in &unit.chapters {
        count.add(chapter_topics(chapter));
    }
    count
}

/// Topic tally across the whole curriculum.
#[must_use]
pub fn curriculum_topics(units: &[Unit]) -> TopicCount {
    let mut count = TopicCount::default();
    for unit in units {
        count.add(unit_topics(unit));
    }
    count
}

/// A concept counts as complete only when it has at least one topic and all
/// of them are completed. A concept with zero topics is never complete.
#[must_use]
pub fn concept_is_complete(concept: &Concept) -> bool {
    !concept.topics.is_empty() && concept.topics.iter().all(|t| t.completed)
}

/// Number of complete concepts across the whole curriculum.
#[must_use]
pub fn completed_concepts(units: &[Unit]) -> usize {
    units
        .iter()
        .flat_map(|u| &u.chapters)
        .flat_map(|c| &c.concepts)
        .filter(|c| concept_is_complete(c))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChapterId, ConceptId, Topic, TopicId, UnitId};

    fn topic(id: u64, concept: u64, completed: bool) -> Topic {
        Topic {
            id: TopicId::new(id),
            concept_id: ConceptId::new(concept),
            title: format!("Topic {id}"),
            order: u32::try_from(id).unwrap(),
            completed,
        }
    }

    fn concept(id: u64, topics: Vec<Topic>) -> Concept {
        Concept {
            id: ConceptId::new(id),
            chapter_id: ChapterId::new(1),
            title: format!("Concept {id}"),
            order: u32::try_from(id).unwrap(),
            summary: None,
            topics,
        }
    }

    fn chapter(concepts: Vec<Concept>) -> Chapter {
        Chapter {
            id: ChapterId::new(1),
            unit_id: UnitId::new(1),
            title: "Chapter".to_string(),
            order: 1,
            concepts,
        }
    }

    #[test]
    fn empty_subtree_is_zero_percent() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(concept_topics(&concept(1, vec![])).percent(), 0);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(3, 3), 100);
    }

    #[test]
    fn chapter_tally_sums_concepts() {
        let ch = chapter(vec![
            concept(1, vec![topic(1, 1, true), topic(2, 1, false)]),
            concept(2, vec![topic(3, 2, true)]),
        ]);
        let count = chapter_topics(&ch);
        assert_eq!(count.completed, 2);
        assert_eq!(count.total, 3);
        assert_eq!(count.percent(), 67);
    }

    #[test]
    fn concept_with_zero_topics_is_never_complete() {
        assert!(!concept_is_complete(&concept(1, vec![])));
    }

    #[test]
    fn concept_complete_requires_all_topics() {
        let partial = concept(1, vec![topic(1, 1, true), topic(2, 1, false)]);
        let full = concept(2, vec![topic(3, 2, true), topic(4, 2, true)]);
        assert!(!concept_is_complete(&partial));
        assert!(concept_is_complete(&full));
    }

    #[test]
    fn completed_concepts_counts_across_units() {
        let unit = Unit {
            id: UnitId::new(1),
            title: "U1".to_string(),
            order: 1,
            color: None,
            symbol: None,
            chapters: vec![chapter(vec![
                concept(1, vec![topic(1, 1, true)]),
                concept(2, vec![topic(2, 2, false)]),
                concept(3, vec![]),
            ])],
        };
        assert_eq!(completed_concepts(&[unit]), 1);
    }
}
