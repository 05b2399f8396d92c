use curriculum_core::model::{Chapter, Unit, UnitId};
use curriculum_core::progress;

/// Fixed number of concepts in the full book; the sidebar's "total progress"
/// gauge counts completed concepts against this target rather than against
/// whatever subset happens to be seeded.
pub const CONCEPT_TARGET_TOTAL: usize = 256;

/// Content-pane header: completed/total topics of the selected chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterProgressVm {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    /// Drives the "chapter concluded" banner.
    pub done: bool,
}

/// Convert a chapter into its progress header view model.
#[must_use]
pub fn chapter_progress(chapter: &Chapter) -> ChapterProgressVm {
    let count = progress::chapter_topics(chapter);
    let percent = count.percent();
    ChapterProgressVm {
        completed: count.completed,
        total: count.total,
        percent,
        done: percent == 100,
    }
}

/// Sidebar row: percent complete for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitProgressVm {
    pub unit_id: UnitId,
    pub percent: u8,
}

#[must_use]
pub fn unit_progress(unit: &Unit) -> UnitProgressVm {
    UnitProgressVm {
        unit_id: unit.id,
        percent: progress::unit_topics(unit).percent(),
    }
}

/// Sidebar header: completed concepts against the fixed book-wide target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallStatsVm {
    pub completed_concepts: usize,
    pub target_total: usize,
    pub percent: u8,
}

#[must_use]
pub fn overall_stats(units: &[Unit]) -> OverallStatsVm {
    let completed_concepts = progress::completed_concepts(units);
    OverallStatsVm {
        completed_concepts,
        target_total: CONCEPT_TARGET_TOTAL,
        percent: progress::percent(completed_concepts, CONCEPT_TARGET_TOTAL),
    }
}
