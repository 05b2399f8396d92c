//! View models derived from the curriculum tree.

mod nav;
mod progress_vm;

pub use nav::{ChapterSelection, resolve_chapter};
pub use progress_vm::{
    CONCEPT_TARGET_TOTAL, ChapterProgressVm, OverallStatsVm, UnitProgressVm, chapter_progress,
    overall_stats, unit_progress,
};
