use curriculum_core::model::{Chapter, ChapterId, Unit};

/// Outcome of resolving a route's optional chapter id against the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChapterSelection<'a> {
    /// No chapter in the route; the view should redirect to the first
    /// chapter in iteration order.
    Redirect(ChapterId),
    /// The requested (or defaulted) chapter, with its owning unit for the
    /// color theme and breadcrumb.
    Selected {
        unit: &'a Unit,
        chapter: &'a Chapter,
    },
    /// The route named a chapter id that does not exist.
    NotFound,
    /// The curriculum has no chapters at all.
    Empty,
}

/// Resolve which chapter the content pane should render.
///
/// Chapters iterate in unit order, then chapter order, matching the sidebar.
#[must_use]
pub fn resolve_chapter(units: &[Unit], requested: Option<ChapterId>) -> ChapterSelection<'_> {
    match requested {
        Some(id) => units
            .iter()
            .find_map(|unit| {
                unit.chapters
                    .iter()
                    .find(|chapter| chapter.id == id)
                    .map(|chapter| ChapterSelection::Selected { unit, chapter })
            })
            .unwrap_or(ChapterSelection::NotFound),
        None => match units.iter().flat_map(|u| &u.chapters).next() {
            Some(first) => ChapterSelection::Redirect(first.id),
            None => ChapterSelection::Empty,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_core::model::UnitId;

    fn unit(id: u64, chapter_ids: &[u64]) -> Unit {
        Unit {
            id: UnitId::new(id),
            title: format!("U{id}"),
            order: u32::try_from(id).unwrap(),
            color: None,
            symbol: None,
            chapters: chapter_ids
                .iter()
                .enumerate()
                .map(|(idx, &cid)| Chapter {
                    id: ChapterId::new(cid),
                    unit_id: UnitId::new(id),
                    title: format!("C{cid}"),
                    order: u32::try_from(idx).unwrap() + 1,
                    concepts: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn absent_param_redirects_to_first_chapter() {
        let units = [unit(1, &[10, 11]), unit(2, &[20])];
        assert_eq!(
            resolve_chapter(&units, None),
            ChapterSelection::Redirect(ChapterId::new(10))
        );
    }

    #[test]
    fn requested_chapter_resolves_with_owning_unit() {
        let units = [unit(1, &[10, 11]), unit(2, &[20])];
        match resolve_chapter(&units, Some(ChapterId::new(20))) {
            ChapterSelection::Selected { unit, chapter } => {
                assert_eq!(unit.id, UnitId::new(2));
                assert_eq!(chapter.id, ChapterId::new(20));
            }
            other => panic!("unexpected selection: {other:?}"),
        }
    }

    #[test]
    fn unknown_chapter_is_not_found() {
        let units = [unit(1, &[10])];
        assert_eq!(
            resolve_chapter(&units, Some(ChapterId::new(99))),
            ChapterSelection::NotFound
        );
    }

    #[test]
    fn empty_curriculum_is_empty() {
        assert_eq!(resolve_chapter(&[], None), ChapterSelection::Empty);
        let no_chapters = [unit(1, &[])];
        assert_eq!(resolve_chapter(&no_chapters, None), ChapterSelection::Empty);
    }
}
