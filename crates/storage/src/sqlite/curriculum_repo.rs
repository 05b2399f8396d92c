use curriculum_core::model::{ChapterId, ConceptId, Topic, TopicId, Unit, UnitId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{
    chapter_id_from_i64, concept_id_from_i64, map_chapter_row, map_concept_row, map_topic_row,
    map_unit_row, ser, topic_id_from_i64, unit_id_from_i64,
};
use crate::repository::{
    CurriculumRepository, NewChapter, NewConcept, NewTopic, NewUnit, StorageError, assemble_tree,
};

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn position_i64(order: u32) -> i64 {
    i64::from(order)
}

#[async_trait::async_trait]
impl CurriculumRepository for SqliteRepository {
    async fn count_units(&self) -> Result<u64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM units")
            .fetch_one(self.pool())
            .await
            .map_err(conn)?;
        let n: i64 = row.try_get("n").map_err(ser)?;
        u64::try_from(n).map_err(|_| StorageError::Serialization("negative count".into()))
    }

    async fn insert_unit(&self, unit: NewUnit) -> Result<UnitId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO units (title, position, color, symbol)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(unit.title)
        .bind(position_i64(unit.order))
        .bind(unit.color)
        .bind(unit.symbol)
        .execute(self.pool())
        .await
        .map_err(conn)?;

        unit_id_from_i64(res.last_insert_rowid())
    }

    async fn insert_chapter(&self, chapter: NewChapter) -> Result<ChapterId, StorageError> {
        let unit_id = i64::try_from(chapter.unit_id.value())
            .map_err(|_| StorageError::Serialization("unit_id overflow".into()))?;
        let res = sqlx::query(
            r"
            INSERT INTO chapters (unit_id, title, position)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(unit_id)
        .bind(chapter.title)
        .bind(position_i64(chapter.order))
        .execute(self.pool())
        .await
        .map_err(conn)?;

        chapter_id_from_i64(res.last_insert_rowid())
    }

    async fn insert_concept(&self, concept: NewConcept) -> Result<ConceptId, StorageError> {
        let chapter_id = i64::try_from(concept.chapter_id.value())
            .map_err(|_| StorageError::Serialization("chapter_id overflow".into()))?;
        let res = sqlx::query(
            r"
            INSERT INTO concepts (chapter_id, title, position, summary)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(chapter_id)
        .bind(concept.title)
        .bind(position_i64(concept.order))
        .bind(concept.summary)
        .execute(self.pool())
        .await
        .map_err(conn)?;

        concept_id_from_i64(res.last_insert_rowid())
    }

    async fn insert_topic(&self, topic: NewTopic) -> Result<TopicId, StorageError> {
        let concept_id = i64::try_from(topic.concept_id.value())
            .map_err(|_| StorageError::Serialization("concept_id overflow".into()))?;
        let res = sqlx::query(
            r"
            INSERT INTO topics (concept_id, title, position, completed)
            VALUES (?1, ?2, ?3, 0)
            ",
        )
        .bind(concept_id)
        .bind(topic.title)
        .bind(position_i64(topic.order))
        .execute(self.pool())
        .await
        .map_err(conn)?;

        topic_id_from_i64(res.last_insert_rowid())
    }

    async fn full_curriculum(&self) -> Result<Vec<Unit>, StorageError> {
        let unit_rows = sqlx::query(
            r"
            SELECT id, title, position, color, symbol
            FROM units
            ORDER BY position ASC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(conn)?;

        let chapter_rows = sqlx::query(
            r"
            SELECT id, unit_id, title, position
            FROM chapters
            ORDER BY position ASC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(conn)?;

        let concept_rows = sqlx::query(
            r"
            SELECT id, chapter_id, title, position, summary
            FROM concepts
            ORDER BY position ASC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(conn)?;

        let topic_rows = sqlx::query(
            r"
            SELECT id, concept_id, title, position, completed
            FROM topics
            ORDER BY position ASC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(conn)?;

        let mut units = Vec::with_capacity(unit_rows.len());
        for row in &unit_rows {
            units.push(map_unit_row(row)?);
        }
        let mut chapters = Vec::with_capacity(chapter_rows.len());
        for row in &chapter_rows {
            chapters.push(map_chapter_row(row)?);
        }
        let mut concepts = Vec::with_capacity(concept_rows.len());
        for row in &concept_rows {
            concepts.push(map_concept_row(row)?);
        }
        let mut topics = Vec::with_capacity(topic_rows.len());
        for row in &topic_rows {
            topics.push(map_topic_row(row)?);
        }

        Ok(assemble_tree(units, chapters, concepts, topics))
    }

    async fn set_topic_completed(
        &self,
        id: TopicId,
        completed: bool,
    ) -> Result<Option<Topic>, StorageError> {
        let topic_id = i64::try_from(id.value())
            .map_err(|_| StorageError::Serialization("topic_id overflow".into()))?;
        let row = sqlx::query(
            r"
            UPDATE topics
            SET completed = ?1
            WHERE id = ?2
            RETURNING id, concept_id, title, position, completed
            ",
        )
        .bind(if completed { 1_i64 } else { 0_i64 })
        .bind(topic_id)
        .fetch_optional(self.pool())
        .await
        .map_err(conn)?;

        match row {
            Some(row) => map_topic_row(&row).map(Some),
            None => Ok(None),
        }
    }
}
