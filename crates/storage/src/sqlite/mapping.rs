use curriculum_core::model::{
    Chapter, ChapterId, Concept, ConceptId, Topic, TopicId, Unit, UnitId,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

fn position_to_u32(v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid position: {v}")))
}

pub(crate) fn unit_id_from_i64(v: i64) -> Result<UnitId, StorageError> {
    Ok(UnitId::new(i64_to_u64("unit_id", v)?))
}

pub(crate) fn chapter_id_from_i64(v: i64) -> Result<ChapterId, StorageError> {
    Ok(ChapterId::new(i64_to_u64("chapter_id", v)?))
}

pub(crate) fn concept_id_from_i64(v: i64) -> Result<ConceptId, StorageError> {
    Ok(ConceptId::new(i64_to_u64("concept_id", v)?))
}

pub(crate) fn topic_id_from_i64(v: i64) -> Result<TopicId, StorageError> {
    Ok(TopicId::new(i64_to_u64("topic_id", v)?))
}

pub(crate) fn map_unit_row(row: &SqliteRow) -> Result<Unit, StorageError> {
    Ok(Unit {
        id: unit_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        title: row.try_get::<String, _>("title").map_err(ser)?,
        order: position_to_u32(row.try_get::<i64, _>("position").map_err(ser)?)?,
        color: row.try_get::<Option<String>, _>("color").map_err(ser)?,
        symbol: row.try_get::<Option<String>, _>("symbol").map_err(ser)?,
        chapters: Vec::new(),
    })
}

pub(crate) fn map_chapter_row(row: &SqliteRow) -> Result<Chapter, StorageError> {
    Ok(Chapter {
        id: chapter_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        unit_id: unit_id_from_i64(row.try_get::<i64, _>("unit_id").map_err(ser)?)?,
        title: row.try_get::<String, _>("title").map_err(ser)?,
        order: position_to_u32(row.try_get::<i64, _>("position").map_err(ser)?)?,
        concepts: Vec::new(),
    })
}

pub(crate) fn map_concept_row(row: &SqliteRow) -> Result<Concept, StorageError> {
    Ok(Concept {
        id: concept_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        chapter_id: chapter_id_from_i64(row.try_get::<i64, _>("chapter_id").map_err(ser)?)?,
        title: row.try_get::<String, _>("title").map_err(ser)?,
        order: position_to_u32(row.try_get::<i64, _>("position").map_err(ser)?)?,
        summary: row.try_get::<Option<String>, _>("summary").map_err(ser)?,
        topics: Vec::new(),
    })
}

pub(crate) fn map_topic_row(row: &SqliteRow) -> Result<Topic, StorageError> {
    Ok(Topic {
        id: topic_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        concept_id: concept_id_from_i64(row.try_get::<i64, _>("concept_id").map_err(ser)?)?,
        title: row.try_get::<String, _>("title").map_err(ser)?,
        order: position_to_u32(row.try_get::<i64, _>("position").map_err(ser)?)?,
        completed: row.try_get::<i64, _>("completed").map_err(ser)? != 0,
    })
}
