use serde::{Deserialize, Serialize};

use crate::model::ids::{ChapterId, ConceptId, TopicId, UnitId};

/// Top level of the curriculum. Owns chapters.
///
/// Everything except `Topic::completed` is write-once data populated by the
/// seed routine; the structs double as the JSON wire shape, so field names
/// follow the API contract (camelCase, nested child arrays).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    pub title: String,
    /// Render sequence among sibling units, unique per level.
    pub order: u32,
    /// UI color tag, e.g. "blue" or "emerald".
    pub color: Option<String>,
    /// Icon symbol name, e.g. "Atom" or "Dna".
    pub symbol: Option<String>,
    pub chapters: Vec<Chapter>,
}

/// A chapter within a unit. Owns concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,
    pub unit_id: UnitId,
    pub title: String,
    pub order: u32,
    pub concepts: Vec<Concept>,
}

/// A concept within a chapter. Owns topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: ConceptId,
    pub chapter_id: ChapterId,
    pub title: String,
    pub order: u32,
    pub summary: Option<String>,
    pub topics: Vec<Topic>,
}

/// A single study topic. `completed` is the only mutable field in the
/// whole model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    pub concept_id: ConceptId,
    pub title: String,
    pub order: u32,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_wire_shape_uses_camel_case() {
        let topic = Topic {
            id: TopicId::new(3),
            concept_id: ConceptId::new(1),
            title: "Tema: a árvore da vida".to_string(),
            order: 2,
            completed: false,
        };
        let json = serde_json::to_value(&topic).unwrap();
        assert_eq!(json["conceptId"], 1);
        assert_eq!(json["completed"], false);
        assert!(json.get("concept_id").is_none());
    }

    #[test]
    fn unit_embeds_chapter_tree() {
        let unit = Unit {
            id: UnitId::new(1),
            title: "UNIDADE 1".to_string(),
            order: 1,
            color: Some("blue".to_string()),
            symbol: Some("Atom".to_string()),
            chapters: vec![Chapter {
                id: ChapterId::new(10),
                unit_id: UnitId::new(1),
                title: "Capítulo 1".to_string(),
                order: 1,
                concepts: vec![],
            }],
        };
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["chapters"][0]["unitId"], 1);
        assert_eq!(json["chapters"][0]["concepts"], serde_json::json!([]));
    }
}
