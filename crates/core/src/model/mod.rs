mod ids;
mod tree;

pub use ids::{ChapterId, ConceptId, ParseIdError, TopicId, UnitId};
pub use tree::{Chapter, Concept, Topic, Unit};
