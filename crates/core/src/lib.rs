#![forbid(unsafe_code)]

pub mod model;
pub mod progress;

pub use model::{Chapter, ChapterId, Concept, ConceptId, Topic, TopicId, Unit, UnitId};
pub use progress::TopicCount;
