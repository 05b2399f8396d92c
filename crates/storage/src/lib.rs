#![forbid(unsafe_code)]

pub mod repository;
pub mod seed;
pub mod sqlite;

pub use repository::{
    CurriculumRepository, InMemoryRepository, NewChapter, NewConcept, NewTopic, NewUnit, Storage,
    StorageError,
};
pub use sqlite::{SqliteInitError, SqliteRepository};
