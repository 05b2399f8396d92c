//! Client side of the curriculum tracker: a thin HTTP client, a cached tree
//! store, and view models that derive progress from the tree.

#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod store;
pub mod vm;

pub use api::ApiClient;
pub use error::ClientError;
pub use store::CurriculumStore;
