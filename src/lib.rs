pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::firestore::FirestoreClient;
pub use crate::core::normalizer::normalize;
pub use crate::core::submit::{SubmissionPipeline, SubmissionReceipt};
pub use domain::model::{FormEvent, FormState, SubmissionRecord};
pub use utils::error::{FormError, Result};
