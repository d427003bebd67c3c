pub mod form;
pub mod normalizer;
pub mod submit;
pub mod suggest;
pub mod validator;

pub use crate::domain::model::{FormEvent, FormState, SubmissionRecord, SuggestionLists};
pub use crate::domain::ports::{ConfigProvider, SubmissionStore, SuggestionSource};
pub use crate::utils::error::Result;
