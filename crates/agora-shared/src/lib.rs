//! # Agora Shared
//!
//! Request payloads and page contexts shared by the HTTP layer.

pub mod context;
pub mod form;
pub mod response;

pub use context::{DetailContext, IndexContext, QuestionSummary, ResultsContext};
pub use form::VoteForm;
pub use response::ApiResponse;
