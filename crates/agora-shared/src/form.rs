//! Form payloads.

use serde::Serialize;

/// Body of `POST /{id}/votes/`.
///
/// `choice` stays a raw string: a missing or malformed value is a
/// recoverable input error, not a rejected request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

impl VoteForm {
    /// Build the form from decoded `key=value` pairs.
    ///
    /// A repeated `choice` key keeps its last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let choice = pairs
            .into_iter()
            .filter(|(key, _)| key == "choice")
            .map(|(_, value)| value)
            .last();
        Self { choice }
    }
}
