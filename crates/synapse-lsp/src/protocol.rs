use serde::{Deserialize, Serialize};

/// Parameters of the `synapse/suggestPaths` command: rank notes and
/// folders together, for picker UIs outside the completion popup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestPathsParams {
    /// Document the picker was opened from.
    pub uri: String,
    /// Filter query, corresponds to the picker input.
    pub query: Option<String>,
}

/// One picker row. Mirrors the render payload plus the text the client
/// should place when the row is chosen.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathSuggestion {
    pub content: String,
    pub note: String,
    pub flair: Option<String>,
    pub insert_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestPathsResult {
    pub suggestions: Vec<PathSuggestion>,
}

/// Parameters of the `synapse/createNote` command, attached to
/// committed completions whose note does not exist yet.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNoteParams {
    /// Document the completion was committed in.
    pub uri: String,
    /// The typed target; folder and extension optional.
    pub target: String,
}
