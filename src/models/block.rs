/// A unit of console output
///
/// Renderers decide how each variant looks; user-originated text is carried
/// raw and must be escaped by renderers that emit markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Informational banner shown when a session starts
    Welcome,
    /// The command line as the user submitted it
    Prompt(String),
    Help,
    About,
    Skills,
    Contact,
    Motto,
    /// Payload of an `echo` command
    Message(String),
    /// Response to an unrecognized command
    NotFound(String),
}

impl Block {
    /// Error line shown for an unrecognized command
    pub fn not_found_text(input: &str) -> String {
        format!("Command not found: {}. Type 'help' for available commands.", input)
    }
}
