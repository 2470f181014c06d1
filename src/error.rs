use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// The board tile count must be a perfect square
    #[error("Invalid number of tiles {0} (expect a perfect square)")]
    NotSquare(usize),

    /// A board tile must hold at least one letter
    #[error("Empty tile at index {0}")]
    EmptyTile(usize),

    /// Searching or scoring needs a minimum word length of at least 1
    #[error("Invalid minimum word length {0} (expect >= 1)")]
    InvalidMinLength(usize),

    /// Searching or scoring before a lexicon is loaded
    #[error("No lexicon loaded")]
    NoLexicon,
}
