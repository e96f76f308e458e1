use crate::html::BlockKind;
use thiserror::Error;

/// Errors that can occur while scraping lookup tables
#[derive(Error, Debug)]
pub enum LookupError {
    /// Failed to fetch a page, or the server answered with a non-success status
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page does not have the layout the extractor expects
    #[error("Unexpected page layout: {0}")]
    ParseShape(#[from] ShapeError),

    /// A CSS selector failed to parse
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// A link could not be resolved against the base URL
    #[error("Invalid URL: {0}")]
    Url(String),

    /// Failed to write the output file
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the lookup table
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Entity kind given on the command line is not known
    #[error("Unknown entity kind: {0} (expected spell, subclass or weapon)")]
    UnknownKind(String),

    /// A page failed while running with the abort policy
    #[error("{url} failed: {source}")]
    PageFailed {
        url: String,
        #[source]
        source: Box<LookupError>,
    },
}

/// Ways a page can deviate from the fixed wiki layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("no element matches `{selector}`")]
    MissingElement { selector: &'static str },

    #[error("entity name is empty")]
    EmptyName,

    #[error("missing {role} block (page has {found} blocks)")]
    MissingBlock { role: &'static str, found: usize },

    #[error("expected {expected} for {role}, found {found}")]
    UnexpectedBlock {
        role: &'static str,
        expected: BlockKind,
        found: BlockKind,
    },
}
