use thiserror::Error;

/// Errors from table mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A delete was requested while no cell is hovered.
    #[error("no cell is hovered")]
    NoHoverTarget,

    #[error("row {index} is out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("column {index} is out of range ({len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },
}

/// Errors from defining or creating components by tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown element `{0}`")]
    UnknownTag(String),

    #[error("element `{0}` is already defined")]
    AlreadyDefined(String),

    #[error("`{tag}` requires a `{name}` attribute")]
    MissingAttribute {
        tag: &'static str,
        name: &'static str,
    },

    #[error("invalid button role `{0}`")]
    InvalidRole(String),
}
