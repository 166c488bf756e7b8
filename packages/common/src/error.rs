use thiserror::Error;

/// Failures while resolving a directive occurrence into a usable
/// configuration, or while validating a map template's shape.
///
/// Each variant aborts only the occurrence it was raised for; sibling
/// occurrences in the same pass are unaffected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("first directive argument does not resolve to a concrete source type")]
    MissingSourceType,

    #[error("no enclosing target type declaration found for the directive occurrence")]
    MissingTargetDeclaration,

    #[error("{type_name} should be declared extensible to receive a generated definition")]
    MissingExtensibilityMarker { type_name: String },

    #[error("missing a type parameter in the {type_name} template type")]
    MissingTypeParameter { type_name: String },

    #[error("{type_name} template type can have only a single type parameter")]
    MoreThanOneTypeParameter { type_name: String },

    #[error("missing a member mapping function for the {type_name} template type")]
    MissingMemberMapping { type_name: String },

    #[error("{type_name} template type can have only a single member mapping function")]
    MoreThanOneMemberMapping { type_name: String },

    #[error("projection failed with \"{0}\"")]
    Internal(String),
}

impl ConfigError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
