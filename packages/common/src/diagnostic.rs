use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// Stable diagnostic codes reported by the projection engine.
///
/// Codes are part of the engine's output contract: host tooling routes
/// and suppresses diagnostics by code, so these strings never change.
pub mod codes {
    /// Unexpected failure while processing a single directive occurrence
    pub const INTERNAL_ERROR: &str = "internal-error";

    /// First directive argument does not resolve to a concrete source type
    pub const MISSING_SOURCE_TYPE: &str = "missing-source-type";

    /// No enclosing target type declaration for the directive occurrence
    pub const MISSING_TARGET_DECLARATION: &str = "missing-target-declaration";

    /// Target type is not declared extensible and cannot receive a
    /// generated supplementary definition
    pub const MISSING_EXTENSIBILITY_MARKER: &str = "missing-extensibility-marker";

    /// Selection criteria yielded no members from the source type
    pub const NO_MAPPED_MEMBERS: &str = "no-mapped-members";

    /// Names requested by a pick directive that are absent from the selection
    pub const MISSING_MEMBERS_TO_PICK: &str = "missing-members-to-pick";

    /// Names requested by an omit directive that removed nothing
    pub const MISSING_MEMBERS_TO_OMIT: &str = "missing-members-to-omit";

    /// Map template declares no type parameter
    pub const MISSING_TYPE_PARAMETER: &str = "missing-type-parameter";

    /// Map template declares more than one type parameter
    pub const MORE_THAN_ONE_TYPE_PARAMETER: &str = "more-than-one-type-parameter";

    /// Map template has no member mapping function
    pub const MISSING_MEMBER_MAPPING: &str = "missing-member-mapping";

    /// Map template has more than one member mapping function
    pub const MORE_THAN_ONE_MEMBER_MAPPING: &str = "more-than-one-member-mapping";
}

/// Source location of a directive occurrence.
///
/// Opaque to the engine: populated by the host's syntax scanner and
/// threaded through to diagnostics unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Originating file, if known
    pub file: Option<String>,

    /// Byte span within the file, if known
    pub span: Option<(usize, usize)>,
}

impl Location {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn in_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            span: None,
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.span = Some((start, end));
        self
    }
}

/// A structured warning or error produced while resolving or projecting
/// one directive occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub severity: Severity,

    /// Stable code identifying the condition, see [`codes`]
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Where the offending directive occurrence lives
    pub location: Location,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            location,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            location,
        }
    }
}

/// Per-occurrence diagnostic accumulator.
///
/// Diagnostics are collected in report order and never merged or
/// deduplicated; each directive occurrence owns its own sink and the
/// caller aggregates at the end of a pass.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    items: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.items.extend(diagnostics);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
