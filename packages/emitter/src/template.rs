use serde::{Deserialize, Serialize};

/// Placeholder tokens recognized in member declaration formats
pub mod tokens {
    pub const ACCESSIBILITY: &str = "{accessibility}";
    pub const SCOPE: &str = "{scope}";
    pub const FIELD_ACCESS: &str = "{fieldAccess}";
    pub const TYPE: &str = "{type}";
    pub const NAME: &str = "{name}";
    pub const ACCESSORS: &str = "{accessors}";
}

/// Stock member declaration formats.
///
/// `SOURCE` reproduces the member's own accessibility/scope/mutability
/// and accessor shape verbatim and is the default for every directive
/// variant.
pub mod formats {
    pub const SOURCE: &str = "{accessibility}{scope}{fieldAccess} {type} {name}{accessors}";

    pub const GET_SET_PROP: &str = "{accessibility} {type} {name} { get; set; }";
    pub const GET_PROP: &str = "{accessibility} {type} {name} { get; }";
    pub const SET_PROP: &str = "{accessibility} {type} {name} { set; }";
    pub const PUBLIC_GET_SET_PROP: &str = "public {type} {name} { get; set; }";

    pub const FIELD: &str = "{accessibility}{fieldAccess} {type} {name};";
    pub const PUBLIC_FIELD: &str = "public{fieldAccess} {type} {name};";
}

/// Values substituted for the recognized tokens when rendering one member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenValues {
    pub accessibility: String,
    pub scope: String,
    pub field_access: String,
    pub declared_type: String,
    pub name: String,
    pub accessors: String,
}

impl TokenValues {
    fn lookup(&self, token: &str) -> Option<&str> {
        match token {
            tokens::ACCESSIBILITY => Some(&self.accessibility),
            tokens::SCOPE => Some(&self.scope),
            tokens::FIELD_ACCESS => Some(&self.field_access),
            tokens::TYPE => Some(&self.declared_type),
            tokens::NAME => Some(&self.name),
            tokens::ACCESSORS => Some(&self.accessors),
            _ => None,
        }
    }
}

const ALL_TOKENS: [&str; 6] = [
    tokens::ACCESSIBILITY,
    tokens::SCOPE,
    tokens::FIELD_ACCESS,
    tokens::TYPE,
    tokens::NAME,
    tokens::ACCESSORS,
];

/// A member declaration format string.
///
/// Rendering is a single left-to-right scan: every occurrence of every
/// recognized token is replaced exactly once, substituted values are
/// never re-scanned, and unrecognized `{...}` text passes through
/// untouched (so literal accessor clauses in stock formats survive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template(String);

impl Template {
    pub fn new(format: impl Into<String>) -> Self {
        Self(format.into())
    }

    pub fn source_shape() -> Self {
        Self::new(formats::SOURCE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, values: &TokenValues) -> String {
        let mut output = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(brace) = rest.find('{') {
            output.push_str(&rest[..brace]);
            rest = &rest[brace..];

            match ALL_TOKENS.iter().find(|token| rest.starts_with(**token)) {
                Some(token) => {
                    // lookup is total over ALL_TOKENS
                    output.push_str(values.lookup(token).unwrap_or_default());
                    rest = &rest[token.len()..];
                }
                None => {
                    output.push('{');
                    rest = &rest[1..];
                }
            }
        }

        output.push_str(rest);
        output
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::source_shape()
    }
}

impl From<&str> for Template {
    fn from(format: &str) -> Self {
        Self::new(format)
    }
}
