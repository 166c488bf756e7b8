use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use typelens_common::{ConfigError, EngineResult};
use typelens_emitter::Template;
use typelens_schema::{AccessibilityMask, KindMask, ScopeMask, SelectionCriteria, TypeRef};

/// Recognized named directive options
pub mod options {
    pub const INCLUDE_BASE_TYPES: &str = "IncludeBaseTypes";
    pub const MEMBER_DECLARATION_FORMAT: &str = "MemberDeclarationFormat";
    pub const MEMBER_ACCESSIBILITY_SELECTION: &str = "MemberAccessibilitySelection";
    pub const MEMBER_SCOPE_SELECTION: &str = "MemberScopeSelection";
    pub const MEMBER_KIND_SELECTION: &str = "MemberKindSelection";
    pub const FIELDS: &str = "Fields";
}

/// One already-resolved directive argument, as handed over by the host's
/// attribute scanner. Loosely typed on purpose: malformed directives
/// still arrive here and resolution degrades gracefully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArgValue {
    Type(TypeRef),
    Str(String),
    Bool(bool),
    StrList(Vec<String>),
    Accessibility(AccessibilityMask),
    Scope(ScopeMask),
    Kinds(KindMask),
}

/// Raw positional and named arguments of one directive occurrence.
///
/// Named arguments live in a `BTreeMap` so iteration never depends on
/// hash order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArgs {
    pub positional: Vec<ArgValue>,
    pub named: BTreeMap<String, ArgValue>,
}

impl RawArgs {
    pub fn new(positional: Vec<ArgValue>) -> Self {
        Self {
            positional,
            named: BTreeMap::new(),
        }
    }

    pub fn with_named(mut self, name: impl Into<String>, value: ArgValue) -> Self {
        self.named.insert(name.into(), value);
        self
    }

    // Named lookups mirror the original argument reader: a present but
    // wrong-typed value falls back to the default.

    pub fn bool_named(&self, name: &str, default: bool) -> bool {
        match self.named.get(name) {
            Some(ArgValue::Bool(value)) => *value,
            _ => default,
        }
    }

    pub fn str_named(&self, name: &str, default: &str) -> String {
        match self.named.get(name) {
            Some(ArgValue::Str(value)) => value.clone(),
            _ => default.to_string(),
        }
    }

    pub fn accessibility_named(&self, name: &str, default: AccessibilityMask) -> AccessibilityMask {
        match self.named.get(name) {
            Some(ArgValue::Accessibility(mask)) => *mask,
            _ => default,
        }
    }

    pub fn scope_named(&self, name: &str, default: ScopeMask) -> ScopeMask {
        match self.named.get(name) {
            Some(ArgValue::Scope(mask)) => *mask,
            _ => default,
        }
    }

    pub fn kinds_named(&self, name: &str, default: KindMask) -> KindMask {
        match self.named.get(name) {
            Some(ArgValue::Kinds(mask)) => *mask,
            _ => default,
        }
    }
}

/// The three directive variants sharing one filtering/formatting core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectiveKind {
    /// Criteria-filter: select everything the criteria admit
    Map,
    /// Explicit-include: keep only the named members
    Pick,
    /// Explicit-exclude: drop the named members
    Omit,
}

impl DirectiveKind {
    /// Stable lowercase name used in output keys
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveKind::Map => "map",
            DirectiveKind::Pick => "pick",
            DirectiveKind::Omit => "omit",
        }
    }
}

/// The target type a directive is attached to, as seen by the host's
/// syntax scanner. The header is echoed verbatim into generated output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDecl {
    pub type_ref: TypeRef,

    /// The target's own declaration header line (modifiers, kind
    /// keyword, name, generics, base references)
    pub header: String,

    /// Enclosing namespace/module, if any
    pub container: Option<String>,

    /// Whether the target declaration can receive a generated
    /// supplementary definition (the host language's partial marker)
    pub extensible: bool,
}

impl TargetDecl {
    pub fn new(type_ref: TypeRef, header: impl Into<String>) -> Self {
        let container = type_ref.container().map(str::to_string);
        Self {
            type_ref,
            header: header.into(),
            container,
            extensible: true,
        }
    }

    pub fn not_extensible(mut self) -> Self {
        self.extensible = false;
        self
    }
}

/// Normalized directive parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveConfig {
    pub kind: DirectiveKind,
    pub source: TypeRef,
    pub target: TargetDecl,
    pub template: Template,
    pub criteria: SelectionCriteria,

    /// Explicit field list for pick/omit; empty for map. Duplicates are
    /// preserved as supplied.
    pub fields: Vec<String>,
}

/// Resolves raw directive arguments into a normalized configuration,
/// applying default policy per directive variant.
pub fn resolve_config(
    kind: DirectiveKind,
    target: Option<&TargetDecl>,
    args: &RawArgs,
) -> EngineResult<DirectiveConfig> {
    let target = target.cloned().ok_or(ConfigError::MissingTargetDeclaration)?;

    let source = match args.positional.first() {
        Some(ArgValue::Type(type_ref)) => type_ref.clone(),
        _ => return Err(ConfigError::MissingSourceType),
    };

    let template = Template::new(args.str_named(
        options::MEMBER_DECLARATION_FORMAT,
        typelens_emitter::formats::SOURCE,
    ));

    let criteria = SelectionCriteria {
        accessibility: args.accessibility_named(
            options::MEMBER_ACCESSIBILITY_SELECTION,
            AccessibilityMask::PUBLIC,
        ),
        scope: args.scope_named(options::MEMBER_SCOPE_SELECTION, ScopeMask::INSTANCE),
        kinds: args.kinds_named(options::MEMBER_KIND_SELECTION, KindMask::ANY_PROPERTY),
        include_base_types: args.bool_named(options::INCLUDE_BASE_TYPES, false),
    };

    let fields = match kind {
        DirectiveKind::Map => Vec::new(),
        DirectiveKind::Pick | DirectiveKind::Omit => explicit_fields(args),
    };

    Ok(DirectiveConfig {
        kind,
        source,
        target,
        template,
        criteria,
        fields,
    })
}

/// Reads the explicit field list for pick/omit directives.
///
/// A single pre-expanded list in the second positional slot is used
/// as-is; otherwise the remaining positional string arguments are
/// collected best-effort, skipping malformed entries instead of failing.
/// A non-empty named `Fields` list overrides the positional form.
fn explicit_fields(args: &RawArgs) -> Vec<String> {
    let mut fields = match args.positional.get(1) {
        Some(ArgValue::StrList(list)) => list.clone(),
        _ => args
            .positional
            .iter()
            .skip(1)
            .filter_map(|arg| match arg {
                ArgValue::Str(name) => Some(name.clone()),
                _ => None,
            })
            .collect(),
    };

    if let Some(ArgValue::StrList(named)) = args.named.get(options::FIELDS) {
        if !named.is_empty() {
            fields = named.clone();
        }
    }

    fields
}
