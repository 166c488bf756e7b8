use crate::schema::TypeRef;
use serde::{Deserialize, Serialize};

/// Declared accessibility of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accessibility {
    Public,
    Private,
    Protected,
}

impl Accessibility {
    /// Lowercase keyword used when rendering declarations
    pub fn keyword(&self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Private => "private",
            Accessibility::Protected => "protected",
        }
    }
}

/// Whether a member lives on instances or on the type itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Instance,
    Static,
}

/// Kind of a member, derived from its accessor/mutability shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    ReadonlyProperty,
    WriteonlyProperty,
    GetSetProperty,
    WritableField,
    ReadonlyField,
}

/// One accessor of a property.
///
/// `accessibility` is an override: `None` means the accessor shares the
/// member's own declared accessibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    pub accessibility: Option<Accessibility>,
}

impl Accessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accessibility(accessibility: Accessibility) -> Self {
        Self {
            accessibility: Some(accessibility),
        }
    }
}

/// Accessor shape of a property. A property has at least one accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyAccessors {
    Get(Accessor),
    Set(Accessor),
    GetSet { get: Accessor, set: Accessor },
}

impl PropertyAccessors {
    pub fn get_set() -> Self {
        Self::GetSet {
            get: Accessor::new(),
            set: Accessor::new(),
        }
    }

    pub fn get(&self) -> Option<&Accessor> {
        match self {
            PropertyAccessors::Get(get) => Some(get),
            PropertyAccessors::GetSet { get, .. } => Some(get),
            PropertyAccessors::Set(_) => None,
        }
    }

    pub fn set(&self) -> Option<&Accessor> {
        match self {
            PropertyAccessors::Set(set) => Some(set),
            PropertyAccessors::GetSet { set, .. } => Some(set),
            PropertyAccessors::Get(_) => None,
        }
    }
}

/// Structural shape of a member: property-like or field-like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberShape {
    Property(PropertyAccessors),
    Field { readonly: bool },
}

/// One property- or field-like declaration on a type.
///
/// `kind` is classified from `shape` exactly once at construction and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,

    /// Textual, host-language-opaque type reference
    pub declared_type: String,

    pub accessibility: Accessibility,
    pub scope: Scope,
    pub shape: MemberShape,

    /// Back-reference to the declaring type (not owned)
    pub declaring_type: TypeRef,

    /// Compiler-synthesized members (backing constructs) are excluded
    /// from every member walk
    pub synthesized: bool,

    kind: MemberKind,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        accessibility: Accessibility,
        scope: Scope,
        shape: MemberShape,
        declaring_type: TypeRef,
    ) -> Self {
        let kind = classify(&shape);
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            accessibility,
            scope,
            shape,
            declaring_type,
            synthesized: false,
            kind,
        }
    }

    pub fn property(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        accessibility: Accessibility,
        scope: Scope,
        accessors: PropertyAccessors,
        declaring_type: TypeRef,
    ) -> Self {
        Self::new(
            name,
            declared_type,
            accessibility,
            scope,
            MemberShape::Property(accessors),
            declaring_type,
        )
    }

    pub fn field(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        accessibility: Accessibility,
        scope: Scope,
        readonly: bool,
        declaring_type: TypeRef,
    ) -> Self {
        Self::new(
            name,
            declared_type,
            accessibility,
            scope,
            MemberShape::Field { readonly },
            declaring_type,
        )
    }

    /// Marks this member as compiler-synthesized
    pub fn synthesized(mut self) -> Self {
        self.synthesized = true;
        self
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn is_property(&self) -> bool {
        matches!(self.shape, MemberShape::Property(_))
    }

    pub fn is_field(&self) -> bool {
        matches!(self.shape, MemberShape::Field { .. })
    }
}

fn classify(shape: &MemberShape) -> MemberKind {
    match shape {
        MemberShape::Property(accessors) => match accessors {
            PropertyAccessors::Get(_) => MemberKind::ReadonlyProperty,
            PropertyAccessors::Set(_) => MemberKind::WriteonlyProperty,
            PropertyAccessors::GetSet { .. } => MemberKind::GetSetProperty,
        },
        MemberShape::Field { readonly: false } => MemberKind::WritableField,
        MemberShape::Field { readonly: true } => MemberKind::ReadonlyField,
    }
}
