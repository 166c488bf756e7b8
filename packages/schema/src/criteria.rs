use crate::member::{Accessibility, Member, MemberShape, Scope};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Which declared accessibilities a selection admits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AccessibilityMask: u8 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
    }
}

impl AccessibilityMask {
    pub const ANY: Self = Self::PUBLIC.union(Self::PRIVATE).union(Self::PROTECTED);
}

bitflags! {
    /// Which member scopes a selection admits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ScopeMask: u8 {
        const INSTANCE = 1 << 0;
        const STATIC = 1 << 1;
    }
}

impl ScopeMask {
    pub const ANY: Self = Self::INSTANCE.union(Self::STATIC);
}

bitflags! {
    /// Which member kinds a selection admits.
    ///
    /// The composite property masks decompose into one-of-several
    /// accessor checks, see [`matches`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct KindMask: u8 {
        const READONLY_PROPERTY = 1 << 0;
        const WRITEONLY_PROPERTY = 1 << 1;
        const GETSET_PROPERTY = 1 << 2;
        const WRITABLE_FIELD = 1 << 3;
        const READONLY_FIELD = 1 << 4;
    }
}

impl KindMask {
    /// Properties with at least a read accessor
    pub const GET_PROPERTY: Self = Self::GETSET_PROPERTY.union(Self::READONLY_PROPERTY);

    /// Properties with at least a write accessor
    pub const SET_PROPERTY: Self = Self::GETSET_PROPERTY.union(Self::WRITEONLY_PROPERTY);

    /// Properties with any accessor shape
    pub const ANY_PROPERTY: Self = Self::GET_PROPERTY.union(Self::WRITEONLY_PROPERTY);

    /// Writable and readonly fields
    pub const ANY_FIELD: Self = Self::WRITABLE_FIELD.union(Self::READONLY_FIELD);
}

/// Normalized member selection: three independent masks plus base-type
/// inclusion. The default selects public instance properties of any
/// accessor shape, base types excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    pub accessibility: AccessibilityMask,
    pub scope: ScopeMask,
    pub kinds: KindMask,
    pub include_base_types: bool,
}

impl Default for SelectionCriteria {
    fn default() -> Self {
        Self {
            accessibility: AccessibilityMask::PUBLIC,
            scope: ScopeMask::INSTANCE,
            kinds: KindMask::ANY_PROPERTY,
            include_base_types: false,
        }
    }
}

/// True iff the member matches all three criteria dimensions.
///
/// A mask with zero matching bits yields an empty selection; it is
/// never treated as "select all".
pub fn matches(member: &Member, criteria: &SelectionCriteria) -> bool {
    matches_accessibility(member, criteria.accessibility)
        && matches_scope(member, criteria.scope)
        && matches_kind(member, criteria.kinds)
}

fn matches_accessibility(member: &Member, mask: AccessibilityMask) -> bool {
    if mask.contains(AccessibilityMask::ANY) {
        return true;
    }
    let bit = match member.accessibility {
        Accessibility::Public => AccessibilityMask::PUBLIC,
        Accessibility::Private => AccessibilityMask::PRIVATE,
        Accessibility::Protected => AccessibilityMask::PROTECTED,
    };
    mask.contains(bit)
}

fn matches_scope(member: &Member, mask: ScopeMask) -> bool {
    if mask.contains(ScopeMask::ANY) {
        return true;
    }
    // With only two scopes, checking the static bit is enough. Kept
    // side effect: when neither bit is set, instance members match.
    let want_static = mask.contains(ScopeMask::STATIC);
    (member.scope == Scope::Static) == want_static
}

fn matches_kind(member: &Member, mask: KindMask) -> bool {
    property_filter(member, mask) || field_filter(member, mask)
}

fn property_filter(member: &Member, mask: KindMask) -> bool {
    let accessors = match &member.shape {
        MemberShape::Property(accessors) => accessors,
        MemberShape::Field { .. } => return false,
    };

    if mask.contains(KindMask::ANY_PROPERTY) {
        true
    } else if mask.contains(KindMask::GET_PROPERTY) {
        accessors.get().is_some()
    } else if mask.contains(KindMask::SET_PROPERTY) {
        accessors.set().is_some()
    } else if mask.contains(KindMask::READONLY_PROPERTY) {
        accessors.get().is_some() && accessors.set().is_none()
    } else if mask.contains(KindMask::WRITEONLY_PROPERTY) {
        accessors.set().is_some() && accessors.get().is_none()
    } else if mask.contains(KindMask::GETSET_PROPERTY) {
        accessors.get().is_some() && accessors.set().is_some()
    } else {
        false
    }
}

fn field_filter(member: &Member, mask: KindMask) -> bool {
    let readonly = match member.shape {
        MemberShape::Field { readonly } => readonly,
        MemberShape::Property(_) => return false,
    };

    if mask.contains(KindMask::ANY_FIELD) {
        true
    } else if mask.contains(KindMask::WRITABLE_FIELD) {
        !readonly
    } else if mask.contains(KindMask::READONLY_FIELD) {
        readonly
    } else {
        false
    }
}
