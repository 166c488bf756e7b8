//! Structural member metadata for the typelens projection engine.
//!
//! The engine never touches host-language syntax: the host's
//! reflection/symbol layer supplies [`TypeSchema`]s through a
//! [`MemberSource`], and everything downstream works on the uniform
//! [`Member`] record.

pub mod criteria;
pub mod member;
pub mod schema;

pub use criteria::{matches, AccessibilityMask, KindMask, ScopeMask, SelectionCriteria};
pub use member::{
    Accessibility, Accessor, Member, MemberKind, MemberShape, PropertyAccessors, Scope,
};
pub use schema::{MemberSource, SchemaCache, TypeRef, TypeSchema};
