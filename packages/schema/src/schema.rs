use crate::member::Member;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

/// Identity of a type as seen by the engine: a name plus an optional
/// container (namespace/module) path. Cheap to clone, compared by full
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    name: String,
    container: Option<String>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, container: Option<&str>) -> Self {
        Self {
            name: name.into(),
            container: container.map(str::to_string),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    pub fn qualified_name(&self) -> String {
        match &self.container {
            Some(container) => format!("{}.{}", container, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// The ordered set of members declared directly on a type, plus a weak
/// link to its base type. Immutable once constructed; value-equality by
/// type identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSchema {
    type_ref: TypeRef,
    base: Option<TypeRef>,
    members: Vec<Member>,
}

impl TypeSchema {
    pub fn new(type_ref: TypeRef, base: Option<TypeRef>, members: Vec<Member>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "member names must be unique within a declaring type"
        );
        Self {
            type_ref,
            base,
            members,
        }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn base(&self) -> Option<&TypeRef> {
        self.base.as_ref()
    }

    /// Own declarations in declaration order, synthesized members excluded
    pub fn own_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| !m.synthesized)
    }
}

impl PartialEq for TypeSchema {
    fn eq(&self, other: &Self) -> bool {
        self.type_ref == other.type_ref
    }
}

impl Eq for TypeSchema {}

impl Hash for TypeSchema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_ref.hash(state);
    }
}

/// Host-supplied member model resolution. The engine only ever reads
/// through [`SchemaCache`]; tests substitute an in-memory fake.
pub trait MemberSource: Send + Sync {
    fn resolve(&self, type_ref: &TypeRef) -> Option<TypeSchema>;
}

/// Read-through cache of type schemas, keyed by type identity.
///
/// Populated lazily, safe for concurrent read-through population; once
/// populated an entry is immutable for the remainder of the pass.
pub struct SchemaCache<S> {
    source: S,
    entries: RwLock<HashMap<TypeRef, Arc<TypeSchema>>>,
}

impl<S: MemberSource> SchemaCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn resolve(&self, type_ref: &TypeRef) -> Option<Arc<TypeSchema>> {
        {
            let entries = self
                .entries
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(found) = entries.get(type_ref) {
                return Some(found.clone());
            }
        }

        let schema = self.source.resolve(type_ref)?;
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // First write wins under concurrent population
        Some(
            entries
                .entry(type_ref.clone())
                .or_insert_with(|| Arc::new(schema))
                .clone(),
        )
    }

    /// Members in discovery order: own declarations first, then the
    /// base-type chain nearest-first, each level in declaration order.
    /// Synthesized members are excluded unconditionally. Cross-level
    /// name collisions (shadowing) are not deduplicated; both members
    /// appear, own-level first.
    pub fn members_of(&self, type_ref: &TypeRef, include_base: bool) -> Option<Vec<Member>> {
        let schema = self.resolve(type_ref)?;
        let mut members: Vec<Member> = schema.own_members().cloned().collect();

        if include_base {
            let mut current = schema.base().cloned();
            while let Some(base_ref) = current {
                let Some(base) = self.resolve(&base_ref) else {
                    break;
                };
                members.extend(base.own_members().cloned());
                current = base.base().cloned();
            }
        }

        Some(members)
    }
}
