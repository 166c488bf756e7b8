//! Shared in-memory schema fixtures for the engine test modules

use crate::config::{ArgValue, DirectiveKind, RawArgs, TargetDecl};
use crate::occurrence::DirectiveOccurrence;
use std::collections::HashMap;
use typelens_common::Location;
use typelens_schema::{
    Accessibility, Accessor, Member, MemberSource, PropertyAccessors, SchemaCache, Scope, TypeRef,
    TypeSchema,
};

pub struct FakeSource {
    schemas: HashMap<TypeRef, TypeSchema>,
}

impl FakeSource {
    pub fn new(schemas: Vec<TypeSchema>) -> Self {
        Self {
            schemas: schemas
                .into_iter()
                .map(|schema| (schema.type_ref().clone(), schema))
                .collect(),
        }
    }
}

impl MemberSource for FakeSource {
    fn resolve(&self, type_ref: &TypeRef) -> Option<TypeSchema> {
        self.schemas.get(type_ref).cloned()
    }
}

pub fn models(name: &str) -> TypeRef {
    TypeRef::new(name, Some("Models"))
}

pub fn get_set(name: &str, declared_type: &str, declaring: &TypeRef) -> Member {
    Member::property(
        name,
        declared_type,
        Accessibility::Public,
        Scope::Instance,
        PropertyAccessors::get_set(),
        declaring.clone(),
    )
}

pub fn get_only(name: &str, declared_type: &str, declaring: &TypeRef) -> Member {
    Member::property(
        name,
        declared_type,
        Accessibility::Public,
        Scope::Instance,
        PropertyAccessors::Get(Accessor::new()),
        declaring.clone(),
    )
}

pub fn set_only(name: &str, declared_type: &str, declaring: &TypeRef) -> Member {
    Member::property(
        name,
        declared_type,
        Accessibility::Public,
        Scope::Instance,
        PropertyAccessors::Set(Accessor::new()),
        declaring.clone(),
    )
}

/// `Models.SourceType` with a read/write `Id`, a readonly `Value` and a
/// writeonly `Created`
pub fn source_type_schema() -> TypeSchema {
    let source = models("SourceType");
    TypeSchema::new(
        source.clone(),
        None,
        vec![
            get_set("Id", "Guid", &source),
            get_only("Value", "int", &source),
            set_only("Created", "DateTime", &source),
        ],
    )
}

/// `Models.Derived` extending `Models.Base`
pub fn hierarchy_schemas() -> Vec<TypeSchema> {
    let base_ref = models("Base");
    let derived_ref = models("Derived");
    vec![
        TypeSchema::new(
            base_ref.clone(),
            None,
            vec![get_only("Score", "double", &base_ref)],
        ),
        TypeSchema::new(
            derived_ref.clone(),
            Some(base_ref),
            vec![get_set("Id", "Guid", &derived_ref)],
        ),
    ]
}

/// `Models.OtherType` with a single read/write `Name`
pub fn other_type_schema() -> TypeSchema {
    let other = models("OtherType");
    TypeSchema::new(
        other.clone(),
        None,
        vec![get_set("Name", "string", &other)],
    )
}

/// `Models.FieldsOnly` declares no properties at all, so the default
/// selection over it is empty
pub fn fields_only_schema() -> TypeSchema {
    let fields_only = models("FieldsOnly");
    let count = Member::field(
        "count",
        "int",
        Accessibility::Public,
        Scope::Instance,
        false,
        fields_only.clone(),
    );
    TypeSchema::new(fields_only, None, vec![count])
}

pub fn cache() -> SchemaCache<FakeSource> {
    let mut schemas = vec![
        source_type_schema(),
        other_type_schema(),
        fields_only_schema(),
    ];
    schemas.extend(hierarchy_schemas());
    SchemaCache::new(FakeSource::new(schemas))
}

pub fn target() -> TargetDecl {
    TargetDecl::new(
        models("TargetType"),
        "public partial class TargetType",
    )
}

pub fn source_arg() -> ArgValue {
    ArgValue::Type(models("SourceType"))
}

pub fn location() -> Location {
    Location::in_file("models.src")
}

pub fn occurrence(kind: DirectiveKind, args: RawArgs) -> DirectiveOccurrence {
    DirectiveOccurrence {
        kind,
        target: Some(target()),
        args,
        location: location(),
    }
}

/// Directive args naming the standard source plus an explicit field list
pub fn field_args(fields: &[&str]) -> RawArgs {
    let mut positional = vec![source_arg()];
    positional.extend(
        fields
            .iter()
            .map(|field| ArgValue::Str(field.to_string())),
    );
    RawArgs::new(positional)
}

pub fn member_names(members: &[Member]) -> Vec<&str> {
    members.iter().map(|member| member.name.as_str()).collect()
}
