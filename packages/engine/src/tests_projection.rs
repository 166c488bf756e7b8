use crate::config::{options, resolve_config, ArgValue, DirectiveKind, RawArgs};
use crate::projection::project;
use crate::test_fixtures::*;
use typelens_common::{codes, ConfigError, Severity};
use typelens_schema::KindMask;

fn resolve(kind: DirectiveKind, args: &RawArgs) -> crate::config::DirectiveConfig {
    resolve_config(kind, Some(&target()), args).unwrap()
}

#[test]
fn map_selects_public_instance_properties_in_order() {
    let cache = cache();
    let config = resolve(DirectiveKind::Map, &RawArgs::new(vec![source_arg()]));

    let result = project(&cache, &config, &location()).unwrap();
    assert_eq!(member_names(&result.members), vec!["Id", "Value", "Created"]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn narrowed_kind_mask_excludes_writeonly_properties() {
    let cache = cache();
    let args = RawArgs::new(vec![source_arg()]).with_named(
        options::MEMBER_KIND_SELECTION,
        ArgValue::Kinds(KindMask::GET_PROPERTY),
    );
    let config = resolve(DirectiveKind::Map, &args);

    let result = project(&cache, &config, &location()).unwrap();
    assert_eq!(member_names(&result.members), vec!["Id", "Value"]);
}

#[test]
fn map_over_empty_selection_warns() {
    let cache = cache();
    let args = RawArgs::new(vec![ArgValue::Type(models("FieldsOnly"))]);
    let config = resolve(DirectiveKind::Map, &args);

    let result = project(&cache, &config, &location()).unwrap();
    assert!(result.members.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, codes::NO_MAPPED_MEMBERS);
    assert_eq!(result.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn pick_keeps_only_named_members_and_warns_on_absent_names() {
    let cache = cache();
    let config = resolve(DirectiveKind::Pick, &field_args(&["Id", "Missing"]));

    let result = project(&cache, &config, &location()).unwrap();
    assert_eq!(member_names(&result.members), vec!["Id"]);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, codes::MISSING_MEMBERS_TO_PICK);
    assert!(result.diagnostics[0].message.contains("Missing"));
}

#[test]
fn pick_never_reorders_the_selection() {
    let cache = cache();
    let config = resolve(DirectiveKind::Pick, &field_args(&["Value", "Id"]));

    let result = project(&cache, &config, &location()).unwrap();
    assert_eq!(member_names(&result.members), vec!["Id", "Value"]);
}

#[test]
fn duplicate_pick_names_select_once() {
    let cache = cache();
    let config = resolve(DirectiveKind::Pick, &field_args(&["Id", "Id"]));

    let result = project(&cache, &config, &location()).unwrap();
    assert_eq!(member_names(&result.members), vec!["Id"]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn pick_equals_map_intersection() {
    let cache = cache();
    let fields = ["Value", "Id"];

    let picked = project(
        &cache,
        &resolve(DirectiveKind::Pick, &field_args(&fields)),
        &location(),
    )
    .unwrap();
    let mapped = project(
        &cache,
        &resolve(DirectiveKind::Map, &RawArgs::new(vec![source_arg()])),
        &location(),
    )
    .unwrap();

    let intersected: Vec<&str> = mapped
        .members
        .iter()
        .map(|member| member.name.as_str())
        .filter(|name| fields.contains(name))
        .collect();
    assert_eq!(member_names(&picked.members), intersected);
}

#[test]
fn omit_with_default_criteria_drops_only_the_named_members() {
    let cache = cache();
    let config = resolve(DirectiveKind::Omit, &field_args(&["Value"]));

    let result = project(&cache, &config, &location()).unwrap();
    assert_eq!(member_names(&result.members), vec!["Id", "Created"]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn omit_of_absent_name_warns_and_removes_nothing() {
    let cache = cache();
    let config = resolve(DirectiveKind::Omit, &field_args(&["Ghost"]));

    let result = project(&cache, &config, &location()).unwrap();
    assert_eq!(member_names(&result.members), vec!["Id", "Value", "Created"]);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, codes::MISSING_MEMBERS_TO_OMIT);
    assert!(result.diagnostics[0].message.contains("Ghost"));
}

#[test]
fn base_types_are_excluded_unless_opted_in() {
    let cache = cache();
    let derived = RawArgs::new(vec![ArgValue::Type(models("Derived"))]);

    let own_only = project(
        &cache,
        &resolve(DirectiveKind::Map, &derived),
        &location(),
    )
    .unwrap();
    assert_eq!(member_names(&own_only.members), vec!["Id"]);

    let with_base = derived.with_named(options::INCLUDE_BASE_TYPES, ArgValue::Bool(true));
    let chained = project(
        &cache,
        &resolve(DirectiveKind::Map, &with_base),
        &location(),
    )
    .unwrap();
    assert_eq!(member_names(&chained.members), vec!["Id", "Score"]);
}

#[test]
fn unresolvable_source_type_is_an_internal_error() {
    let cache = cache();
    let args = RawArgs::new(vec![ArgValue::Type(models("Ghost"))]);
    let config = resolve(DirectiveKind::Map, &args);

    let err = project(&cache, &config, &location()).unwrap_err();
    assert!(matches!(err, ConfigError::Internal(_)));
    assert!(err.to_string().contains("Models.Ghost"));
}
