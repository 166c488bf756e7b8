use crate::config::{ArgValue, DirectiveKind, RawArgs};
use crate::occurrence::{process_occurrence, run_pass, DirectiveOccurrence};
use crate::test_fixtures::*;
use typelens_common::{codes, Severity};

#[test]
fn map_generates_keyed_definition() {
    let cache = cache();
    let occ = occurrence(DirectiveKind::Map, RawArgs::new(vec![source_arg()]));

    let output = run_pass(&cache, &[occ]);
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.sources.len(), 1);

    let source = &output.sources[0];
    assert_eq!(source.key, "TargetType.map.SourceType.g");
    assert_eq!(
        source.text,
        "namespace Models;\n\n\
         public partial class TargetType\n\
         {\n\
         \tpublic Guid Id { get; set; }\n\
         \tpublic int Value { get; }\n\
         \tpublic DateTime Created { set; }\n\
         }\n"
    );
}

#[test]
fn pick_and_omit_use_their_own_output_keys() {
    let cache = cache();
    let output = run_pass(
        &cache,
        &[
            occurrence(DirectiveKind::Pick, field_args(&["Id"])),
            occurrence(DirectiveKind::Omit, field_args(&["Id"])),
        ],
    );

    let keys: Vec<&str> = output.sources.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["TargetType.pick.SourceType.g", "TargetType.omit.SourceType.g"]
    );
}

#[test]
fn reemission_is_byte_identical() {
    let cache = cache();
    let occurrences = [
        occurrence(DirectiveKind::Map, RawArgs::new(vec![source_arg()])),
        occurrence(DirectiveKind::Pick, field_args(&["Id", "Value"])),
    ];

    let first = run_pass(&cache, &occurrences);
    let second = run_pass(&cache, &occurrences);
    assert_eq!(first.sources, second.sources);
}

#[test]
fn projection_warnings_flow_into_pass_output() {
    let cache = cache();
    let occ = occurrence(DirectiveKind::Pick, field_args(&["Id", "Missing"]));

    let output = run_pass(&cache, &[occ]);
    // The occurrence still generates; the warning rides alongside
    assert_eq!(output.sources.len(), 1);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, codes::MISSING_MEMBERS_TO_PICK);
}

#[test]
fn unresolvable_source_type_isolates_the_occurrence() {
    let cache = cache();
    let broken = occurrence(
        DirectiveKind::Map,
        RawArgs::new(vec![ArgValue::Type(models("Ghost"))]),
    );
    let healthy = occurrence(DirectiveKind::Map, RawArgs::new(vec![source_arg()]));

    let output = run_pass(&cache, &[broken, healthy]);
    assert_eq!(output.sources.len(), 1);
    assert_eq!(output.sources[0].key, "TargetType.map.SourceType.g");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, codes::INTERNAL_ERROR);
    assert_eq!(output.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn missing_source_argument_is_an_error() {
    let cache = cache();
    let occ = occurrence(DirectiveKind::Map, RawArgs::default());

    let (source, sink) = process_occurrence(&cache, &occ);
    assert!(source.is_none());
    assert!(sink.has_errors());
    let diagnostics = sink.into_vec();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, codes::MISSING_SOURCE_TYPE);
    assert_eq!(diagnostics[0].severity, Severity::Error);
}

#[test]
fn missing_target_declaration_is_an_error() {
    let cache = cache();
    let occ = DirectiveOccurrence {
        kind: DirectiveKind::Map,
        target: None,
        args: RawArgs::new(vec![source_arg()]),
        location: location(),
    };

    let (source, sink) = process_occurrence(&cache, &occ);
    assert!(source.is_none());
    assert_eq!(sink.items()[0].code, codes::MISSING_TARGET_DECLARATION);
}

#[test]
fn inextensible_target_is_an_error() {
    let cache = cache();
    let occ = DirectiveOccurrence {
        kind: DirectiveKind::Map,
        target: Some(target().not_extensible()),
        args: RawArgs::new(vec![source_arg()]),
        location: location(),
    };

    let (source, sink) = process_occurrence(&cache, &occ);
    assert!(source.is_none());
    assert!(sink.has_errors());
    let diagnostics = sink.into_vec();
    assert_eq!(diagnostics[0].code, codes::MISSING_EXTENSIBILITY_MARKER);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert!(diagnostics[0].message.contains("TargetType"));
}

#[test]
fn diagnostics_carry_the_occurrence_location() {
    let cache = cache();
    let occ = occurrence(DirectiveKind::Map, RawArgs::default());

    let (_, sink) = process_occurrence(&cache, &occ);
    assert_eq!(sink.items()[0].location, location());
}

#[test]
fn projection_warnings_do_not_mark_the_sink_errored() {
    let cache = cache();
    let occ = occurrence(DirectiveKind::Pick, field_args(&["Id", "Missing"]));

    let (source, sink) = process_occurrence(&cache, &occ);
    assert!(source.is_some());
    assert!(!sink.is_empty());
    assert!(!sink.has_errors());
}
