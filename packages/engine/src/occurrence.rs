use crate::config::{resolve_config, DirectiveKind, RawArgs, TargetDecl};
use crate::projection::project;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use typelens_common::{codes, ConfigError, Diagnostic, DiagnosticSink, EngineResult, Location};
use typelens_emitter::{emit_definition, format_member, DefinitionLine};
use typelens_schema::{MemberSource, SchemaCache};

/// One directive occurrence as delivered by the host's attribute scanner
#[derive(Debug, Clone)]
pub struct DirectiveOccurrence {
    pub kind: DirectiveKind,
    pub target: Option<TargetDecl>,
    pub args: RawArgs,
    pub location: Location,
}

/// One generated supplementary definition.
///
/// The key is deterministically derived from target name, directive kind
/// and source name so the host build system can map outputs back to
/// inputs for incremental rebuild and collision detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSource {
    pub key: String,
    pub text: String,
}

/// Aggregated result of one generation pass
#[derive(Debug, Default)]
pub struct PassOutput {
    pub sources: Vec<GeneratedSource>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Processes a single directive occurrence in isolation.
///
/// Any failure is converted into a diagnostic that skips generation for
/// this occurrence only; sibling occurrences are never affected. The
/// occurrence owns its sink; the caller aggregates sinks at the end of
/// a pass.
pub fn process_occurrence<S: MemberSource>(
    cache: &SchemaCache<S>,
    occurrence: &DirectiveOccurrence,
) -> (Option<GeneratedSource>, DiagnosticSink) {
    let mut sink = DiagnosticSink::new();
    match generate(cache, occurrence) {
        Ok((source, diagnostics)) => {
            sink.extend(diagnostics);
            (Some(source), sink)
        }
        Err(error) => {
            warn!(kind = occurrence.kind.as_str(), %error, "skipping directive occurrence");
            sink.report(to_diagnostic(error, &occurrence.location));
            (None, sink)
        }
    }
}

fn generate<S: MemberSource>(
    cache: &SchemaCache<S>,
    occurrence: &DirectiveOccurrence,
) -> EngineResult<(GeneratedSource, Vec<Diagnostic>)> {
    let config = resolve_config(occurrence.kind, occurrence.target.as_ref(), &occurrence.args)?;

    if !config.target.extensible {
        return Err(ConfigError::MissingExtensibilityMarker {
            type_name: config.target.type_ref.name().to_string(),
        });
    }

    let projection = project(cache, &config, &occurrence.location)?;

    let lines: Vec<DefinitionLine> = projection
        .members
        .iter()
        .filter_map(|member| format_member(member, &config.template))
        .map(DefinitionLine::Line)
        .collect();

    let text = emit_definition(
        &config.target.header,
        lines,
        config.target.container.as_deref(),
    );

    let key = format!(
        "{}.{}.{}.g",
        config.target.type_ref.name(),
        config.kind.as_str(),
        config.source.name()
    );

    debug!(key = %key, members = projection.members.len(), "generated definition");

    Ok((GeneratedSource { key, text }, projection.diagnostics))
}

/// Maps a per-occurrence failure onto the diagnostic taxonomy: fatal
/// resolution/validation failures are errors, internal failures degrade
/// to a warning.
fn to_diagnostic(error: ConfigError, location: &Location) -> Diagnostic {
    let code = match &error {
        ConfigError::MissingSourceType => codes::MISSING_SOURCE_TYPE,
        ConfigError::MissingTargetDeclaration => codes::MISSING_TARGET_DECLARATION,
        ConfigError::MissingExtensibilityMarker { .. } => codes::MISSING_EXTENSIBILITY_MARKER,
        ConfigError::MissingTypeParameter { .. } => codes::MISSING_TYPE_PARAMETER,
        ConfigError::MoreThanOneTypeParameter { .. } => codes::MORE_THAN_ONE_TYPE_PARAMETER,
        ConfigError::MissingMemberMapping { .. } => codes::MISSING_MEMBER_MAPPING,
        ConfigError::MoreThanOneMemberMapping { .. } => codes::MORE_THAN_ONE_MEMBER_MAPPING,
        ConfigError::Internal(_) => {
            return Diagnostic::warning(codes::INTERNAL_ERROR, error.to_string(), location.clone())
        }
    };
    Diagnostic::error(code, error.to_string(), location.clone())
}

/// Runs one generation pass over a stream of directive occurrences.
///
/// Occurrences are independent: no diagnostic ever halts processing of
/// siblings, and output order equals input order.
pub fn run_pass<S: MemberSource>(
    cache: &SchemaCache<S>,
    occurrences: &[DirectiveOccurrence],
) -> PassOutput {
    let mut output = PassOutput::default();

    for occurrence in occurrences {
        let (source, sink) = process_occurrence(cache, occurrence);
        output.sources.extend(source);
        output.diagnostics.extend(sink.into_vec());
    }

    output
}
