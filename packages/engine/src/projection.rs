use crate::config::{DirectiveConfig, DirectiveKind};
use tracing::debug;
use typelens_common::{codes, ConfigError, Diagnostic, EngineResult, Location};
use typelens_schema::{matches, Member, MemberSource, SchemaCache};

/// Ordered, deduplicated member selection for one directive occurrence,
/// plus the structural warnings raised while computing it
#[derive(Debug, Clone)]
pub struct ProjectionResult {
    pub members: Vec<Member>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Applies the directive's semantics (pick / omit / filter) to the
/// source type's member model.
///
/// Selection order is always the base selection's discovery order; an
/// explicit field list never reorders output. Pure function of the
/// schema snapshot and the configuration.
pub fn project<S: MemberSource>(
    cache: &SchemaCache<S>,
    config: &DirectiveConfig,
    location: &Location,
) -> EngineResult<ProjectionResult> {
    let base: Vec<Member> = cache
        .members_of(&config.source, config.criteria.include_base_types)
        .ok_or_else(|| {
            ConfigError::internal(format!("unable to resolve source type {}", config.source))
        })?
        .into_iter()
        .filter(|member| matches(member, &config.criteria))
        .collect();

    debug!(
        source = %config.source,
        kind = config.kind.as_str(),
        candidates = base.len(),
        "projecting members"
    );

    let mut diagnostics = Vec::new();

    let members = match config.kind {
        DirectiveKind::Map => {
            if base.is_empty() {
                diagnostics.push(Diagnostic::warning(
                    codes::NO_MAPPED_MEMBERS,
                    format!(
                        "specified member selection doesn't yield any members from the {} to map",
                        config.source.name()
                    ),
                    location.clone(),
                ));
            }
            base
        }
        DirectiveKind::Pick => {
            let selected: Vec<Member> = base
                .iter()
                .filter(|member| config.fields.iter().any(|field| field == &member.name))
                .cloned()
                .collect();

            let missing = missing_fields(&config.fields, &base);
            if !missing.is_empty() {
                diagnostics.push(Diagnostic::warning(
                    codes::MISSING_MEMBERS_TO_PICK,
                    format!(
                        "members {} are not present in the {} selection and will be missing",
                        missing.join(", "),
                        config.source.name()
                    ),
                    location.clone(),
                ));
            }
            selected
        }
        DirectiveKind::Omit => {
            let selected: Vec<Member> = base
                .iter()
                .filter(|member| !config.fields.iter().any(|field| field == &member.name))
                .cloned()
                .collect();

            let missing = missing_fields(&config.fields, &base);
            if !missing.is_empty() {
                diagnostics.push(Diagnostic::warning(
                    codes::MISSING_MEMBERS_TO_OMIT,
                    format!(
                        "members {} specified to be omitted are not present in the {} selection",
                        missing.join(", "),
                        config.source.name()
                    ),
                    location.clone(),
                ));
            }
            selected
        }
    };

    Ok(ProjectionResult {
        members,
        diagnostics,
    })
}

/// Requested names with no matching member in the base selection, in
/// request order, first occurrence only
fn missing_fields(fields: &[String], base: &[Member]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for field in fields {
        if base.iter().any(|member| &member.name == field) {
            continue;
        }
        if missing.iter().any(|seen| seen == field) {
            continue;
        }
        missing.push(field.clone());
    }
    missing
}
