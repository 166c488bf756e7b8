use crate::config::{options, RawArgs};
use crate::occurrence::GeneratedSource;
use tracing::{debug, warn};
use typelens_common::{codes, ConfigError, Diagnostic, DiagnosticSink, EngineResult, Location};
use typelens_emitter::{emit_definition, format_member, DefinitionLine, Template};
use typelens_schema::{
    matches, AccessibilityMask, KindMask, Member, MemberSource, SchemaCache, ScopeMask,
    SelectionCriteria, TypeRef,
};

/// A reusable projection template as discovered by the host's syntax
/// scanner: a generic target declaration with one type parameter and one
/// user-supplied per-member transform function.
#[derive(Debug, Clone)]
pub struct TemplateDecl {
    pub type_ref: TypeRef,

    /// Declaration modifiers, echoed onto every instantiated type
    pub modifiers: String,

    /// Kind keyword of the declaration (class/struct equivalent)
    pub kind_keyword: String,

    /// Names of member-mapping functions found on the template; exactly
    /// one must exist
    pub mappers: Vec<String>,

    /// Declared type parameter names; exactly one must exist
    pub type_params: Vec<String>,

    pub extensible: bool,
}

impl TemplateDecl {
    pub fn name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn container(&self) -> Option<&str> {
        self.type_ref.container()
    }
}

/// One discovered invocation of a template's projection entry point,
/// produced by the host's pure scan phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSite {
    pub template: TypeRef,
    pub argument_type: TypeRef,
}

/// Instantiates a projection template over its discovered usage sites.
///
/// Emits one concrete projected type per distinct discovered source type
/// plus a single dispatch factory, in first-seen usage order. Re-running
/// over an unchanged usage set and unchanged schemas regenerates
/// byte-identical output.
pub fn instantiate_template<S: MemberSource>(
    cache: &SchemaCache<S>,
    template: &TemplateDecl,
    args: &RawArgs,
    usages: &[UsageSite],
    location: &Location,
) -> (Vec<GeneratedSource>, Vec<Diagnostic>) {
    let mut sink = DiagnosticSink::new();

    let mapper = match validate(template) {
        Ok(mapper) => mapper,
        Err(error) => {
            warn!(template = template.name(), %error, "rejecting map template");
            sink.report(to_error_diagnostic(error, location));
            return (Vec::new(), sink.into_vec());
        }
    };

    let declaration_format = Template::new(args.str_named(
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

    let mut sources = Vec::new();
    let mut instantiated: Vec<TypeRef> = Vec::new();

    for usage in usages {
        if usage.template != template.type_ref {
            continue;
        }
        if instantiated.contains(&usage.argument_type) {
            continue;
        }

        let source_type = &usage.argument_type;
        let members = match selected_members(cache, source_type, &criteria) {
            Ok(members) => members,
            Err(error) => {
                sink.report(Diagnostic::warning(
                    codes::INTERNAL_ERROR,
                    error.to_string(),
                    location.clone(),
                ));
                continue;
            }
        };

        if members.is_empty() {
            debug!(source = %source_type, "no members selected, skipping instantiation");
            continue;
        }

        sources.push(instantiate_one(
            template,
            &mapper,
            &declaration_format,
            source_type,
            &members,
        ));
        instantiated.push(source_type.clone());
    }

    sources.push(emit_factory(template, &instantiated));

    (sources, sink.into_vec())
}

/// Template shape validation, in the original's order: type parameter
/// arity first, then member mapping arity.
fn validate(template: &TemplateDecl) -> EngineResult<String> {
    let type_name = template.name().to_string();

    if !template.extensible {
        return Err(ConfigError::MissingExtensibilityMarker { type_name });
    }
    if template.type_params.is_empty() {
        return Err(ConfigError::MissingTypeParameter { type_name });
    }
    if template.type_params.len() > 1 {
        return Err(ConfigError::MoreThanOneTypeParameter { type_name });
    }
    if template.mappers.is_empty() {
        return Err(ConfigError::MissingMemberMapping { type_name });
    }
    if template.mappers.len() > 1 {
        return Err(ConfigError::MoreThanOneMemberMapping { type_name });
    }

    Ok(template.mappers[0].clone())
}

fn to_error_diagnostic(error: ConfigError, location: &Location) -> Diagnostic {
    let code = match &error {
        ConfigError::MissingExtensibilityMarker { .. } => codes::MISSING_EXTENSIBILITY_MARKER,
        ConfigError::MissingTypeParameter { .. } => codes::MISSING_TYPE_PARAMETER,
        ConfigError::MoreThanOneTypeParameter { .. } => codes::MORE_THAN_ONE_TYPE_PARAMETER,
        ConfigError::MissingMemberMapping { .. } => codes::MISSING_MEMBER_MAPPING,
        ConfigError::MoreThanOneMemberMapping { .. } => codes::MORE_THAN_ONE_MEMBER_MAPPING,
        _ => codes::INTERNAL_ERROR,
    };
    Diagnostic::error(code, error.to_string(), location.clone())
}

fn selected_members<S: MemberSource>(
    cache: &SchemaCache<S>,
    source_type: &TypeRef,
    criteria: &SelectionCriteria,
) -> EngineResult<Vec<Member>> {
    let members = cache
        .members_of(source_type, criteria.include_base_types)
        .ok_or_else(|| {
            ConfigError::internal(format!("unable to resolve source type {}", source_type))
        })?
        .into_iter()
        .filter(|member| matches(member, criteria))
        .collect();
    Ok(members)
}

/// Synthesizes one concrete projected type for a discovered source type:
/// `{Template}Of{Source}`, inheriting from the template instantiated
/// with the source, one rendered member per selected member, and a
/// constructor routing every member through the mapper function.
fn instantiate_one(
    template: &TemplateDecl,
    mapper: &str,
    declaration_format: &Template,
    source_type: &TypeRef,
    members: &[Member],
) -> GeneratedSource {
    let mapped_name = format!("{}Of{}", template.name(), source_type.name());
    let header = format!(
        "{} {} {} : {}<{}>",
        template.modifiers,
        template.kind_keyword,
        mapped_name,
        template.name(),
        source_type.name()
    );

    let rendered: Vec<(String, String)> = members
        .iter()
        .filter_map(|member| {
            let line = format_member(member, declaration_format)?;
            declared_identifier(&line)?;
            Some((member.name.clone(), line))
        })
        .collect();

    let mut lines: Vec<DefinitionLine> = rendered
        .iter()
        .map(|(_, line)| DefinitionLine::Line(line.clone()))
        .collect();

    let body: Vec<String> = rendered
        .iter()
        .filter_map(|(source_name, line)| {
            let identifier = declared_identifier(line)?;
            Some(format!(
                "this.{} = {}(\"{}\", source.{});",
                identifier, mapper, source_name, source_name
            ))
        })
        .collect();

    lines.push(DefinitionLine::Blank);
    lines.push(DefinitionLine::Block {
        header: format!("public {}({} source)", mapped_name, source_type.name()),
        body,
    });

    let text = emit_definition(&header, lines, template.container());

    GeneratedSource {
        key: format!("{}.g", mapped_name),
        text,
    }
}

/// Static dispatch factory: one overload per instantiated source type
/// plus a generic fallback that fails at the generated program's own
/// runtime for any type without a concrete overload.
fn emit_factory(template: &TemplateDecl, instantiated: &[TypeRef]) -> GeneratedSource {
    let header = format!("public static {} {}", template.kind_keyword, template.name());

    let mut lines: Vec<DefinitionLine> = instantiated
        .iter()
        .map(|source_type| {
            let mapped = qualified(template.container(), &format!(
                "{}Of{}",
                template.name(),
                source_type.name()
            ));
            DefinitionLine::Line(format!(
                "public static {} Map({} source) => new {}(source);",
                mapped,
                source_type.qualified_name(),
                mapped
            ))
        })
        .collect();

    lines.push(DefinitionLine::Line(format!(
        "public static {}<T> Map<T>(T source) => throw new NotImplementedException($\"Missing 'Map' for {{typeof(T).Name}} type\");",
        template.name()
    )));

    let text = emit_definition(&header, lines, template.container());

    GeneratedSource {
        key: format!("{}.factory.g", template.name()),
        text,
    }
}

fn qualified(container: Option<&str>, name: &str) -> String {
    match container {
        Some(container) => format!("{}.{}", container, name),
        None => name.to_string(),
    }
}

/// Extracts the declared identifier from a rendered member line: the
/// last token before the accessor clause (properties) or the statement
/// terminator (fields). Custom formats may decorate the name token, so
/// the identifier is read back from the rendered text.
fn declared_identifier(line: &str) -> Option<String> {
    let declaration = match line.find(" {") {
        Some(clause) => &line[..clause],
        None => line.trim_end_matches(';'),
    };
    let identifier = declaration.split_whitespace().last()?;
    if identifier.is_empty() {
        None
    } else {
        Some(identifier.to_string())
    }
}
