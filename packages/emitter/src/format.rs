use crate::template::{Template, TokenValues};
use typelens_schema::{Accessibility, Accessor, Member, MemberShape, PropertyAccessors, Scope};

/// Renders one selected member into a textual declaration through the
/// given template.
///
/// Returns `None` for degenerate members that cannot be rendered (an
/// empty name); never panics.
pub fn format_member(member: &Member, template: &Template) -> Option<String> {
    let values = member_tokens(member)?;
    Some(template.render(&values))
}

fn member_tokens(member: &Member) -> Option<TokenValues> {
    if member.name.is_empty() {
        return None;
    }

    let scope = match member.scope {
        Scope::Static => " static".to_string(),
        Scope::Instance => String::new(),
    };

    let (field_access, accessors) = match &member.shape {
        MemberShape::Property(accessors) => {
            (String::new(), accessor_clause(member.accessibility, accessors))
        }
        MemberShape::Field { readonly } => {
            let field_access = if *readonly {
                " readonly".to_string()
            } else {
                String::new()
            };
            (field_access, ";".to_string())
        }
    };

    Some(TokenValues {
        accessibility: member.accessibility.keyword().to_string(),
        scope,
        field_access,
        declared_type: member.declared_type.clone(),
        name: member.name.clone(),
        accessors,
    })
}

/// Brace-delimited accessor list: a get-marker if a read accessor
/// exists, a set-marker if a write accessor exists. An accessor's own
/// visibility qualifier appears only when it differs from the member's
/// declared accessibility.
fn accessor_clause(member_accessibility: Accessibility, accessors: &PropertyAccessors) -> String {
    let mut clause = String::from(" {");
    if let Some(get) = accessors.get() {
        clause.push_str(&accessor_marker("get", get, member_accessibility));
    }
    if let Some(set) = accessors.set() {
        clause.push_str(&accessor_marker("set", set, member_accessibility));
    }
    clause.push_str(" }");
    clause
}

fn accessor_marker(
    keyword: &str,
    accessor: &Accessor,
    member_accessibility: Accessibility,
) -> String {
    match accessor.accessibility {
        Some(own) if own != member_accessibility => format!(" {} {};", own.keyword(), keyword),
        _ => format!(" {};", keyword),
    }
}
