use crate::writer::SourceWriter;
use tracing::debug;

/// One entry in an emitted type body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionLine {
    /// A single member declaration line; empty lines are skipped
    Line(String),

    /// An intentional blank separator line
    Blank,

    /// A nested block (constructor or factory method with a body)
    Block { header: String, body: Vec<String> },
}

/// Assembles a full textual type definition.
///
/// The target header line is reproduced verbatim from its declaration
/// site: modifiers, kind keyword, name, generic parameters and base
/// references are echoed, never synthesized. Output is a pure function
/// of the inputs.
pub fn emit_definition(
    header: &str,
    members: impl IntoIterator<Item = DefinitionLine>,
    container: Option<&str>,
) -> String {
    let mut writer = SourceWriter::new();

    if let Some(container) = container {
        writer.add_line(&format!("namespace {};", container));
        writer.add_blank();
    }

    writer.add_line(header);
    writer.open_scope();

    for member in members {
        match member {
            DefinitionLine::Line(line) => {
                if line.is_empty() {
                    debug!("skipping empty member line");
                    continue;
                }
                writer.add_line(&line);
            }
            DefinitionLine::Blank => {
                writer.add_blank();
            }
            DefinitionLine::Block { header, body } => {
                writer.add_line(&header);
                writer.open_scope();
                for line in body {
                    writer.add_line(&line);
                }
                writer.close_scope();
            }
        }
    }

    writer.close_scope();
    writer.build()
}
