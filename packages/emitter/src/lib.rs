//! Text synthesis for the typelens projection engine: token-substitution
//! declaration templates, the per-member formatter, and the definition
//! emitter that assembles full supplementary type definitions.
//!
//! Everything here is a pure function of its inputs, with no timestamps
//! and no nondeterministic ordering, so the host build system can cache
//! output by content.

pub mod emit;
pub mod format;
pub mod template;
pub mod writer;

pub use emit::{emit_definition, DefinitionLine};
pub use format::format_member;
pub use template::{formats, tokens, Template, TokenValues};
pub use writer::SourceWriter;
