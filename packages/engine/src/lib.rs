//! # Typelens Engine
//!
//! Applies a directive's semantics (pick, omit, or criteria-filter) to
//! a source type's member model and synthesizes a textual supplementary
//! definition for the directive's target type.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Projection and emission are fully deterministic.**
//!
//! For the same schema snapshot and the same directive configuration the
//! engine must return members in identical order and regenerate
//! byte-identical text:
//!
//! - Member order is discovery order: own declarations before inherited,
//!   each level in declaration order
//! - No HashMap iteration order on the output path (named directive
//!   arguments live in a `BTreeMap`)
//! - No time, randomness, or environment dependence
//!
//! Determinism is what lets the host build system cache generated output
//! by content and map it back to inputs through the stable output keys.
//!
//! ## Failure Isolation
//!
//! Each directive occurrence is processed independently. A fatal
//! resolution error, an unresolvable source type, or any internal
//! failure aborts only that occurrence; sibling occurrences in the same
//! pass are never affected.

pub mod config;
pub mod map_template;
pub mod occurrence;
pub mod projection;

pub use config::{
    options, resolve_config, ArgValue, DirectiveConfig, DirectiveKind, RawArgs, TargetDecl,
};
pub use map_template::{instantiate_template, TemplateDecl, UsageSite};
pub use occurrence::{process_occurrence, run_pass, DirectiveOccurrence, GeneratedSource, PassOutput};
pub use projection::{project, ProjectionResult};

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
mod tests_projection;

#[cfg(test)]
mod tests_pass;
