//! gradle-edit: minimal-diff editing of Gradle build scripts.
//!
//! This crate adds dependency declarations to `build.gradle` /
//! `build.gradle.kts` files while keeping two things consistent at once:
//! the script text, which must come back byte-identical everywhere the
//! edit did not touch, and the project's dependency-configuration graph,
//! which must reflect the new request in the target configuration and
//! every configuration extending it.
//!
//! # How an edit works
//!
//! 1. The script text is parsed into a lossless statement tree
//!    ([`script`]) and paired with the project's configuration graph
//!    ([`project`]) as a [`script::BuildScript`].
//! 2. [`edit::AddDependency`] checks the graph: if the target
//!    configuration already requests the module, the script is returned
//!    untouched.
//! 3. The `dependencies` block is located, or synthesized at the end of
//!    the script when missing.
//! 4. The declaration is rendered in the dialect of the file and the
//!    style (compact vs. keyed) its neighbors use, re-parsed through the
//!    same parser, and spliced at the position hand-written code would
//!    use: same-configuration declarations stay grouped and blank-line
//!    boundaries between groups are preserved.
//! 5. The graph is updated and the metadata resolver ([`resolve`]) is
//!    consulted for the transitive closure. A resolver failure does not
//!    roll the edit back; it is attached to the result as a warning
//!    ([`core::Annotated`]).
//!
//! # Modules
//!
//! - [`core`] - error taxonomy and warning attachment
//! - [`project`] - configurations, extends edges, requested/resolved sets
//! - [`resolve`] - the metadata-resolver gateway
//! - [`script`] - lossless parsing, printing, and the statement tree
//! - [`edit`] - the mutation operations and ordering policy

pub mod core;
pub mod edit;
pub mod project;
pub mod resolve;
pub mod script;
