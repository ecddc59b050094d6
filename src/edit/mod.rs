//! The mutation engine.
//!
//! [`AddDependency`] is the add-a-dependency operation over one build
//! script: it locates (or synthesizes) the `dependencies` block, renders
//! the new declaration in the style and dialect of its surroundings,
//! splices it at the position hand-authored code would use, and only after
//! the textual edit succeeds updates the dependency-configuration graph,
//! consulting the metadata resolver for the transitive closure.
//!
//! Failure behavior follows the error taxonomy in [`crate::core`]: parse
//! failures are fatal, resolver failures become warnings attached to the
//! returned script (the textual edit stands, the graph update for that
//! dependency is abandoned), and an unknown configuration is a silent
//! no-op.
//!
//! ```
//! use gradle_edit::edit::AddDependency;
//! use gradle_edit::project::{Configuration, ProjectGraph};
//! use gradle_edit::resolve::StaticResolver;
//! use gradle_edit::script::{BuildScript, Dialect};
//!
//! let project = ProjectGraph::from_configurations([
//!     Configuration::new("implementation"),
//!     Configuration::new("testImplementation").extending("implementation"),
//! ]);
//! let script = BuildScript::parse(
//!     Dialect::Groovy,
//!     "dependencies {\n    implementation 'com.acme:existing:1.0'\n}\n",
//!     project,
//! )
//! .unwrap();
//!
//! let resolver = StaticResolver::new().with_module("com.google.guava", "guava", "33.0.0-jre");
//! let edited = AddDependency::new("implementation", "com.google.guava", "guava")
//!     .with_version("33.0.0-jre")
//!     .apply(script, &resolver)
//!     .unwrap();
//!
//! assert!(edited.value.print().contains("com.google.guava:guava:33.0.0-jre"));
//! ```

mod https;
mod insert;
mod locate;
mod policy;
mod render;


pub use https::UseHttpsForRepositories;
pub use policy::{OrderingPolicy, PolicyError};

use tracing::{debug, warn};

use crate::core::{Annotated, EditError, Warning};
use crate::project::GroupArtifactVersion;
use crate::resolve::MetadataResolver;
use crate::script::{
    BuildScript, Dialect, ScriptTree, Statement, StatementKind, auto_format, block_child_indent,
    indent_unit,
};

/// Add a dependency to a named configuration of one build script.
///
/// The operation is idempotent: when the target configuration already
/// requests the (group, artifact) module, the script is returned untouched.
#[derive(Debug, Clone)]
pub struct AddDependency {
    /// Configuration the dependency is declared against.
    pub configuration: String,
    pub group_id: String,
    pub artifact_id: String,
    /// Concrete version, `$`-property placeholder, or `None` for a
    /// versionless declaration.
    pub version: Option<String>,
    pub classifier: Option<String>,
    pub extension: Option<String>,
    /// Ordering policy for the insertion comparator.
    pub policy: OrderingPolicy,
}

impl AddDependency {
    pub fn new(
        configuration: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            configuration: configuration.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            classifier: None,
            extension: None,
            policy: OrderingPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Apply the operation.
    ///
    /// Returns the edited script with any non-fatal warnings attached.
    /// Either the textual edit alone lands (with a warning) or the textual
    /// and graph edits land together; a fatal [`EditError`] leaves the
    /// caller's original text untouched on disk.
    pub fn apply(
        &self,
        script: BuildScript,
        resolver: &dyn MetadataResolver,
    ) -> Result<Annotated<BuildScript>, EditError> {
        if self.group_id.is_empty() || self.artifact_id.is_empty() {
            debug!("missing module coordinates, nothing to do");
            return Ok(Annotated::clean(script));
        }
        let Some(target) = script.project().configuration(&self.configuration) else {
            debug!(
                configuration = %self.configuration,
                "configuration not found, nothing to do"
            );
            return Ok(Annotated::clean(script));
        };
        if target
            .find_requested(&self.group_id, &self.artifact_id)
            .is_some()
        {
            debug!(
                configuration = %self.configuration,
                group = %self.group_id,
                artifact = %self.artifact_id,
                "already requested, nothing to do"
            );
            return Ok(Annotated::clean(script));
        }

        let (mut tree, project) = script.into_parts();
        let dialect = tree.dialect();

        let block_index = match locate::find_dependencies_block(&tree) {
            Some(index) => index,
            None => locate::synthesize_dependencies_block(&mut tree)?,
        };

        let unit = indent_unit(&tree);
        let block_indent = tree.statements()[block_index]
            .indent()
            .unwrap_or_default()
            .to_string();

        let StatementKind::Block(block) = &tree.statements()[block_index].kind else {
            // find/synthesize only ever hand back a block statement.
            return Err(EditError::parse("dependencies statement is not a block"));
        };
        let style = render::detect_style(block);
        let child_indent = block_child_indent(block, &block_indent, &unit);

        let declaration_text = render::render_declaration(
            dialect,
            style,
            &self.configuration,
            &self.group_id,
            &self.artifact_id,
            self.version.as_deref(),
            self.classifier.as_deref(),
            self.extension.as_deref(),
        );
        let declaration = parse_declaration(dialect, &declaration_text)?;
        let declaration = auto_format(declaration, &child_indent);

        let StatementKind::Block(block) = &mut tree.statements[block_index].kind else {
            return Err(EditError::parse("dependencies statement is not a block"));
        };
        insert::insert_declaration(
            block,
            &block_indent,
            &child_indent,
            declaration,
            &self.configuration,
            &self.policy,
        );

        let gav = GroupArtifactVersion::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.version.clone(),
        );
        let mut warnings = Vec::new();
        let project = if gav.has_concrete_version() {
            match resolver.resolve(&gav) {
                Ok(module) => project.with_dependency_added(
                    &self.configuration,
                    &gav,
                    self.classifier.as_deref(),
                    self.extension.as_deref(),
                    Some(&module),
                ),
                Err(err) => {
                    warn!(module = %gav, error = %err, "metadata resolution failed, keeping textual edit");
                    warnings.push(Warning::from(err));
                    project
                }
            }
        } else {
            debug!(module = %gav, "no concrete version, skipping resolution");
            project.with_dependency_added(
                &self.configuration,
                &gav,
                self.classifier.as_deref(),
                self.extension.as_deref(),
                None,
            )
        };

        Ok(Annotated::with_warnings(
            BuildScript::from_parts(tree, project),
            warnings,
        ))
    }
}

/// Parse the rendered declaration back through the script parser, wrapped
/// in a `dependencies` block so it lands in the same grammatical position
/// it will occupy in the real script.
fn parse_declaration(dialect: Dialect, declaration_text: &str) -> Result<Statement, EditError> {
    let snippet = format!("dependencies {{\n{declaration_text}\n}}");
    let tree = ScriptTree::parse(dialect, &snippet).map_err(|err| EditError::MalformedTemplate {
        reason: err.to_string(),
    })?;
    let statement = tree.statements().first().and_then(|statement| {
        if let StatementKind::Block(block) = &statement.kind {
            block.statements.first().cloned()
        } else {
            None
        }
    });
    statement.ok_or_else(|| EditError::MalformedTemplate {
        reason: format!("declaration did not parse as a block child: {declaration_text}"),
    })
}
