//! Declaration style election and rendering.
//!
//! The style of the new declaration is decided by majority vote over the
//! block's existing declarations; ties and empty blocks default to the
//! compact form. Rendering then picks one of four templates
//! (dialect × style). The configuration name `default` is a Groovy keyword
//! (and a base-plugin configuration), so the Groovy dialect quotes it.

use tracing::debug;

use crate::script::{Block, DeclarationStyle, Dialect, classify};

/// Majority vote over the block's existing declarations.
pub(crate) fn detect_style(block: &Block) -> DeclarationStyle {
    let mut compact = 0usize;
    let mut keyed = 0usize;
    for statement in &block.statements {
        match classify(statement).and_then(|view| view.style) {
            Some(DeclarationStyle::Compact) => compact += 1,
            Some(DeclarationStyle::Keyed) => keyed += 1,
            None => {}
        }
    }
    let style = if compact >= keyed {
        DeclarationStyle::Compact
    } else {
        DeclarationStyle::Keyed
    };
    debug!(compact, keyed, ?style, "declaration style vote");
    style
}

/// Render the declaration text in the given dialect and style.
///
/// The classifier is emitted only when a version is also present: the
/// compact notation is positional, and the keyed notation follows the same
/// rule so both render the same information.
pub(crate) fn render_declaration(
    dialect: Dialect,
    style: DeclarationStyle,
    configuration: &str,
    group_id: &str,
    artifact_id: &str,
    version: Option<&str>,
    classifier: Option<&str>,
    extension: Option<&str>,
) -> String {
    let classifier = version.and(classifier);
    match style {
        DeclarationStyle::Compact => {
            let mut coordinate = format!("{group_id}:{artifact_id}");
            if let Some(version) = version {
                coordinate.push(':');
                coordinate.push_str(version);
                if let Some(classifier) = classifier {
                    coordinate.push(':');
                    coordinate.push_str(classifier);
                }
            }
            if let Some(extension) = extension {
                coordinate.push('@');
                coordinate.push_str(extension);
            }
            match dialect {
                Dialect::Groovy => {
                    format!("{} \"{}\"", escape_configuration(configuration), coordinate)
                }
                Dialect::Kotlin => format!("{configuration}(\"{coordinate}\")"),
            }
        }
        DeclarationStyle::Keyed => {
            let mut fields = format!("group: \"{group_id}\", name: \"{artifact_id}\"");
            let mut kotlin_fields = format!("group = \"{group_id}\", name = \"{artifact_id}\"");
            if let Some(version) = version {
                fields.push_str(&format!(", version: \"{version}\""));
                kotlin_fields.push_str(&format!(", version = \"{version}\""));
            }
            if let Some(classifier) = classifier {
                fields.push_str(&format!(", classifier: \"{classifier}\""));
                kotlin_fields.push_str(&format!(", classifier = \"{classifier}\""));
            }
            if let Some(extension) = extension {
                fields.push_str(&format!(", ext: \"{extension}\""));
                kotlin_fields.push_str(&format!(", ext = \"{extension}\""));
            }
            match dialect {
                Dialect::Groovy => {
                    format!("{} {}", escape_configuration(configuration), fields)
                }
                Dialect::Kotlin => format!("{configuration}({kotlin_fields})"),
            }
        }
    }
}

/// `default` is created by the base plugin and is a Groovy keyword; using
/// it as a bare call name needs quoting.
fn escape_configuration(configuration: &str) -> String {
    if configuration == "default" {
        format!("'{configuration}'")
    } else {
        configuration.to_string()
    }
}
