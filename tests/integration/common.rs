//! Shared fixtures for the integration suite.

use std::sync::Once;

use gradle_edit::project::{Configuration, ProjectGraph};
use gradle_edit::resolve::StaticResolver;

static INIT: Once = Once::new();

/// Initialize tracing once for the whole suite; `RUST_LOG=debug` shows the
/// engine's decision points when a test fails.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The configuration graph the `java` plugin would contribute, reduced to
/// what the tests exercise: two declarable buckets, two resolvable
/// classpaths extending them, and one unrelated sibling.
pub fn java_project() -> ProjectGraph {
    ProjectGraph::from_configurations([
        Configuration::new("implementation"),
        Configuration::new("testImplementation").extending("implementation"),
        Configuration::new("runtimeClasspath")
            .extending("implementation")
            .resolvable(true),
        Configuration::new("testRuntimeClasspath")
            .extending("testImplementation")
            .resolvable(true),
        Configuration::new("compileOnly"),
    ])
}

/// A resolver that knows one module with no transitives.
pub fn resolver_for(group: &str, artifact: &str, version: &str) -> StaticResolver {
    StaticResolver::new().with_module(group, artifact, version)
}
