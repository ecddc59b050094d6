use gradle_edit::edit::AddDependency;
use gradle_edit::project::GroupArtifactVersion;
use gradle_edit::resolve::StaticResolver;
use gradle_edit::script::{BuildScript, Dialect};

use crate::common::{init_tracing, java_project, resolver_for};

const GROOVY_SCRIPT: &str = "plugins {\n    id 'java'\n}\n\ndependencies {\n    implementation 'com.acme:alpha:1.0'\n}\n";

#[test]
fn adds_declaration_and_updates_graph() {
    init_tracing();
    let script = BuildScript::parse(Dialect::Groovy, GROOVY_SCRIPT, java_project()).unwrap();
    let resolver = resolver_for("com.acme", "beta", "2.0");

    let edited = AddDependency::new("implementation", "com.acme", "beta")
        .with_version("2.0")
        .apply(script, &resolver)
        .unwrap();

    assert!(edited.is_clean());
    assert_eq!(
        edited.value.print(),
        "plugins {\n    id 'java'\n}\n\ndependencies {\n    implementation 'com.acme:alpha:1.0'\n    implementation \"com.acme:beta:2.0\"\n}\n"
    );

    // Direct configuration plus everything extending it.
    let project = edited.value.project();
    for name in ["implementation", "testImplementation", "runtimeClasspath"] {
        assert!(
            project
                .configuration(name)
                .unwrap()
                .find_requested("com.acme", "beta")
                .is_some(),
            "{name} should request the new module"
        );
    }
    // Unrelated sibling stays empty.
    assert!(
        project
            .configuration("compileOnly")
            .unwrap()
            .find_requested("com.acme", "beta")
            .is_none()
    );
    // Resolvable configurations also record the resolved identity.
    let runtime = project.configuration("runtimeClasspath").unwrap();
    assert_eq!(runtime.resolved.len(), 1);
    assert_eq!(runtime.resolved[0].identity.version, "2.0");
}

#[test]
fn applying_twice_is_idempotent() {
    let script = BuildScript::parse(Dialect::Groovy, GROOVY_SCRIPT, java_project()).unwrap();
    let resolver = resolver_for("com.acme", "beta", "2.0");
    let operation = AddDependency::new("implementation", "com.acme", "beta").with_version("2.0");

    let once = operation.apply(script, &resolver).unwrap().into_value();
    let printed_once = once.print();
    let twice = operation.apply(once, &resolver).unwrap();

    assert!(twice.is_clean());
    assert_eq!(twice.value.print(), printed_once);
}

#[test]
fn existing_request_is_a_textual_no_op() {
    let project = java_project().with_dependency_added(
        "implementation",
        &GroupArtifactVersion::new("com.acme", "beta", Some("1.0".to_string())),
        None,
        None,
        None,
    );
    let script = BuildScript::parse(Dialect::Groovy, GROOVY_SCRIPT, project).unwrap();

    let edited = AddDependency::new("implementation", "com.acme", "beta")
        .with_version("2.0")
        .apply(script, &StaticResolver::new())
        .unwrap();

    assert!(edited.is_clean());
    assert_eq!(edited.value.print(), GROOVY_SCRIPT);
}

#[test]
fn unknown_configuration_is_a_silent_no_op() {
    let script = BuildScript::parse(Dialect::Groovy, GROOVY_SCRIPT, java_project()).unwrap();

    let edited = AddDependency::new("doesNotExist", "com.acme", "beta")
        .with_version("2.0")
        .apply(script, &StaticResolver::new())
        .unwrap();

    assert!(edited.is_clean());
    assert_eq!(edited.value.print(), GROOVY_SCRIPT);
}

#[test]
fn conflicting_request_is_replaced_in_the_graph() {
    let gav_v1 = GroupArtifactVersion::new("com.acme", "beta", Some("1.0".to_string()));
    let gav_v2 = GroupArtifactVersion::new("com.acme", "beta", Some("2.0".to_string()));

    let project = java_project()
        .with_dependency_added("implementation", &gav_v1, None, None, None)
        .with_dependency_added("implementation", &gav_v2, None, None, None);

    let implementation = project.configuration("implementation").unwrap();
    let matching: Vec<_> = implementation
        .requested
        .iter()
        .filter(|req| req.matches_module("com.acme", "beta"))
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].gav.version.as_deref(), Some("2.0"));
}

#[test]
fn missing_block_is_synthesized_at_the_end() {
    let script = BuildScript::parse(
        Dialect::Groovy,
        "plugins {\n    id 'java'\n}\n",
        java_project(),
    )
    .unwrap();
    let resolver = resolver_for("com.acme", "beta", "2.0");

    let edited = AddDependency::new("implementation", "com.acme", "beta")
        .with_version("2.0")
        .apply(script, &resolver)
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "plugins {\n    id 'java'\n}\n\ndependencies {\n    implementation \"com.acme:beta:2.0\"\n}\n"
    );
}

#[test]
fn empty_script_gets_the_block_with_no_leading_blank_line() {
    let script = BuildScript::parse(Dialect::Groovy, "", java_project()).unwrap();
    let resolver = resolver_for("com.acme", "beta", "2.0");

    let edited = AddDependency::new("implementation", "com.acme", "beta")
        .with_version("2.0")
        .apply(script, &resolver)
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "dependencies {\n    implementation \"com.acme:beta:2.0\"\n}"
    );
}

#[test]
fn keyed_siblings_elect_keyed_rendering() {
    let text = "dependencies {\n    implementation group: 'a', name: 'a', version: '1'\n    implementation group: 'b', name: 'b', version: '1'\n    implementation group: 'c', name: 'c', version: '1'\n}\n";
    let script = BuildScript::parse(Dialect::Groovy, text, java_project()).unwrap();
    let resolver = resolver_for("d", "d", "1");

    let edited = AddDependency::new("implementation", "d", "d")
        .with_version("1")
        .apply(script, &resolver)
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "dependencies {\n    implementation group: 'a', name: 'a', version: '1'\n    implementation group: 'b', name: 'b', version: '1'\n    implementation group: 'c', name: 'c', version: '1'\n    implementation group: \"d\", name: \"d\", version: \"1\"\n}\n"
    );
}

#[test]
fn resolution_failure_keeps_the_edit_and_attaches_a_warning() {
    let script = BuildScript::parse(Dialect::Groovy, GROOVY_SCRIPT, java_project()).unwrap();

    let edited = AddDependency::new("implementation", "com.acme", "beta")
        .with_version("2.0")
        .apply(script, &StaticResolver::new())
        .unwrap();

    assert_eq!(edited.warnings.len(), 1);
    assert!(edited.warnings[0].message.contains("com.acme:beta:2.0"));
    assert!(edited.value.print().contains("implementation \"com.acme:beta:2.0\""));
    // The graph update for the failed dependency was abandoned.
    assert!(
        edited
            .value
            .project()
            .configuration("implementation")
            .unwrap()
            .find_requested("com.acme", "beta")
            .is_none()
    );
}

#[test]
fn placeholder_version_skips_resolution_and_renders_literally() {
    let script = BuildScript::parse(Dialect::Groovy, GROOVY_SCRIPT, java_project()).unwrap();

    let edited = AddDependency::new("implementation", "com.acme", "beta")
        .with_version("$acmeVersion")
        .apply(script, &StaticResolver::new())
        .unwrap();

    assert!(edited.is_clean());
    assert!(
        edited
            .value
            .print()
            .contains("implementation \"com.acme:beta:$acmeVersion\"")
    );
    let request = edited
        .value
        .project()
        .configuration("implementation")
        .unwrap()
        .find_requested("com.acme", "beta")
        .cloned()
        .unwrap();
    assert_eq!(request.gav.version.as_deref(), Some("$acmeVersion"));
    // No resolved entry is recorded for a placeholder anywhere.
    assert!(
        edited
            .value
            .project()
            .configuration("runtimeClasspath")
            .unwrap()
            .resolved
            .is_empty()
    );
}

#[test]
fn versionless_dependency_is_requested_only() {
    let script = BuildScript::parse(Dialect::Groovy, GROOVY_SCRIPT, java_project()).unwrap();

    let edited = AddDependency::new("implementation", "com.acme", "beta")
        .apply(script, &StaticResolver::new())
        .unwrap();

    assert!(edited.is_clean());
    assert!(edited.value.print().contains("implementation \"com.acme:beta\"\n"));
    assert!(
        edited
            .value
            .project()
            .configuration("implementation")
            .unwrap()
            .find_requested("com.acme", "beta")
            .is_some()
    );
}

#[test]
fn kotlin_scripts_render_the_call_form() {
    let text = "plugins {\n    `java-library`\n}\n\ndependencies {\n    implementation(\"com.acme:alpha:1.0\")\n}\n";
    let script = BuildScript::parse(Dialect::Kotlin, text, java_project()).unwrap();
    let resolver = resolver_for("org.junit.jupiter", "junit-jupiter", "5.10.0");

    let edited = AddDependency::new("testImplementation", "org.junit.jupiter", "junit-jupiter")
        .with_version("5.10.0")
        .apply(script, &resolver)
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "plugins {\n    `java-library`\n}\n\ndependencies {\n    implementation(\"com.acme:alpha:1.0\")\n\n    testImplementation(\"org.junit.jupiter:junit-jupiter:5.10.0\")\n}\n"
    );
}

#[test]
fn kotlin_missing_block_synthesis() {
    let script = BuildScript::parse(
        Dialect::Kotlin,
        "plugins {\n    `java-library`\n}\n",
        java_project(),
    )
    .unwrap();
    let resolver = resolver_for("com.acme", "beta", "2.0");

    let edited = AddDependency::new("implementation", "com.acme", "beta")
        .with_version("2.0")
        .apply(script, &resolver)
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "plugins {\n    `java-library`\n}\n\ndependencies {\n    implementation(\"com.acme:beta:2.0\")\n}\n"
    );
}

#[test]
fn malformed_script_is_a_fatal_parse_error() {
    let result = BuildScript::parse(Dialect::Groovy, "dependencies {\n", java_project());
    assert!(result.is_err());
}
