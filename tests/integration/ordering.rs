use gradle_edit::edit::{AddDependency, OrderingPolicy};
use gradle_edit::script::{BuildScript, Dialect};

use crate::common::{java_project, resolver_for};

#[test]
fn insertion_stays_adjacent_to_the_matching_group() {
    let text = "dependencies {\n    testImplementation \"a:a:1\"\n    implementation \"b:b:1\"\n    implementation \"c:c:1\"\n}\n";
    let script = BuildScript::parse(Dialect::Groovy, text, java_project()).unwrap();

    let edited = AddDependency::new("implementation", "d", "d")
        .with_version("1")
        .apply(script, &resolver_for("d", "d", "1"))
        .unwrap();

    // Adjacent to the implementation group; testImplementation not
    // reordered even though it sorts after alphabetically.
    assert_eq!(
        edited.value.print(),
        "dependencies {\n    testImplementation \"a:a:1\"\n    implementation \"b:b:1\"\n    implementation \"c:c:1\"\n    implementation \"d:d:1\"\n}\n"
    );
}

#[test]
fn alphabetical_placement_within_the_group() {
    let text = "dependencies {\n    implementation \"b:b:1\"\n    implementation \"d:d:1\"\n}\n";
    let script = BuildScript::parse(Dialect::Groovy, text, java_project()).unwrap();

    let edited = AddDependency::new("implementation", "c", "c")
        .with_version("1")
        .apply(script, &resolver_for("c", "c", "1"))
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "dependencies {\n    implementation \"b:b:1\"\n    implementation \"c:c:1\"\n    implementation \"d:d:1\"\n}\n"
    );
}

#[test]
fn new_group_is_separated_by_one_blank_line() {
    let text = "dependencies {\n    implementation \"b:b:1\"\n}\n";
    let script = BuildScript::parse(Dialect::Groovy, text, java_project()).unwrap();

    let edited = AddDependency::new("testImplementation", "t", "t")
        .with_version("1")
        .apply(script, &resolver_for("t", "t", "1"))
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "dependencies {\n    implementation \"b:b:1\"\n\n    testImplementation \"t:t:1\"\n}\n"
    );
}

#[test]
fn joining_a_later_group_takes_over_its_boundary() {
    let text = "dependencies {\n    implementation \"b:b:1\"\n\n    testImplementation \"t:t:1\"\n}\n";
    let script = BuildScript::parse(Dialect::Groovy, text, java_project()).unwrap();

    let edited = AddDependency::new("testImplementation", "s", "s")
        .with_version("1")
        .apply(script, &resolver_for("s", "s", "1"))
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "dependencies {\n    implementation \"b:b:1\"\n\n    testImplementation \"s:s:1\"\n    testImplementation \"t:t:1\"\n}\n"
    );
}

#[test]
fn precedence_list_positions_a_new_group() {
    let policy = OrderingPolicy::from_toml_str(
        "precedence = [\"api\", \"implementation\", \"testImplementation\"]\n",
    )
    .unwrap();
    let text = "dependencies {\n    testImplementation \"t:t:1\"\n}\n";
    let script = BuildScript::parse(Dialect::Groovy, text, java_project()).unwrap();

    let edited = AddDependency::new("implementation", "a", "a")
        .with_version("1")
        .with_policy(policy)
        .apply(script, &resolver_for("a", "a", "1"))
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "dependencies {\n    implementation \"a:a:1\"\n\n    testImplementation \"t:t:1\"\n}\n"
    );
}

#[test]
fn policy_round_trips_through_a_file() -> anyhow::Result<()> {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "precedence = [\"implementation\"]")?;
    writeln!(file, "alphabetize_within_group = false")?;

    let policy = OrderingPolicy::load(file.path())?;
    assert_eq!(policy.rank("implementation"), Some(0));
    assert!(!policy.alphabetize_within_group);
    Ok(())
}

#[test]
fn tab_indented_scripts_keep_their_tabs() {
    let text = "dependencies {\n\timplementation \"b:b:1\"\n}\n";
    let script = BuildScript::parse(Dialect::Groovy, text, java_project()).unwrap();

    let edited = AddDependency::new("implementation", "c", "c")
        .with_version("1")
        .apply(script, &resolver_for("c", "c", "1"))
        .unwrap();

    assert_eq!(
        edited.value.print(),
        "dependencies {\n\timplementation \"b:b:1\"\n\timplementation \"c:c:1\"\n}\n"
    );
}
