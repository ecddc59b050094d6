use gradle_edit::edit::UseHttpsForRepositories;
use gradle_edit::project::ProjectGraph;
use gradle_edit::script::{BuildScript, Dialect};

fn parse(text: &str) -> BuildScript {
    BuildScript::parse(Dialect::Groovy, text, ProjectGraph::default()).unwrap()
}

#[test]
fn rewrites_maven_repository_urls() {
    let text = "repositories {\n    mavenCentral()\n    maven {\n        url \"http://repo.example.com/releases\"\n    }\n}\n";
    let rewritten = UseHttpsForRepositories::new().apply(parse(text));
    assert_eq!(
        rewritten.print(),
        "repositories {\n    mavenCentral()\n    maven {\n        url \"https://repo.example.com/releases\"\n    }\n}\n"
    );
}

#[test]
fn interpolated_urls_keep_their_template() {
    let text = "repositories {\n    maven {\n        url \"http://repo.example.com/${channel}\"\n    }\n}\n";
    let rewritten = UseHttpsForRepositories::new().apply(parse(text));
    assert!(
        rewritten
            .print()
            .contains("url \"https://repo.example.com/${channel}\"")
    );
}

#[test]
fn nested_repositories_blocks_are_covered() {
    let text = "publishing {\n    repositories {\n        maven {\n            url \"http://publish.example.com\"\n        }\n    }\n}\n";
    let rewritten = UseHttpsForRepositories::new().apply(parse(text));
    assert!(rewritten.print().contains("url \"https://publish.example.com\""));
}

#[test]
fn urls_outside_maven_repositories_are_untouched() {
    let text = "maven {\n    url \"http://not-a-repository.example.com\"\n}\n";
    let rewritten = UseHttpsForRepositories::new().apply(parse(text));
    assert_eq!(rewritten.print(), text);
}

#[test]
fn https_urls_are_left_alone_byte_for_byte() {
    let text = "repositories {\n    maven {\n        url \"https://already.secure\"  // keep\n    }\n}\n";
    let rewritten = UseHttpsForRepositories::new().apply(parse(text));
    assert_eq!(rewritten.print(), text);
}

#[test]
fn kotlin_uri_calls_are_rewritten() {
    let text = "repositories {\n    maven {\n        url = uri(\"http://repo.example.com\")\n    }\n}\n";
    let script =
        BuildScript::parse(Dialect::Kotlin, text, ProjectGraph::default()).unwrap();
    let rewritten = UseHttpsForRepositories::new().apply(script);
    assert!(rewritten.print().contains("url = uri(\"https://repo.example.com\")"));
}
