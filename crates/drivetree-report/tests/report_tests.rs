use drivetree_core::{Entry, EntryKind, TreePath};
use drivetree_report::{
    IssueKind, NameMatcher, RenderConfig, find_by_name, find_matching, render, render_to, validate,
};
use rstest::rstest;

fn sample_drive() -> Entry {
    Entry::drive(
        'a',
        [
            Entry::directory(
                "Animals",
                [
                    Entry::file("Aardvark"),
                    Entry::directory("Birds", [Entry::file("Albatross")]),
                ],
            ),
            Entry::directory("Plants", [Entry::file("Acacia")]),
            Entry::file("index.txt"),
        ],
    )
}

#[test]
fn test_render_indents_by_path_length() {
    let text = render(&sample_drive(), &RenderConfig::default());
    let expected = "a\n\
                    \tAnimals\n\
                    \t\tAardvark\n\
                    \t\tBirds\n\
                    \t\t\tAlbatross\n\
                    \tPlants\n\
                    \t\tAcacia\n\
                    \tindex.txt\n";
    assert_eq!(text, expected);
}

#[test]
fn test_render_line_depth_matches_traversal_path() {
    let root = sample_drive();
    let text = render(&root, &RenderConfig::default());

    for (line, (path, entry)) in text.lines().zip(root.walk()) {
        let tabs = line.chars().take_while(|c| *c == '\t').count();
        assert_eq!(tabs, path.depth());
        assert_eq!(&line[tabs..], entry.name());
    }
}

#[test]
fn test_render_to_after_rename() {
    let mut root = sample_drive();
    root.resolve_mut([0, 0]).unwrap().rename("Antelope").unwrap();

    let mut out = String::new();
    render_to(&mut out, &root, &RenderConfig::default()).unwrap();
    assert!(out.contains("\t\tAntelope\n"));
    assert!(!out.contains("Aardvark"));
}

#[rstest]
#[case("A*", 4)]
#[case("*.txt", 1)]
#[case("Birds", 1)]
#[case("Z*", 0)]
fn test_glob_search_counts(#[case] pattern: &str, #[case] expected: usize) {
    let found = find_matching(&sample_drive(), pattern).unwrap();
    assert_eq!(found.len(), expected, "pattern {pattern}");
}

#[test]
fn test_search_paths_resolve_to_matches() {
    let root = sample_drive();
    let matcher = NameMatcher::new("A*").unwrap();
    assert_eq!(matcher.pattern(), "A*");

    for found in matcher.find(&root) {
        let entry = root.resolve(&found.path).unwrap();
        assert_eq!(entry.name(), found.name);
        assert_eq!(entry.kind(), found.kind);
    }
}

#[test]
fn test_find_by_name_returns_all_paths() {
    let mut root = sample_drive();
    root.resolve_mut([1]).unwrap().append(Entry::file("Aardvark")).unwrap();

    let paths = find_by_name(&root, "Aardvark");
    assert_eq!(paths, vec![TreePath::from([0, 0]), TreePath::from([1, 1])]);
}

#[test]
fn test_search_match_serializes() {
    let found = find_matching(&sample_drive(), "Birds").unwrap();
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json[0]["path"], serde_json::json!([0, 1]));
    assert_eq!(json[0]["kind"], "Directory");
    assert_eq!(found[0].kind, EntryKind::Directory);
}

#[test]
fn test_validate_reports_duplicate_siblings() {
    let mut root = sample_drive();
    assert!(validate(&root).is_empty());

    root.append(Entry::file("index.txt")).unwrap();
    let issues = validate(&root);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::DuplicateName);
    assert_eq!(issues[0].path, TreePath::root());
    assert!(issues[0].message.contains("index.txt"));
}
