use breeze_core::{classes, cn, merge, ClassComposer, ClassToken, ClassificationTable};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

#[test]
fn test_merges_class_names() {
    assert_eq!(cn!["foo", "bar"], "foo bar");
    assert_eq!(cn!["single"], "single");
    assert_eq!(cn![], "");
}

#[test]
fn test_conditional_and_falsy_values() {
    assert_eq!(cn!["foo", false, "baz"], "foo baz");
    assert_eq!(cn!["foo", None::<&str>, ClassToken::Empty, "bar"], "foo bar");
    assert_eq!(cn![false, None::<String>, ""], "");
}

#[test]
fn test_nested_arrays() {
    assert_eq!(cn![vec!["foo", "bar"], "baz"], "foo bar baz");
    assert_eq!(
        cn![vec![ClassToken::from("a"), ClassToken::from(vec!["b", "c"])], "d"],
        "a b c d"
    );
}

#[test]
fn test_boolean_maps() {
    let mut map = IndexMap::new();
    map.insert("active".to_string(), true);
    map.insert("disabled".to_string(), false);
    assert_eq!(merge(&[ClassToken::from(map.clone())]), "active");
    assert_eq!(cn!["base", map], "base active");
}

#[test]
fn test_tailwind_conflicts() {
    assert_eq!(cn!["p-4", "p-6"], "p-6");
    assert_eq!(cn!["text-red-500", "text-blue-500"], "text-blue-500");
    assert_eq!(cn!["p-4", "m-4", "p-6"], "m-4 p-6");
    assert_eq!(cn!["p-4", "md:p-6", "p-8"], "md:p-6 p-8");
}

#[test]
fn test_font_size_and_color_coexist() {
    assert_eq!(cn!["text-lg", "text-red-500"], "text-lg text-red-500");
    assert_eq!(cn!["text-sm text-white", "text-base"], "text-white text-base");
}

#[test]
fn test_component_override() {
    let base = "inline-flex items-center rounded-lg px-5 h-11 bg-primary text-primary-foreground";
    assert_eq!(
        cn![base, "rounded-none bg-destructive px-2"],
        "inline-flex items-center h-11 text-primary-foreground rounded-none bg-destructive px-2"
    );
}

#[test]
fn test_arbitrary_variants_are_prefixes() {
    assert_eq!(
        cn!["[&_svg]:size-4", "size-6", "[&_svg]:size-5"],
        "size-6 [&_svg]:size-5"
    );
}

#[test]
fn test_idempotence() {
    let samples: Vec<Vec<ClassToken>> = vec![
        classes!["p-4", "m-4", "p-6"],
        classes!["foo foo", "px-2 p-4", "md:p-2", vec!["hover:bg-red-500", "hover:bg-blue-500"]],
        classes!["text-lg leading-7 text-red-500", ("truncate", true), "text-clip"],
        classes![false, "", None::<&str>],
        classes!["w-[13px", "[mask-type:luminance]", "[mask-type:alpha]"],
    ];

    for tokens in samples {
        let once = merge(&tokens);
        let twice = merge(&[ClassToken::from(once.clone())]);
        assert_eq!(once, twice, "merge is not idempotent for {:?}", tokens);
    }
}

#[test]
fn test_falsy_sequences_merge_to_empty() {
    let samples = vec![
        classes![],
        classes![false],
        classes![false, None::<&str>, ClassToken::Empty],
        classes![vec![ClassToken::Empty, ClassToken::from(false)]],
    ];
    for tokens in samples {
        assert_eq!(merge(&tokens), "");
    }
}

#[test]
fn test_composer_from_json_table() {
    let json = r#"{
        "prefix": "ui-",
        "rules": [
            { "group": "tone", "plugins": ["tone"], "keywords": ["warm", "cool"] },
            { "group": "gap", "plugins": ["gap"], "values": ["number"] }
        ]
    }"#;
    let composer = ClassComposer::new(ClassificationTable::from_json(json).unwrap());

    assert_eq!(
        composer.merge(&classes!["ui-tone-warm ui-gap-2", "tone-cool", "ui-tone-cool"]),
        "ui-gap-2 tone-cool ui-tone-cool"
    );
}
