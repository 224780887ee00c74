use breeze_tw_parse::{parse_class, Modifier};
use pretty_assertions::assert_eq;

// 按钮组件基础类，覆盖常见的修饰符组合
const BUTTON_BASE: &str = "inline-flex shrink-0 items-center justify-center gap-2 whitespace-nowrap \
    rounded-lg font-medium text-sm outline-none transition-all duration-200 \
    focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50 \
    disabled:pointer-events-none disabled:opacity-50 aria-invalid:border-destructive \
    dark:aria-invalid:ring-destructive/40 [&_svg:not([class*='size-'])]:size-4 \
    [&_svg]:pointer-events-none [&_svg]:shrink-0";

#[test]
fn test_parse_component_classes() {
    let mut failed = Vec::new();

    for class in BUTTON_BASE.split_whitespace() {
        match parse_class(class) {
            Ok(parsed) => {
                if parsed.to_normalized_string() != class {
                    failed.push(format!(
                        "  ✗ {}: normalized to '{}'",
                        class,
                        parsed.to_normalized_string()
                    ));
                }
            }
            Err(err) => failed.push(format!("  ✗ {}: parse error - {}", class, err)),
        }
    }

    if !failed.is_empty() {
        for msg in &failed {
            eprintln!("{}", msg);
        }
        panic!("{} classes failed to parse correctly", failed.len());
    }
}

#[test]
fn test_parse_specific_classes() {
    let test_cases = vec![
        ("p-4", "p-4", 0),
        ("md:p-6", "p-6", 1),
        ("dark:hover:bg-input/50", "bg-input/50", 2),
        ("[&_svg]:shrink-0", "shrink-0", 1),
        ("after:h-[1px]", "h-[1px]", 1),
    ];

    for (class, expected_utility, expected_modifiers) in test_cases {
        let parsed = parse_class(class).unwrap_or_else(|_| panic!("Failed to parse: {}", class));

        assert_eq!(parsed.utility, expected_utility, "Utility mismatch for '{}'", class);
        assert_eq!(
            parsed.modifiers.len(),
            expected_modifiers,
            "Modifier count mismatch for '{}'",
            class
        );
    }
}

#[test]
fn test_nested_arbitrary_variant() {
    let parsed = parse_class("[&_svg:not([class*='size-'])]:size-4").unwrap();
    assert_eq!(
        parsed.modifiers,
        vec![Modifier::Arbitrary("[&_svg:not([class*='size-'])]".to_string())]
    );
    assert_eq!(parsed.utility, "size-4");
}

#[test]
fn test_equivalent_prefixes_share_key() {
    let a = parse_class("dark:hover:bg-accent").unwrap();
    let b = parse_class("hover:dark:bg-accent").unwrap();
    assert_eq!(a.modifier_key(), b.modifier_key());

    let c = parse_class("md:p-6").unwrap();
    let d = parse_class("p-6").unwrap();
    assert!(c.modifier_key() != d.modifier_key());
}
