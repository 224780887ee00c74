use breeze_core::{classes, ClassToken};
use breeze_variants::{resolve, ConfigurationError, Selections, VariantTable};
use pretty_assertions::assert_eq;

fn button_variants() -> VariantTable {
    VariantTable::builder()
        .base(
            "inline-flex shrink-0 items-center justify-center gap-2 whitespace-nowrap rounded-lg \
             font-medium text-sm no-underline outline-none transition-all duration-200 \
             focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50 \
             disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:shrink-0",
        )
        .axis(
            "variant",
            [
                (
                    "default",
                    "bg-primary text-primary-foreground shadow-md hover:-translate-y-0.5 hover:bg-primary/90 hover:shadow-lg",
                ),
                (
                    "destructive",
                    "bg-destructive text-white shadow-md hover:bg-destructive/90 dark:bg-destructive/60",
                ),
                (
                    "outline",
                    "border bg-background shadow-sm hover:bg-accent hover:text-accent-foreground",
                ),
                ("secondary", "bg-secondary text-secondary-foreground shadow-sm"),
                ("ghost", "hover:bg-accent hover:text-accent-foreground"),
                ("link", "text-primary underline-offset-4 hover:underline"),
            ],
        )
        .axis(
            "size",
            [
                ("default", "h-11 px-5 has-[>svg]:px-4"),
                ("sm", "h-10 rounded-md px-4 has-[>svg]:px-3"),
                ("lg", "h-12 rounded-lg px-8 text-base has-[>svg]:px-5"),
                ("icon", "size-11"),
            ],
        )
        .default_value("variant", "default")
        .default_value("size", "default")
        .build()
        .expect("button variants are valid")
}

fn classes_of(class: &str) -> Vec<&str> {
    class.split_whitespace().collect()
}

#[test]
fn test_default_variants() {
    let class = button_variants().resolve(&Selections::new(), &[]).unwrap();
    let classes = classes_of(&class);
    assert!(classes.contains(&"bg-primary"));
    assert!(classes.contains(&"h-11"));
    assert!(classes.contains(&"px-5"));
}

#[test]
fn test_each_variant_contributes_once() {
    let table = button_variants();
    let cases = [
        ("destructive", "bg-destructive"),
        ("outline", "bg-background"),
        ("secondary", "bg-secondary"),
        ("ghost", "hover:bg-accent"),
        ("link", "underline-offset-4"),
    ];

    for (variant, expected) in cases {
        let class = table
            .resolve(&Selections::new().set("variant", variant), &[])
            .unwrap();
        let count = classes_of(&class).iter().filter(|c| **c == expected).count();
        assert_eq!(count, 1, "{} should appear once for variant {}", expected, variant);
        assert!(!class.contains("bg-primary "), "default fragment leaked into {}", variant);
    }
}

#[test]
fn test_size_overrides_base_radius() {
    let class = button_variants()
        .resolve(&Selections::new().set("size", "sm"), &[])
        .unwrap();
    let classes = classes_of(&class);
    assert!(classes.contains(&"rounded-md"));
    assert!(!classes.contains(&"rounded-lg"));
    assert!(classes.contains(&"h-10"));
}

#[test]
fn test_large_size_replaces_font_size() {
    let class = button_variants()
        .resolve(&Selections::new().set("size", "lg"), &[])
        .unwrap();
    let classes = classes_of(&class);
    assert!(classes.contains(&"text-base"));
    assert!(!classes.contains(&"text-sm"));
    assert!(classes.contains(&"text-primary-foreground"));
}

#[test]
fn test_custom_class_merges() {
    let class = resolve(
        &button_variants(),
        &Selections::new(),
        &classes!["custom-class", "px-10"],
    )
    .unwrap();
    let classes = classes_of(&class);
    assert!(classes.contains(&"custom-class"));
    assert!(classes.contains(&"bg-primary"));
    assert!(classes.contains(&"px-10"));
    assert!(!classes.contains(&"px-5"));
    assert!(classes.contains(&"has-[>svg]:px-4"));
    assert_eq!(classes.last(), Some(&"px-10"));
}

#[test]
fn test_undeclared_variant_value_fails() {
    let err = button_variants()
        .resolve(&Selections::new().set("variant", "primary"), &[])
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::UnknownValue { .. }));
    assert_eq!(
        err.to_string(),
        "Unknown value 'primary' for variant axis 'variant'"
    );
}

#[test]
fn test_undeclared_axis_fails() {
    let err = button_variants()
        .resolve(&Selections::new().set("tone", "warm"), &[ClassToken::Empty])
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown variant axis 'tone'");
}

#[test]
fn test_resolution_is_pure() {
    let table = button_variants();
    let selections = Selections::new().set("variant", "outline").set("size", "icon");
    let first = table.resolve(&selections, &[]).unwrap();
    let second = table.resolve(&selections, &[]).unwrap();
    assert_eq!(first, second);
    assert_eq!(table, button_variants());
}
