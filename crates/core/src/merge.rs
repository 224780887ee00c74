use std::collections::HashSet;

use breeze_tw_parse::parse_class;

use crate::table::ClassificationTable;
use crate::types::{Diagnostic, MergeResult};

/// 合并类名列表
///
/// 功能：
/// - 处理同一属性组的冲突（后者覆盖前者），变体前缀不同则互不冲突
/// - 组声明的 overrides 一并移除更早出现的被覆盖组
/// - 无法识别的类名原样保留
/// - 保持幸存类名的相对顺序
///
/// 从后向前扫描：先遇到的即为最终生效的 class，记录其 (前缀, 组)，
/// 之后遇到相同 key 的 class 全部丢弃。
pub fn merge_classes(table: &ClassificationTable, classes: &[&str]) -> MergeResult {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = vec![false; classes.len()];
    let mut removed = Vec::new();
    let mut diagnostics = Vec::new();

    for (idx, class) in classes.iter().enumerate().rev() {
        let parsed = match parse_class(class) {
            Ok(parsed) => parsed,
            Err(err) => {
                diagnostics.push(Diagnostic::warning(format!(
                    "Unparseable class '{}': {}",
                    class, err
                )));
                kept[idx] = true;
                continue;
            }
        };

        let group = match table.classify(&parsed.utility) {
            Some(group) => group,
            None => {
                kept[idx] = true;
                continue;
            }
        };

        let modifier_key = parsed.modifier_key();
        if seen.contains(&conflict_id(&modifier_key, &group)) {
            tracing::trace!(class = %class, group = %group, "dropped conflicting class");
            removed.push(class.to_string());
            continue;
        }

        kept[idx] = true;
        for overridden in table.overrides_of(&group) {
            seen.insert(conflict_id(&modifier_key, overridden));
        }
        seen.insert(conflict_id(&modifier_key, &group));
    }

    removed.reverse();
    diagnostics.reverse();

    let class = classes
        .iter()
        .zip(kept)
        .filter_map(|(class, keep)| keep.then_some(*class))
        .collect::<Vec<_>>()
        .join(" ");

    MergeResult {
        class,
        removed,
        diagnostics,
    }
}

fn conflict_id(modifier_key: &str, group: &str) -> String {
    format!("{}\u{0}{}", modifier_key, group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn merge(classes: &[&str]) -> String {
        merge_classes(&ClassificationTable::builtin(), classes).class
    }

    #[test]
    fn test_merge_override() {
        assert_eq!(merge(&["p-4", "p-6"]), "p-6");
    }

    #[test]
    fn test_merge_no_conflict() {
        assert_eq!(merge(&["p-4", "m-2"]), "p-4 m-2");
    }

    #[test]
    fn test_merge_preserves_survivor_order() {
        assert_eq!(merge(&["p-4", "m-4", "p-6"]), "m-4 p-6");
    }

    #[test]
    fn test_merge_variant_prefix_isolation() {
        assert_eq!(merge(&["p-4", "md:p-6", "p-8"]), "md:p-6 p-8");
        assert_eq!(merge(&["hover:bg-red-500", "hover:bg-blue-500"]), "hover:bg-blue-500");
        assert_eq!(merge(&["md:hover:p-2", "hover:md:p-4"]), "hover:md:p-4");
    }

    #[test]
    fn test_merge_overrides() {
        assert_eq!(merge(&["px-2", "p-4"]), "p-4");
        assert_eq!(merge(&["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(merge(&["rounded-t-lg", "rounded-none"]), "rounded-none");
        assert_eq!(merge(&["leading-7", "text-lg"]), "text-lg");
    }

    #[test]
    fn test_merge_overrides_respect_prefix() {
        assert_eq!(merge(&["md:px-2", "p-4"]), "md:px-2 p-4");
    }

    #[test]
    fn test_merge_unknown_classes_kept() {
        assert_eq!(merge(&["foo", "foo", "p-4"]), "foo foo p-4");
    }

    #[test]
    fn test_merge_important_and_negative() {
        assert_eq!(merge(&["!p-4", "p-6"]), "!p-4 p-6");
        assert_eq!(merge(&["-m-4", "m-2"]), "m-2");
        assert_eq!(merge(&["p-4!", "!p-2"]), "!p-2");
    }

    #[test]
    fn test_merge_report() {
        let result = merge_classes(
            &ClassificationTable::builtin(),
            &["p-4", "w-[13px", "text-sm", "p-2", "text-lg"],
        );
        assert_eq!(result.class, "w-[13px p-2 text-lg");
        assert_eq!(result.removed, vec!["p-4".to_string(), "text-sm".to_string()]);
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("w-[13px"));
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(merge(&[]), "");
    }
}
