use std::sync::OnceLock;

use crate::merge::merge_classes;
use crate::table::ClassificationTable;
use crate::token::{flatten, ClassToken};
use crate::types::MergeResult;

/// 类名组合器
///
/// 持有一张不可变的分类表；`merge` 是纯函数，可并发调用。
#[derive(Debug, Clone, Default)]
pub struct ClassComposer {
    table: ClassificationTable,
}

impl ClassComposer {
    pub fn new(table: ClassificationTable) -> Self {
        Self { table }
    }

    /// 使用内置分类表的全局组合器（首次调用时构建）
    pub fn builtin() -> &'static ClassComposer {
        static BUILTIN: OnceLock<ClassComposer> = OnceLock::new();
        BUILTIN.get_or_init(|| ClassComposer::new(ClassificationTable::builtin()))
    }

    pub fn table(&self) -> &ClassificationTable {
        &self.table
    }

    /// 展开、切分并合并 token 序列
    ///
    /// ```
    /// use breeze_core::{classes, ClassComposer};
    ///
    /// let composer = ClassComposer::builtin();
    /// assert_eq!(composer.merge(&classes!["p-4", "m-4", "p-6"]), "m-4 p-6");
    /// ```
    pub fn merge(&self, tokens: &[ClassToken]) -> String {
        self.merge_report(tokens).class
    }

    /// 与 `merge` 相同，额外返回被丢弃的类和诊断信息
    pub fn merge_report(&self, tokens: &[ClassToken]) -> MergeResult {
        let classes = flatten(tokens);
        merge_classes(&self.table, &classes)
    }

    /// 合并单个已拼接好的类名字符串
    pub fn merge_str(&self, classes: &str) -> String {
        let classes: Vec<&str> = classes.split_whitespace().collect();
        merge_classes(&self.table, &classes).class
    }
}
