mod builtin;
pub mod composer;
pub mod error;
pub mod matcher;
pub mod merge;
pub mod table;
pub mod token;
pub mod types;

// Re-export commonly used types
pub use composer::ClassComposer;
pub use error::TableError;
pub use matcher::ValueKind;
pub use table::{ClassificationTable, RuleDef, TableDef};
pub use token::{flatten, join, ClassToken};
pub use types::{Diagnostic, DiagnosticLevel, MergeResult};

/// 使用内置分类表合并 token 序列
///
/// ```
/// use breeze_core::{classes, merge};
///
/// assert_eq!(merge(&classes!["p-4", "md:p-6", "p-8"]), "md:p-6 p-8");
/// ```
pub fn merge(tokens: &[ClassToken]) -> String {
    ClassComposer::builtin().merge(tokens)
}

/// 由任意可转换为 `ClassToken` 的表达式构建 token 序列
#[macro_export]
macro_rules! classes {
    ($($token:expr),* $(,)?) => {{
        let tokens: ::std::vec::Vec<$crate::ClassToken> =
            ::std::vec![$($crate::ClassToken::from($token)),*];
        tokens
    }};
}

/// `classes!` 后直接用内置分类表合并
#[macro_export]
macro_rules! cn {
    ($($token:expr),* $(,)?) => {
        $crate::merge(&$crate::classes![$($token),*])
    };
}
