use breeze_core::{ClassComposer, ClassToken};
use indexmap::IndexMap;

use crate::error::ConfigurationError;
use crate::selections::Selections;
use crate::table::VariantTable;

/// 解析组件实例的最终类名（使用内置分类表）
///
/// ```
/// use breeze_variants::{resolve, Selections, VariantTable};
///
/// let button = VariantTable::builder()
///     .base("inline-flex rounded-lg")
///     .axis("size", [("sm", "h-10 px-4"), ("lg", "h-12 px-8")])
///     .default_value("size", "sm")
///     .build()
///     .unwrap();
///
/// let class = resolve(&button, &Selections::new(), &["px-2".into()]).unwrap();
/// assert_eq!(class, "inline-flex rounded-lg h-10 px-2");
/// ```
pub fn resolve(
    table: &VariantTable,
    selections: &Selections,
    extra: &[ClassToken],
) -> Result<String, ConfigurationError> {
    table.resolve(selections, extra)
}

impl VariantTable {
    /// 使用内置组合器解析
    pub fn resolve(
        &self,
        selections: &Selections,
        extra: &[ClassToken],
    ) -> Result<String, ConfigurationError> {
        self.resolve_with(ClassComposer::builtin(), selections, extra)
    }

    /// 使用指定组合器解析
    pub fn resolve_with(
        &self,
        composer: &ClassComposer,
        selections: &Selections,
        extra: &[ClassToken],
    ) -> Result<String, ConfigurationError> {
        let tokens = self.tokens(selections, extra)?;
        Ok(composer.merge(&tokens))
    }

    /// 按优先级拼出合并前的 token 序列
    ///
    /// 顺序：基础类 → 各轴片段（声明顺序）→ 组合变体 → `extra`。
    /// 合并时后者覆盖前者，因此调用方传入的 `extra` 总是生效。
    pub fn tokens(
        &self,
        selections: &Selections,
        extra: &[ClassToken],
    ) -> Result<Vec<ClassToken>, ConfigurationError> {
        self.check_selections(selections)?;

        let effective = self.effective_values(selections);

        let mut tokens = Vec::with_capacity(1 + effective.len() + extra.len());
        tokens.push(self.base.clone());

        for (axis, value) in &effective {
            if let Some(class) = self.axes.get(*axis).and_then(|values| values.get(*value)) {
                tokens.push(class.clone());
            }
        }

        tokens.extend(
            self.compounds
                .iter()
                .filter(|compound| compound.matches(&effective))
                .map(|compound| compound.class().clone()),
        );

        tokens.extend(extra.iter().cloned());
        Ok(tokens)
    }

    /// 每个已声明轴的生效取值：显式选择 > 默认值 > 跳过
    fn effective_values<'a>(&'a self, selections: &'a Selections) -> IndexMap<&'a str, &'a str> {
        self.axes
            .keys()
            .filter_map(|axis| {
                selections
                    .get(axis)
                    .or_else(|| self.default_value(axis))
                    .map(|value| (axis.as_str(), value))
            })
            .collect()
    }

    fn check_selections(&self, selections: &Selections) -> Result<(), ConfigurationError> {
        for (axis, value) in selections.iter() {
            let values = match self.axes.get(axis) {
                Some(values) => values,
                None => {
                    tracing::warn!(axis, "rejected selection for undeclared variant axis");
                    return Err(ConfigurationError::UnknownAxis {
                        axis: axis.to_string(),
                    });
                }
            };

            if let Some(value) = value {
                if !values.contains_key(value) {
                    tracing::warn!(axis, value, "rejected undeclared variant value");
                    return Err(ConfigurationError::UnknownValue {
                        axis: axis.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
