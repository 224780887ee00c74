use breeze_core::ClassToken;
use indexmap::IndexMap;

use crate::error::ConfigurationError;

/// 组合变体：所有条件同时满足时追加 `class`
///
/// 每个条件可以接受多个取值（`size` 为 `sm` 或 `lg`）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundVariant {
    conditions: IndexMap<String, Vec<String>>,
    class: ClassToken,
}

impl CompoundVariant {
    pub fn new(class: impl Into<ClassToken>) -> Self {
        Self {
            conditions: IndexMap::new(),
            class: class.into(),
        }
    }

    /// 要求某轴等于指定值
    pub fn when(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions
            .entry(axis.into())
            .or_default()
            .push(value.into());
        self
    }

    /// 要求某轴为列表中任一值
    pub fn when_any<I, V>(mut self, axis: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.conditions
            .entry(axis.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn conditions(&self) -> &IndexMap<String, Vec<String>> {
        &self.conditions
    }

    pub fn class(&self) -> &ClassToken {
        &self.class
    }

    pub(crate) fn matches(&self, effective: &IndexMap<&str, &str>) -> bool {
        self.conditions.iter().all(|(axis, accepted)| {
            effective
                .get(axis.as_str())
                .map(|value| accepted.iter().any(|a| a.as_str() == *value))
                .unwrap_or(false)
        })
    }
}

/// 变体表
///
/// 组件定义时构建一次，之后只读。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantTable {
    pub(crate) base: ClassToken,
    pub(crate) axes: IndexMap<String, IndexMap<String, ClassToken>>,
    pub(crate) defaults: IndexMap<String, String>,
    pub(crate) compounds: Vec<CompoundVariant>,
}

impl VariantTable {
    pub fn builder() -> VariantTableBuilder {
        VariantTableBuilder::default()
    }

    /// 基础类
    pub fn base(&self) -> &ClassToken {
        &self.base
    }

    /// 已声明的轴名（按声明顺序）
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(|k| k.as_str())
    }

    /// 某轴已声明的取值
    pub fn axis_values(&self, axis: &str) -> Option<impl Iterator<Item = &str>> {
        self.axes
            .get(axis)
            .map(|values| values.keys().map(|k| k.as_str()))
    }

    /// 某轴的默认值
    pub fn default_value(&self, axis: &str) -> Option<&str> {
        self.defaults.get(axis).map(|v| v.as_str())
    }

    pub fn compounds(&self) -> &[CompoundVariant] {
        &self.compounds
    }

    /// 校验默认值与组合变体引用的轴/取值均已声明
    pub(crate) fn validate(&self) -> Result<(), ConfigurationError> {
        for (axis, value) in &self.defaults {
            let declared = self
                .axes
                .get(axis)
                .map(|values| values.contains_key(value))
                .unwrap_or(false);
            if !declared {
                return Err(ConfigurationError::UnknownDefault {
                    axis: axis.clone(),
                    value: value.clone(),
                });
            }
        }

        for compound in &self.compounds {
            for (axis, accepted) in &compound.conditions {
                let values = self.axes.get(axis).ok_or_else(|| {
                    ConfigurationError::UnknownCompoundAxis { axis: axis.clone() }
                })?;
                if let Some(value) = accepted.iter().find(|v| !values.contains_key(*v)) {
                    return Err(ConfigurationError::UnknownCompoundValue {
                        axis: axis.clone(),
                        value: value.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// 变体表构建器
#[derive(Debug, Default)]
pub struct VariantTableBuilder {
    table: VariantTable,
}

impl VariantTableBuilder {
    /// 设置基础类
    pub fn base(mut self, base: impl Into<ClassToken>) -> Self {
        self.table.base = base.into();
        self
    }

    /// 声明一个轴及其取值（按迭代顺序）
    pub fn axis<I, V, T>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (V, T)>,
        V: Into<String>,
        T: Into<ClassToken>,
    {
        let values = values
            .into_iter()
            .map(|(value, class)| (value.into(), class.into()))
            .collect();
        self.table.axes.insert(name.into(), values);
        self
    }

    /// 设置某轴的默认值
    pub fn default_value(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.table.defaults.insert(axis.into(), value.into());
        self
    }

    /// 追加组合变体
    pub fn compound(mut self, compound: CompoundVariant) -> Self {
        self.table.compounds.push(compound);
        self
    }

    /// 完成构建并校验
    pub fn build(self) -> Result<VariantTable, ConfigurationError> {
        self.table.validate()?;
        Ok(self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_declaration_order() {
        let table = VariantTable::builder()
            .axis("variant", [("default", "bg-primary"), ("ghost", "bg-transparent")])
            .axis("size", [("sm", "h-10"), ("lg", "h-12")])
            .default_value("size", "sm")
            .build()
            .unwrap();

        assert_eq!(table.axes().collect::<Vec<_>>(), vec!["variant", "size"]);
        assert_eq!(
            table.axis_values("variant").unwrap().collect::<Vec<_>>(),
            vec!["default", "ghost"]
        );
        assert_eq!(table.default_value("size"), Some("sm"));
        assert_eq!(table.default_value("variant"), None);
        assert!(table.axis_values("tone").is_none());
    }

    #[test]
    fn test_unknown_default_rejected() {
        let result = VariantTable::builder()
            .axis("size", [("sm", "h-10")])
            .default_value("size", "xl")
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownDefault { ref axis, ref value }) if axis == "size" && value == "xl"
        ));

        let result = VariantTable::builder().default_value("tone", "warm").build();
        assert!(matches!(result, Err(ConfigurationError::UnknownDefault { .. })));
    }

    #[test]
    fn test_compound_validation() {
        let result = VariantTable::builder()
            .axis("size", [("sm", "h-10")])
            .compound(CompoundVariant::new("px-2").when("tone", "warm"))
            .build();
        assert!(matches!(result, Err(ConfigurationError::UnknownCompoundAxis { .. })));

        let result = VariantTable::builder()
            .axis("size", [("sm", "h-10")])
            .compound(CompoundVariant::new("px-2").when_any("size", ["sm", "xl"]))
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownCompoundValue { ref value, .. }) if value == "xl"
        ));
    }

    #[test]
    fn test_compound_matches() {
        let compound = CompoundVariant::new("ring-2")
            .when("variant", "outline")
            .when_any("size", ["sm", "lg"]);

        let mut effective = IndexMap::new();
        effective.insert("variant", "outline");
        effective.insert("size", "lg");
        assert!(compound.matches(&effective));

        effective.insert("size", "xl");
        assert!(!compound.matches(&effective));

        effective.shift_remove("size");
        assert!(!compound.matches(&effective));
    }
}
