use breeze_core::ClassToken;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::selections::AxisValue;
use crate::table::{CompoundVariant, VariantTable};

/// 变体表的 JSON 定义（与 class-variance-authority 的配置对象同形）
///
/// ```json
/// {
///   "base": "inline-flex items-center",
///   "variants": {
///     "variant": { "default": "bg-primary", "outline": "border bg-background" },
///     "size": { "sm": "h-10 px-4", "lg": "h-12 px-8" }
///   },
///   "defaultVariants": { "variant": "default", "size": "sm" },
///   "compoundVariants": [
///     { "variant": "outline", "size": ["sm", "lg"], "class": "border-2" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDefinition {
    #[serde(default)]
    base: ClassToken,
    #[serde(default)]
    variants: IndexMap<String, IndexMap<String, ClassToken>>,
    #[serde(default)]
    default_variants: IndexMap<String, Option<AxisValue>>,
    #[serde(default)]
    compound_variants: Vec<CompoundDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
struct CompoundDefinition {
    #[serde(default, alias = "className")]
    class: ClassToken,
    #[serde(flatten)]
    conditions: IndexMap<String, Condition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Condition {
    One(AxisValue),
    Any(Vec<AxisValue>),
}

impl TryFrom<VariantDefinition> for VariantTable {
    type Error = ConfigurationError;

    fn try_from(def: VariantDefinition) -> Result<Self, Self::Error> {
        let defaults = def
            .default_variants
            .into_iter()
            .filter_map(|(axis, value)| value.map(|v| (axis, String::from(v))))
            .collect();

        let compounds = def
            .compound_variants
            .into_iter()
            .map(|compound| {
                compound.conditions.into_iter().fold(
                    CompoundVariant::new(compound.class),
                    |acc, (axis, condition)| match condition {
                        Condition::One(value) => acc.when(axis, value),
                        Condition::Any(values) => acc.when_any(axis, values),
                    },
                )
            })
            .collect();

        let table = VariantTable {
            base: def.base,
            axes: def.variants,
            defaults,
            compounds,
        };
        table.validate()?;
        Ok(table)
    }
}

impl VariantTable {
    /// 从 JSON 定义构建并校验
    pub fn from_json(json_str: &str) -> Result<Self, ConfigurationError> {
        let def: VariantDefinition = serde_json::from_str(json_str)?;
        let table = VariantTable::try_from(def)?;
        tracing::debug!(
            axes = table.axes.len(),
            compounds = table.compounds.len(),
            "variant table loaded"
        );
        Ok(table)
    }
}
