use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// 调用方为各轴选择的取值
///
/// 值为 `None` 表示显式传入了 null/undefined，与未传入相同，使用默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections(IndexMap<String, Option<String>>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择某轴的取值
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(axis.into(), Some(value.into()));
        self
    }

    /// 布尔轴：选择 `"true"` / `"false"`
    pub fn set_flag(self, axis: impl Into<String>, flag: bool) -> Self {
        self.set(axis, flag.to_string())
    }

    /// 显式置空（回退到默认值）
    pub fn unset(mut self, axis: impl Into<String>) -> Self {
        self.0.insert(axis.into(), None);
        self
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).and_then(|v| v.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selections {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

impl From<IndexMap<String, Option<String>>> for Selections {
    fn from(map: IndexMap<String, Option<String>>) -> Self {
        Self(map)
    }
}

/// JSON 中的轴取值：字符串或布尔值
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum AxisValue {
    Text(String),
    Flag(bool),
}

impl From<AxisValue> for String {
    fn from(value: AxisValue) -> Self {
        match value {
            AxisValue::Text(s) => s,
            AxisValue::Flag(b) => b.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Selections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: IndexMap<String, Option<AxisValue>> = IndexMap::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(axis, value)| (axis, value.map(String::from)))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let selections = Selections::new()
            .set("variant", "outline")
            .set_flag("disabled", true)
            .unset("size");

        assert_eq!(selections.get("variant"), Some("outline"));
        assert_eq!(selections.get("disabled"), Some("true"));
        assert_eq!(selections.get("size"), None);
        assert_eq!(selections.iter().count(), 3);
    }

    #[test]
    fn test_from_iter() {
        let selections: Selections = [("variant", "ghost"), ("size", "sm")].into_iter().collect();
        assert_eq!(selections.get("size"), Some("sm"));
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{ "variant": "link", "block": false, "size": null }"#;
        let selections: Selections = serde_json::from_str(json).unwrap();
        assert_eq!(selections.get("variant"), Some("link"));
        assert_eq!(selections.get("block"), Some("false"));
        assert_eq!(selections.get("size"), None);
        assert!(!selections.is_empty());
    }
}
