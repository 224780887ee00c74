use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// class 组合器的输入单元
///
/// - `Str`: 一个或多个空白分隔的类名
/// - `List`: 嵌套序列，深度优先、从左到右展开
/// - `Map`: 类名 → 是否启用，按插入顺序展开
/// - `Empty`: false / null / undefined，忽略
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassToken {
    Str(String),
    List(Vec<ClassToken>),
    Map(IndexMap<String, bool>),
    #[default]
    Empty,
}

impl ClassToken {
    /// 按顺序收集所有类名（按空白切分）
    pub fn collect_classes<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassToken::Str(s) => out.extend(s.split_whitespace()),
            ClassToken::List(tokens) => {
                for token in tokens {
                    token.collect_classes(out);
                }
            }
            ClassToken::Map(map) => {
                for (class, enabled) in map {
                    if *enabled {
                        out.extend(class.split_whitespace());
                    }
                }
            }
            ClassToken::Empty => {}
        }
    }

    /// 是否不会产生任何类名
    pub fn is_empty(&self) -> bool {
        let mut classes = Vec::new();
        self.collect_classes(&mut classes);
        classes.is_empty()
    }
}

/// 展开 token 序列为类名列表
pub fn flatten(tokens: &[ClassToken]) -> Vec<&str> {
    let mut classes = Vec::new();
    for token in tokens {
        token.collect_classes(&mut classes);
    }
    classes
}

/// 只展开、拼接，不做冲突处理
pub fn join(tokens: &[ClassToken]) -> String {
    flatten(tokens).join(" ")
}

impl From<&str> for ClassToken {
    fn from(s: &str) -> Self {
        ClassToken::Str(s.to_string())
    }
}

impl From<String> for ClassToken {
    fn from(s: String) -> Self {
        ClassToken::Str(s)
    }
}

impl From<&String> for ClassToken {
    fn from(s: &String) -> Self {
        ClassToken::Str(s.clone())
    }
}

/// 单独的布尔值不产生类名（`cond && "class"` 为 false 的情形）
impl From<bool> for ClassToken {
    fn from(_: bool) -> Self {
        ClassToken::Empty
    }
}

impl<T: Into<ClassToken>> From<Option<T>> for ClassToken {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ClassToken::Empty)
    }
}

impl<T: Into<ClassToken>> From<Vec<T>> for ClassToken {
    fn from(tokens: Vec<T>) -> Self {
        ClassToken::List(tokens.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassToken>, const N: usize> From<[T; N]> for ClassToken {
    fn from(tokens: [T; N]) -> Self {
        ClassToken::List(tokens.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, bool>> for ClassToken {
    fn from(map: IndexMap<String, bool>) -> Self {
        ClassToken::Map(map)
    }
}

/// 条件类名：`("active", is_active)`
impl From<(&str, bool)> for ClassToken {
    fn from((class, enabled): (&str, bool)) -> Self {
        let mut map = IndexMap::new();
        map.insert(class.to_string(), enabled);
        ClassToken::Map(map)
    }
}

// ── 反序列化（JS 真值语义）──────────────────────────────────

impl<'de> Deserialize<'de> for ClassToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TokenVisitor)
    }
}

struct TokenVisitor;

impl<'de> Visitor<'de> for TokenVisitor {
    type Value = ClassToken;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a class string, array, object, boolean, number or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ClassToken::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ClassToken::Str(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(ClassToken::Empty)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(number_token(v != 0, || v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(number_token(v != 0, || v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(number_token(v != 0.0 && !v.is_nan(), || v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ClassToken::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ClassToken::Empty)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        ClassToken::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tokens = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(token) = seq.next_element::<ClassToken>()? {
            tokens.push(token);
        }
        Ok(ClassToken::List(tokens))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = IndexMap::new();
        while let Some((class, Truthy(enabled))) = access.next_entry::<String, Truthy>()? {
            map.insert(class, enabled);
        }
        Ok(ClassToken::Map(map))
    }
}

fn number_token(truthy: bool, text: impl FnOnce() -> String) -> ClassToken {
    if truthy {
        ClassToken::Str(text())
    } else {
        ClassToken::Empty
    }
}

/// 对象值的真值判断
struct Truthy(bool);

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TruthyVisitor)
    }
}

struct TruthyVisitor;

impl<'de> Visitor<'de> for TruthyVisitor {
    type Value = Truthy;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Truthy(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Truthy(v != 0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Truthy(v != 0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Truthy(v != 0.0 && !v.is_nan()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Truthy(!v.is_empty()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Truthy(false))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Truthy(false))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Truthy::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Truthy(true))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while access.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Truthy(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_order() {
        let tokens = vec![
            ClassToken::from("a b"),
            ClassToken::from(vec![ClassToken::from("c"), ClassToken::from(vec!["d", "e"])]),
            ClassToken::from("  f\tg\n"),
        ];
        assert_eq!(flatten(&tokens), vec!["a", "b", "c", "d", "e", "f", "g"]);
    }

    #[test]
    fn test_falsy_tokens() {
        let tokens = vec![
            ClassToken::from(false),
            ClassToken::from(None::<&str>),
            ClassToken::Empty,
            ClassToken::from(""),
        ];
        assert!(flatten(&tokens).is_empty());
        assert!(tokens.iter().all(ClassToken::is_empty));
    }

    #[test]
    fn test_map_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("zeta".to_string(), true);
        map.insert("alpha".to_string(), true);
        map.insert("off".to_string(), false);
        assert_eq!(join(&[ClassToken::from(map)]), "zeta alpha");
    }

    #[test]
    fn test_conditional_pair() {
        assert_eq!(join(&[ClassToken::from(("active", true))]), "active");
        assert_eq!(join(&[ClassToken::from(("active", false))]), "");
    }

    #[test]
    fn test_deserialize_js_shapes() {
        let json = r#"["foo", false, null, ["bar", ["baz"]], { "on": true, "off": false, "one": 1, "zero": 0, "text": "", "obj": {} }, 0, 7]"#;
        let token: ClassToken = serde_json::from_str(json).unwrap();
        assert_eq!(join(&[token]), "foo bar baz on one obj 7");
    }

    #[test]
    fn test_deserialize_scalar() {
        let token: ClassToken = serde_json::from_str("\"p-4 m-2\"").unwrap();
        assert_eq!(token, ClassToken::Str("p-4 m-2".to_string()));
        let token: ClassToken = serde_json::from_str("true").unwrap();
        assert_eq!(token, ClassToken::Empty);
    }
}
