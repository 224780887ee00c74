use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::builtin::{BUILTIN_OVERRIDES, BUILTIN_RULES};
use crate::error::TableError;
use crate::matcher::ValueKind;

/// 单条分类规则
///
/// `plugins` 中的任一插件名，后接 `-` 与满足 `values`/`keywords` 的值，即归入 `group`。
/// 同一个 group 可以由多条规则共同定义。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    pub group: String,
    pub plugins: Vec<String>,
    #[serde(default)]
    pub values: Vec<ValueKind>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// 分类表的 JSON 形态
///
/// ```json
/// {
///   "prefix": "tw-",
///   "rules": [
///     { "group": "p", "plugins": ["p"], "values": ["number", "arbitrary"], "keywords": ["px"] },
///     { "group": "px", "plugins": ["px"], "values": ["number"] }
///   ],
///   "overrides": { "p": ["px"] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    #[serde(default)]
    pub prefix: Option<String>,
    pub rules: Vec<RuleDef>,
    #[serde(default)]
    pub overrides: IndexMap<String, Vec<String>>,
}

/// utility class 分类表
///
/// 构建后不可变，可在多个线程间共享。
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    def: TableDef,
    /// 插件名 → 规则下标（按表中顺序）
    by_plugin: IndexMap<String, Vec<usize>>,
}

impl ClassificationTable {
    /// 从定义构建分类表，校验规则与覆盖关系
    pub fn new(def: TableDef) -> Result<Self, TableError> {
        let mut by_plugin: IndexMap<String, Vec<usize>> = IndexMap::new();

        for (idx, rule) in def.rules.iter().enumerate() {
            if rule.plugins.is_empty() {
                return Err(TableError::NoPlugins {
                    group: rule.group.clone(),
                });
            }
            if rule.values.is_empty() && rule.keywords.is_empty() {
                return Err(TableError::NoValues {
                    group: rule.group.clone(),
                });
            }
            for plugin in &rule.plugins {
                by_plugin.entry(plugin.clone()).or_default().push(idx);
            }
        }

        let is_known = |group: &str| def.rules.iter().any(|r| r.group == group);
        for (group, targets) in &def.overrides {
            if !is_known(group) {
                return Err(TableError::UnknownGroup {
                    group: group.clone(),
                });
            }
            if let Some(target) = targets.iter().find(|t| !is_known(t)) {
                return Err(TableError::UnknownOverride {
                    group: group.clone(),
                    target: target.clone(),
                });
            }
        }

        tracing::debug!(
            rules = def.rules.len(),
            plugins = by_plugin.len(),
            overrides = def.overrides.len(),
            "classification table built"
        );

        Ok(Self { def, by_plugin })
    }

    /// 从 JSON 字符串加载分类表
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let def: TableDef = serde_json::from_str(json_str)?;
        Self::new(def)
    }

    /// 内置 Tailwind 分类表
    pub fn builtin() -> Self {
        Self::builtin_with_prefix(None)
    }

    /// 带类名前缀（如 `tw-`）的内置分类表
    pub fn builtin_with_prefix(prefix: Option<&str>) -> Self {
        let def = builtin_def(prefix.map(str::to_string));
        let mut by_plugin: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (idx, rule) in def.rules.iter().enumerate() {
            for plugin in &rule.plugins {
                by_plugin.entry(plugin.clone()).or_default().push(idx);
            }
        }
        Self { def, by_plugin }
    }

    /// 表定义（用于序列化导出）
    pub fn def(&self) -> &TableDef {
        &self.def
    }

    /// 类名前缀
    pub fn prefix(&self) -> Option<&str> {
        self.def.prefix.as_deref()
    }

    /// 规则数量
    pub fn len(&self) -> usize {
        self.def.rules.len()
    }

    /// 是否没有任何规则
    pub fn is_empty(&self) -> bool {
        self.def.rules.is_empty()
    }

    /// 组被后出现的 class 覆盖时一并移除的其他组
    pub fn overrides_of(&self, group: &str) -> &[String] {
        self.def
            .overrides
            .get(group)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// 确定 utility 主体所属的属性组
    ///
    /// `utility` 不含修饰符、`!` 与负号（见 `breeze_tw_parse::ParsedClass::utility`）。
    /// 无法识别时返回 `None`。
    pub fn classify<'a>(&'a self, utility: &str) -> Option<Cow<'a, str>> {
        let utility = match self.prefix() {
            Some(prefix) => utility.strip_prefix(prefix)?,
            None => utility,
        };

        // 任意属性：[mask-type:luminance]
        if let Some(property) = arbitrary_property(utility) {
            return Some(Cow::Owned(format!("[{}]", property)));
        }

        // 先去掉 `/50` 这类后缀匹配，失败时再带后缀匹配（如 w-1/2）
        if let Some(slash) = top_level_slash(utility) {
            if let Some(group) = self.classify_body(&utility[..slash]) {
                return Some(Cow::Borrowed(group));
            }
        }

        self.classify_body(utility).map(Cow::Borrowed)
    }

    fn classify_body(&self, body: &str) -> Option<&str> {
        if body.is_empty() {
            return None;
        }

        // 整体作为插件名（无值），其后从最长前缀到最短依次尝试
        if let Some(group) = self.match_plugin(body, None) {
            return Some(group);
        }

        for split in dash_positions(body).into_iter().rev() {
            let value = &body[split + 1..];
            if value.is_empty() {
                continue;
            }
            if let Some(group) = self.match_plugin(&body[..split], Some(value)) {
                return Some(group);
            }
        }

        None
    }

    fn match_plugin(&self, plugin: &str, value: Option<&str>) -> Option<&str> {
        let rules = self.by_plugin.get(plugin)?;
        rules.iter().map(|&idx| &self.def.rules[idx]).find_map(|rule| {
            let keyword_hit = value
                .map(|v| rule.keywords.iter().any(|k| k == v))
                .unwrap_or(false);
            if keyword_hit || rule.values.iter().any(|kind| kind.matches(value)) {
                Some(rule.group.as_str())
            } else {
                None
            }
        })
    }

    /// 分类表内容的指纹，用于对数据资产做版本标识
    ///
    /// 格式：`t_` + blake3 前 12 位十六进制
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();

        hasher.update(self.prefix().unwrap_or("").as_bytes());
        for rule in &self.def.rules {
            hasher.update(b"\x1erule\x1f");
            hasher.update(rule.group.as_bytes());
            for plugin in &rule.plugins {
                hasher.update(b"\x1f");
                hasher.update(plugin.as_bytes());
            }
            hasher.update(b"\x1dvalues");
            for kind in &rule.values {
                hasher.update(format!("\x1f{:?}", kind).as_bytes());
            }
            hasher.update(b"\x1dkeywords");
            for keyword in &rule.keywords {
                hasher.update(b"\x1f");
                hasher.update(keyword.as_bytes());
            }
        }
        for (group, targets) in &self.def.overrides {
            hasher.update(b"\x1eoverride\x1f");
            hasher.update(group.as_bytes());
            for target in targets {
                hasher.update(b"\x1f");
                hasher.update(target.as_bytes());
            }
        }

        let hex = hasher.finalize().to_hex();
        format!("t_{}", &hex.as_str()[..12])
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 内置规则转换为可序列化的表定义
fn builtin_def(prefix: Option<String>) -> TableDef {
    let rules = BUILTIN_RULES
        .iter()
        .map(|rule| RuleDef {
            group: rule.group.to_string(),
            plugins: rule.plugins.iter().map(|p| p.to_string()).collect(),
            values: rule.values.to_vec(),
            keywords: rule.keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect();

    let overrides = BUILTIN_OVERRIDES
        .iter()
        .map(|(group, targets)| {
            (
                group.to_string(),
                targets.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect();

    TableDef {
        prefix,
        rules,
        overrides,
    }
}

/// `[property:value]` → `property`
fn arbitrary_property(utility: &str) -> Option<&str> {
    let inner = utility.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    if property.is_empty() || value.is_empty() {
        return None;
    }
    Some(property)
}

/// 方括号/圆括号外的 `-` 位置
fn dash_positions(body: &str) -> Vec<usize> {
    let mut depth: i32 = 0;
    let mut positions = Vec::new();
    for (pos, ch) in body.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            '-' if depth == 0 && pos > 0 => positions.push(pos),
            _ => {}
        }
    }
    positions
}

/// 方括号/圆括号外最后一个 `/` 的位置
fn top_level_slash(body: &str) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut last = None;
    for (pos, ch) in body.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            '/' if depth == 0 => last = Some(pos),
            _ => {}
        }
    }
    last
}
