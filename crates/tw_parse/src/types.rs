use serde::{Deserialize, Serialize};

/// 解析后的单个 utility class
///
/// `md:hover:!-mt-4` 拆分为：
/// - modifiers: `[md, hover]`
/// - important: `true`
/// - negative: `true`
/// - utility: `mt-4`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedClass {
    /// 修饰符（变体前缀），按出现顺序
    pub modifiers: Vec<Modifier>,

    /// 是否为负值（如 -m-4）
    pub negative: bool,

    /// utility 主体（不含修饰符、`!` 和负号），如 `bg-blue-500/50`
    pub utility: String,

    /// 重要性标记（`!p-4` 或 `p-4!`）
    pub important: bool,
}

/// 修饰符类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// 响应式断点（sm, md, lg, xl, 2xl）
    Responsive(String),

    /// 伪类（hover, focus, active, visited 等）
    PseudoClass(String),

    /// 伪元素（before, after, placeholder 等）
    PseudoElement(String),

    /// 状态修饰符（dark, group-hover, peer-focus 等）
    State(String),

    /// 任意变体（如 `[&_svg]`）
    Arbitrary(String),

    /// 自定义修饰符
    Custom(String),
}

impl ParsedClass {
    /// 创建一个新的 ParsedClass
    pub fn new(utility: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            negative: false,
            utility: utility.into(),
            important: false,
        }
    }

    /// 添加修饰符
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// 设置负值标记
    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// 设置重要性
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// 变体前缀的规范化 key（用于冲突检测）
    ///
    /// 普通修饰符在相邻的一段内按字母序排序，`hover:md:` 与 `md:hover:` 视为同一前缀；
    /// 顺序敏感的修饰符（任意变体、伪元素）保持原位，并切断排序段。
    /// important 的 class 追加 `!`，不与普通 class 冲突。
    pub fn modifier_key(&self) -> String {
        let mut sorted: Vec<&str> = Vec::with_capacity(self.modifiers.len());
        let mut run: Vec<&str> = Vec::new();

        for modifier in &self.modifiers {
            if modifier.is_order_sensitive() {
                run.sort_unstable();
                sorted.append(&mut run);
                sorted.push(modifier.as_str());
            } else {
                run.push(modifier.as_str());
            }
        }
        run.sort_unstable();
        sorted.append(&mut run);

        let mut key = sorted.join(":");
        if self.important {
            key.push('!');
        }
        key
    }

    /// 还原为 class 字符串（修饰符在前，`!` 使用前置写法）
    pub fn to_normalized_string(&self) -> String {
        let mut result = String::new();

        for modifier in &self.modifiers {
            result.push_str(modifier.as_str());
            result.push(':');
        }

        if self.important {
            result.push('!');
        }

        if self.negative {
            result.push('-');
        }

        result.push_str(&self.utility);
        result
    }
}

impl Modifier {
    /// 判断是否为响应式修饰符
    pub fn is_responsive(&self) -> bool {
        matches!(self, Modifier::Responsive(_))
    }

    /// 判断是否为伪类
    pub fn is_pseudo_class(&self) -> bool {
        matches!(self, Modifier::PseudoClass(_))
    }

    /// 判断是否为任意变体
    pub fn is_arbitrary(&self) -> bool {
        matches!(self, Modifier::Arbitrary(_))
    }

    /// 顺序是否影响生成的选择器
    ///
    /// `before:hover:` 和 `hover:before:` 生成不同的 CSS，不能排序。
    pub fn is_order_sensitive(&self) -> bool {
        match self {
            Modifier::Arbitrary(_) | Modifier::PseudoElement(_) => true,
            Modifier::PseudoClass(s) => s == "*" || s == "**",
            _ => false,
        }
    }

    /// 原始修饰符文本
    pub fn as_str(&self) -> &str {
        match self {
            Modifier::Responsive(s)
            | Modifier::PseudoClass(s)
            | Modifier::PseudoElement(s)
            | Modifier::State(s)
            | Modifier::Arbitrary(s)
            | Modifier::Custom(s) => s,
        }
    }

    /// 从字符串推断修饰符类型
    pub fn classify(s: &str) -> Self {
        if s.starts_with('[') {
            return Modifier::Arbitrary(s.to_string());
        }

        // 响应式断点: sm, md, lg, xl, 2xl, max-sm, max-md, etc.
        // Also min-[...], max-[...]
        if matches!(s, "sm" | "md" | "lg" | "xl" | "2xl")
            || matches!(s, "max-sm" | "max-md" | "max-lg" | "max-xl" | "max-2xl")
            || (s.starts_with("min-") && s.contains('['))
            || (s.starts_with("max-") && s.contains('['))
        {
            return Modifier::Responsive(s.to_string());
        }

        // Container queries: @3xs through @7xl, @max-*, @min-[...]
        if s.starts_with('@') {
            return Modifier::Responsive(s.to_string());
        }

        if s.starts_with("supports-") && s.contains('[') {
            return Modifier::State(s.to_string());
        }

        // Parameterized pseudo-classes: has-[...], not-[...], nth-[...], data-[...]
        if (s.starts_with("has-")
            || s.starts_with("not-")
            || s.starts_with("nth-")
            || s.starts_with("in-")
            || s.starts_with("data-"))
            && s.contains('[')
        {
            return Modifier::PseudoClass(s.to_string());
        }

        if s.starts_with("aria-") || s.starts_with("data-") {
            return Modifier::PseudoClass(s.to_string());
        }

        // 伪类
        if matches!(
            s,
            "hover"
                | "focus"
                | "active"
                | "visited"
                | "target"
                | "focus-within"
                | "focus-visible"
                | "disabled"
                | "enabled"
                | "checked"
                | "indeterminate"
                | "default"
                | "optional"
                | "required"
                | "valid"
                | "invalid"
                | "in-range"
                | "out-of-range"
                | "placeholder-shown"
                | "autofill"
                | "read-only"
                | "empty"
                | "first"
                | "last"
                | "only"
                | "odd"
                | "even"
                | "first-of-type"
                | "last-of-type"
                | "only-of-type"
                | "open"
                | "inert"
                | "*"
                | "**"
        ) {
            return Modifier::PseudoClass(s.to_string());
        }

        // 伪元素
        if matches!(
            s,
            "before"
                | "after"
                | "placeholder"
                | "file"
                | "marker"
                | "selection"
                | "first-line"
                | "first-letter"
                | "backdrop"
                | "details-content"
        ) {
            return Modifier::PseudoElement(s.to_string());
        }

        // 状态修饰符
        if s.starts_with("group-")
            || s.starts_with("peer-")
            || matches!(
                s,
                "dark"
                    | "light"
                    | "starting"
                    | "motion-safe"
                    | "motion-reduce"
                    | "contrast-more"
                    | "contrast-less"
                    | "portrait"
                    | "landscape"
                    | "print"
                    | "forced-colors"
                    | "noscript"
                    | "rtl"
                    | "ltr"
            )
        {
            return Modifier::State(s.to_string());
        }

        Modifier::Custom(s.to_string())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
