use phf::phf_set;
use serde::{Deserialize, Serialize};

/// CSS 长度单位，用于识别 `[13px]` 这类任意长度值
static LENGTH_UNITS: phf::Set<&'static str> = phf_set! {
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "svh", "lvh", "dvh",
    "svw", "lvw", "dvw", "ch", "ex", "lh", "rlh", "cm", "mm", "in", "pt", "pc",
    "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax",
};

/// t-shirt 尺寸的基本词（可带数字前缀，如 2xl、3xs）
static TSHIRT_BASES: phf::Set<&'static str> = phf_set! {
    "xs", "sm", "md", "lg", "xl",
};

/// 任意值中可以出现的 CSS 颜色函数
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color(",
    "color-mix(",
];

/// 长度计算函数
const LENGTH_FUNCTIONS: &[&str] = &["calc(", "min(", "max(", "clamp("];

/// 值的匹配类型
///
/// JSON 中写作小写短横线形式，如 `"arbitrary-length"`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// 没有值（`flex`, `border`）
    Empty,
    /// 数字，允许小数（`4`, `0.5`）
    Number,
    /// 整数
    Integer,
    /// 分数（`1/2`）
    Fraction,
    /// 百分比（`10%`）
    Percent,
    /// t-shirt 尺寸（`sm`, `2xl`）
    Tshirt,
    /// 任意值：`[...]` 或 `(--var)`
    Arbitrary,
    /// 任意长度：`[13px]`, `[length:var(--x)]`, `[calc(...)]`
    ArbitraryLength,
    /// 任意颜色：`[#fff]`, `[color:var(--x)]`, `[rgb(...)]`
    ArbitraryColor,
    /// 任意数字：`[.35]`
    ArbitraryNumber,
    /// 任意图片：`[url(...)]`, `[image:...]`, `[linear-gradient(...)]`
    ArbitraryImage,
    /// 任何非空值
    Any,
}

impl ValueKind {
    /// 判断值是否属于该类型
    ///
    /// `value` 为 `None` 表示 class 只有插件名本身。
    pub fn matches(self, value: Option<&str>) -> bool {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return self == ValueKind::Empty,
        };

        match self {
            ValueKind::Empty => false,
            ValueKind::Number => is_number(value),
            ValueKind::Integer => is_integer(value),
            ValueKind::Fraction => is_fraction(value),
            ValueKind::Percent => value
                .strip_suffix('%')
                .map(is_number)
                .unwrap_or(false),
            ValueKind::Tshirt => is_tshirt(value),
            ValueKind::Arbitrary => arbitrary_content(value).is_some(),
            ValueKind::ArbitraryLength => arbitrary_matches(value, "length", is_length),
            ValueKind::ArbitraryColor => arbitrary_matches(value, "color", is_color),
            ValueKind::ArbitraryNumber => arbitrary_matches(value, "number", is_number),
            ValueKind::ArbitraryImage => arbitrary_matches(value, "image", is_image),
            ValueKind::Any => true,
        }
    }
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_number(value: &str) -> bool {
    if value.is_empty() || value == "." {
        return false;
    }
    let mut dots = 0;
    for b in value.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' => dots += 1,
            _ => return false,
        }
    }
    dots <= 1
}

fn is_fraction(value: &str) -> bool {
    match value.split_once('/') {
        Some((num, den)) => is_integer(num) && is_integer(den),
        None => false,
    }
}

fn is_tshirt(value: &str) -> bool {
    if TSHIRT_BASES.contains(value) {
        return true;
    }
    // 2xl, 3xs, 2.5xl
    let split = value
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(value.len());
    let (count, base) = value.split_at(split);
    !count.is_empty() && is_number(count) && matches!(base, "xs" | "xl")
}

fn is_length(content: &str) -> bool {
    if content == "0" {
        return true;
    }
    if LENGTH_FUNCTIONS.iter().any(|f| content.starts_with(f)) {
        return true;
    }
    let split = content
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-')
        .unwrap_or(content.len());
    let (number, unit) = content.split_at(split);
    !number.is_empty() && LENGTH_UNITS.contains(unit)
}

fn is_color(content: &str) -> bool {
    content.starts_with('#') || COLOR_FUNCTIONS.iter().any(|f| content.starts_with(f))
}

fn is_image(content: &str) -> bool {
    content.starts_with("url(")
        || content.contains("gradient(")
        || content.starts_with("image-set(")
}

/// 取出任意值的内容
///
/// `[13px]` → `13px`，`(--my-color)` → `--my-color`
fn arbitrary_content(value: &str) -> Option<&str> {
    value
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .or_else(|| value.strip_prefix('(').and_then(|s| s.strip_suffix(')')))
        .filter(|s| !s.is_empty())
}

/// 任意值类型判断
///
/// 带类型提示（`[length:...]`, `(color:--x)`）时只看提示；
/// 否则用内容形态推断。
fn arbitrary_matches(value: &str, hint: &str, infer: fn(&str) -> bool) -> bool {
    let content = match arbitrary_content(value) {
        Some(content) => content,
        None => return false,
    };

    if let Some((label, _)) = content.split_once(':') {
        if !label.is_empty() && label.bytes().all(|b| b.is_ascii_lowercase() || b == b'-') {
            return label == hint;
        }
    }

    infer(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_only_matches_missing_value() {
        assert!(ValueKind::Empty.matches(None));
        assert!(!ValueKind::Empty.matches(Some("4")));
        assert!(!ValueKind::Any.matches(None));
        assert!(ValueKind::Any.matches(Some("red-500")));
    }

    #[test]
    fn test_numbers() {
        assert!(ValueKind::Number.matches(Some("4")));
        assert!(ValueKind::Number.matches(Some("0.5")));
        assert!(!ValueKind::Number.matches(Some("1/2")));
        assert!(!ValueKind::Number.matches(Some("1.2.3")));
        assert!(ValueKind::Integer.matches(Some("12")));
        assert!(!ValueKind::Integer.matches(Some("1.5")));
        assert!(ValueKind::Fraction.matches(Some("2/3")));
        assert!(ValueKind::Percent.matches(Some("10%")));
    }

    #[test]
    fn test_tshirt() {
        for size in ["xs", "sm", "md", "lg", "xl", "2xl", "9xl", "3xs"] {
            assert!(ValueKind::Tshirt.matches(Some(size)), "{}", size);
        }
        assert!(!ValueKind::Tshirt.matches(Some("2sm")));
        assert!(!ValueKind::Tshirt.matches(Some("red-500")));
    }

    #[test]
    fn test_arbitrary_length() {
        assert!(ValueKind::ArbitraryLength.matches(Some("[13px]")));
        assert!(ValueKind::ArbitraryLength.matches(Some("[1.5rem]")));
        assert!(ValueKind::ArbitraryLength.matches(Some("[calc(100%-1rem)]")));
        assert!(ValueKind::ArbitraryLength.matches(Some("[length:var(--size)]")));
        assert!(!ValueKind::ArbitraryLength.matches(Some("[#fff]")));
        assert!(!ValueKind::ArbitraryLength.matches(Some("[var(--size)]")));
    }

    #[test]
    fn test_arbitrary_color() {
        assert!(ValueKind::ArbitraryColor.matches(Some("[#ff0000]")));
        assert!(ValueKind::ArbitraryColor.matches(Some("[rgb(0,0,0)]")));
        assert!(ValueKind::ArbitraryColor.matches(Some("(color:--brand)")));
        assert!(!ValueKind::ArbitraryColor.matches(Some("[14px]")));
    }

    #[test]
    fn test_arbitrary_image() {
        assert!(ValueKind::ArbitraryImage.matches(Some("[url(/hero.png)]")));
        assert!(ValueKind::ArbitraryImage.matches(Some("[linear-gradient(red,blue)]")));
        assert!(!ValueKind::ArbitraryImage.matches(Some("[#fff]")));
    }

    #[test]
    fn test_arbitrary_any() {
        assert!(ValueKind::Arbitrary.matches(Some("[repeat(3,minmax(0,1fr))]")));
        assert!(ValueKind::Arbitrary.matches(Some("(--my-var)")));
        assert!(!ValueKind::Arbitrary.matches(Some("[]")));
        assert!(!ValueKind::Arbitrary.matches(Some("4")));
    }

    #[test]
    fn test_kind_serde_names() {
        let kind: ValueKind = serde_json::from_str("\"arbitrary-length\"").unwrap();
        assert_eq!(kind, ValueKind::ArbitraryLength);
        assert_eq!(serde_json::to_string(&ValueKind::Tshirt).unwrap(), "\"tshirt\"");
    }
}
