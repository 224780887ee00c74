use crate::types::{Modifier, ParsedClass};

/// 解析单个 utility class 字符串
///
/// 支持的格式：
/// - 简单类：`p-4`, `bg-red-500`
/// - 修饰符：`hover:bg-blue-500`, `md:p-4`, `dark:text-white`
/// - 多修饰符：`md:hover:bg-blue-500`
/// - 任意变体：`[&_svg]:size-4`, `has-[>svg]:px-4`
/// - 负值：`-m-4`, `md:-top-1`
/// - 任意值/属性：`w-[13px]`, `[mask-type:luminance]`
/// - 重要性：`!p-4`, `p-4!`
///
/// # 示例
///
/// ```
/// use breeze_tw_parse::parse_class;
///
/// let parsed = parse_class("md:hover:bg-blue-500/50!").unwrap();
/// assert_eq!(parsed.modifiers.len(), 2);
/// assert_eq!(parsed.utility, "bg-blue-500/50");
/// assert!(parsed.important);
/// ```
pub fn parse_class(input: &str) -> Result<ParsedClass, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser::new(input);
    parser.parse()
}

/// 解析错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    EmptyInput,
    UnmatchedBracket,
    MissingUtility,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Empty input"),
            ParseError::UnmatchedBracket => write!(f, "Unmatched bracket"),
            ParseError::MissingUtility => write!(f, "Missing utility after modifiers"),
        }
    }
}

impl std::error::Error for ParseError {}

/// 内部解析器
struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input }
    }

    fn parse(&mut self) -> Result<ParsedClass, ParseError> {
        // 1. 在方括号/圆括号外的冒号处切分
        let segments = self.split_segments()?;

        // 2. 最后一段为 utility，其余为修饰符
        let (last, modifier_segments) = match segments.split_last() {
            Some(split) => split,
            None => return Err(ParseError::EmptyInput),
        };

        if modifier_segments.iter().any(|s| s.is_empty()) {
            return Err(ParseError::MissingUtility);
        }

        let modifiers = modifier_segments
            .iter()
            .map(|s| Modifier::classify(s))
            .collect();

        // 3. 重要性：前置 `!`（v3）或后置 `!`（v4）
        let mut utility = *last;
        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            utility = rest;
            important = true;
        } else if let Some(rest) = utility.strip_suffix('!') {
            utility = rest;
            important = true;
        }

        // 4. 负值标记
        let mut negative = false;
        if let Some(rest) = utility.strip_prefix('-') {
            utility = rest;
            negative = true;
        }

        if utility.is_empty() {
            return Err(ParseError::MissingUtility);
        }

        Ok(ParsedClass {
            modifiers,
            negative,
            utility: utility.to_string(),
            important,
        })
    }

    /// 按顶层冒号切分
    ///
    /// `[&:hover]:p-4` 中方括号内的冒号不参与切分。
    fn split_segments(&self) -> Result<Vec<&'a str>, ParseError> {
        let mut segments = Vec::new();
        let mut depth: i32 = 0;
        let mut start = 0;

        for (pos, ch) in self.input.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(ParseError::UnmatchedBracket);
                    }
                }
                ':' if depth == 0 => {
                    segments.push(&self.input[start..pos]);
                    start = pos + 1;
                }
                _ => {}
            }
        }

        if depth != 0 {
            return Err(ParseError::UnmatchedBracket);
        }

        segments.push(&self.input[start..]);
        Ok(segments)
    }
}
