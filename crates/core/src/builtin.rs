//! 内置 Tailwind 分类规则
//!
//! 规则按优先级排列：同一插件下先列出关键字/具体类型，最后才是 `Any` 兜底（通常是颜色）。

use crate::matcher::ValueKind;
use crate::matcher::ValueKind::{
    Any, Arbitrary, ArbitraryColor, ArbitraryImage, ArbitraryLength, ArbitraryNumber, Empty,
    Fraction, Integer, Number, Percent, Tshirt,
};

/// 内置规则定义（编译期常量）
pub(crate) struct BuiltinRule {
    pub group: &'static str,
    pub plugins: &'static [&'static str],
    pub values: &'static [ValueKind],
    pub keywords: &'static [&'static str],
}

const fn rule(
    group: &'static str,
    plugins: &'static [&'static str],
    values: &'static [ValueKind],
    keywords: &'static [&'static str],
) -> BuiltinRule {
    BuiltinRule {
        group,
        plugins,
        values,
        keywords,
    }
}

const SPACING: &[ValueKind] = &[Number, Arbitrary];
const SIZING: &[ValueKind] = &[Number, Fraction, Arbitrary];
const WIDTH_BORDER: &[ValueKind] = &[Empty, Number, ArbitraryLength];
const ALIGN_CONTENT: &[&str] = &[
    "normal", "start", "end", "center", "between", "around", "evenly", "stretch", "baseline",
];
const POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

pub(crate) static BUILTIN_RULES: &[BuiltinRule] = &[
    // Layout
    rule(
        "display",
        &[
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ],
        &[Empty],
        &[],
    ),
    rule("aspect", &["aspect"], &[Fraction, Arbitrary], &["auto", "square", "video"]),
    rule("container", &["container"], &[Empty], &[]),
    rule("columns", &["columns"], &[Integer, Tshirt, Arbitrary], &["auto"]),
    rule("box", &["box"], &[], &["border", "content"]),
    rule("float", &["float"], &[], &["right", "left", "none", "start", "end"]),
    rule("clear", &["clear"], &[], &["left", "right", "both", "none", "start", "end"]),
    rule("isolation", &["isolate"], &[Empty], &[]),
    rule("isolation", &["isolation"], &[], &["auto"]),
    rule("object-fit", &["object"], &[], &["contain", "cover", "fill", "none", "scale-down"]),
    rule("object-position", &["object"], &[Arbitrary], POSITIONS),
    rule("overflow", &["overflow"], &[], &["auto", "hidden", "clip", "visible", "scroll"]),
    rule("overflow-x", &["overflow-x"], &[], &["auto", "hidden", "clip", "visible", "scroll"]),
    rule("overflow-y", &["overflow-y"], &[], &["auto", "hidden", "clip", "visible", "scroll"]),
    rule("position", &["static", "fixed", "absolute", "relative", "sticky"], &[Empty], &[]),
    rule("inset", &["inset"], SIZING, &["auto", "full", "px"]),
    rule("inset-x", &["inset-x"], SIZING, &["auto", "full", "px"]),
    rule("inset-y", &["inset-y"], SIZING, &["auto", "full", "px"]),
    rule("start", &["start"], SIZING, &["auto", "full", "px"]),
    rule("end", &["end"], SIZING, &["auto", "full", "px"]),
    rule("top", &["top"], SIZING, &["auto", "full", "px"]),
    rule("right", &["right"], SIZING, &["auto", "full", "px"]),
    rule("bottom", &["bottom"], SIZING, &["auto", "full", "px"]),
    rule("left", &["left"], SIZING, &["auto", "full", "px"]),
    rule("visibility", &["visible", "invisible", "collapse"], &[Empty], &[]),
    rule("z", &["z"], &[Integer, Arbitrary], &["auto"]),
    // Flexbox & Grid
    rule("basis", &["basis"], &[Number, Fraction, Tshirt, Arbitrary], &["auto", "full", "px"]),
    rule("flex-direction", &["flex"], &[], &["row", "row-reverse", "col", "col-reverse"]),
    rule("flex-wrap", &["flex"], &[], &["wrap", "wrap-reverse", "nowrap"]),
    rule("flex", &["flex"], &[Number, Fraction, Arbitrary], &["auto", "initial", "none"]),
    rule("grow", &["grow", "flex-grow"], &[Empty, Number, Arbitrary], &[]),
    rule("shrink", &["shrink", "flex-shrink"], &[Empty, Number, Arbitrary], &[]),
    rule("order", &["order"], &[Integer, Arbitrary], &["first", "last", "none"]),
    rule("grid-cols", &["grid-cols"], &[Integer, Arbitrary], &["none", "subgrid"]),
    rule("col-start-end", &["col"], &[Integer, Arbitrary], &["auto"]),
    rule("col-span", &["col-span"], &[Integer, Arbitrary], &["full"]),
    rule("col-start", &["col-start"], &[Integer, Arbitrary], &["auto"]),
    rule("col-end", &["col-end"], &[Integer, Arbitrary], &["auto"]),
    rule("grid-rows", &["grid-rows"], &[Integer, Arbitrary], &["none", "subgrid"]),
    rule("row-start-end", &["row"], &[Integer, Arbitrary], &["auto"]),
    rule("row-span", &["row-span"], &[Integer, Arbitrary], &["full"]),
    rule("row-start", &["row-start"], &[Integer, Arbitrary], &["auto"]),
    rule("row-end", &["row-end"], &[Integer, Arbitrary], &["auto"]),
    rule("grid-flow", &["grid-flow"], &[], &["row", "col", "dense", "row-dense", "col-dense"]),
    rule("auto-cols", &["auto-cols"], &[Arbitrary], &["auto", "min", "max", "fr"]),
    rule("auto-rows", &["auto-rows"], &[Arbitrary], &["auto", "min", "max", "fr"]),
    rule("gap", &["gap"], SPACING, &["px"]),
    rule("gap-x", &["gap-x"], SPACING, &["px"]),
    rule("gap-y", &["gap-y"], SPACING, &["px"]),
    rule("justify-content", &["justify"], &[], ALIGN_CONTENT),
    rule("justify-items", &["justify-items"], &[], &["start", "end", "center", "stretch", "normal"]),
    rule("justify-self", &["justify-self"], &[], &["auto", "start", "end", "center", "stretch"]),
    rule("align-content", &["content"], &[], ALIGN_CONTENT),
    rule("align-items", &["items"], &[], &["start", "end", "center", "baseline", "stretch"]),
    rule("align-self", &["self"], &[], &["auto", "start", "end", "center", "stretch", "baseline"]),
    rule("place-content", &["place-content"], &[], ALIGN_CONTENT),
    rule("place-items", &["place-items"], &[], &["start", "end", "center", "baseline", "stretch"]),
    rule("place-self", &["place-self"], &[], &["auto", "start", "end", "center", "stretch"]),
    // Spacing
    rule("p", &["p"], SPACING, &["px"]),
    rule("px", &["px"], SPACING, &["px"]),
    rule("py", &["py"], SPACING, &["px"]),
    rule("ps", &["ps"], SPACING, &["px"]),
    rule("pe", &["pe"], SPACING, &["px"]),
    rule("pt", &["pt"], SPACING, &["px"]),
    rule("pr", &["pr"], SPACING, &["px"]),
    rule("pb", &["pb"], SPACING, &["px"]),
    rule("pl", &["pl"], SPACING, &["px"]),
    rule("m", &["m"], SPACING, &["auto", "px"]),
    rule("mx", &["mx"], SPACING, &["auto", "px"]),
    rule("my", &["my"], SPACING, &["auto", "px"]),
    rule("ms", &["ms"], SPACING, &["auto", "px"]),
    rule("me", &["me"], SPACING, &["auto", "px"]),
    rule("mt", &["mt"], SPACING, &["auto", "px"]),
    rule("mr", &["mr"], SPACING, &["auto", "px"]),
    rule("mb", &["mb"], SPACING, &["auto", "px"]),
    rule("ml", &["ml"], SPACING, &["auto", "px"]),
    rule("space-x", &["space-x"], SPACING, &["px"]),
    rule("space-x-reverse", &["space-x-reverse"], &[Empty], &[]),
    rule("space-y", &["space-y"], SPACING, &["px"]),
    rule("space-y-reverse", &["space-y-reverse"], &[Empty], &[]),
    // Sizing
    rule("size", &["size"], SIZING, &["auto", "px", "full", "min", "max", "fit"]),
    rule(
        "w",
        &["w"],
        &[Number, Fraction, Tshirt, Arbitrary],
        &["auto", "px", "full", "screen", "svw", "lvw", "dvw", "min", "max", "fit"],
    ),
    rule("min-w", &["min-w"], SIZING, &["auto", "px", "full", "min", "max", "fit"]),
    rule(
        "max-w",
        &["max-w"],
        &[Number, Fraction, Tshirt, Arbitrary],
        &["none", "px", "full", "min", "max", "fit", "prose", "screen"],
    ),
    rule(
        "h",
        &["h"],
        SIZING,
        &["auto", "px", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit"],
    ),
    rule("min-h", &["min-h"], SIZING, &["auto", "px", "full", "screen", "min", "max", "fit"]),
    rule("max-h", &["max-h"], SIZING, &["none", "px", "full", "screen", "min", "max", "fit"]),
    // Typography
    rule("font-size", &["text"], &[Tshirt, ArbitraryLength], &["base"]),
    rule("text-alignment", &["text"], &[], &["left", "center", "right", "justify", "start", "end"]),
    rule("text-wrap", &["text"], &[], &["wrap", "nowrap", "balance", "pretty"]),
    rule("text-overflow", &["truncate"], &[Empty], &[]),
    rule("text-overflow", &["text"], &[], &["ellipsis", "clip"]),
    rule("text-color", &["text"], &[Any], &[]),
    rule(
        "font-weight",
        &["font"],
        &[ArbitraryNumber],
        &[
            "thin",
            "extralight",
            "light",
            "normal",
            "medium",
            "semibold",
            "bold",
            "extrabold",
            "black",
        ],
    ),
    rule("font-family", &["font"], &[Any], &[]),
    rule("font-style", &["italic", "not-italic"], &[Empty], &[]),
    rule("font-smoothing", &["antialiased", "subpixel-antialiased"], &[Empty], &[]),
    rule(
        "tracking",
        &["tracking"],
        &[Arbitrary],
        &["tighter", "tight", "normal", "wide", "wider", "widest"],
    ),
    rule(
        "leading",
        &["leading"],
        &[Number, Arbitrary],
        &["none", "tight", "snug", "normal", "relaxed", "loose"],
    ),
    rule("line-clamp", &["line-clamp"], &[Integer, Arbitrary], &["none"]),
    rule("list-style-position", &["list"], &[], &["inside", "outside"]),
    rule("list-style-type", &["list"], &[Arbitrary], &["none", "disc", "decimal"]),
    rule(
        "text-decoration",
        &["underline", "overline", "line-through", "no-underline"],
        &[Empty],
        &[],
    ),
    rule(
        "text-decoration-style",
        &["decoration"],
        &[],
        &["solid", "dashed", "dotted", "double", "wavy"],
    ),
    rule(
        "text-decoration-thickness",
        &["decoration"],
        &[Number, ArbitraryLength],
        &["auto", "from-font"],
    ),
    rule("text-decoration-color", &["decoration"], &[Any], &[]),
    rule("underline-offset", &["underline-offset"], &[Number, Arbitrary], &["auto"]),
    rule(
        "text-transform",
        &["uppercase", "lowercase", "capitalize", "normal-case"],
        &[Empty],
        &[],
    ),
    rule(
        "whitespace",
        &["whitespace"],
        &[],
        &["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"],
    ),
    rule("break", &["break"], &[], &["normal", "words", "all", "keep"]),
    rule("hyphens", &["hyphens"], &[], &["none", "manual", "auto"]),
    rule(
        "vertical-align",
        &["align"],
        &[Arbitrary],
        &["baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super"],
    ),
    rule("indent", &["indent"], SPACING, &["px"]),
    rule("content", &["content"], &[Arbitrary], &["none"]),
    // Backgrounds
    rule("bg-attachment", &["bg"], &[], &["fixed", "local", "scroll"]),
    rule("bg-clip", &["bg-clip"], &[], &["border", "padding", "content", "text"]),
    rule("bg-origin", &["bg-origin"], &[], &["border", "padding", "content"]),
    rule("bg-position", &["bg"], &[], POSITIONS),
    rule(
        "bg-repeat",
        &["bg"],
        &[],
        &["no-repeat", "repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"],
    ),
    rule("bg-size", &["bg"], &[], &["auto", "cover", "contain"]),
    rule("bg-image", &["bg"], &[ArbitraryImage], &["none"]),
    rule(
        "bg-image",
        &["bg-gradient-to", "bg-linear-to"],
        &[],
        &["t", "tr", "r", "br", "b", "bl", "l", "tl"],
    ),
    rule("bg-image", &["bg-radial", "bg-conic"], &[Empty, Arbitrary], &[]),
    rule("bg-color", &["bg"], &[Any], &[]),
    rule("gradient-from-pos", &["from"], &[Percent], &[]),
    rule("gradient-via-pos", &["via"], &[Percent], &[]),
    rule("gradient-to-pos", &["to"], &[Percent], &[]),
    rule("gradient-from", &["from"], &[Any], &[]),
    rule("gradient-via", &["via"], &[Any], &[]),
    rule("gradient-to", &["to"], &[Any], &[]),
    // Borders
    rule("rounded", &["rounded"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-s", &["rounded-s"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-e", &["rounded-e"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-t", &["rounded-t"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-r", &["rounded-r"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-b", &["rounded-b"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-l", &["rounded-l"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-tl", &["rounded-tl"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-tr", &["rounded-tr"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-br", &["rounded-br"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("rounded-bl", &["rounded-bl"], &[Empty, Tshirt, Arbitrary], &["none", "full"]),
    rule("border-w", &["border"], WIDTH_BORDER, &[]),
    rule("border-w-x", &["border-x"], WIDTH_BORDER, &[]),
    rule("border-w-y", &["border-y"], WIDTH_BORDER, &[]),
    rule("border-w-s", &["border-s"], WIDTH_BORDER, &[]),
    rule("border-w-e", &["border-e"], WIDTH_BORDER, &[]),
    rule("border-w-t", &["border-t"], WIDTH_BORDER, &[]),
    rule("border-w-r", &["border-r"], WIDTH_BORDER, &[]),
    rule("border-w-b", &["border-b"], WIDTH_BORDER, &[]),
    rule("border-w-l", &["border-l"], WIDTH_BORDER, &[]),
    rule("border-style", &["border"], &[], BORDER_STYLES),
    rule("border-color", &["border"], &[Any], &[]),
    rule("border-color-x", &["border-x"], &[Any], &[]),
    rule("border-color-y", &["border-y"], &[Any], &[]),
    rule("border-color-s", &["border-s"], &[Any], &[]),
    rule("border-color-e", &["border-e"], &[Any], &[]),
    rule("border-color-t", &["border-t"], &[Any], &[]),
    rule("border-color-r", &["border-r"], &[Any], &[]),
    rule("border-color-b", &["border-b"], &[Any], &[]),
    rule("border-color-l", &["border-l"], &[Any], &[]),
    rule("divide-x", &["divide-x"], WIDTH_BORDER, &[]),
    rule("divide-x-reverse", &["divide-x-reverse"], &[Empty], &[]),
    rule("divide-y", &["divide-y"], WIDTH_BORDER, &[]),
    rule("divide-y-reverse", &["divide-y-reverse"], &[Empty], &[]),
    rule("divide-style", &["divide"], &[], BORDER_STYLES),
    rule("divide-color", &["divide"], &[Any], &[]),
    rule("outline-style", &["outline"], &[Empty], BORDER_STYLES),
    rule("outline-offset", &["outline-offset"], &[Number, Arbitrary], &[]),
    rule("outline-w", &["outline"], &[Number, ArbitraryLength], &[]),
    rule("outline-color", &["outline"], &[Any], &[]),
    rule("ring-w", &["ring"], WIDTH_BORDER, &[]),
    rule("ring-w-inset", &["ring-inset"], &[Empty], &[]),
    rule("ring-color", &["ring"], &[Any], &[]),
    rule("ring-offset-w", &["ring-offset"], &[Number, ArbitraryLength], &[]),
    rule("ring-offset-color", &["ring-offset"], &[Any], &[]),
    // Effects
    rule("shadow", &["shadow"], &[Empty, Tshirt, Arbitrary], &["none", "inner"]),
    rule("shadow-color", &["shadow"], &[Any], &[]),
    rule("opacity", &["opacity"], &[Number, ArbitraryNumber], &[]),
    rule("blur", &["blur"], &[Empty, Tshirt, Arbitrary], &["none"]),
    rule("backdrop-blur", &["backdrop-blur"], &[Empty, Tshirt, Arbitrary], &["none"]),
    // Transitions & Animation
    rule(
        "transition",
        &["transition"],
        &[Empty, Arbitrary],
        &["none", "all", "colors", "opacity", "shadow", "transform"],
    ),
    rule("duration", &["duration"], &[Number, Arbitrary], &[]),
    rule("ease", &["ease"], &[Arbitrary], &["linear", "in", "out", "in-out"]),
    rule("delay", &["delay"], &[Number, Arbitrary], &[]),
    rule("animate", &["animate"], &[Any], &[]),
    // Transforms
    rule("scale", &["scale"], &[Number, Arbitrary], &[]),
    rule("scale-x", &["scale-x"], &[Number, Arbitrary], &[]),
    rule("scale-y", &["scale-y"], &[Number, Arbitrary], &[]),
    rule("rotate", &["rotate"], &[Number, Arbitrary], &[]),
    rule("translate-x", &["translate-x"], SIZING, &["full", "px"]),
    rule("translate-y", &["translate-y"], SIZING, &["full", "px"]),
    rule(
        "transform-origin",
        &["origin"],
        &[Arbitrary],
        &[
            "center",
            "top",
            "top-right",
            "right",
            "bottom-right",
            "bottom",
            "bottom-left",
            "left",
            "top-left",
        ],
    ),
    rule("transform", &["transform"], &[Empty], &["none", "gpu", "cpu"]),
    // Interactivity
    rule("cursor", &["cursor"], &[Any], &[]),
    rule("pointer-events", &["pointer-events"], &[], &["none", "auto"]),
    rule("select", &["select"], &[], &["none", "text", "all", "auto"]),
    rule("resize", &["resize"], &[Empty], &["none", "x", "y"]),
    rule("appearance", &["appearance"], &[], &["none", "auto"]),
    rule("sr", &["sr-only", "not-sr-only"], &[Empty], &[]),
    rule(
        "will-change",
        &["will-change"],
        &[Arbitrary],
        &["auto", "scroll", "contents", "transform"],
    ),
    rule("accent", &["accent"], &[Any], &[]),
    rule("caret", &["caret"], &[Any], &[]),
    // SVG
    rule("fill", &["fill"], &[Any], &[]),
    rule("stroke-w", &["stroke"], &[Number, ArbitraryLength, ArbitraryNumber], &[]),
    rule("stroke", &["stroke"], &[ArbitraryColor, Any], &[]),
];

/// 跨组冲突：后出现的左侧组会移除先出现的右侧组
pub(crate) static BUILTIN_OVERRIDES: &[(&str, &[&str])] = &[
    ("overflow", &["overflow-x", "overflow-y"]),
    (
        "inset",
        &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
    ),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("flex", &["basis", "grow", "shrink"]),
    ("gap", &["gap-x", "gap-y"]),
    ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    ("font-size", &["leading"]),
    ("line-clamp", &["display", "overflow"]),
    (
        "rounded",
        &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
    ),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    (
        "border-w",
        &[
            "border-w-x",
            "border-w-y",
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
    ),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "border-color",
        &[
            "border-color-x",
            "border-color-y",
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
    ),
    ("border-color-x", &["border-color-r", "border-color-l"]),
    ("border-color-y", &["border-color-t", "border-color-b"]),
    ("scale", &["scale-x", "scale-y"]),
];
