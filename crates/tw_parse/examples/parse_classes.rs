/// 演示类名解析：修饰符、负值与 important 标记
///
/// 运行示例：
/// ```bash
/// cargo run --example parse_classes -p breeze-tw-parse
/// ```

use breeze_tw_parse::parse_class;

fn main() {
    println!("=== 类名解析示例 ===\n");

    let inputs = [
        "p-4",
        "md:hover:p-4",
        "hover:md:p-4",
        "-mt-2",
        "!font-bold",
        "dark:bg-blue-500!",
        "[&_svg]:size-4",
        "[mask-type:luminance]",
        "w-[calc(100%-2rem)]",
    ];

    for input in inputs {
        match parse_class(input) {
            Ok(parsed) => {
                println!("  {}", input);
                println!("    修饰符: {:?}", parsed.modifiers);
                println!("    前缀键: {:?}", parsed.modifier_key());
                println!("    工具类: {}", parsed.utility);
                if parsed.negative {
                    println!("    负值: true");
                }
                if parsed.important {
                    println!("    important: true");
                }
                println!();
            }
            Err(e) => println!("  {} -> 解析失败: {}\n", input, e),
        }
    }

    println!("--- 无法解析的输入 ---");
    for input in ["", "hover:", "[&_svg:p-4"] {
        match parse_class(input) {
            Ok(parsed) => println!("  {:?} -> {}", input, parsed.to_normalized_string()),
            Err(e) => println!("  {:?} -> {}", input, e),
        }
    }
}
