/// 基本使用示例：合并冲突的类名
///
/// 运行示例：
/// ```bash
/// cargo run --example merge_classes -p breeze-core
/// ```

use breeze_core::{classes, ClassComposer, ClassificationTable};

fn main() {
    println!("=== 类名合并示例 ===\n");

    // 1. 内置分类表
    println!("--- 示例 1: 内置分类表 ---");
    let composer = ClassComposer::builtin();
    let tokens = classes![
        "px-2 py-1 bg-red-500 hover:bg-red-600",
        Some("p-3"),
        None::<&str>,
        ("bg-blue-500", true),
        ("hidden", false),
    ];
    let result = composer.merge_report(&tokens);
    println!("输出类名: {}", result.class);
    println!("丢弃的类: {:?}", result.removed);
    println!("分类表指纹: {}", composer.table().fingerprint());

    // 2. 带前缀的内置分类表
    println!("\n--- 示例 2: 前缀 tw- ---");
    let prefixed = ClassComposer::new(ClassificationTable::builtin_with_prefix(Some("tw-")));
    println!(
        "tw-p-2 tw-p-4 p-8 -> {}",
        prefixed.merge_str("tw-p-2 tw-p-4 p-8")
    );

    // 3. 自定义分类表
    println!("\n--- 示例 3: 自定义分类表 ---");
    let json = r#"{
        "rules": [
            { "group": "stack", "plugins": ["stack"], "values": ["number", "tshirt"] },
            { "group": "stack-x", "plugins": ["stack-x"], "values": ["number"] }
        ],
        "overrides": { "stack": ["stack-x"] }
    }"#;
    match ClassificationTable::from_json(json) {
        Ok(table) => {
            let custom = ClassComposer::new(table);
            println!(
                "stack-x-2 stack-4 stack-lg card -> {}",
                custom.merge_str("stack-x-2 stack-4 stack-lg card")
            );
        }
        Err(e) => println!("加载失败: {}", e),
    }
}
