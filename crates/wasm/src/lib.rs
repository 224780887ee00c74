use serde::Serialize;
use wasm_bindgen::prelude::*;

use breeze_core::{ClassComposer, ClassToken, ClassificationTable, TableDef};
use breeze_variants::{Selections, VariantDefinition, VariantTable};

// ── 参数转换 ──────────────────────────────────────────────────

fn parse_tokens(tokens: JsValue) -> Result<Vec<ClassToken>, JsError> {
    if tokens.is_undefined() || tokens.is_null() {
        return Ok(Vec::new());
    }
    let token: ClassToken = serde_wasm_bindgen::from_value(tokens)
        .map_err(|e| JsError::new(&format!("Invalid class tokens: {}", e)))?;
    Ok(vec![token])
}

fn parse_selections(selections: JsValue) -> Result<Selections, JsError> {
    if selections.is_undefined() || selections.is_null() {
        Ok(Selections::new())
    } else {
        serde_wasm_bindgen::from_value(selections)
            .map_err(|e| JsError::new(&format!("Invalid selections: {}", e)))
    }
}

fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 合并类名（内置 Tailwind 分类表）
///
/// @param tokens - 字符串、数组、`{ class: boolean }` 对象或它们的任意嵌套
/// @returns 合并后的类名字符串
#[wasm_bindgen]
pub fn merge(tokens: JsValue) -> Result<String, JsError> {
    let tokens = parse_tokens(tokens)?;
    Ok(ClassComposer::builtin().merge(&tokens))
}

/// 合并类名并返回详细结果
///
/// @returns `{ class, removed, diagnostics }`
#[wasm_bindgen(js_name = "mergeReport")]
pub fn merge_report(tokens: JsValue) -> Result<JsValue, JsError> {
    let tokens = parse_tokens(tokens)?;
    serialize(&ClassComposer::builtin().merge_report(&tokens))
}

/// 使用自定义分类表的组合器
#[wasm_bindgen(js_name = "Composer")]
pub struct JsComposer {
    inner: ClassComposer,
}

#[wasm_bindgen(js_class = "Composer")]
impl JsComposer {
    /// @param table - `{ prefix?, rules, overrides? }`
    #[wasm_bindgen(constructor)]
    pub fn new(table: JsValue) -> Result<JsComposer, JsError> {
        let def: TableDef = serde_wasm_bindgen::from_value(table)
            .map_err(|e| JsError::new(&format!("Invalid classification table: {}", e)))?;
        let table = ClassificationTable::new(def).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(JsComposer {
            inner: ClassComposer::new(table),
        })
    }

    pub fn merge(&self, tokens: JsValue) -> Result<String, JsError> {
        let tokens = parse_tokens(tokens)?;
        Ok(self.inner.merge(&tokens))
    }

    /// 分类表指纹
    pub fn fingerprint(&self) -> String {
        self.inner.table().fingerprint()
    }
}

/// 组件变体表
#[wasm_bindgen(js_name = "VariantTable")]
pub struct JsVariantTable {
    inner: VariantTable,
}

#[wasm_bindgen(js_class = "VariantTable")]
impl JsVariantTable {
    /// @param definition - `{ base, variants, defaultVariants, compoundVariants }`
    #[wasm_bindgen(constructor)]
    pub fn new(definition: JsValue) -> Result<JsVariantTable, JsError> {
        let def: VariantDefinition = serde_wasm_bindgen::from_value(definition)
            .map_err(|e| JsError::new(&format!("Invalid variant definition: {}", e)))?;
        let inner = VariantTable::try_from(def).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(JsVariantTable { inner })
    }

    /// 解析组件实例类名
    ///
    /// @param selections - `{ axis: value }`，可选
    /// @param extra      - 调用方追加的类名，可选
    pub fn resolve(&self, selections: JsValue, extra: JsValue) -> Result<String, JsError> {
        let selections = parse_selections(selections)?;
        let extra = parse_tokens(extra)?;
        self.inner
            .resolve(&selections, &extra)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// 已声明的轴名
    pub fn axes(&self) -> Vec<String> {
        self.inner.axes().map(str::to_string).collect()
    }
}
