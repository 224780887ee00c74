use thiserror::Error;

/// 变体配置错误
///
/// 表示调用方或组件定义写错了轴名/取值，应在调用处修正，不做恢复。
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Unknown variant axis '{axis}'")]
    UnknownAxis { axis: String },

    #[error("Unknown value '{value}' for variant axis '{axis}'")]
    UnknownValue { axis: String, value: String },

    #[error("Default value '{value}' is not declared for variant axis '{axis}'")]
    UnknownDefault { axis: String, value: String },

    #[error("Compound variant references unknown axis '{axis}'")]
    UnknownCompoundAxis { axis: String },

    #[error("Compound variant references unknown value '{value}' for axis '{axis}'")]
    UnknownCompoundValue { axis: String, value: String },

    #[error("Invalid variant definition: {0}")]
    Definition(#[from] serde_json::Error),
}
