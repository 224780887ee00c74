use thiserror::Error;

/// 分类表加载/校验错误
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Invalid classification table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rule for group '{group}' declares no plugins")]
    NoPlugins { group: String },

    #[error("Rule for group '{group}' accepts no values")]
    NoValues { group: String },

    #[error("Overrides declared for unknown group '{group}'")]
    UnknownGroup { group: String },

    #[error("Group '{group}' overrides unknown group '{target}'")]
    UnknownOverride { group: String, target: String },
}
