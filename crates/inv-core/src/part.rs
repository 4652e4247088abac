//! 零件模型

use serde::{Deserialize, Serialize};

/// 零件：只有識別碼，存在於目錄中即為其全部狀態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// 零件ID
    pub id: String,
}

impl Part {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}
