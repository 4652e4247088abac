//! 庫存系統配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存系統配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// 補貨門檻（容量比例），現有庫存低於 `capacity × threshold` 時補滿
    pub restock_threshold: Decimal,

    /// 全面補貨時的組件遍歷順序
    pub restock_order: RestockOrder,

    /// 執行前回顯命令（`+ verb args`）
    pub echo_commands: bool,

    /// 接受命令縮寫（任一前綴，依命令表順序取第一個符合者）
    pub abbreviated_commands: bool,
}

impl InventoryConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            restock_threshold: Decimal::new(5, 1),
            restock_order: RestockOrder::MostRecentFirst,
            echo_commands: true,
            abbreviated_commands: true,
        }
    }

    /// 從 JSON 讀取配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// 建構器模式：設置補貨門檻
    pub fn with_restock_threshold(mut self, threshold: Decimal) -> Self {
        self.restock_threshold = threshold;
        self
    }

    /// 建構器模式：設置全面補貨順序
    pub fn with_restock_order(mut self, order: RestockOrder) -> Self {
        self.restock_order = order;
        self
    }

    /// 建構器模式：設置是否回顯命令
    pub fn with_echo_commands(mut self, echo: bool) -> Self {
        self.echo_commands = echo;
        self
    }

    /// 建構器模式：設置是否接受命令縮寫
    pub fn with_abbreviated_commands(mut self, allow: bool) -> Self {
        self.abbreviated_commands = allow;
        self
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 全面補貨順序
///
/// 順序會影響結果：先補貨的組件可能透過 BOM 取走後面組件的庫存。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestockOrder {
    /// 依註冊順序
    Registration,
    /// 最近註冊者優先
    MostRecentFirst,
}
