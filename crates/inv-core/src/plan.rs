//! 製造訂單模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Quantity;

/// 製造訂單（需求展開時產生的製造意圖）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturingOrder {
    /// 製造訂單ID
    pub id: Uuid,

    /// 組件ID
    pub assembly_id: String,

    /// 製造數量（恆為正）
    pub quantity: Quantity,
}

impl ManufacturingOrder {
    /// 創建新的製造訂單
    pub fn new(assembly_id: String, quantity: Quantity) -> Self {
        Self {
            id: Uuid::new_v4(),
            assembly_id,
            quantity,
        }
    }
}
