//! 組件模型

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{BillOfMaterials, Quantity};

/// 組件狀態
///
/// 每次操作後必須滿足 `0 <= on_hand <= capacity`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assembly {
    /// 組件ID
    pub id: String,

    /// 儲位容量
    pub capacity: Quantity,

    /// 現有庫存
    pub on_hand: Quantity,

    /// 物料清單（註冊時固定）
    pub bom: BillOfMaterials,
}

impl Assembly {
    /// 創建新的組件，現有庫存為 0
    pub fn new(id: String, capacity: Quantity, bom: BillOfMaterials) -> Self {
        Self {
            id,
            capacity,
            on_hand: 0,
            bom,
        }
    }

    /// 建構器模式：設置現有庫存（截在容量內）
    pub fn with_on_hand(mut self, on_hand: Quantity) -> Self {
        self.on_hand = on_hand.clamp(0, self.capacity.max(0));
        self
    }

    /// 距離容量的剩餘空間
    pub fn headroom(&self) -> Quantity {
        (self.capacity - self.on_hand).max(0)
    }

    /// 檢查庫存是否低於補貨門檻（`on_hand < capacity × threshold`，精確比較）
    pub fn is_below_threshold(&self, threshold: Decimal) -> bool {
        Decimal::from(self.on_hand) < Decimal::from(self.capacity) * threshold
    }

    /// 獲取補貨數量：低於門檻時補滿到容量，否則為 0
    pub fn restock_amount(&self, threshold: Decimal) -> Quantity {
        if self.is_below_threshold(threshold) {
            self.headroom()
        } else {
            0
        }
    }

    /// 清空現有庫存
    pub fn empty(&mut self) {
        self.on_hand = 0;
    }
}
