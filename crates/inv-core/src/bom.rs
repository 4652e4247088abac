//! 物料清單模型

use indexmap::IndexMap;
use serde::Serialize;

use crate::{InventoryError, Quantity, Result};

/// 物料清單（BOM）
///
/// 子件ID → 單位用量，依加入順序保存。同一子件重複加入時用量累加。
/// 組件註冊後即不再變動。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BillOfMaterials {
    items: IndexMap<String, Quantity>,
}

impl BillOfMaterials {
    /// 創建空的物料清單
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入子件用量，用量必須為正
    pub fn add(&mut self, component_id: &str, quantity: Quantity) -> Result<()> {
        if quantity <= 0 {
            return Err(InventoryError::InvalidQuantity {
                id: component_id.to_string(),
                quantity: quantity.to_string(),
            });
        }

        let entry = self.items.entry(component_id.to_string()).or_insert(0);
        *entry = entry.saturating_add(quantity);
        Ok(())
    }

    /// 查詢子件的單位用量
    pub fn quantity_of(&self, component_id: &str) -> Option<Quantity> {
        self.items.get(component_id).copied()
    }

    /// 依加入順序遍歷 (子件ID, 單位用量)
    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.items.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// 依ID排序的子件列表（報表用）
    pub fn sorted(&self) -> Vec<(&str, Quantity)> {
        let mut lines: Vec<_> = self.iter().collect();
        lines.sort_by(|a, b| a.0.cmp(b.0));
        lines
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
