//! # Inventory Calculation Engine
//!
//! 需求展開引擎：取貨、製造、入庫與補貨

pub mod explosion;
pub mod resolver;
pub mod restock;

// Re-export 主要類型
pub use resolver::DemandResolver;
pub use restock::RestockTarget;

use inv_core::{InventoryError, ManufacturingOrder, Quantity, ShortageList};

/// 需求展開結果
///
/// 一次頂層命令建立一份，遞迴過程中共用。
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// 缺料累計
    pub shortages: ShortageList,

    /// 依發生順序的製造與補貨事件
    pub events: Vec<ResolutionEvent>,

    /// 展開途中遇到、但不中斷頂層命令的錯誤
    pub warnings: Vec<InventoryError>,
}

impl Resolution {
    /// 創建空的展開結果
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: InventoryError) {
        tracing::debug!(%warning, "展開警告");
        self.warnings.push(warning);
    }

    /// 所有製造訂單（依發生順序）
    pub fn manufacturing_orders(&self) -> impl Iterator<Item = &ManufacturingOrder> {
        self.events.iter().filter_map(|event| match event {
            ResolutionEvent::Manufacture(order) => Some(order),
            ResolutionEvent::Restock { .. } => None,
        })
    }

    /// 某組件的累計製造數量
    pub fn manufactured(&self, assembly_id: &str) -> Quantity {
        self.manufacturing_orders()
            .filter(|order| order.assembly_id == assembly_id)
            .map(|order| order.quantity)
            .sum()
    }
}

/// 展開事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionEvent {
    /// 製造組件
    Manufacture(ManufacturingOrder),

    /// 補貨決策（隨後進行入庫展開）
    Restock {
        assembly_id: String,
        quantity: Quantity,
    },
}
