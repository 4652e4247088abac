//! # BOM Inventory
//!
//! 以物料清單驅動的庫存系統：零件與組件目錄、需求遞迴展開、補貨與缺料彙總。
//!
//! - [`inv_core`]：資料模型、ID 規則、配置與錯誤
//! - [`inv_calc`]：取貨、製造、入庫、訂單與補貨的展開引擎
//!
//! 文字命令介面位於 `inv-cli` crate（執行檔 `inventory`）。

pub use inv_calc;
pub use inv_core;

pub use inv_calc::{DemandResolver, Resolution, ResolutionEvent, RestockTarget};
pub use inv_core::{
    Assembly, BillOfMaterials, Catalog, InventoryConfig, InventoryError, ItemKind,
    ManufacturingOrder, Quantity, RestockOrder, ShortageList,
};
