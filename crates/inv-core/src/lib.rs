//! # Inventory Core
//!
//! 核心資料模型與類型定義：零件、組件、物料清單、目錄與缺料清單

pub mod assembly;
pub mod bom;
pub mod catalog;
pub mod config;
pub mod id;
pub mod part;
pub mod plan;
pub mod shortage;

// Re-export 主要類型
pub use assembly::Assembly;
pub use bom::BillOfMaterials;
pub use catalog::Catalog;
pub use config::{InventoryConfig, RestockOrder};
pub use id::{ItemKind, ID_MAX_LEN};
pub use part::Part;
pub use plan::ManufacturingOrder;
pub use shortage::ShortageList;

/// 數量（允許負值，以便在驗證前保留解析結果）
pub type Quantity = i64;

/// 庫存錯誤類型
///
/// 訊息格式與命令列輸出一致，呼叫端只需加上 `!!! ` 前綴。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("{id}: {kind} ID must start with '{}'", .kind.prefix())]
    WrongPrefix { id: String, kind: ItemKind },

    #[error("{id}: {kind} ID too long")]
    IdTooLong { id: String, kind: ItemKind },

    #[error("{id}: duplicate {kind} ID")]
    DuplicateId { id: String, kind: ItemKind },

    #[error("{capacity}: illegal capacity for ID {id}")]
    InvalidCapacity { id: String, capacity: Quantity },

    /// `quantity` 保留使用者輸入的原文
    #[error("{quantity}: illegal quantity for ID {id}")]
    InvalidQuantity { id: String, quantity: String },

    #[error("{quantity}: illegal order quantity for ID {id}")]
    InvalidOrderQuantity { id: String, quantity: Quantity },

    #[error("{0}: assembly ID is not in the inventory")]
    UnknownAssembly(String),

    #[error("{0}: part ID is not in the inventory")]
    UnknownPart(String),

    #[error("{0}: part/assembly ID is not in the inventory")]
    UnknownItem(String),

    #[error("{0}: ID not an assembly")]
    NotAnAssembly(String),
}

impl InventoryError {
    /// 是否為識別碼格式錯誤（前綴或長度）
    pub fn is_invalid_id(&self) -> bool {
        matches!(self, Self::WrongPrefix { .. } | Self::IdTooLong { .. })
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
