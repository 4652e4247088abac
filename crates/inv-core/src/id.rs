//! 識別碼規則
//!
//! 零件以 `P` 開頭、組件以 `A` 開頭，長度（含前綴）不得超過 [`ID_MAX_LEN`]。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{InventoryError, Result};

/// 識別碼最大長度（位元組，含前綴字元）
pub const ID_MAX_LEN: usize = 11;

/// 物料種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// 零件（不可再分）
    Part,
    /// 組件（由零件與子組件組成）
    Assembly,
}

impl ItemKind {
    /// 識別碼前綴
    pub fn prefix(self) -> char {
        match self {
            ItemKind::Part => 'P',
            ItemKind::Assembly => 'A',
        }
    }

    /// 依前綴判斷識別碼的種類
    pub fn of(id: &str) -> Option<Self> {
        match id.chars().next() {
            Some('P') => Some(ItemKind::Part),
            Some('A') => Some(ItemKind::Assembly),
            _ => None,
        }
    }

    /// 驗證識別碼：先檢查前綴，再檢查長度
    pub fn validate(self, id: &str) -> Result<()> {
        if !id.starts_with(self.prefix()) {
            return Err(InventoryError::WrongPrefix {
                id: id.to_string(),
                kind: self,
            });
        }
        if id.len() > ID_MAX_LEN {
            return Err(InventoryError::IdTooLong {
                id: id.to_string(),
                kind: self,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Part => f.write_str("part"),
            ItemKind::Assembly => f.write_str("assembly"),
        }
    }
}
