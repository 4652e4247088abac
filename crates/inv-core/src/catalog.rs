//! 目錄：已註冊的零件與組件

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    Assembly, BillOfMaterials, InventoryError, ItemKind, Part, Quantity, Result,
};

/// 庫存目錄
///
/// 零件與組件各自以ID為鍵，依註冊順序保存。
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    parts: IndexMap<String, Part>,
    assemblies: IndexMap<String, Assembly>,
}

impl Catalog {
    /// 創建空的目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 註冊零件
    pub fn register_part(&mut self, id: &str) -> Result<()> {
        ItemKind::Part.validate(id)?;

        if self.parts.contains_key(id) {
            return Err(InventoryError::DuplicateId {
                id: id.to_string(),
                kind: ItemKind::Part,
            });
        }

        self.parts.insert(id.to_string(), Part::new(id.to_string()));
        tracing::info!(part_id = id, "註冊零件");
        Ok(())
    }

    /// 註冊組件
    ///
    /// 檢查順序：組件ID、BOM 子件、容量、重複ID。
    /// 子件必須已在目錄中，因此 BOM 不可能形成循環。
    pub fn register_assembly(
        &mut self,
        id: &str,
        capacity: Quantity,
        bom: BillOfMaterials,
    ) -> Result<()> {
        ItemKind::Assembly.validate(id)?;

        for (component_id, _) in bom.iter() {
            self.check_component(component_id)?;
        }

        if capacity < 0 {
            return Err(InventoryError::InvalidCapacity {
                id: id.to_string(),
                capacity,
            });
        }

        if self.assemblies.contains_key(id) {
            return Err(InventoryError::DuplicateId {
                id: id.to_string(),
                kind: ItemKind::Assembly,
            });
        }

        tracing::info!(
            assembly_id = id,
            capacity,
            components = bom.len(),
            "註冊組件"
        );
        self.assemblies
            .insert(id.to_string(), Assembly::new(id.to_string(), capacity, bom));
        Ok(())
    }

    /// 檢查可作為 BOM 子件的ID：格式正確且已註冊，回傳其種類
    pub fn check_component(&self, id: &str) -> Result<ItemKind> {
        let kind = ItemKind::of(id).ok_or_else(|| InventoryError::UnknownItem(id.to_string()))?;
        kind.validate(id)?;

        let known = match kind {
            ItemKind::Part => self.parts.contains_key(id),
            ItemKind::Assembly => self.assemblies.contains_key(id),
        };

        if known {
            Ok(kind)
        } else {
            Err(InventoryError::UnknownItem(id.to_string()))
        }
    }

    /// 查詢零件
    pub fn part(&self, id: &str) -> Option<&Part> {
        self.parts.get(id)
    }

    /// 查詢組件
    pub fn assembly(&self, id: &str) -> Option<&Assembly> {
        self.assemblies.get(id)
    }

    /// 查詢組件（可變）
    pub fn assembly_mut(&mut self, id: &str) -> Option<&mut Assembly> {
        self.assemblies.get_mut(id)
    }

    /// 清空組件的現有庫存
    pub fn empty_assembly(&mut self, id: &str) -> Result<()> {
        if ItemKind::of(id) != Some(ItemKind::Assembly) {
            return Err(InventoryError::NotAnAssembly(id.to_string()));
        }

        let assembly = self
            .assemblies
            .get_mut(id)
            .ok_or_else(|| InventoryError::UnknownAssembly(id.to_string()))?;
        assembly.empty();
        Ok(())
    }

    /// 清除整個目錄
    pub fn reset(&mut self) {
        tracing::info!(
            parts = self.parts.len(),
            assemblies = self.assemblies.len(),
            "清除目錄"
        );
        self.parts.clear();
        self.assemblies.clear();
    }

    /// 依註冊順序遍歷零件
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    /// 依註冊順序遍歷組件
    pub fn assemblies(&self) -> impl Iterator<Item = &Assembly> {
        self.assemblies.values()
    }

    /// 依註冊順序的組件ID快照
    pub fn assembly_ids(&self) -> Vec<String> {
        self.assemblies.keys().cloned().collect()
    }

    /// 依ID排序的零件（報表用）
    pub fn sorted_parts(&self) -> Vec<&Part> {
        let mut parts: Vec<_> = self.parts.values().collect();
        parts.sort_by(|a, b| a.id.cmp(&b.id));
        parts
    }

    /// 依ID排序的組件（報表用）
    pub fn sorted_assemblies(&self) -> Vec<&Assembly> {
        let mut assemblies: Vec<_> = self.assemblies.values().collect();
        assemblies.sort_by(|a, b| a.id.cmp(&b.id));
        assemblies
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn assembly_count(&self) -> usize {
        self.assemblies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty() && self.assemblies.is_empty()
    }
}
