//! BOM 展開

use inv_core::{BillOfMaterials, Catalog, InventoryError, ItemKind, ManufacturingOrder, Quantity};

use crate::{DemandResolver, Resolution, ResolutionEvent};

impl DemandResolver {
    /// 製造 `count` 個組件：記錄製造訂單，並依 BOM 快照展開子件需求
    ///
    /// 零件需求直接累加到缺料清單；子組件需求先以其現有庫存取貨，
    /// 不足時再遞迴製造。子件失敗只記為警告，不影響其他子件。
    pub(crate) fn manufacture(
        &self,
        catalog: &mut Catalog,
        assembly_id: &str,
        bom: &BillOfMaterials,
        count: Quantity,
        resolution: &mut Resolution,
    ) {
        let order = ManufacturingOrder::new(assembly_id.to_string(), count);
        tracing::debug!(order_id = %order.id, assembly_id, quantity = count, "製造組件");
        resolution.events.push(ResolutionEvent::Manufacture(order));

        for (component_id, per_unit) in bom.iter() {
            // 子件需求數量 = 製造數量 × 單位用量
            let required = per_unit.saturating_mul(count);

            tracing::debug!(
                "BOM 展開: {} → {} (數量: {})",
                assembly_id,
                component_id,
                required
            );

            match ItemKind::of(component_id) {
                Some(ItemKind::Part) if catalog.part(component_id).is_some() => {
                    resolution.shortages.add(component_id, required)
                }
                Some(ItemKind::Part) => {
                    resolution.add_warning(InventoryError::UnknownPart(component_id.to_string()))
                }
                Some(ItemKind::Assembly) => {
                    if let Err(err) = self.get(catalog, component_id, required, resolution) {
                        resolution.add_warning(err);
                    }
                }
                None => {
                    resolution.add_warning(InventoryError::UnknownItem(component_id.to_string()))
                }
            }
        }
    }
}
