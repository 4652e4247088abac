//! 需求展開器

use inv_core::{Catalog, InventoryConfig, InventoryError, Quantity, RestockOrder, Result};
use rust_decimal::Decimal;

use crate::Resolution;

/// 需求展開器
///
/// 將對某組件的需求數量換算為庫存調整、製造訂單與缺料清單。
/// 所有操作先在組件上完成庫存調整，再以 BOM 快照向下展開，
/// 因此深層的失敗不會破壞上層已套用的庫存變更。
#[derive(Debug, Clone)]
pub struct DemandResolver {
    /// 補貨門檻（容量比例）
    pub(crate) restock_threshold: Decimal,

    /// 全面補貨順序
    pub(crate) restock_order: RestockOrder,
}

impl DemandResolver {
    /// 創建新的需求展開器
    pub fn new(config: &InventoryConfig) -> Self {
        Self {
            restock_threshold: config.restock_threshold,
            restock_order: config.restock_order,
        }
    }

    /// 取貨：現有庫存足夠則扣除，否則清空庫存並製造不足的部分
    pub fn get(
        &self,
        catalog: &mut Catalog,
        id: &str,
        n: Quantity,
        resolution: &mut Resolution,
    ) -> Result<()> {
        check_order_quantity(id, n)?;

        let assembly = catalog
            .assembly_mut(id)
            .ok_or_else(|| InventoryError::UnknownAssembly(id.to_string()))?;

        if assembly.on_hand >= n {
            assembly.on_hand -= n;
            tracing::debug!(assembly_id = id, quantity = n, on_hand = assembly.on_hand, "庫存足夠，直接取貨");
            return Ok(());
        }

        let deficit = n - assembly.on_hand;
        assembly.on_hand = 0;
        tracing::debug!(assembly_id = id, quantity = n, deficit, "庫存不足，轉製造");

        self.make(catalog, id, deficit, resolution)
    }

    /// 製造：扣除現有庫存後，製造剩餘數量並展開 BOM
    pub fn make(
        &self,
        catalog: &mut Catalog,
        id: &str,
        n: Quantity,
        resolution: &mut Resolution,
    ) -> Result<()> {
        check_order_quantity(id, n)?;

        let assembly = catalog
            .assembly_mut(id)
            .ok_or_else(|| InventoryError::UnknownAssembly(id.to_string()))?;

        let to_make = if n >= assembly.on_hand {
            let to_make = n - assembly.on_hand;
            assembly.on_hand = 0;
            to_make
        } else {
            assembly.on_hand -= n;
            0
        };

        if to_make > 0 {
            let bom = assembly.bom.clone();
            self.manufacture(catalog, id, &bom, to_make, resolution);
        }

        Ok(())
    }

    /// 入庫：增加現有庫存（截在容量內），只製造實際增加的部分
    pub fn stock(
        &self,
        catalog: &mut Catalog,
        id: &str,
        n: Quantity,
        resolution: &mut Resolution,
    ) -> Result<()> {
        check_quantity(id, n)?;

        let assembly = catalog
            .assembly_mut(id)
            .ok_or_else(|| InventoryError::UnknownAssembly(id.to_string()))?;

        let amount_added = n.min(assembly.headroom());
        assembly.on_hand += amount_added;
        tracing::debug!(
            assembly_id = id,
            requested = n,
            amount_added,
            on_hand = assembly.on_hand,
            "入庫"
        );

        if amount_added > 0 {
            let bom = assembly.bom.clone();
            self.manufacture(catalog, id, &bom, amount_added, resolution);
        }

        Ok(())
    }

    /// 客戶訂單：依序對每一行執行製造，共用同一份展開結果
    ///
    /// 遇到第一個無效行即停止並回傳錯誤，之前的行保持已套用。
    pub fn fulfill_order(
        &self,
        catalog: &mut Catalog,
        lines: &[(String, Quantity)],
        resolution: &mut Resolution,
    ) -> Result<()> {
        for (id, quantity) in lines {
            self.make(catalog, id, *quantity, resolution)?;
        }
        Ok(())
    }
}

impl Default for DemandResolver {
    fn default() -> Self {
        Self::new(&InventoryConfig::default())
    }
}

fn check_quantity(id: &str, n: Quantity) -> Result<()> {
    if n <= 0 {
        return Err(InventoryError::InvalidQuantity {
            id: id.to_string(),
            quantity: n.to_string(),
        });
    }
    Ok(())
}

fn check_order_quantity(id: &str, n: Quantity) -> Result<()> {
    if n <= 0 {
        return Err(InventoryError::InvalidOrderQuantity {
            id: id.to_string(),
            quantity: n,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inv_core::BillOfMaterials;

    /// P1, P2；A1 {cap 10, bom P1×2}；A2 {cap 4, bom A1×2, P2×1}
    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register_part("P1").unwrap();
        catalog.register_part("P2").unwrap();

        let mut a1 = BillOfMaterials::new();
        a1.add("P1", 2).unwrap();
        catalog.register_assembly("A1", 10, a1).unwrap();

        let mut a2 = BillOfMaterials::new();
        a2.add("A1", 2).unwrap();
        a2.add("P2", 1).unwrap();
        catalog.register_assembly("A2", 4, a2).unwrap();

        catalog
    }

    fn set_on_hand(catalog: &mut Catalog, id: &str, on_hand: Quantity) {
        catalog.assembly_mut(id).unwrap().on_hand = on_hand;
    }

    fn on_hand(catalog: &Catalog, id: &str) -> Quantity {
        catalog.assembly(id).unwrap().on_hand
    }

    #[test]
    fn test_get_manufactures_when_empty() {
        let mut catalog = sample_catalog();
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver.get(&mut catalog, "A1", 5, &mut resolution).unwrap();

        assert_eq!(on_hand(&catalog, "A1"), 0);
        assert_eq!(resolution.shortages.get("P1"), Some(10));
        assert_eq!(resolution.shortages.len(), 1);

        let orders: Vec<_> = resolution.manufacturing_orders().collect();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].assembly_id, "A1");
        assert_eq!(orders[0].quantity, 5);
    }

    #[test]
    fn test_get_from_stock() {
        let mut catalog = sample_catalog();
        set_on_hand(&mut catalog, "A1", 10);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver.get(&mut catalog, "A1", 4, &mut resolution).unwrap();

        assert_eq!(on_hand(&catalog, "A1"), 6);
        assert!(resolution.shortages.is_empty());
        assert!(resolution.events.is_empty());
    }

    #[test]
    fn test_get_partial_stock() {
        let mut catalog = sample_catalog();
        set_on_hand(&mut catalog, "A1", 3);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver.get(&mut catalog, "A1", 5, &mut resolution).unwrap();

        assert_eq!(on_hand(&catalog, "A1"), 0);
        assert_eq!(resolution.manufactured("A1"), 2);
        assert_eq!(resolution.shortages.get("P1"), Some(4));
    }

    #[test]
    fn test_make_uses_on_hand_first() {
        let mut catalog = sample_catalog();
        set_on_hand(&mut catalog, "A1", 8);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver.make(&mut catalog, "A1", 3, &mut resolution).unwrap();
        assert_eq!(on_hand(&catalog, "A1"), 5);
        assert!(resolution.events.is_empty());

        // n == on_hand：to_make 為 0，不產生製造訂單
        resolver.make(&mut catalog, "A1", 5, &mut resolution).unwrap();
        assert_eq!(on_hand(&catalog, "A1"), 0);
        assert!(resolution.events.is_empty());
        assert!(resolution.shortages.is_empty());
    }

    #[test]
    fn test_make_expands_sub_assemblies_through_get() {
        let mut catalog = sample_catalog();
        set_on_hand(&mut catalog, "A1", 3);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver.make(&mut catalog, "A2", 5, &mut resolution).unwrap();

        // A2 製造 5 → 需要 A1 10（現有 3，製造 7）、P2 5；A1 製造 7 → P1 14
        assert_eq!(on_hand(&catalog, "A2"), 0);
        assert_eq!(on_hand(&catalog, "A1"), 0);
        assert_eq!(resolution.manufactured("A2"), 5);
        assert_eq!(resolution.manufactured("A1"), 7);
        assert_eq!(resolution.shortages.get("P1"), Some(14));
        assert_eq!(resolution.shortages.get("P2"), Some(5));

        // 父件的製造訂單先於子件
        let ids: Vec<_> = resolution
            .manufacturing_orders()
            .map(|o| o.assembly_id.as_str())
            .collect();
        assert_eq!(ids, vec!["A2", "A1"]);
    }

    #[test]
    fn test_sub_assembly_covered_by_stock() {
        let mut catalog = sample_catalog();
        set_on_hand(&mut catalog, "A1", 10);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver.make(&mut catalog, "A2", 2, &mut resolution).unwrap();

        assert_eq!(on_hand(&catalog, "A1"), 6);
        assert_eq!(resolution.manufactured("A1"), 0);
        assert_eq!(resolution.shortages.get("P1"), None);
        assert_eq!(resolution.shortages.get("P2"), Some(2));
    }

    #[test]
    fn test_stock_capped_at_capacity() {
        let mut catalog = sample_catalog();
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver.stock(&mut catalog, "A1", 100, &mut resolution).unwrap();

        assert_eq!(on_hand(&catalog, "A1"), 10);
        assert_eq!(resolution.manufactured("A1"), 10);
        assert_eq!(resolution.shortages.get("P1"), Some(20));
    }

    #[test]
    fn test_stock_when_full_adds_nothing() {
        let mut catalog = sample_catalog();
        set_on_hand(&mut catalog, "A1", 10);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver.stock(&mut catalog, "A1", 3, &mut resolution).unwrap();

        assert_eq!(on_hand(&catalog, "A1"), 10);
        assert!(resolution.events.is_empty());
        assert!(resolution.shortages.is_empty());
    }

    #[test]
    fn test_invalid_requests_leave_state_unchanged() {
        let mut catalog = sample_catalog();
        set_on_hand(&mut catalog, "A1", 4);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        for n in [0, -3] {
            assert!(matches!(
                resolver.get(&mut catalog, "A1", n, &mut resolution),
                Err(InventoryError::InvalidOrderQuantity { .. })
            ));
            assert!(matches!(
                resolver.make(&mut catalog, "A1", n, &mut resolution),
                Err(InventoryError::InvalidOrderQuantity { .. })
            ));
            assert!(matches!(
                resolver.stock(&mut catalog, "A1", n, &mut resolution),
                Err(InventoryError::InvalidQuantity { .. })
            ));
        }

        assert_eq!(
            resolver.make(&mut catalog, "A9", 1, &mut resolution),
            Err(InventoryError::UnknownAssembly("A9".to_string()))
        );
        assert!(resolver.get(&mut catalog, "A9", 1, &mut resolution).is_err());
        assert!(resolver.stock(&mut catalog, "A9", 1, &mut resolution).is_err());

        assert_eq!(on_hand(&catalog, "A1"), 4);
        assert!(resolution.events.is_empty());
        assert!(resolution.shortages.is_empty());
    }

    #[test]
    fn test_fulfill_order_is_additive() {
        let resolver = DemandResolver::default();

        let mut split = sample_catalog();
        let mut split_resolution = Resolution::new();
        resolver
            .fulfill_order(
                &mut split,
                &[("A2".to_string(), 3), ("A2".to_string(), 2)],
                &mut split_resolution,
            )
            .unwrap();

        let mut whole = sample_catalog();
        let mut whole_resolution = Resolution::new();
        resolver
            .fulfill_order(&mut whole, &[("A2".to_string(), 5)], &mut whole_resolution)
            .unwrap();

        assert_eq!(split_resolution.shortages, whole_resolution.shortages);
    }

    #[test]
    fn test_fulfill_order_stops_at_first_invalid_line() {
        let mut catalog = sample_catalog();
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        let err = resolver
            .fulfill_order(
                &mut catalog,
                &[
                    ("A1".to_string(), 1),
                    ("A7".to_string(), 1),
                    ("A1".to_string(), 1),
                ],
                &mut resolution,
            )
            .unwrap_err();

        assert_eq!(err, InventoryError::UnknownAssembly("A7".to_string()));
        assert_eq!(resolution.manufactured("A1"), 1);
    }
}
