//! 補貨策略

use inv_core::{Catalog, InventoryError, RestockOrder, Result};

use crate::{DemandResolver, Resolution, ResolutionEvent};

/// 補貨對象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestockTarget<'a> {
    /// 目錄中所有組件
    All,
    /// 單一組件
    Assembly(&'a str),
}

impl DemandResolver {
    /// 補貨：現有庫存低於門檻的組件補滿到容量
    ///
    /// 單一組件不存在時回傳錯誤；全面補貨不會因個別組件失敗。
    pub fn restock(
        &self,
        catalog: &mut Catalog,
        target: RestockTarget<'_>,
        resolution: &mut Resolution,
    ) -> Result<()> {
        match target {
            RestockTarget::Assembly(id) => {
                if catalog.assembly(id).is_none() {
                    return Err(InventoryError::UnknownAssembly(id.to_string()));
                }
                self.restock_one(catalog, id, resolution);
            }
            RestockTarget::All => {
                // 先取ID快照：前面的補貨可能透過 BOM 展開改變後面組件的庫存
                let mut ids = catalog.assembly_ids();
                if self.restock_order == RestockOrder::MostRecentFirst {
                    ids.reverse();
                }
                tracing::debug!(assemblies = ids.len(), order = ?self.restock_order, "全面補貨");

                for id in &ids {
                    self.restock_one(catalog, id, resolution);
                }
            }
        }

        Ok(())
    }

    fn restock_one(&self, catalog: &mut Catalog, id: &str, resolution: &mut Resolution) {
        let amount = match catalog.assembly(id) {
            Some(assembly) => assembly.restock_amount(self.restock_threshold),
            None => return,
        };

        if amount <= 0 {
            return;
        }

        tracing::debug!(assembly_id = id, amount, "低於補貨門檻");
        resolution.events.push(ResolutionEvent::Restock {
            assembly_id: id.to_string(),
            quantity: amount,
        });

        if let Err(err) = self.stock(catalog, id, amount, resolution) {
            resolution.add_warning(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inv_core::{BillOfMaterials, InventoryConfig, Quantity};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn catalog_with(assemblies: &[(&str, Quantity, Quantity)]) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register_part("P1").unwrap();
        for (id, capacity, on_hand) in assemblies {
            let mut bom = BillOfMaterials::new();
            bom.add("P1", 1).unwrap();
            catalog.register_assembly(id, *capacity, bom).unwrap();
            catalog.assembly_mut(id).unwrap().on_hand = *on_hand;
        }
        catalog
    }

    #[test]
    fn test_restock_all_only_below_threshold() {
        let mut catalog = catalog_with(&[("A1", 10, 2), ("A2", 10, 8)]);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver
            .restock(&mut catalog, RestockTarget::All, &mut resolution)
            .unwrap();

        assert_eq!(catalog.assembly("A1").unwrap().on_hand, 10);
        assert_eq!(catalog.assembly("A2").unwrap().on_hand, 8);
        assert_eq!(
            resolution.events[0],
            ResolutionEvent::Restock {
                assembly_id: "A1".to_string(),
                quantity: 8
            }
        );
        assert_eq!(resolution.manufactured("A1"), 8);
        assert_eq!(resolution.manufactured("A2"), 0);
        assert_eq!(resolution.shortages.get("P1"), Some(8));
    }

    #[rstest]
    #[case(10, 4, true)]
    #[case(10, 5, false)]
    #[case(5, 2, true)]
    #[case(5, 3, false)]
    #[case(0, 0, false)]
    fn test_restock_single_threshold(
        #[case] capacity: Quantity,
        #[case] on_hand: Quantity,
        #[case] restocked: bool,
    ) {
        let mut catalog = catalog_with(&[("A1", capacity, on_hand)]);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver
            .restock(&mut catalog, RestockTarget::Assembly("A1"), &mut resolution)
            .unwrap();

        let expected = if restocked { capacity } else { on_hand };
        assert_eq!(catalog.assembly("A1").unwrap().on_hand, expected);
        assert_eq!(resolution.events.is_empty(), !restocked);
    }

    #[test]
    fn test_restock_unknown_assembly() {
        let mut catalog = catalog_with(&[]);
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        assert_eq!(
            resolver.restock(&mut catalog, RestockTarget::Assembly("A9"), &mut resolution),
            Err(InventoryError::UnknownAssembly("A9".to_string()))
        );
        assert!(resolver
            .restock(&mut catalog, RestockTarget::All, &mut resolution)
            .is_ok());
    }

    /// A1 為 A2 的子件：補貨順序影響 A1 最終庫存
    fn nested_catalog() -> Catalog {
        let mut catalog = catalog_with(&[("A1", 10, 0)]);
        let mut bom = BillOfMaterials::new();
        bom.add("A1", 1).unwrap();
        catalog.register_assembly("A2", 4, bom).unwrap();
        catalog
    }

    #[test]
    fn test_restock_all_registration_order() {
        let mut catalog = nested_catalog();
        let config = InventoryConfig::new().with_restock_order(RestockOrder::Registration);
        let resolver = DemandResolver::new(&config);
        let mut resolution = Resolution::new();

        resolver
            .restock(&mut catalog, RestockTarget::All, &mut resolution)
            .unwrap();

        // A1 先補到 10，A2 再取走 4
        assert_eq!(catalog.assembly("A1").unwrap().on_hand, 6);
        assert_eq!(catalog.assembly("A2").unwrap().on_hand, 4);
        assert_eq!(resolution.manufactured("A1"), 10);
    }

    #[test]
    fn test_restock_all_most_recent_first_by_default() {
        let mut catalog = nested_catalog();
        let resolver = DemandResolver::default();
        let mut resolution = Resolution::new();

        resolver
            .restock(&mut catalog, RestockTarget::All, &mut resolution)
            .unwrap();

        // A2 先補貨，製造 4 個 A1；之後 A1 (0/10) 再補滿
        assert_eq!(catalog.assembly("A1").unwrap().on_hand, 10);
        assert_eq!(catalog.assembly("A2").unwrap().on_hand, 4);
        assert_eq!(resolution.manufactured("A1"), 14);
    }

    #[test]
    fn test_custom_threshold() {
        let mut catalog = catalog_with(&[("A1", 10, 6)]);
        let config = InventoryConfig::new().with_restock_threshold(Decimal::new(75, 2));
        let resolver = DemandResolver::new(&config);
        let mut resolution = Resolution::new();

        resolver
            .restock(&mut catalog, RestockTarget::Assembly("A1"), &mut resolution)
            .unwrap();

        assert_eq!(catalog.assembly("A1").unwrap().on_hand, 10);
        assert_eq!(resolution.shortages.get("P1"), Some(4));
    }
}
