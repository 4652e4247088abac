//! 缺料清單

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Quantity;

/// 缺料累計器
///
/// 一次頂層命令建立一份，整個遞迴展開共用同一個引用，
/// 相同ID的數量累加而不是覆蓋。遍歷時依ID排序。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortageList {
    items: BTreeMap<String, Quantity>,
}

impl ShortageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加缺料數量
    pub fn add(&mut self, id: &str, quantity: Quantity) {
        let entry = self.items.entry(id.to_string()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// 查詢某ID的累計數量
    pub fn get(&self, id: &str) -> Option<Quantity> {
        self.items.get(id).copied()
    }

    /// 依ID排序遍歷
    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.items.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
