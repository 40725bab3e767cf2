//! 型錄查詢介面
//!
//! 型錄是外部協作者；核心只依賴注入的查詢能力，
//! 不持有任何模組層級的全域表，方便以假型錄測試。

use std::collections::HashMap;

use crate::item::ItemAttributes;
use crate::{FreightError, Result};

/// 型錄查詢能力
pub trait Catalog {
    /// 以鍵值查詢品項屬性；找不到時回傳 `None`
    fn lookup(&self, key: &str) -> Option<ItemAttributes>;

    /// 嚴格查詢：找不到時回傳 `AttributesNotFound`
    fn require(&self, key: &str) -> Result<ItemAttributes> {
        self.lookup(key)
            .ok_or_else(|| FreightError::AttributesNotFound(key.to_string()))
    }
}

/// 記憶體型錄（測試與示例用）
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: HashMap<String, ItemAttributes>,
}

impl MemoryCatalog {
    /// 創建空的記憶體型錄
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 建構器模式：加入一筆品項屬性
    pub fn with_item(mut self, key: impl Into<String>, attributes: ItemAttributes) -> Self {
        self.entries.insert(key.into(), attributes);
        self
    }

    /// 加入一筆品項屬性
    pub fn insert(&mut self, key: impl Into<String>, attributes: ItemAttributes) {
        self.entries.insert(key.into(), attributes);
    }

    /// 型錄筆數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 檢查是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Catalog for MemoryCatalog {
    fn lookup(&self, key: &str) -> Option<ItemAttributes> {
        self.entries.get(key).cloned()
    }
}
