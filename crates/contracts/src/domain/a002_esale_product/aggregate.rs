use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Уникальный идентификатор товара e-sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EsaleProductId(pub Uuid);

impl EsaleProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for EsaleProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EsaleProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Идентификатор шаблона товара (изменение шаблона затрагивает все его варианты)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductTemplateId(pub Uuid);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар, публикуемый в Magento (e-sale)
///
/// Количество на складе здесь не хранится — оно считается складской
/// подсистемой на момент выгрузки.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsaleProduct {
    pub id: EsaleProductId,

    /// Шаблон, к которому относится товар
    pub template_id: ProductTemplateId,

    /// Код (SKU) в Magento. Товар без кода не выгружается.
    pub code: Option<String>,

    /// Управляет ли Magento остатком этого товара
    pub esale_manage_stock: bool,

    /// Минимальное количество в заказе. `None` — атрибут у товара не
    /// определён, `Some(0)` — определён, но не заполнен.
    pub sale_min_qty: Option<i64>,

    /// Максимальное количество в заказе, семантика как у `sale_min_qty`
    pub max_sale_qty: Option<i64>,

    /// Комплект (bundle): выгружается целиком по запросу, вне водяного знака
    pub kit: bool,
}

impl EsaleProduct {
    /// Код товара, если он задан и не пустой
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}
