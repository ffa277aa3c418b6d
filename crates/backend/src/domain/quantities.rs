use crate::domain::context::ShopContext;
use async_trait::async_trait;
use contracts::domain::a002_esale_product::aggregate::EsaleProductId;
use std::collections::HashMap;

/// Расчёт доступных остатков (складская подсистема)
#[async_trait]
pub trait QuantityProvider: Send + Sync {
    /// Количество для каждого запрошенного товара. Отсутствие записи для
    /// запрошенного ID — нарушение контракта, вызывающая сторона обязана
    /// прервать выгрузку.
    async fn quantities_for(
        &self,
        products: &[EsaleProductId],
        ctx: &ShopContext,
    ) -> anyhow::Result<HashMap<EsaleProductId, i64>>;
}
