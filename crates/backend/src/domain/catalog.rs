use crate::domain::context::ShopContext;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::domain::a001_magento_shop::aggregate::{MagentoShop, MagentoShopId};
use contracts::domain::a002_esale_product::aggregate::{EsaleProduct, EsaleProductId};

/// Базовый фильтр каталога: какие товары вообще публикуются в магазин
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    pub shop_id: MagentoShopId,
    /// Только комплекты (bundle)
    pub kits_only: bool,
}

/// Критерии отбора товаров поверх базового фильтра
#[derive(Debug, Clone, Default)]
pub struct ChangeCriteria {
    /// Товар или его шаблон создан/изменён после этой отметки
    pub changed_since: Option<DateTime<Utc>>,

    /// Явно запрошенные товары. Непустой список — отбор ровно этих товаров,
    /// остальные критерии не применяются.
    pub explicit_ids: Vec<EsaleProductId>,

    /// Товары с движением остатков за окно отбора. Движение остатка не
    /// обновляет отметку изменения самого товара, поэтому идёт отдельным
    /// критерием в объединение.
    pub moved_ids: Vec<EsaleProductId>,
}

impl ChangeCriteria {
    /// Критерии без ограничений: весь базовый фильтр
    pub fn everything() -> Self {
        Self::default()
    }
}

/// Каталог товаров (внешняя подсистема)
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Базовый фильтр товаров магазина
    async fn magento_product_filter(
        &self,
        shop: &MagentoShop,
        kits_only: bool,
    ) -> anyhow::Result<CatalogFilter>;

    /// Товары, удовлетворяющие фильтру и критериям. Пустые критерии —
    /// все товары фильтра. При непустом `explicit_ids` возвращаются ровно
    /// перечисленные товары.
    async fn search(
        &self,
        filter: &CatalogFilter,
        criteria: &ChangeCriteria,
        ctx: &ShopContext,
    ) -> anyhow::Result<Vec<EsaleProduct>>;

    /// Товары, по которым было движение остатков начиная с `since`
    async fn products_moved_since(
        &self,
        shop: &MagentoShop,
        since: DateTime<Utc>,
        ctx: &ShopContext,
    ) -> anyhow::Result<Vec<EsaleProductId>>;
}
