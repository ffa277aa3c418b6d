use crate::domain::catalog::{CatalogProvider, ChangeCriteria};
use crate::domain::context::ShopContext;
use crate::domain::shops::ShopStore;
use anyhow::Result;
use chrono::Utc;
use contracts::domain::a001_magento_shop::aggregate::MagentoShop;
use contracts::domain::a002_esale_product::aggregate::{EsaleProduct, EsaleProductId};
use std::sync::Arc;

/// Отбор товаров для выгрузки
#[derive(Clone)]
pub struct ChangeSelector {
    catalog: Arc<dyn CatalogProvider>,
    shops: Arc<dyn ShopStore>,
}

impl ChangeSelector {
    pub fn new(catalog: Arc<dyn CatalogProvider>, shops: Arc<dyn ShopStore>) -> Self {
        Self { catalog, shops }
    }

    /// Отбор изменённых товаров магазина.
    ///
    /// Непустой `explicit` — принудительный ресинк ровно этих товаров,
    /// водяной знак не участвует и не двигается. Иначе отбирается
    /// объединение: товар или его шаблон создан/изменён после
    /// `esale_last_stocks`, либо по товару было движение остатков за то же
    /// окно. Новая отметка фиксируется в хранилище до поиска, то есть до
    /// любых сетевых вызовов: частично упавшая выгрузка не приводит к
    /// бесконечному повтору того же окна.
    pub async fn select_changed(
        &self,
        shop: &mut MagentoShop,
        explicit: &[EsaleProductId],
        ctx: &ShopContext,
    ) -> Result<Vec<EsaleProduct>> {
        let filter = self.catalog.magento_product_filter(shop, false).await?;

        let criteria = if !explicit.is_empty() {
            ChangeCriteria {
                explicit_ids: explicit.to_vec(),
                ..Default::default()
            }
        } else {
            // отметка берётся в начале отбора, окно — [since, now)
            let now = Utc::now();
            let since = shop.esale_last_stocks;
            let moved = self.catalog.products_moved_since(shop, since, ctx).await?;

            if shop.advance_last_stocks(now) {
                self.shops.commit_last_stocks(&shop.id, now).await?;
            }

            ChangeCriteria {
                changed_since: Some(since),
                moved_ids: moved,
                ..Default::default()
            }
        };

        self.catalog.search(&filter, &criteria, ctx).await
    }

    /// Отбор комплектов: явный список или весь kit-фильтр, без водяного знака
    pub async fn select_kits(
        &self,
        shop: &MagentoShop,
        explicit: &[EsaleProductId],
        ctx: &ShopContext,
    ) -> Result<Vec<EsaleProduct>> {
        let filter = self.catalog.magento_product_filter(shop, true).await?;
        let criteria = if explicit.is_empty() {
            ChangeCriteria::everything()
        } else {
            ChangeCriteria {
                explicit_ids: explicit.to_vec(),
                ..Default::default()
            }
        };
        self.catalog.search(&filter, &criteria, ctx).await
    }
}
