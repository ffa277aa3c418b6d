use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::domain::a001_magento_shop::aggregate::{MagentoShop, MagentoShopId};

/// Хранилище магазинов
#[async_trait]
pub trait ShopStore: Send + Sync {
    async fn get_by_id(&self, id: &MagentoShopId) -> anyhow::Result<Option<MagentoShop>>;

    /// Долговременно зафиксировать новую отметку `esale_last_stocks`.
    /// Вызывается до первого сетевого вызова: упавшая на середине выгрузка
    /// не должна повторно отбирать уже отобранное окно.
    async fn commit_last_stocks(
        &self,
        id: &MagentoShopId,
        ts: DateTime<Utc>,
    ) -> anyhow::Result<()>;
}
