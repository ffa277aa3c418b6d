use async_trait::async_trait;
use contracts::domain::a001_magento_shop::aggregate::{MagentoShop, MagentoShopId};
use uuid::Uuid;

/// Контекст выполнения: от имени какого пользователя и для какого магазина
/// идёт выгрузка. Передаётся явно по всей цепочке вызовов.
#[derive(Debug, Clone)]
pub struct ShopContext {
    pub shop_id: MagentoShopId,
    pub user_id: Uuid,
    pub locale: Option<String>,
}

/// Разрешение контекста магазина
#[async_trait]
pub trait ContextResolver: Send + Sync {
    /// `None` — в настройках магазина не указан пользователь, выгрузку
    /// запустить не от кого
    async fn resolve(&self, shop: &MagentoShop) -> anyhow::Result<Option<ShopContext>>;
}
