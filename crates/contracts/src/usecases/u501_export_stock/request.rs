use serde::{Deserialize, Serialize};

/// Запрос на экспорт остатков в Magento
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// ID магазина Magento (MagentoShop)
    pub shop_id: String,

    /// Явный список товаров — принудительная повторная выгрузка.
    /// Пустой список: отбор по водяному знаку (или весь фильтр для комплектов).
    #[serde(default)]
    pub product_ids: Vec<String>,

    /// Режим экспорта
    #[serde(default)]
    pub mode: ExportMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// Инкрементальная выгрузка изменённых товаров
    #[default]
    Delta,

    /// Выгрузка комплектов (целиком, без водяного знака)
    Kits,
}
