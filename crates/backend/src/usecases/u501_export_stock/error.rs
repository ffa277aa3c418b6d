use thiserror::Error;

/// Ошибки выгрузки остатков
///
/// `MissingCode` и `NoContext` локальны (товар пропускается, запуск
/// пропускается), `Configuration` фатальна для запуска. Ошибки отправки
/// групп ошибками не являются — это значения-исходы, см. executor.
#[derive(Debug, Error)]
pub enum ExportStockError {
    /// У товара нет кода (SKU)
    #[error("error export product {product_id}, add a code")]
    MissingCode { product_id: String },

    /// В настройках магазина не указан пользователь
    #[error("{shop}: add a user in shop configuration")]
    NoContext { shop: String },

    /// Ошибка конфигурации
    #[error("configuration error: {0}")]
    Configuration(String),
}
