use super::error::ExportStockError;
use contracts::domain::a002_esale_product::aggregate::EsaleProduct;
use contracts::domain::common::AggregateId;
use serde::Serialize;

/// Запись обновления остатка для Magento Inventory API
///
/// Неизменяема после построения. Флаги уходят на провод строками "0"/"1",
/// как их ждёт Magento.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockUpdateRecord {
    /// SKU с завершающим пробелом
    pub sku: String,

    pub qty: i64,

    #[serde(serialize_with = "flag")]
    pub is_in_stock: bool,

    #[serde(serialize_with = "flag")]
    pub manage_stock: bool,

    /// Ключ отсутствует, если атрибут не определён у товара
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sale_qty: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sale_qty: Option<i64>,

    /// Один флаг на обе ветки (min и max); отдельного
    /// use_config_max_sale_qty в модуле Magento нет
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "opt_flag"
    )]
    pub use_config_min_sale_qty: Option<bool>,
}

fn flag<S: serde::Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "1" } else { "0" })
}

fn opt_flag<S: serde::Serializer>(
    value: &Option<bool>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => flag(v, serializer),
        None => serializer.serialize_none(),
    }
}

/// Построить запись обновления остатка для товара
///
/// Чистая функция: никакого I/O, одинаковый вход всегда даёт одинаковую
/// запись. Товар без кода — `MissingCode`, вызывающая сторона пропускает
/// его и продолжает.
pub fn build_record(
    product: &EsaleProduct,
    qty: i64,
) -> Result<StockUpdateRecord, ExportStockError> {
    let code = product.code().ok_or_else(|| ExportStockError::MissingCode {
        product_id: product.id.as_string(),
    })?;

    // пробел в конце обязателен: числовой SKU иначе приводится к int
    let sku = format!("{} ", code);

    let mut min_sale_qty = None;
    let mut max_sale_qty = None;
    let mut use_config_min_sale_qty = None;

    if let Some(min) = product.sale_min_qty {
        if min > 0 {
            min_sale_qty = Some(min);
            use_config_min_sale_qty = Some(false);
        } else {
            min_sale_qty = Some(1);
            use_config_min_sale_qty = Some(true);
        }
    }
    // ветка max переписывает тот же флаг: отдельного флага для max нет
    if let Some(max) = product.max_sale_qty {
        if max > 0 {
            max_sale_qty = Some(max);
            use_config_min_sale_qty = Some(false);
        } else {
            max_sale_qty = Some(1);
            use_config_min_sale_qty = Some(true);
        }
    }

    Ok(StockUpdateRecord {
        sku,
        qty,
        is_in_stock: qty > 0,
        manage_stock: product.esale_manage_stock,
        min_sale_qty,
        max_sale_qty,
        use_config_min_sale_qty,
    })
}
