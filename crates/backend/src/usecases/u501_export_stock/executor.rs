use super::batcher::batch;
use super::error::ExportStockError;
use super::magento_api_client::MagentoInventoryApi;
use super::payload::build_record;
use super::progress_tracker::ProgressTracker;
use super::selector::ChangeSelector;
use crate::domain::catalog::CatalogProvider;
use crate::domain::context::{ContextResolver, ShopContext};
use crate::domain::quantities::QuantityProvider;
use crate::domain::shops::ShopStore;
use crate::shared::config::MagentoConfig;
use anyhow::Result;
use contracts::domain::a001_magento_shop::aggregate::{MagentoShop, MagentoShopId};
use contracts::domain::a002_esale_product::aggregate::{EsaleProduct, EsaleProductId};
use contracts::domain::common::AggregateId;
use contracts::usecases::u501_export_stock::{
    progress::ExportStatus,
    request::{ExportMode, ExportRequest},
    response::{ExportResponse, ExportStartStatus},
};
use std::sync::Arc;
use uuid::Uuid;

/// Итог одного запуска экспорта
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Товаров отобрано
    pub products_selected: usize,
    /// Товаров пропущено (нет кода)
    pub products_skipped: usize,
    /// Групп отправлено
    pub batches_attempted: usize,
    /// Групп завершилось ошибкой
    pub batches_failed: usize,
}

/// Executor для UseCase экспорта остатков в Magento
///
/// Держит порты внешних подсистем и конфигурацию; размер группы приходит
/// сюда при конструировании, глобального состояния нет.
#[derive(Clone)]
pub struct ExportExecutor {
    contexts: Arc<dyn ContextResolver>,
    quantities: Arc<dyn QuantityProvider>,
    shops: Arc<dyn ShopStore>,
    api: Arc<dyn MagentoInventoryApi>,
    selector: ChangeSelector,
    progress_tracker: Arc<ProgressTracker>,
    config: MagentoConfig,
}

impl ExportExecutor {
    pub fn new(
        config: MagentoConfig,
        catalog: Arc<dyn CatalogProvider>,
        contexts: Arc<dyn ContextResolver>,
        quantities: Arc<dyn QuantityProvider>,
        shops: Arc<dyn ShopStore>,
        api: Arc<dyn MagentoInventoryApi>,
        progress_tracker: Arc<ProgressTracker>,
    ) -> Self {
        let selector = ChangeSelector::new(catalog, Arc::clone(&shops));
        Self {
            contexts,
            quantities,
            shops,
            api,
            selector,
            progress_tracker,
            config,
        }
    }

    /// Запустить экспорт (создает async task и возвращает session_id)
    pub async fn start_export(&self, request: ExportRequest) -> Result<ExportResponse> {
        // Валидация запроса
        let shop_id = MagentoShopId::from_string(&request.shop_id)
            .map_err(|_| anyhow::anyhow!("Invalid shop_id"))?;
        let explicit = parse_product_ids(&request.product_ids)?;

        // Получить магазин
        let shop = self
            .shops
            .get_by_id(&shop_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Shop not found"))?;

        // Создать сессию экспорта
        let session_id = Uuid::new_v4().to_string();
        self.progress_tracker
            .create_session(session_id.clone(), &shop.name);

        let executor = self.clone();
        let session = session_id.clone();
        tokio::spawn(async move {
            let result = match request.mode {
                ExportMode::Delta => executor.export_stocks(shop, &explicit, &session).await,
                ExportMode::Kits => {
                    executor.export_stocks_kit(shop, &explicit, &session).await
                }
            };
            if let Err(e) = result {
                tracing::error!("Export stock session {} failed: {}", session, e);
                executor.progress_tracker.fail(&session, e.to_string());
            }
        });

        Ok(ExportResponse {
            session_id,
            status: ExportStartStatus::Started,
            message: "Export started".to_string(),
        })
    }

    /// Инкрементальная выгрузка остатков магазина.
    ///
    /// Непустой `explicit` — принудительный ресинк этих товаров, иначе отбор
    /// по водяному знаку с фиксацией новой отметки до отправки.
    pub async fn export_stocks(
        &self,
        mut shop: MagentoShop,
        explicit: &[EsaleProductId],
        session_id: &str,
    ) -> Result<RunSummary> {
        let Some(ctx) = self.contexts.resolve(&shop).await? else {
            // не ошибка: запуск без контекста просто пропускается
            let reason = ExportStockError::NoContext {
                shop: shop.name.clone(),
            };
            tracing::info!("Magento {}", reason);
            self.progress_tracker
                .complete(session_id, ExportStatus::Skipped);
            return Ok(RunSummary::default());
        };

        let products = self
            .selector
            .select_changed(&mut shop, explicit, &ctx)
            .await?;

        if products.is_empty() {
            tracing::info!("Magento {}: no products to export stock", shop.name);
            self.progress_tracker
                .complete(session_id, ExportStatus::Completed);
            return Ok(RunSummary::default());
        }

        tracing::info!(
            "Magento {}: start export stock {} products",
            shop.name,
            products.len()
        );

        let summary = self.sync_stock(&shop, &ctx, &products, session_id).await?;

        tracing::info!(
            "Magento {}: end export stock {} products",
            shop.name,
            products.len()
        );
        self.finish(session_id, &summary);
        Ok(summary)
    }

    /// Выгрузка остатков комплектов: целиком по kit-фильтру или явный
    /// список, водяной знак не участвует
    pub async fn export_stocks_kit(
        &self,
        shop: MagentoShop,
        explicit: &[EsaleProductId],
        session_id: &str,
    ) -> Result<RunSummary> {
        let Some(ctx) = self.contexts.resolve(&shop).await? else {
            let reason = ExportStockError::NoContext {
                shop: shop.name.clone(),
            };
            tracing::info!("Magento {}", reason);
            self.progress_tracker
                .complete(session_id, ExportStatus::Skipped);
            return Ok(RunSummary::default());
        };

        let products = self.selector.select_kits(&shop, explicit, &ctx).await?;

        if products.is_empty() {
            self.progress_tracker
                .complete(session_id, ExportStatus::Completed);
            return Ok(RunSummary::default());
        }

        tracing::info!(
            "Magento {}: start export stocks kit {} products",
            shop.name,
            products.len()
        );

        let summary = self.sync_stock(&shop, &ctx, &products, session_id).await?;

        tracing::info!(
            "Magento {}: end export stocks kit {} products",
            shop.name,
            products.len()
        );
        self.finish(session_id, &summary);
        Ok(summary)
    }

    /// Общая машинерия обеих точек входа: количества, записи, группы,
    /// отправка групп с изоляцией ошибок
    async fn sync_stock(
        &self,
        shop: &MagentoShop,
        ctx: &ShopContext,
        products: &[EsaleProduct],
        session_id: &str,
    ) -> Result<RunSummary> {
        let ids: Vec<EsaleProductId> = products.iter().map(|p| p.id).collect();
        let quantities = self.quantities.quantities_for(&ids, ctx).await?;

        let mut records = Vec::with_capacity(products.len());
        let mut skipped = 0usize;
        for product in products {
            // отсутствие количества для запрошенного товара — нарушение
            // контракта складской подсистемы, выгрузка прерывается
            let Some(qty) = quantities.get(&product.id).copied() else {
                anyhow::bail!(
                    "no quantity returned for product {}",
                    product.id.as_string()
                );
            };

            match build_record(product, qty) {
                Ok(record) => {
                    if self.config.debug {
                        tracing::info!(
                            "Magento {}: product {} data {:?}",
                            shop.name,
                            record.sku,
                            record
                        );
                    }
                    records.push(record);
                }
                Err(e) => {
                    // товар без кода пропускается, выгрузка продолжается
                    tracing::error!("Magento {}: {}", shop.name, e);
                    self.progress_tracker
                        .add_error(session_id, e.to_string(), None);
                    skipped += 1;
                }
            }
        }

        self.progress_tracker
            .set_selected(session_id, products.len() as i32, skipped as i32);

        let max_size = shop.max_connections.unwrap_or(self.config.max_connections);
        let groups = batch(records, max_size)?;

        let mut failed = 0usize;
        let attempted = groups.len();
        for group in &groups {
            match self.api.update_stock_batch(group).await {
                Ok(()) => {
                    tracing::info!("{}: export group stock {}", shop.name, group.len());
                    self.progress_tracker.record_batch(session_id, true);
                }
                Err(e) => {
                    // одна упавшая группа не прерывает выгрузку остальных
                    tracing::error!("{}: error export group stock {}", shop.name, group.len());
                    tracing::error!("{}", e);
                    self.progress_tracker.record_batch(session_id, false);
                    self.progress_tracker.add_error(
                        session_id,
                        format!("error export group stock {}", group.len()),
                        Some(e.to_string()),
                    );
                    failed += 1;
                }
            }
        }

        Ok(RunSummary {
            products_selected: products.len(),
            products_skipped: skipped,
            batches_attempted: attempted,
            batches_failed: failed,
        })
    }

    fn finish(&self, session_id: &str, summary: &RunSummary) {
        let status = if summary.batches_failed > 0 {
            ExportStatus::CompletedWithErrors
        } else {
            ExportStatus::Completed
        };
        self.progress_tracker.complete(session_id, status);
    }
}

fn parse_product_ids(ids: &[String]) -> Result<Vec<EsaleProductId>> {
    ids.iter()
        .map(|s| {
            EsaleProductId::from_string(s).map_err(|_| anyhow::anyhow!("Invalid product id: {}", s))
        })
        .collect()
}
