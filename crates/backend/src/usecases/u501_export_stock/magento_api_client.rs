use super::payload::StockUpdateRecord;
use crate::shared::config::MagentoConfig;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;

/// Массовое обновление остатков в Magento
///
/// Одна группа записей — один вызов API, без повторов внутри клиента.
/// Ошибка относится ко всей группе целиком: частично применённых и молча
/// проглоченных групп быть не должно.
#[async_trait]
pub trait MagentoInventoryApi: Send + Sync {
    async fn update_stock_batch(&self, records: &[StockUpdateRecord]) -> Result<()>;
}

/// HTTP-клиент Magento Inventory API
pub struct MagentoApiClient {
    client: reqwest::Client,
    config: MagentoConfig,
}

#[derive(Serialize)]
struct InventoryUpdateRequest<'a> {
    inventory: &'a [StockUpdateRecord],
}

impl MagentoApiClient {
    pub fn new(config: MagentoConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    /// Записать в лог-файл
    fn log_to_file(&self, message: &str) {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open("magento_api_requests.log")
        {
            let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {}", timestamp, message);
        }
    }
}

#[async_trait]
impl MagentoInventoryApi for MagentoApiClient {
    /// Отправить группу записей через POST /api/rest/stockitems/update-multi
    async fn update_stock_batch(&self, records: &[StockUpdateRecord]) -> Result<()> {
        let url = format!(
            "{}/api/rest/stockitems/update-multi",
            self.config.endpoint.trim_end_matches('/')
        );

        // Проверка обязательных полей для Magento API
        if self.config.api_user.trim().is_empty() {
            anyhow::bail!("api_user is required for Magento API");
        }
        if self.config.api_key.trim().is_empty() {
            anyhow::bail!("api_key is required for Magento API");
        }

        let body = serde_json::to_string(&InventoryUpdateRequest { inventory: records })?;
        self.log_to_file(&format!(
            "=== REQUEST ===\nPOST {}\nApi-User: {}\nApi-Key: ****\nBody: {}",
            url, self.config.api_user, body
        ));

        let response = self
            .client
            .post(&url)
            .header("Api-User", &self.config.api_user)
            .header("Api-Key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        self.log_to_file(&format!("Response status: {}", status));

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.log_to_file(&format!("ERROR Response body:\n{}", body));
            tracing::error!("Magento API request failed: {}", body);
            anyhow::bail!(
                "Magento API request failed with status {}: {}",
                status,
                body
            );
        }

        let body = response.text().await?;
        self.log_to_file(&format!("=== RESPONSE BODY ===\n{}\n", body));

        let preview: String = body.chars().take(500).collect();
        tracing::debug!("Magento API response preview: {}", preview);

        Ok(())
    }
}
