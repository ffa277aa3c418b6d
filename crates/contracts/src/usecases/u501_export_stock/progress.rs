use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Текущий прогресс экспорта (для real-time мониторинга)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportProgress {
    pub session_id: String,
    pub shop_name: String,
    pub status: ExportStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Последнее обновление прогресса
    pub updated_at: DateTime<Utc>,

    /// Товаров отобрано для выгрузки
    pub products_selected: i32,
    /// Товаров пропущено (нет кода)
    pub products_skipped: i32,
    /// Групп отправлено
    pub batches_attempted: i32,
    /// Групп завершилось ошибкой
    pub batches_failed: i32,

    /// Ошибки экспорта
    pub errors: Vec<ExportError>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    /// Экспорт запущен
    Running,

    /// Экспорт завершён успешно
    Completed,

    /// Экспорт завершён, часть групп с ошибками
    CompletedWithErrors,

    /// Запуск пропущен (нет контекста магазина)
    Skipped,

    /// Экспорт провален
    Failed,
}

/// Ошибка экспорта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportError {
    pub message: String,
    pub details: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl ExportProgress {
    pub fn new(session_id: String, shop_name: String) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            shop_name,
            status: ExportStatus::Running,
            started_at: now,
            completed_at: None,
            updated_at: now,
            products_selected: 0,
            products_skipped: 0,
            batches_attempted: 0,
            batches_failed: 0,
            errors: Vec::new(),
        }
    }
}
