use serde::{Deserialize, Serialize};

/// Ответ на запрос экспорта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Уникальный ID сессии экспорта
    pub session_id: String,

    /// Статус запуска
    pub status: ExportStartStatus,

    /// Сообщение
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExportStartStatus {
    /// Экспорт успешно запущен
    Started,

    /// Ошибка при запуске
    Failed,
}
