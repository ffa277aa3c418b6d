use chrono::Utc;
use contracts::usecases::u501_export_stock::progress::{
    ExportError, ExportProgress, ExportStatus,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Трекер прогресса экспорта (in-memory, для real-time мониторинга)
#[derive(Clone, Default)]
pub struct ProgressTracker {
    sessions: Arc<RwLock<HashMap<String, ExportProgress>>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Создать новую сессию экспорта
    pub fn create_session(&self, session_id: String, shop_name: &str) {
        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(
            session_id.clone(),
            ExportProgress::new(session_id, shop_name.to_string()),
        );
    }

    /// Получить текущий прогресс сессии
    pub fn get_progress(&self, session_id: &str) -> Option<ExportProgress> {
        let sessions = self.sessions.read().unwrap();
        sessions.get(session_id).cloned()
    }

    /// Зафиксировать итог отбора: сколько товаров отобрано и пропущено
    pub fn set_selected(&self, session_id: &str, selected: i32, skipped: i32) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(progress) = sessions.get_mut(session_id) {
            progress.products_selected = selected;
            progress.products_skipped = skipped;
            progress.updated_at = Utc::now();
        }
    }

    /// Учесть отправленную группу
    pub fn record_batch(&self, session_id: &str, success: bool) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(progress) = sessions.get_mut(session_id) {
            progress.batches_attempted += 1;
            if !success {
                progress.batches_failed += 1;
            }
            progress.updated_at = Utc::now();
        }
    }

    /// Добавить ошибку
    pub fn add_error(&self, session_id: &str, message: String, details: Option<String>) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(progress) = sessions.get_mut(session_id) {
            progress.errors.push(ExportError {
                message,
                details,
                occurred_at: Utc::now(),
            });
            progress.updated_at = Utc::now();
        }
    }

    /// Завершить сессию с указанным статусом
    pub fn complete(&self, session_id: &str, status: ExportStatus) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(progress) = sessions.get_mut(session_id) {
            progress.status = status;
            progress.completed_at = Some(Utc::now());
            progress.updated_at = Utc::now();
        }
    }

    /// Провалить сессию с ошибкой
    pub fn fail(&self, session_id: &str, message: String) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(progress) = sessions.get_mut(session_id) {
            progress.status = ExportStatus::Failed;
            progress.errors.push(ExportError {
                message,
                details: None,
                occurred_at: Utc::now(),
            });
            progress.completed_at = Some(Utc::now());
            progress.updated_at = Utc::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batches_are_counted_per_outcome() {
        let tracker = ProgressTracker::new();
        tracker.create_session("s1".to_string(), "Test Shop");
        tracker.record_batch("s1", true);
        tracker.record_batch("s1", false);
        tracker.record_batch("s1", true);

        let progress = tracker.get_progress("s1").unwrap();
        assert_eq!(progress.batches_attempted, 3);
        assert_eq!(progress.batches_failed, 1);
        assert_eq!(progress.status, ExportStatus::Running);
    }

    #[test]
    fn completion_sets_status_and_timestamp() {
        let tracker = ProgressTracker::new();
        tracker.create_session("s1".to_string(), "Test Shop");
        tracker.complete("s1", ExportStatus::Completed);

        let progress = tracker.get_progress("s1").unwrap();
        assert_eq!(progress.status, ExportStatus::Completed);
        assert!(progress.completed_at.is_some());
    }

    #[test]
    fn unknown_session_is_none() {
        let tracker = ProgressTracker::new();
        assert!(tracker.get_progress("missing").is_none());
    }
}
