use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор магазина Magento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MagentoShopId(pub Uuid);

impl MagentoShopId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for MagentoShopId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MagentoShopId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Магазин (витрина) Magento, в который выгружаются остатки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagentoShop {
    pub id: MagentoShopId,

    /// Название магазина (используется в логах)
    pub name: String,

    /// Пользователь магазина, от имени которого выполняется фоновая выгрузка.
    /// Без него запуск по расписанию не имеет контекста и пропускается.
    pub shop_user: Option<Uuid>,

    /// Отметка последнего успешного отбора остатков (водяной знак)
    pub esale_last_stocks: DateTime<Utc>,

    /// Переопределение размера группы записей для этого магазина;
    /// `None` — используется значение из конфигурации
    pub max_connections: Option<usize>,
}

impl MagentoShop {
    /// Продвинуть водяной знак. Отметка строго монотонна: попытка отката
    /// назад игнорируется, возвращается `false`.
    pub fn advance_last_stocks(&mut self, ts: DateTime<Utc>) -> bool {
        if ts > self.esale_last_stocks {
            self.esale_last_stocks = ts;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn shop(last_stocks: DateTime<Utc>) -> MagentoShop {
        MagentoShop {
            id: MagentoShopId::new_v4(),
            name: "Test Shop".to_string(),
            shop_user: None,
            esale_last_stocks: last_stocks,
            max_connections: None,
        }
    }

    #[test]
    fn advance_moves_watermark_forward() {
        let t0 = Utc::now();
        let mut s = shop(t0);
        let t1 = t0 + Duration::seconds(60);
        assert!(s.advance_last_stocks(t1));
        assert_eq!(s.esale_last_stocks, t1);
    }

    #[test]
    fn advance_never_moves_watermark_back() {
        let t0 = Utc::now();
        let mut s = shop(t0);
        assert!(!s.advance_last_stocks(t0 - Duration::seconds(1)));
        assert!(!s.advance_last_stocks(t0));
        assert_eq!(s.esale_last_stocks, t0);
    }
}
