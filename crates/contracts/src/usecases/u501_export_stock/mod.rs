pub mod progress;
pub mod request;
pub mod response;

pub use progress::{ExportError, ExportProgress, ExportStatus};
pub use request::{ExportMode, ExportRequest};
pub use response::{ExportResponse, ExportStartStatus};

use crate::usecases::common::UseCaseMetadata;

pub struct ExportStock;

impl UseCaseMetadata for ExportStock {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "export_stock"
    }

    fn display_name() -> &'static str {
        "Экспорт остатков в Magento"
    }

    fn description() -> &'static str {
        "Выгрузка остатков и ограничений продажи в Magento Inventory API"
    }
}
