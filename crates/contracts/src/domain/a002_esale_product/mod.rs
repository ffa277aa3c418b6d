pub mod aggregate;

pub use aggregate::{EsaleProduct, EsaleProductId, ProductTemplateId};
