pub mod aggregate;

pub use aggregate::{MagentoShop, MagentoShopId};
