pub mod common;

pub mod a001_magento_shop;
pub mod a002_esale_product;
