//! Порты внешних подсистем: каталог, склад, контекст магазина и хранилище
//! магазинов. Реализации живут вне этого крейта.

pub mod catalog;
pub mod context;
pub mod quantities;
pub mod shops;
