//! Выгрузка остатков в Magento: отбор изменённых товаров по водяному знаку,
//! формирование записей Inventory API и отправка группами ограниченного
//! размера. Каталог, склад и хранилище магазинов — внешние подсистемы,
//! подключаемые через порты в `domain`.

pub mod domain;
pub mod shared;
pub mod usecases;
