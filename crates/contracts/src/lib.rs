//! Контракты: доменные агрегаты и DTO, общие для всех частей системы

pub mod domain;
pub mod usecases;
