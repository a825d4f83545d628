//! Infrastructure layer: wire DTOs and registry implementations.

pub mod dto;
pub mod repository;
