pub mod conversion;
pub mod rate_service;
