pub mod health_service;
pub mod user_service;
