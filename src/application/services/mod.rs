pub mod status_reporter;
pub mod toggle_service;

pub use toggle_service::ToggleService;
