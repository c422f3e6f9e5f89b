pub mod business_service;
pub mod geocode_service;
pub mod picker_service;

pub use business_service::*;
pub use geocode_service::*;
pub use picker_service::*;
