pub mod category;
pub mod profile;
pub mod readiness;
