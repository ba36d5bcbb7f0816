pub mod dashboard;
pub mod fallback;
pub mod health;
