pub mod dispatch;
pub mod interactive;
pub mod query;
pub mod render;
