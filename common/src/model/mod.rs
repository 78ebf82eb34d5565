pub mod attachment;
pub mod context;
