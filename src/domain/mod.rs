pub mod engine;
pub mod entities;
pub mod record;
