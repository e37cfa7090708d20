pub mod campaign;
pub mod table;
pub mod value;
