pub mod data_table;
pub mod overview;
pub mod toast_stack;
