pub mod menu;
pub mod table;
