pub mod common;
pub mod customer_table;
pub mod dashboard;
pub mod layout;
pub mod modals;
pub mod widgets;
