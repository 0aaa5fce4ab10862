pub mod collection;
pub mod dashboard;
pub mod draft;
pub mod entities;
pub mod format;
pub mod panel;
pub mod schema;
pub mod table;
