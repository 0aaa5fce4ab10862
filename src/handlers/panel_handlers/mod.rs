// Add / edit / delete for the five entity panels. One generic set of
// handlers; the collection slug in the path picks the schema.
mod create;
mod delete;
pub mod helpers;
mod read;
mod update;

pub use create::{create, new_form};
pub use delete::{confirm_delete, delete};
pub use read::edit_form;
pub use update::update;
