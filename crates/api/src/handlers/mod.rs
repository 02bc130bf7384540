pub mod catalog;
pub mod forms;
pub mod listing;
pub mod reference;
pub mod submit;
