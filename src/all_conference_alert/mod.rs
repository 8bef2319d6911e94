pub mod api;
pub mod date;
pub mod document;
pub mod extract;
pub mod links;
pub mod model;
pub mod section;
pub mod segment;
