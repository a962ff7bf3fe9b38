pub mod links;
pub mod style;
