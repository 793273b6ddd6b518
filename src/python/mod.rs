pub mod mappings;
pub mod module;
