//! Salsa inputs and the data files they are loaded from.

pub mod content;
pub mod dictionary;
pub mod site;
