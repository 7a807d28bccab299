//! Generic content resolution: raw records to display-ready fields.

pub mod record;
pub mod schema;

pub use record::{
    DisplayRecord,
    DisplayValue,
    ImageValue,
    resolve_record,
};
pub use schema::{
    ContentSchema,
    FieldSpec,
};
