//! Bundled image catalog and image reference resolution.

pub mod catalog;
pub mod resolver;

pub use catalog::{
    AssetHandle,
    ImageCatalog,
};
pub use resolver::{
    ImageResolver,
    ImageSource,
};
