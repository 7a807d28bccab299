//! Salsa database definition.

/// Database trait for every memoized page query.
#[salsa::db]
pub trait SiteDatabase: salsa::Database {}

/// Default database implementation.
#[salsa::db]
#[derive(Default, Clone)]
pub struct SiteDatabaseImpl {
    /// Salsa storage.
    storage: salsa::Storage<Self>,
}

#[salsa::db]
impl salsa::Database for SiteDatabaseImpl {}

#[salsa::db]
impl SiteDatabase for SiteDatabaseImpl {}
