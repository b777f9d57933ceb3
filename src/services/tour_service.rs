//! Domain service for tour packages and tours.

use crate::domain::{Page, PageRequest, TourId, TourSort};
use crate::models::{NewTour, Tour, TourFilter, TourImportRecord, TourPackage};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TourError {
    #[error("{0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl TourError {
    pub(crate) fn package_not_found(code: &str) -> Self {
        Self::NotFound(format!("Tour package does not exist {code}"))
    }

    pub(crate) fn tour_not_found(id: TourId) -> Self {
        Self::NotFound(format!("Tour does not exist {id}"))
    }
}

#[async_trait::async_trait]
pub trait TourService: Send + Sync {
    /// # Errors
    ///
    /// [`TourError::Database`] if the code or name is already taken.
    async fn create_package(&self, code: &str, name: &str) -> Result<TourPackage, TourError>;

    /// All packages ordered by code.
    async fn lookup_packages(&self) -> Result<Vec<TourPackage>, TourError>;

    async fn lookup_package(&self, code: &str) -> Result<Option<TourPackage>, TourError>;

    async fn find_package_by_name(&self, name: &str) -> Result<Option<TourPackage>, TourError>;

    /// # Errors
    ///
    /// [`TourError::NotFound`] if the package code is unknown.
    async fn create_tour(&self, tour: NewTour) -> Result<Tour, TourError>;

    async fn lookup_tour(&self, id: TourId) -> Result<Option<Tour>, TourError>;

    /// One page of tours matching every criterion set in `filter`.
    async fn lookup_tours(
        &self,
        filter: TourFilter,
        request: PageRequest<TourSort>,
    ) -> Result<Page<Tour>, TourError>;

    /// Removes a tour together with its ratings.
    ///
    /// # Errors
    ///
    /// [`TourError::NotFound`] if the tour does not exist.
    async fn delete_tour(&self, id: TourId) -> Result<(), TourError>;

    /// Inserts catalogue records in a single transaction and returns the
    /// number of tours created. Nothing is stored if any record is rejected.
    ///
    /// # Errors
    ///
    /// [`TourError::Validation`] for an unknown package name, difficulty or
    /// region.
    async fn import_tours(&self, records: Vec<TourImportRecord>) -> Result<usize, TourError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages() {
        assert_eq!(
            TourError::tour_not_found(TourId::new(9)).to_string(),
            "Tour does not exist 9"
        );
        assert_eq!(
            TourError::package_not_found("XX").to_string(),
            "Tour package does not exist XX"
        );
    }
}
