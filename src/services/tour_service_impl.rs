use crate::db::{Store, TourPackageRepository, TourRepository};
use crate::domain::{Difficulty, Page, PageRequest, Region, TourId, TourSort};
use crate::models::{NewTour, Tour, TourFilter, TourImportRecord, TourPackage};
use crate::services::tour_service::{TourError, TourService};
use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use std::collections::HashMap;
use tracing::{debug, info};

pub struct SeaOrmTourService {
    store: Store,
}

impl SeaOrmTourService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Resolves a catalogue record into a tour, looking package names up in
    /// `packages` and caching the result.
    async fn resolve_record<C: ConnectionTrait>(
        conn: &C,
        packages: &mut HashMap<String, String>,
        record: TourImportRecord,
    ) -> Result<NewTour, TourError> {
        let package_code = if let Some(code) = packages.get(&record.package_type) {
            code.clone()
        } else {
            let package = TourPackageRepository::new(conn)
                .find_by_name(&record.package_type)
                .await?
                .ok_or_else(|| {
                    TourError::Validation(format!("Unknown tour package '{}'", record.package_type))
                })?;
            packages.insert(record.package_type.clone(), package.code.clone());
            package.code
        };

        let difficulty = Difficulty::find_by_name(&record.difficulty).ok_or_else(|| {
            TourError::Validation(format!("Unknown difficulty '{}'", record.difficulty))
        })?;
        let region = Region::find_by_label(&record.region)
            .ok_or_else(|| TourError::Validation(format!("Unknown region '{}'", record.region)))?;

        Ok(NewTour {
            title: record.title,
            description: record.description,
            blurb: record.blurb,
            price: record.price,
            duration: record.length,
            bullets: record.bullets,
            keywords: record.keywords,
            package_code,
            difficulty,
            region,
        })
    }
}

#[async_trait]
impl TourService for SeaOrmTourService {
    async fn create_package(&self, code: &str, name: &str) -> Result<TourPackage, TourError> {
        info!("Create tour package {} ({})", code, name);

        let txn = self.store.begin().await?;
        let package = TourPackageRepository::new(&txn).insert(code, name).await?;
        txn.commit().await?;

        Ok(package)
    }

    async fn lookup_packages(&self) -> Result<Vec<TourPackage>, TourError> {
        Ok(self.store.packages().find_all().await?)
    }

    async fn lookup_package(&self, code: &str) -> Result<Option<TourPackage>, TourError> {
        Ok(self.store.packages().find_by_code(code).await?)
    }

    async fn find_package_by_name(&self, name: &str) -> Result<Option<TourPackage>, TourError> {
        Ok(self.store.packages().find_by_name(name).await?)
    }

    async fn create_tour(&self, tour: NewTour) -> Result<Tour, TourError> {
        info!("Create tour '{}' in package {}", tour.title, tour.package_code);

        let txn = self.store.begin().await?;
        TourPackageRepository::new(&txn)
            .find_by_code(&tour.package_code)
            .await?
            .ok_or_else(|| TourError::package_not_found(&tour.package_code))?;

        let created = TourRepository::new(&txn).insert(&tour).await?;
        txn.commit().await?;

        Ok(created)
    }

    async fn lookup_tour(&self, id: TourId) -> Result<Option<Tour>, TourError> {
        Ok(self.store.tours().find_by_id(id).await?)
    }

    async fn lookup_tours(
        &self,
        filter: TourFilter,
        request: PageRequest<TourSort>,
    ) -> Result<Page<Tour>, TourError> {
        debug!(?filter, "Lookup tours page {}", request.number);
        Ok(self.store.tours().find_page(&filter, &request).await?)
    }

    async fn delete_tour(&self, id: TourId) -> Result<(), TourError> {
        info!("Delete tour {}", id);

        let txn = self.store.begin().await?;
        if !TourRepository::new(&txn).delete(id).await? {
            return Err(TourError::tour_not_found(id));
        }
        txn.commit().await?;

        Ok(())
    }

    async fn import_tours(&self, records: Vec<TourImportRecord>) -> Result<usize, TourError> {
        info!("Importing {} tours", records.len());

        let txn = self.store.begin().await?;
        let mut packages = HashMap::new();
        let mut imported = 0;

        for record in records {
            let tour = Self::resolve_record(&txn, &mut packages, record).await?;
            let created = TourRepository::new(&txn).insert(&tour).await?;
            debug!("Imported tour {} '{}'", created.id, created.title);
            imported += 1;
        }

        txn.commit().await?;
        info!("Imported {} tours", imported);

        Ok(imported)
    }
}
