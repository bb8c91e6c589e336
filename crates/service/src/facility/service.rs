use std::{sync::Arc, time::Duration};

use tracing::{info, instrument};

use super::domain::{Facility, FacilityInput};
use super::repository::FacilityRepository;
use crate::errors::ServiceError;
use crate::store::{bounded, parse_id};

/// Facility use cases. Malformed ids are `InvalidId`, well-formed but
/// unknown ids are `NotFound`, on every operation including delete.
pub struct FacilityService {
    repo: Arc<dyn FacilityRepository>,
    timeout: Duration,
}

impl FacilityService {
    pub fn new(repo: Arc<dyn FacilityRepository>, timeout: Duration) -> Self { Self { repo, timeout } }

    #[instrument(skip(self, input))]
    pub async fn add_facility(&self, input: FacilityInput) -> Result<Facility, ServiceError> {
        let created = bounded(self.timeout, "facility.insert", self.repo.insert(input)).await?;
        info!(id = %created.id, "facility_created");
        Ok(created)
    }

    pub async fn get_all_facilities(&self) -> Result<Vec<Facility>, ServiceError> {
        bounded(self.timeout, "facility.find_all", self.repo.find_all()).await
    }

    pub async fn get_facility_by_id(&self, id: &str) -> Result<Facility, ServiceError> {
        let id = parse_id(id)?;
        bounded(self.timeout, "facility.find_by_id", self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| ServiceError::not_found("facility"))
    }

    #[instrument(skip(self, input))]
    pub async fn update_facility(&self, id: &str, input: FacilityInput) -> Result<Facility, ServiceError> {
        let id = parse_id(id)?;
        let updated = bounded(self.timeout, "facility.replace", self.repo.replace(id, input))
            .await?
            .ok_or_else(|| ServiceError::not_found("facility"))?;
        info!(id = %updated.id, "facility_updated");
        Ok(updated)
    }

    pub async fn delete_facility(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        if !bounded(self.timeout, "facility.delete", self.repo.delete(id)).await? {
            return Err(ServiceError::not_found("facility"));
        }
        info!(id = %id, "facility_deleted");
        Ok(())
    }
}
