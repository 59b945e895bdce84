use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    freelancer_profile::FreelancerProfile,
};

pub(crate) const FREELANCER_PROFILES_TABLE: TableDefinition<u64, &[u8]> =
    TableDefinition::new("freelancerProfiles");

record!(FreelancerProfile, FREELANCER_PROFILES_TABLE);

pub struct FreelancerProfileRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> FreelancerProfileRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, user_id: u64) -> Result<Option<FreelancerProfile>, DataError> {
        self.uow.find(user_id)
    }

    pub fn get_all(&self) -> Result<Vec<FreelancerProfile>, DataError> {
        self.uow.all()
    }

    /// Stored under the owner's user id; no sequence involved.
    pub fn add(&self, profile: &FreelancerProfile) -> Result<(), DataError> {
        self.uow.put(profile)
    }

    pub fn update(&self, profile: &FreelancerProfile) -> Result<(), DataError> {
        self.uow.put(profile)
    }

    /// Removes the freelancer's work logs along with the profile.
    pub fn delete(&self, user_id: u64) -> Result<bool, DataError> {
        if !self.uow.remove::<FreelancerProfile>(user_id)? {
            return Ok(false);
        }
        self.uow.logs().delete_by_freelancer(user_id)?;
        Ok(true)
    }
}
