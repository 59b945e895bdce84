use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    project_request::ProjectRequest,
};

pub(crate) const PROJECT_REQUESTS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("projectRequests");

record!(ProjectRequest, PROJECT_REQUESTS_TABLE);

pub struct ProjectRequestRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> ProjectRequestRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<ProjectRequest>, DataError> {
        self.uow.find(id)
    }

    pub fn find_pair(&self, project_id: u64, freelancer_id: u64) -> Result<Option<ProjectRequest>, DataError> {
        let matches = self.uow.filter(|r: &ProjectRequest| {
            r.project_id == project_id && r.freelancer_id == freelancer_id
        })?;
        Ok(matches.into_iter().next())
    }

    pub fn get_by_freelancer(&self, freelancer_id: u64) -> Result<Vec<ProjectRequest>, DataError> {
        self.uow.filter(|r: &ProjectRequest| r.freelancer_id == freelancer_id)
    }

    pub fn get_by_project(&self, project_id: u64) -> Result<Vec<ProjectRequest>, DataError> {
        self.uow.filter(|r: &ProjectRequest| r.project_id == project_id)
    }

    pub fn add(&self, request: &mut ProjectRequest) -> Result<u64, DataError> {
        self.uow.insert(request)
    }

    pub fn update(&self, request: &ProjectRequest) -> Result<(), DataError> {
        self.uow.put(request)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.remove::<ProjectRequest>(id)
    }
}
