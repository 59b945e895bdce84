use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    project_assignment::ProjectAssignment,
};

pub(crate) const PROJECT_FREELANCERS_TABLE: TableDefinition<u64, &[u8]> =
    TableDefinition::new("projectFreelancers");

record!(ProjectAssignment, PROJECT_FREELANCERS_TABLE);

pub struct ProjectAssignmentRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> ProjectAssignmentRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn find_pair(&self, project_id: u64, freelancer_id: u64) -> Result<Option<ProjectAssignment>, DataError> {
        let matches = self.uow.filter(|a: &ProjectAssignment| {
            a.project_id == project_id && a.freelancer_id == freelancer_id
        })?;
        Ok(matches.into_iter().next())
    }

    pub fn get_by_project(&self, project_id: u64) -> Result<Vec<ProjectAssignment>, DataError> {
        self.uow.filter(|a: &ProjectAssignment| a.project_id == project_id)
    }

    pub fn add(&self, assignment: &mut ProjectAssignment) -> Result<u64, DataError> {
        self.uow.insert(assignment)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.remove::<ProjectAssignment>(id)
    }
}
