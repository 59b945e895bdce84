use chrono::NaiveDate;
use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    project::Project,
};

pub(crate) const PROJECTS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("projects");

record!(Project, PROJECTS_TABLE);

pub struct ProjectRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<Project>, DataError> {
        self.uow.find(id)
    }

    pub fn get_all(&self) -> Result<Vec<Project>, DataError> {
        self.uow.all()
    }

    pub fn get_by_category(&self, category: &str) -> Result<Vec<Project>, DataError> {
        let category = category.to_lowercase();
        self.uow.filter(|p: &Project| p.category.to_lowercase() == category)
    }

    pub fn get_by_deadline_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Project>, DataError> {
        self.uow.filter(|p: &Project| p.deadline >= start && p.deadline <= end)
    }

    pub fn add(&self, project: &mut Project) -> Result<u64, DataError> {
        self.uow.insert(project)
    }

    pub fn update(&self, project: &Project) -> Result<(), DataError> {
        self.uow.put(project)
    }

    /// Drops the project's requests and assignments with it. Milestones,
    /// payments, deliverables and feedback are kept as history.
    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        if !self.uow.remove::<Project>(id)? {
            return Ok(false);
        }
        for request in self.uow.project_requests().get_by_project(id)? {
            self.uow.project_requests().delete(request.id)?;
        }
        for assignment in self.uow.assignments().get_by_project(id)? {
            self.uow.assignments().delete(assignment.id)?;
        }
        Ok(true)
    }
}
