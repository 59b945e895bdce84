use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    milestone::Milestone,
    milestone_status::MilestoneStatus,
};

pub(crate) const MILESTONES_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("milestones");

record!(Milestone, MILESTONES_TABLE);

pub struct MilestoneRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> MilestoneRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<Milestone>, DataError> {
        self.uow.find(id)
    }

    pub fn get_all(&self) -> Result<Vec<Milestone>, DataError> {
        self.uow.all()
    }

    pub fn get_by_project(&self, project_id: u64) -> Result<Vec<Milestone>, DataError> {
        self.uow.filter(|m: &Milestone| m.project_id == project_id)
    }

    pub fn get_by_status(&self, status: MilestoneStatus) -> Result<Vec<Milestone>, DataError> {
        self.uow.filter(|m: &Milestone| m.status == status)
    }

    pub fn add(&self, milestone: &mut Milestone) -> Result<u64, DataError> {
        self.uow.insert(milestone)
    }

    pub fn update(&self, milestone: &Milestone) -> Result<(), DataError> {
        self.uow.put(milestone)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.remove::<Milestone>(id)
    }
}
