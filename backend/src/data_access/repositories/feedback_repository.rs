use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    feedback::Feedback,
};

pub(crate) const FEEDBACKS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("feedbacks");

record!(Feedback, FEEDBACKS_TABLE);

pub struct FeedbackRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> FeedbackRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get_all(&self) -> Result<Vec<Feedback>, DataError> {
        self.uow.all()
    }

    pub fn get_by_project(&self, project_id: u64) -> Result<Vec<Feedback>, DataError> {
        self.uow.filter(|f: &Feedback| f.project_id == project_id)
    }

    pub fn get_by_freelancer(&self, freelancer_id: u64) -> Result<Vec<Feedback>, DataError> {
        self.uow.filter(|f: &Feedback| f.freelancer_id == freelancer_id)
    }

    pub fn add(&self, feedback: &mut Feedback) -> Result<u64, DataError> {
        self.uow.insert(feedback)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.remove::<Feedback>(id)
    }
}
