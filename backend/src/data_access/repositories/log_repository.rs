use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    work_log::WorkLog,
};

pub(crate) const LOGS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("logs");

record!(WorkLog, LOGS_TABLE);

pub struct LogRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> LogRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<WorkLog>, DataError> {
        self.uow.find(id)
    }

    pub fn get_all(&self) -> Result<Vec<WorkLog>, DataError> {
        self.uow.all()
    }

    pub fn get_by_task(&self, task_id: u64) -> Result<Vec<WorkLog>, DataError> {
        self.uow.filter(|l: &WorkLog| l.task_id == task_id)
    }

    /// The oldest log recorded against the task.
    pub fn first_for_task(&self, task_id: u64) -> Result<Option<WorkLog>, DataError> {
        Ok(self.get_by_task(task_id)?.into_iter().next())
    }

    pub fn add(&self, log: &mut WorkLog) -> Result<u64, DataError> {
        self.uow.insert(log)
    }

    pub fn update(&self, log: &WorkLog) -> Result<(), DataError> {
        self.uow.put(log)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.remove::<WorkLog>(id)
    }

    pub fn delete_by_task(&self, task_id: u64) -> Result<usize, DataError> {
        self.delete_matching(|l| l.task_id == task_id)
    }

    pub fn delete_by_freelancer(&self, freelancer_id: u64) -> Result<usize, DataError> {
        self.delete_matching(|l| l.freelancer_id == freelancer_id)
    }

    fn delete_matching(&self, predicate: impl Fn(&WorkLog) -> bool) -> Result<usize, DataError> {
        let logs = self.uow.filter(|l: &WorkLog| predicate(l))?;
        for log in &logs {
            self.delete(log.id)?;
        }
        Ok(logs.len())
    }
}
