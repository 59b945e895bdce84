use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    subtask::Subtask,
};

pub(crate) const SUBTASKS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("subtasks");

record!(Subtask, SUBTASKS_TABLE);

pub struct SubtaskRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> SubtaskRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<Subtask>, DataError> {
        self.uow.find(id)
    }

    pub fn get_all(&self) -> Result<Vec<Subtask>, DataError> {
        self.uow.all()
    }

    pub fn get_by_task(&self, task_item_id: u64) -> Result<Vec<Subtask>, DataError> {
        self.uow.filter(|s: &Subtask| s.task_item_id == task_item_id)
    }

    pub fn add(&self, subtask: &mut Subtask) -> Result<u64, DataError> {
        self.uow.insert(subtask)
    }

    pub fn update(&self, subtask: &Subtask) -> Result<(), DataError> {
        self.uow.put(subtask)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.remove::<Subtask>(id)
    }

    pub fn delete_by_task(&self, task_item_id: u64) -> Result<usize, DataError> {
        let subtasks = self.get_by_task(task_item_id)?;
        for subtask in &subtasks {
            self.delete(subtask.id)?;
        }
        Ok(subtasks.len())
    }
}
