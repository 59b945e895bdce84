use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    task_get_response::TaskGetResponse,
    task_item::TaskItem,
};

pub(crate) const TASK_ITEMS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("taskItems");

record!(TaskItem, TASK_ITEMS_TABLE);

pub struct TaskRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> TaskRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<TaskItem>, DataError> {
        self.uow.find(id)
    }

    pub fn get_all(&self) -> Result<Vec<TaskItem>, DataError> {
        self.uow.all()
    }

    /// A task with its subtasks and the creator and assignee summaries.
    pub fn get_with_details(&self, id: u64) -> Result<Option<TaskGetResponse>, DataError> {
        match self.get(id)? {
            Some(task) => Ok(Some(self.details(task)?)),
            None => Ok(None),
        }
    }

    pub fn get_all_with_details(&self) -> Result<Vec<TaskGetResponse>, DataError> {
        self.get_all()?.into_iter().map(|task| self.details(task)).collect()
    }

    pub fn add(&self, task: &mut TaskItem) -> Result<u64, DataError> {
        self.uow.insert(task)
    }

    pub fn update(&self, task: &TaskItem) -> Result<(), DataError> {
        self.uow.put(task)
    }

    /// Removes the task's logs and subtasks before the task itself.
    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.logs().delete_by_task(id)?;
        self.uow.subtasks().delete_by_task(id)?;
        self.uow.remove::<TaskItem>(id)
    }

    fn details(&self, task: TaskItem) -> Result<TaskGetResponse, DataError> {
        let users = self.uow.users();
        Ok(TaskGetResponse {
            subtasks: self.uow.subtasks().get_by_task(task.id)?,
            created_by: users.get(task.created_by_user_id)?.map(|u| u.to_summary()),
            assigned_to: users.get(task.assigned_to_user_id)?.map(|u| u.to_summary()),
            task,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::{
        data_access::data_context::DataContext, subtask::Subtask, subtask_add_request::SubtaskAddRequest,
        task_add_request::TaskAddRequest, task_edit_request::TaskEditRequest, task_item::TaskItem,
        task_priority::TaskPriority, task_status::TaskStatus, work_log::WorkLog,
    };

    fn task() -> TaskItem {
        TaskItem::new(
            TaskAddRequest {
                title: "Wire up auth".into(),
                description: Some("JWT".into()),
                estimated_deadline: None,
                priority: TaskPriority::High,
                created_by_user_id: None,
                assigned_to_user_id: 2,
            },
            1,
        )
    }

    #[test]
    fn delete_cascades_logs_and_subtasks() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = DataContext::new(dir.path().join("tasks.redb")).unwrap();
        let uow = ctx.begin().unwrap();

        let doomed = uow.tasks().add(&mut task()).unwrap();
        let kept = uow.tasks().add(&mut task()).unwrap();
        for task_item_id in [doomed, kept] {
            uow.subtasks()
                .add(&mut Subtask::new(SubtaskAddRequest {
                    title: "step".into(),
                    description: None,
                    due_date: None,
                    task_item_id,
                }))
                .unwrap();
            uow.logs().add(&mut WorkLog::start(2, task_item_id, Utc::now())).unwrap();
        }
        uow.save().unwrap();

        let uow = ctx.begin().unwrap();
        assert!(uow.tasks().delete(doomed).unwrap());
        uow.save().unwrap();

        let uow = ctx.begin().unwrap();
        assert!(uow.tasks().get(doomed).unwrap().is_none());
        assert!(uow.logs().get_by_task(doomed).unwrap().is_empty());
        assert!(uow.subtasks().get_by_task(doomed).unwrap().is_empty());
        assert_eq!(uow.logs().get_by_task(kept).unwrap().len(), 1);
        assert_eq!(uow.subtasks().get_by_task(kept).unwrap().len(), 1);
    }

    #[test]
    fn partial_update_round_trips_through_storage() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = DataContext::new(dir.path().join("tasks.redb")).unwrap();
        let uow = ctx.begin().unwrap();
        let id = uow.tasks().add(&mut task()).unwrap();

        let mut stored = uow.tasks().get(id).unwrap().unwrap();
        stored.apply(TaskEditRequest {
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        });
        uow.tasks().update(&stored).unwrap();
        uow.save().unwrap();

        let uow = ctx.begin().unwrap();
        let reloaded = uow.tasks().get(id).unwrap().unwrap();
        assert_eq!(reloaded.status, TaskStatus::InProgress);
        assert_eq!(reloaded.title, "Wire up auth");
        assert_eq!(reloaded.priority, TaskPriority::High);
    }
}
