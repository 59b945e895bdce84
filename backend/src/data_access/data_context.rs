use redb::Database;
use std::{path::Path, sync::Arc};
use tracing::info;

use super::{
    data_error::DataError,
    repositories::{
        deliverable_repository::DELIVERABLES_TABLE, feedback_repository::FEEDBACKS_TABLE,
        freelancer_profile_repository::FREELANCER_PROFILES_TABLE, log_repository::LOGS_TABLE,
        message_repository::MESSAGES_TABLE, milestone_repository::MILESTONES_TABLE,
        payment_repository::PAYMENTS_TABLE, project_assignment_repository::PROJECT_FREELANCERS_TABLE,
        project_repository::PROJECTS_TABLE, project_request_repository::PROJECT_REQUESTS_TABLE,
        subtask_repository::SUBTASKS_TABLE, task_repository::TASK_ITEMS_TABLE,
        timesheet_repository::TIMESHEETS_TABLE,
        user_repository::{EMAIL_INDEX, USERS_TABLE},
    },
    unit_of_work::{UnitOfWork, SEQUENCES_TABLE},
};
use crate::{
    authentication::auth::hash_password, settings::Settings, user::User,
    user_register_request::UserRegisterRequest, user_role::UserRole,
};

#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    /// Opens or creates the database file and makes sure every table exists.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        for table in [
            USERS_TABLE,
            FREELANCER_PROFILES_TABLE,
            PROJECTS_TABLE,
            PROJECT_REQUESTS_TABLE,
            PROJECT_FREELANCERS_TABLE,
            TASK_ITEMS_TABLE,
            SUBTASKS_TABLE,
            LOGS_TABLE,
            MILESTONES_TABLE,
            TIMESHEETS_TABLE,
            PAYMENTS_TABLE,
            DELIVERABLES_TABLE,
            FEEDBACKS_TABLE,
            MESSAGES_TABLE,
        ] {
            write_txn.open_table(table)?;
        }
        write_txn.open_table(EMAIL_INDEX)?;
        write_txn.open_table(SEQUENCES_TABLE)?;
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    /// Starts a writing unit of work. Blocks while another one is open.
    pub fn begin(&self) -> Result<UnitOfWork, DataError> {
        Ok(UnitOfWork::writer(self.db.begin_write()?))
    }

    /// Starts a unit of work over the last committed snapshot. Never blocks on writers.
    pub fn read(&self) -> Result<UnitOfWork, DataError> {
        Ok(UnitOfWork::reader(self.db.begin_read()?))
    }

    /// Seeds an admin from the settings when there are no users yet.
    pub fn ensure_default_user(&self, settings: &Settings) -> Result<bool, DataError> {
        let uow = self.begin()?;
        if !uow.users().is_empty()? {
            return Ok(false);
        }

        let password_hash = hash_password(&settings.default_admin_password)
            .map_err(|e| DataError::PasswordHash(e.to_string()))?;
        let mut admin = User::new(
            UserRegisterRequest {
                first_name: "Default".to_string(),
                last_name: "Admin".to_string(),
                email: settings.default_admin_email.clone(),
                phone_no: String::new(),
                password: String::new(),
                confirm_password: String::new(),
                role: UserRole::Admin,
                gender: None,
                profile_picture: None,
            },
            password_hash,
        );
        uow.users().add(&mut admin)?;
        uow.save()?;
        info!("Created default admin user {}", admin.email);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{task_add_request::TaskAddRequest, task_item::TaskItem, task_priority::TaskPriority};

    fn temp_context() -> (DataContext, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = DataContext::new(dir.path().join("test.redb")).unwrap();
        (ctx, dir)
    }

    fn task(title: &str) -> TaskItem {
        TaskItem::new(
            TaskAddRequest {
                title: title.into(),
                description: None,
                estimated_deadline: None,
                priority: TaskPriority::Medium,
                created_by_user_id: None,
                assigned_to_user_id: 1,
            },
            1,
        )
    }

    #[test]
    fn seed_default_admin_once() {
        let (ctx, _dir) = temp_context();
        let settings = Settings::default();

        assert!(ctx.ensure_default_user(&settings).unwrap());
        assert!(!ctx.ensure_default_user(&settings).unwrap());

        let uow = ctx.begin().unwrap();
        let admin = uow.users().get_by_email(&settings.default_admin_email).unwrap().unwrap();
        assert_eq!(admin.role, UserRole::Admin);
    }

    #[test]
    fn dropped_unit_of_work_persists_nothing() {
        let (ctx, _dir) = temp_context();
        {
            let uow = ctx.begin().unwrap();
            uow.tasks().add(&mut task("never saved")).unwrap();
        }

        let uow = ctx.begin().unwrap();
        assert!(uow.tasks().get_all().unwrap().is_empty());
    }

    #[test]
    fn saved_unit_of_work_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reopen.redb");
        {
            let ctx = DataContext::new(&path).unwrap();
            let uow = ctx.begin().unwrap();
            uow.tasks().add(&mut task("kept")).unwrap();
            uow.save().unwrap();
        }

        let ctx = DataContext::new(&path).unwrap();
        let uow = ctx.begin().unwrap();
        let tasks = uow.tasks().get_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "kept");
    }

    #[test]
    fn ids_are_monotonic_per_table() {
        let (ctx, _dir) = temp_context();
        let uow = ctx.begin().unwrap();
        let first = uow.tasks().add(&mut task("a")).unwrap();
        let second = uow.tasks().add(&mut task("b")).unwrap();
        uow.tasks().delete(second).unwrap();
        let third = uow.tasks().add(&mut task("c")).unwrap();
        uow.save().unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(third, 3);
    }

    #[test]
    fn reads_see_committed_snapshot_while_a_write_is_open() {
        let (ctx, _dir) = temp_context();
        ctx.ensure_default_user(&Settings::default()).unwrap();

        let writer = ctx.begin().unwrap();
        writer.tasks().add(&mut task("pending")).unwrap();

        let reader = ctx.read().unwrap();
        assert!(reader.tasks().get_all().unwrap().is_empty());
        assert!(reader.users().get_by_email("ADMIN@launchpad.local").unwrap().is_some());
        assert!(matches!(reader.tasks().add(&mut task("nope")), Err(DataError::ReadOnly)));
        assert!(matches!(reader.save(), Err(DataError::ReadOnly)));

        writer.save().unwrap();
        assert_eq!(ctx.read().unwrap().tasks().get_all().unwrap().len(), 1);
    }

    #[test]
    fn concurrent_updates_last_save_wins() {
        let (ctx, _dir) = temp_context();
        let id = {
            let uow = ctx.begin().unwrap();
            let id = uow.tasks().add(&mut task("original")).unwrap();
            uow.save().unwrap();
            id
        };

        let handles: Vec<_> = ["first", "second"]
            .into_iter()
            .map(|title| {
                let ctx = ctx.clone();
                std::thread::spawn(move || {
                    let uow = ctx.begin().unwrap();
                    let mut t = uow.tasks().get(id).unwrap().unwrap();
                    t.title = title.to_string();
                    uow.tasks().update(&t).unwrap();
                    uow.save().unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let uow = ctx.begin().unwrap();
        let stored = uow.tasks().get(id).unwrap().unwrap();
        assert!(stored.title == "first" || stored.title == "second");
    }
}
