use redb::{ReadTransaction, ReadableTable, TableDefinition, TableHandle, WriteTransaction};

use super::{
    data_error::DataError,
    record::Record,
    repositories::{
        deliverable_repository::DeliverableRepository, feedback_repository::FeedbackRepository,
        freelancer_profile_repository::FreelancerProfileRepository, log_repository::LogRepository,
        message_repository::MessageRepository, milestone_repository::MilestoneRepository,
        payment_repository::PaymentRepository, project_assignment_repository::ProjectAssignmentRepository,
        project_repository::ProjectRepository, project_request_repository::ProjectRequestRepository,
        subtask_repository::SubtaskRepository, task_repository::TaskRepository,
        timesheet_repository::TimesheetRepository, user_repository::UserRepository,
    },
};

pub(crate) const SEQUENCES_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequences");

enum Transaction {
    Read(ReadTransaction),
    Write(WriteTransaction),
}

// Opens `$def` on either kind of transaction and evaluates `$body` with it.
macro_rules! with_table {
    ($txn:expr, $def:expr, |$table:ident| $body:expr) => {
        match $txn {
            Transaction::Read(txn) => {
                let $table = txn.open_table($def)?;
                let value = $body;
                value
            }
            Transaction::Write(txn) => {
                let $table = txn.open_table($def)?;
                let value = $body;
                value
            }
        }
    };
}

/// One redb transaction shared by every repository of a request.
///
/// A writing unit of work persists nothing until [`UnitOfWork::save`]; dropping
/// it aborts the transaction. A reading one sees the last committed snapshot
/// and rejects writes.
pub struct UnitOfWork {
    txn: Transaction,
}

impl UnitOfWork {
    pub(crate) fn writer(txn: WriteTransaction) -> Self {
        UnitOfWork { txn: Transaction::Write(txn) }
    }

    pub(crate) fn reader(txn: ReadTransaction) -> Self {
        UnitOfWork { txn: Transaction::Read(txn) }
    }

    pub fn save(self) -> Result<(), DataError> {
        match self.txn {
            Transaction::Write(txn) => txn.commit()?,
            Transaction::Read(_) => return Err(DataError::ReadOnly),
        }
        Ok(())
    }

    pub(crate) fn write_txn(&self) -> Result<&WriteTransaction, DataError> {
        match &self.txn {
            Transaction::Write(txn) => Ok(txn),
            Transaction::Read(_) => Err(DataError::ReadOnly),
        }
    }

    // REPOSITORIES
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self)
    }

    pub fn freelancer_profiles(&self) -> FreelancerProfileRepository<'_> {
        FreelancerProfileRepository::new(self)
    }

    pub fn projects(&self) -> ProjectRepository<'_> {
        ProjectRepository::new(self)
    }

    pub fn project_requests(&self) -> ProjectRequestRepository<'_> {
        ProjectRequestRepository::new(self)
    }

    pub fn assignments(&self) -> ProjectAssignmentRepository<'_> {
        ProjectAssignmentRepository::new(self)
    }

    pub fn tasks(&self) -> TaskRepository<'_> {
        TaskRepository::new(self)
    }

    pub fn subtasks(&self) -> SubtaskRepository<'_> {
        SubtaskRepository::new(self)
    }

    pub fn logs(&self) -> LogRepository<'_> {
        LogRepository::new(self)
    }

    pub fn milestones(&self) -> MilestoneRepository<'_> {
        MilestoneRepository::new(self)
    }

    pub fn timesheets(&self) -> TimesheetRepository<'_> {
        TimesheetRepository::new(self)
    }

    pub fn payments(&self) -> PaymentRepository<'_> {
        PaymentRepository::new(self)
    }

    pub fn deliverables(&self) -> DeliverableRepository<'_> {
        DeliverableRepository::new(self)
    }

    pub fn feedbacks(&self) -> FeedbackRepository<'_> {
        FeedbackRepository::new(self)
    }

    pub fn messages(&self) -> MessageRepository<'_> {
        MessageRepository::new(self)
    }

    // GENERIC RECORD ACCESS
    pub(crate) fn find<T: Record>(&self, id: u64) -> Result<Option<T>, DataError> {
        with_table!(&self.txn, T::TABLE, |table| decode_one(&table, id))
    }

    /// Every record of the table, ordered by id.
    pub(crate) fn all<T: Record>(&self) -> Result<Vec<T>, DataError> {
        with_table!(&self.txn, T::TABLE, |table| decode_all(&table))
    }

    pub(crate) fn is_empty<T: Record>(&self) -> Result<bool, DataError> {
        with_table!(&self.txn, T::TABLE, |table| Ok(table.first()?.is_none()))
    }

    pub(crate) fn lookup(
        &self,
        index: TableDefinition<'static, &'static str, u64>,
        key: &str,
    ) -> Result<Option<u64>, DataError> {
        with_table!(&self.txn, index, |table| Ok(table.get(key)?.map(|v| v.value())))
    }

    pub(crate) fn filter<T: Record>(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>, DataError> {
        Ok(self.all::<T>()?.into_iter().filter(|r| predicate(r)).collect())
    }

    /// Assigns the next id of the table's sequence and stores the record.
    pub(crate) fn insert<T: Record>(&self, record: &mut T) -> Result<u64, DataError> {
        let id = self.next_id(T::TABLE.name())?;
        record.set_id(id);
        self.put(record)?;
        Ok(id)
    }

    /// Writes the record under its current id, replacing whatever was there.
    pub(crate) fn put<T: Record>(&self, record: &T) -> Result<(), DataError> {
        let bytes = serde_json::to_vec(record).map_err(DataError::Encode)?;
        let mut table = self.write_txn()?.open_table(T::TABLE)?;
        table.insert(record.id(), bytes.as_slice())?;
        Ok(())
    }

    pub(crate) fn remove<T: Record>(&self, id: u64) -> Result<bool, DataError> {
        let mut table = self.write_txn()?.open_table(T::TABLE)?;
        let removed = table.remove(id)?.is_some();
        Ok(removed)
    }

    pub(crate) fn next_id(&self, sequence: &str) -> Result<u64, DataError> {
        let mut table = self.write_txn()?.open_table(SEQUENCES_TABLE)?;
        let current = table.get(sequence)?.map(|v| v.value()).unwrap_or(0);
        let next = current + 1;
        table.insert(sequence, next)?;
        Ok(next)
    }
}

fn decode_one<T: Record>(table: &impl ReadableTable<u64, &'static [u8]>, id: u64) -> Result<Option<T>, DataError> {
    match table.get(id)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(bytes.value()).map_err(DataError::Decode)?)),
        None => Ok(None),
    }
}

fn decode_all<T: Record>(table: &impl ReadableTable<u64, &'static [u8]>) -> Result<Vec<T>, DataError> {
    let mut records = Vec::new();
    for entry in table.iter()? {
        let (_, value) = entry?;
        records.push(serde_json::from_slice(value.value()).map_err(DataError::Decode)?);
    }
    Ok(records)
}
