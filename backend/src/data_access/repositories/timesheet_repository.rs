use chrono::NaiveDate;
use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    timesheet::Timesheet,
};

pub(crate) const TIMESHEETS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("timesheets");

record!(Timesheet, TIMESHEETS_TABLE);

pub struct TimesheetRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> TimesheetRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<Timesheet>, DataError> {
        self.uow.find(id)
    }

    pub fn get_all(&self) -> Result<Vec<Timesheet>, DataError> {
        self.uow.all()
    }

    pub fn get_by_freelancer_name(&self, name: &str) -> Result<Vec<Timesheet>, DataError> {
        let name = name.to_lowercase();
        self.uow.filter(|t: &Timesheet| t.freelancer_name.to_lowercase() == name)
    }

    pub fn get_by_project_name(&self, name: &str) -> Result<Vec<Timesheet>, DataError> {
        let name = name.to_lowercase();
        self.uow.filter(|t: &Timesheet| t.project_name.to_lowercase() == name)
    }

    pub fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Timesheet>, DataError> {
        self.uow.filter(|t: &Timesheet| t.date_of_work == date)
    }

    pub fn add(&self, timesheet: &mut Timesheet) -> Result<u64, DataError> {
        self.uow.insert(timesheet)
    }

    pub fn update(&self, timesheet: &Timesheet) -> Result<(), DataError> {
        self.uow.put(timesheet)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.remove::<Timesheet>(id)
    }
}
