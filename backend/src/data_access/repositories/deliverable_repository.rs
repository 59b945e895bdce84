use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    deliverable::Deliverable,
};

pub(crate) const DELIVERABLES_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("deliverables");

record!(Deliverable, DELIVERABLES_TABLE);

pub struct DeliverableRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> DeliverableRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<Deliverable>, DataError> {
        self.uow.find(id)
    }

    pub fn get_all(&self) -> Result<Vec<Deliverable>, DataError> {
        self.uow.all()
    }

    pub fn add(&self, deliverable: &mut Deliverable) -> Result<u64, DataError> {
        self.uow.insert(deliverable)
    }

    pub fn update(&self, deliverable: &Deliverable) -> Result<(), DataError> {
        self.uow.put(deliverable)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.remove::<Deliverable>(id)
    }
}
