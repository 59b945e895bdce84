use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    payment::Payment,
};

pub(crate) const PAYMENTS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("payments");

record!(Payment, PAYMENTS_TABLE);

pub struct PaymentRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<Payment>, DataError> {
        self.uow.find(id)
    }

    pub fn get_all(&self) -> Result<Vec<Payment>, DataError> {
        self.uow.all()
    }

    pub fn get_by_project(&self, project_id: u64) -> Result<Vec<Payment>, DataError> {
        self.uow.filter(|p: &Payment| p.project_id == project_id)
    }

    pub fn get_by_freelancer(&self, freelancer_id: u64) -> Result<Vec<Payment>, DataError> {
        self.uow.filter(|p: &Payment| p.freelancer_id == freelancer_id)
    }

    pub fn get_by_client(&self, client_id: u64) -> Result<Vec<Payment>, DataError> {
        self.uow.filter(|p: &Payment| p.client_id == Some(client_id))
    }

    pub fn add(&self, payment: &mut Payment) -> Result<u64, DataError> {
        self.uow.insert(payment)
    }
}
