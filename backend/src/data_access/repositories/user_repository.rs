use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    user::User,
};

pub(crate) const USERS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("users");
pub(crate) const EMAIL_INDEX: TableDefinition<&str, u64> = TableDefinition::new("email_index");

record!(User, USERS_TABLE);

pub struct UserRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> UserRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<User>, DataError> {
        self.uow.find(id)
    }

    /// Case-insensitive lookup through the email index.
    pub fn get_by_email(&self, email: &str) -> Result<Option<User>, DataError> {
        let key = User::normalize_email(email);
        match self.uow.lookup(EMAIL_INDEX, &key)? {
            Some(id) => self.get(id),
            None => Ok(None),
        }
    }

    pub fn get_all(&self) -> Result<Vec<User>, DataError> {
        self.uow.all()
    }

    pub fn is_empty(&self) -> Result<bool, DataError> {
        self.uow.is_empty::<User>()
    }

    /// Callers check for an existing email first; the index keeps the last writer.
    pub fn add(&self, user: &mut User) -> Result<u64, DataError> {
        let id = self.uow.insert(user)?;
        let mut index = self.uow.write_txn()?.open_table(EMAIL_INDEX)?;
        index.insert(user.email.as_str(), id)?;
        Ok(id)
    }

    pub fn update(&self, user: &User) -> Result<(), DataError> {
        self.uow.put(user)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        let Some(user) = self.get(id)? else {
            return Ok(false);
        };
        {
            let mut index = self.uow.write_txn()?.open_table(EMAIL_INDEX)?;
            index.remove(user.email.as_str())?;
        }
        self.uow.remove::<User>(id)
    }
}
