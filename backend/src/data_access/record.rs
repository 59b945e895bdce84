use redb::TableDefinition;
use serde::{de::DeserializeOwned, Serialize};

/// A row stored as JSON under its `u64` id.
pub trait Record: Serialize + DeserializeOwned {
    const TABLE: TableDefinition<'static, u64, &'static [u8]>;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

/// Implements [`Record`] for a model with a public `id: u64` field.
macro_rules! record {
    ($model:ty, $table:expr) => {
        impl $crate::data_access::record::Record for $model {
            const TABLE: redb::TableDefinition<'static, u64, &'static [u8]> = $table;

            fn id(&self) -> u64 {
                self.id
            }

            fn set_id(&mut self, id: u64) {
                self.id = id;
            }
        }
    };
}

pub(crate) use record;
