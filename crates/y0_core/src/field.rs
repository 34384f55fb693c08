use tracing::debug;

use crate::error::CoreError;
use crate::store::{ByteStore, LeScalar};

/// A scalar bound to an absolute offset in a [`ByteStore`].
///
/// The value is read once when bound. `set` writes through to the store
/// before updating the cached copy, so the cache never disagrees with the
/// bytes at `offset`. Range policy is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<T: LeScalar> {
    offset: usize,
    value: T,
}

impl<T: LeScalar> Field<T> {
    pub fn bind(store: &ByteStore, offset: usize) -> Result<Self, CoreError> {
        Ok(Self {
            offset,
            value: store.read(offset)?,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn set(&mut self, store: &mut ByteStore, value: T) -> Result<(), CoreError> {
        store.write(self.offset, value)?;
        debug!(offset = self.offset, ?value, "field written");
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Field;
    use crate::store::ByteStore;

    #[test]
    fn set_writes_through_immediately() {
        let mut store = ByteStore::new(vec![0u8; 16]);
        store.write(8, 7u64).expect("seed write should fit");

        let mut money = Field::<u64>::bind(&store, 8).expect("field should bind");
        assert_eq!(money.get(), 7);

        money.set(&mut store, 1_000_000).expect("set should fit");
        assert_eq!(money.get(), 1_000_000);
        assert_eq!(store.read::<u64>(8).expect("u64 should read"), 1_000_000);
    }

    #[test]
    fn failed_bind_reports_out_of_bounds() {
        let store = ByteStore::new(vec![0u8; 4]);
        assert!(Field::<u64>::bind(&store, 0).is_err());
    }
}
