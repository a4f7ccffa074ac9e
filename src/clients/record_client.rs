use std::fmt::Debug;

/// Trait for file-backed clients to inherit the standard lookup operation.
///
/// Implementors only say how to load every record and how to read a record's
/// id; `find` is provided as a full scan over `all`. Nothing is cached, so
/// each call sees the file as it is now.
pub trait RecordClient {
    /// The record type produced by this client.
    type Record;

    /// The identifier `find` matches on.
    type Id: PartialEq + Copy + Debug;

    /// The resource-specific error type.
    type Error;

    /// Load every record, in file order.
    fn all(&self) -> Result<Vec<Self::Record>, Self::Error>;

    /// The id of a loaded record.
    fn id_of(record: &Self::Record) -> Self::Id;

    /// Fetch the first record (in file order) with the given id.
    #[tracing::instrument(skip(self))]
    fn find(&self, id: Self::Id) -> Result<Option<Self::Record>, Self::Error> {
        tracing::debug!("Scanning records");
        Ok(self
            .all()?
            .into_iter()
            .find(|record| Self::id_of(record) == id))
    }
}
