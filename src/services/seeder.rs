use bson::doc;
use mongodb::Database;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Collection name cannot be empty")]
    EmptyCollectionName,
    #[error("Write to collection '{collection}' failed")]
    Write {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },
}

/// Replaces the whole content of `collection_name` with `records`.
///
/// Deletes every document, then inserts `records` in one ordered batch and
/// returns how many were inserted. There is no transaction: if the insert
/// fails the collection is left empty or partially filled.
pub async fn replace_collection<T>(
    db: &Database,
    collection_name: &str,
    records: &[T],
) -> Result<u64, SeedError>
where
    T: Serialize + Send + Sync,
{
    if collection_name.is_empty() {
        return Err(SeedError::EmptyCollectionName);
    }

    let write_error = |source: mongodb::error::Error| SeedError::Write {
        collection: collection_name.to_string(),
        source,
    };

    let collection = db.collection::<T>(collection_name);

    let deleted = collection
        .delete_many(doc! {})
        .await
        .map_err(write_error)?;
    debug!(collection = collection_name, deleted = deleted.deleted_count, "Cleared collection");

    // insert_many rejects an empty batch
    if records.is_empty() {
        return Ok(0);
    }

    let inserted = collection
        .insert_many(records)
        .await
        .map_err(write_error)?;
    let count = inserted.inserted_ids.len() as u64;
    debug!(collection = collection_name, inserted = count, "Inserted records");

    Ok(count)
}
