//! Model - record lifecycle and linear-scan queries.

use futures::future::join_all;
use tracing::debug;
use uuid::Uuid;

use crate::error::ModelError;
use crate::query::{FindOptions, Query};
use crate::schema::Schema;
use crate::store::HashStore;
use crate::value::Fields;

use super::report::{BatchFailure, DeleteReport, UpdateReport};
use super::Record;

/// A named collection of records sharing one schema, bound to a store
/// handle owned by the caller.
///
/// Records are hashes at `<model>:<id>`; live ids are registered in the
/// `<model>:all` set. The mapper holds no locks: concurrent operations on
/// the same id interleave arbitrarily (last write wins on hash fields;
/// registry add/remove are idempotent).
pub struct Model<S> {
    name: String,
    schema: Schema,
    store: S,
}

impl<S: HashStore> Model<S> {
    /// Bind `schema` to the records named by `name` in `store`.
    pub fn new(store: S, name: impl Into<String>, schema: Schema) -> Self {
        Model {
            name: name.into(),
            schema,
            store,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    fn record_key(&self, id: &str) -> String {
        format!("{}:{}", self.name, id)
    }

    fn registry_key(&self) -> String {
        format!("{}:all", self.name)
    }

    /// Validate `data`, write it as a fresh record under a generated id,
    /// register the id, and return the record as read back from the
    /// store.
    ///
    /// Two store writes (hash, then registry set). Undeclared fields are
    /// dropped; nothing but the generated id is unique.
    pub async fn create(&self, data: &Fields) -> Result<Record, ModelError> {
        let id = Uuid::new_v4().to_string();
        let mut fields = vec![("id".to_string(), id.clone())];
        fields.extend(self.schema.validate(data)?);

        self.store
            .hash_write(&self.record_key(&id), &fields)
            .await?;
        self.store.set_add(&self.registry_key(), &id).await?;
        debug!(model = %self.name, %id, "created record");

        // Read back what was written; fall back to the written fields if
        // the record was deleted concurrently.
        let record = self.find_by_id(&id).await?;
        Ok(record.unwrap_or_else(|| fields.into_iter().collect()))
    }

    /// Read one record by id. An empty hash reads as absent.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Record>, ModelError> {
        let record = self.store.hash_read_all(&self.record_key(id)).await?;
        Ok(if record.is_empty() { None } else { Some(record) })
    }

    /// Scan every registered record, keep those matching `query`, then
    /// shape the result per `options`: sort, then skip, then limit.
    ///
    /// Always a full scan over the registry set; any single read failure
    /// fails the whole call.
    pub async fn find(
        &self,
        query: &Query,
        options: &FindOptions,
    ) -> Result<Vec<Record>, ModelError> {
        let ids = self.store.set_members(&self.registry_key()).await?;
        let reads = join_all(ids.iter().map(|id| self.find_by_id(id))).await;

        let mut matches = Vec::new();
        for read in reads {
            if let Some(record) = read? {
                if query.matches(&record) {
                    matches.push(record);
                }
            }
        }
        debug!(
            model = %self.name,
            scanned = ids.len(),
            matched = matches.len(),
            "scan complete"
        );

        if let Some(sort) = &options.sort {
            matches.sort_by(|a, b| {
                sort.compare(
                    a.get(&sort.field).map(String::as_str),
                    b.get(&sort.field).map(String::as_str),
                )
            });
        }

        let limit = options.limit.unwrap_or(usize::MAX);
        Ok(matches.into_iter().skip(options.skip).take(limit).collect())
    }

    /// First record matching `query`, if any.
    pub async fn find_one(&self, query: &Query) -> Result<Option<Record>, ModelError> {
        let result = self.find(query, &FindOptions::new().limit(1)).await?;
        Ok(result.into_iter().next())
    }

    /// Merge the validated fields of `update` onto the first record
    /// matching `query`. Returns whether a record was found.
    ///
    /// `update` is only validated once a match exists, so a non-matching
    /// query returns `false` even for an invalid update.
    pub async fn update_one(&self, query: &Query, update: &Fields) -> Result<bool, ModelError> {
        let Some(record) = self.find_one(query).await? else {
            return Ok(false);
        };
        let fields = self.schema.validate(update)?;
        let Some(id) = record.get("id") else {
            return Ok(false);
        };
        if !fields.is_empty() {
            self.store.hash_write(&self.record_key(id), &fields).await?;
        }
        debug!(model = %self.name, %id, "updated record");
        Ok(true)
    }

    /// Merge the validated fields of `update` onto every record matching
    /// `query`, fanning the writes out concurrently.
    ///
    /// Not transactional: writes that complete stay written even when
    /// others fail; per-record failures are reported in the returned
    /// [`UpdateReport`].
    pub async fn update_many(
        &self,
        query: &Query,
        update: &Fields,
    ) -> Result<UpdateReport, ModelError> {
        let records = self.find(query, &FindOptions::new()).await?;
        let fields = self.schema.validate(update)?;
        let ids: Vec<String> = records
            .iter()
            .filter_map(|record| record.get("id").cloned())
            .collect();

        let writes = ids.iter().map(|id| {
            let key = self.record_key(id);
            let fields = &fields;
            async move {
                if fields.is_empty() {
                    return Ok(());
                }
                self.store.hash_write(&key, fields).await
            }
        });
        let outcomes = join_all(writes).await;

        let mut report = UpdateReport::default();
        for (id, outcome) in ids.into_iter().zip(outcomes) {
            match outcome {
                Ok(()) => report.modified += 1,
                Err(error) => report.failures.push(BatchFailure { id, error }),
            }
        }
        debug!(
            model = %self.name,
            modified = report.modified,
            failed = report.failures.len(),
            "update_many complete"
        );
        Ok(report)
    }

    /// Delete the first record matching `query`: hash key removed, id
    /// deregistered. Returns whether a record was found.
    pub async fn delete_one(&self, query: &Query) -> Result<bool, ModelError> {
        let Some(record) = self.find_one(query).await? else {
            return Ok(false);
        };
        let Some(id) = record.get("id") else {
            return Ok(false);
        };
        self.store.key_delete(&self.record_key(id)).await?;
        self.store.set_remove(&self.registry_key(), id).await?;
        debug!(model = %self.name, %id, "deleted record");
        Ok(true)
    }

    /// Delete every record matching `query`, fanning out concurrently.
    ///
    /// Each record's hash delete and registry removal run in order inside
    /// its own unit; completed deletions stand even when others fail (see
    /// [`DeleteReport`]).
    pub async fn delete_many(&self, query: &Query) -> Result<DeleteReport, ModelError> {
        let records = self.find(query, &FindOptions::new()).await?;
        let ids: Vec<String> = records
            .iter()
            .filter_map(|record| record.get("id").cloned())
            .collect();
        let registry = self.registry_key();

        let deletions = ids.iter().map(|id| {
            let key = self.record_key(id);
            let registry = registry.as_str();
            async move {
                self.store.key_delete(&key).await?;
                self.store.set_remove(registry, id).await
            }
        });
        let outcomes = join_all(deletions).await;

        let mut report = DeleteReport::default();
        for (id, outcome) in ids.into_iter().zip(outcomes) {
            match outcome {
                Ok(()) => report.deleted += 1,
                Err(error) => report.failures.push(BatchFailure { id, error }),
            }
        }
        debug!(
            model = %self.name,
            deleted = report.deleted,
            failed = report.failures.len(),
            "delete_many complete"
        );
        Ok(report)
    }

    /// Number of records matching `query`. Always a full scan; limit and
    /// skip play no part.
    pub async fn count_documents(&self, query: &Query) -> Result<usize, ModelError> {
        Ok(self.find(query, &FindOptions::new()).await?.len())
    }
}
