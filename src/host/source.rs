//! Host data interface abstraction.
//!
//! The plugin reads everything it knows about the document through the
//! [`VariableSource`] trait. The host runtime serves these calls one at a time
//! on a single thread, so the trait is synchronous and the session issues its
//! lookups sequentially to keep one consistent read snapshot.

use crate::domain::error::Result;
use crate::domain::{Collection, Variable};
use indexmap::IndexMap;

/// Read-only access to the host document's variables and collections.
///
/// Implementations must not mutate the document. Every method may be called
/// repeatedly; a session reloads from the source on each `Init` event.
pub trait VariableSource {
    /// Enumerates all local variables of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the host data cannot be read.
    fn local_variables(&self) -> Result<Vec<Variable>>;

    /// Looks up a variable collection by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the host data cannot be read. An unknown id is not an
    /// error and yields `Ok(None)`.
    fn collection_by_id(&self, id: &str) -> Result<Option<Collection>>;
}

/// Builds the id-to-name map of every collection referenced by `variables`.
///
/// Keys keep the order in which collection ids first appear in `variables`, so
/// the first entry is the collection a fresh session selects. A collection the
/// host cannot resolve is listed under its id.
///
/// # Errors
///
/// Propagates host lookup failures.
pub fn list_collections(
    source: &dyn VariableSource,
    variables: &[Variable],
) -> Result<IndexMap<String, String>> {
    let mut collections = IndexMap::new();

    for variable in variables {
        let collection_id = &variable.variable_collection_id;
        if collections.contains_key(collection_id) {
            continue;
        }
        let name = source
            .collection_by_id(collection_id)?
            .map_or_else(|| collection_id.clone(), |collection| collection.name);
        collections.insert(collection_id.clone(), name);
    }

    tracing::debug!(collection_count = collections.len(), "collections listed");
    Ok(collections)
}

/// Builds the mode-id-to-name map of one collection, in the host's mode order.
///
/// An unknown collection yields an empty map.
///
/// # Errors
///
/// Propagates host lookup failures.
pub fn modes_of_collection(
    source: &dyn VariableSource,
    collection_id: &str,
) -> Result<IndexMap<String, String>> {
    let modes: IndexMap<String, String> = source
        .collection_by_id(collection_id)?
        .map(|collection| {
            collection
                .modes
                .into_iter()
                .map(|mode| (mode.mode_id, mode.name))
                .collect()
        })
        .unwrap_or_default();

    tracing::debug!(collection_id = %collection_id, mode_count = modes.len(), "modes listed");
    Ok(modes)
}
