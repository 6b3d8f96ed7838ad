//! Query lookup abstraction used by conflict resolution

use crate::experiment::{Experiment, Query, QueryId};
use std::collections::HashMap;

/// Resolves a query ID to the query record
///
/// A missing ID is not an error; callers skip it.
pub trait QueryLookup {
    fn lookup(&self, id: &QueryId) -> Option<&Query>;
}

impl QueryLookup for [Query] {
    fn lookup(&self, id: &QueryId) -> Option<&Query> {
        self.iter().find(|q| &q.id == id)
    }
}

impl QueryLookup for Vec<Query> {
    fn lookup(&self, id: &QueryId) -> Option<&Query> {
        self.as_slice().lookup(id)
    }
}

impl QueryLookup for HashMap<QueryId, Query> {
    fn lookup(&self, id: &QueryId) -> Option<&Query> {
        self.get(id)
    }
}

impl QueryLookup for Experiment {
    fn lookup(&self, id: &QueryId) -> Option<&Query> {
        self.query(id)
    }
}

impl<T: QueryLookup + ?Sized> QueryLookup for &T {
    fn lookup(&self, id: &QueryId) -> Option<&Query> {
        (**self).lookup(id)
    }
}
