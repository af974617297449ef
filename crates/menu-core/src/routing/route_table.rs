//! Lookup-table route resolver fed from the `[routes]` config section

use std::collections::HashMap;

use tracing::error;

use super::RouteResolver;
use crate::error::DomainError;

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.insert(name, path);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.routes.insert(name.into(), path.into());
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<N: Into<String>, P: Into<String>> FromIterator<(N, P)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for (name, path) in iter {
            table.insert(name, path);
        }
        table
    }
}

impl RouteResolver for RouteTable {
    fn resolve(&self, name: &str) -> Result<String, DomainError> {
        self.routes.get(name).cloned().ok_or_else(|| {
            error!("No route named '{}' in the route table", name);
            DomainError::UnknownRoute(name.to_string())
        })
    }
}
