//! Unit tests for the catalog store.

mod lookup_tests;

use wiremock::MockServer;

use super::CatalogStore;
use crate::test_fixtures::client_for;

fn store_for(server: &MockServer) -> CatalogStore {
    CatalogStore::new(client_for(server))
}
