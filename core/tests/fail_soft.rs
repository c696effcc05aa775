//! Fail-soft behavior when the catalog host is unreachable.
//!
//! Binds a listener to reserve a port, drops it, then points the catalog at
//! the dead address: every fail-soft call must yield an empty list and every
//! strict call a `Transport` error. No call may panic or hang the caller
//! with retries.

use catalog_core::{Catalog, CatalogClient, CatalogError, Category, UreqTransport};

fn dead_catalog() -> Catalog<UreqTransport> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Catalog::new(
        CatalogClient::new(&format!("http://{addr}"), "test-key"),
        UreqTransport::new(),
    )
}

#[test]
fn unreachable_host_yields_empty_lists() {
    let catalog = dead_catalog();
    for category in Category::ALL {
        assert!(catalog.fetch_category(category).is_empty());
    }
    assert!(catalog.fetch_recommendations(550).is_empty());
    assert!(catalog.search("heat").is_empty());
}

#[test]
fn unreachable_host_is_a_transport_error_on_the_strict_surface() {
    let catalog = dead_catalog();
    assert!(matches!(
        catalog.try_fetch_category(Category::Popular),
        Err(CatalogError::Transport(_))
    ));
    assert!(matches!(
        catalog.try_search("heat"),
        Err(CatalogError::Transport(_))
    ));
}
