mod common;

use std::sync::Arc;
use std::time::Duration;
use vhost_tls::collections::structs::collection_store::CollectionStore;
use vhost_tls::config::enums::collection_selector::CollectionSelector;
use vhost_tls::server::enums::bootstrap_error::BootstrapError;
use vhost_tls::server::enums::server_mode::ServerMode;
use vhost_tls::server::server::status_routes;
use vhost_tls::server::structs::bootstrap_plan::BootstrapPlan;
use vhost_tls::server::structs::server_bootstrap::ServerBootstrap;
use vhost_tls::ssl::enums::resolution::Resolution;
use vhost_tls::store::structs::file_object_store::FileObjectStore;

#[tokio::test]
async fn test_wildcard_collection_serves_subdomains() {
    let collections = common::create_memory_collections();
    collections.set("acme-1", common::create_collection(&["*.iobroker.net"])).await.unwrap();

    let bootstrap = ServerBootstrap::from_store(common::create_web_config(CollectionSelector::All, true), collections);
    let plan = bootstrap.prepare().await.unwrap();
    assert_eq!(plan.mode, ServerMode::CollectionsHttps);

    let resolver = plan.resolver();
    let resolution = resolver.resolve_server_name(Some("foo.iobroker.net")).unwrap();
    assert_eq!(resolution.collection_id(), Some("acme-1"));

    let deep = resolver.resolve_server_name(Some("a.b.iobroker.net")).unwrap();
    assert!(matches!(deep, Resolution::Fallback(_)));
}

#[tokio::test]
async fn test_empty_store_without_fallback_serves_plain_http() {
    let collections = common::create_memory_collections();
    let bootstrap = ServerBootstrap::from_store(common::create_web_config(CollectionSelector::All, false), collections);
    let plan = bootstrap.prepare().await.unwrap();
    assert_eq!(plan.mode, ServerMode::PlainHttp);
    assert!(plan.tls_config().unwrap().is_none());
}

#[tokio::test]
async fn test_missing_specific_collection_fails() {
    let collections = common::create_memory_collections();
    collections.set("other", common::create_collection(&["example.com"])).await.unwrap();
    let selector = CollectionSelector::Specific(String::from("specific-id"));
    let bootstrap = ServerBootstrap::from_store(common::create_web_config(selector, true), collections);
    match bootstrap.prepare().await {
        Err(BootstrapError::CollectionNotFound(id)) => assert_eq!(id, "specific-id"),
        other => panic!("unexpected bootstrap outcome: {:?}", other.map(|plan| plan.mode)),
    }
}

#[tokio::test]
async fn test_removed_collection_does_not_affect_captured_snapshot() {
    let collections = common::create_memory_collections();
    collections.set("only", common::create_collection(&["example.com"])).await.unwrap();

    let bootstrap = ServerBootstrap::from_store(common::create_web_config(CollectionSelector::All, true), collections.clone());
    let mut plan = bootstrap.prepare().await.unwrap();
    let coordinator = plan.spawn_coordinator(Duration::ZERO).unwrap();
    let resolver = plan.resolver();

    let in_flight = plan.table.snapshot();
    collections.delete("only").await.unwrap();
    common::wait_for_version(&plan.table, 1).await;

    let captured = in_flight.get("example.com").unwrap();
    assert_eq!(captured.collection_id, "only");
    assert!(!captured.certified_key.cert.is_empty());

    let next = resolver.resolve_server_name(Some("example.com")).unwrap();
    assert!(matches!(next, Resolution::Fallback(_)));

    coordinator.abort();
}

#[tokio::test]
async fn test_burst_of_updates_converges_to_latest() {
    let collections = common::create_memory_collections();
    collections.set("a", common::create_collection(&["a.example.com"])).await.unwrap();

    let bootstrap = ServerBootstrap::from_store(common::create_web_config(CollectionSelector::All, false), collections.clone());
    let mut plan = bootstrap.prepare().await.unwrap();
    let coordinator = plan.spawn_coordinator(Duration::from_millis(20)).unwrap();

    for id in ["b", "c", "d"] {
        collections.set(id, common::create_collection(&[&format!("{}.example.com", id)])).await.unwrap();
    }
    collections.delete("a").await.unwrap();

    for _ in 0..300 {
        if plan.table.snapshot().collection_ids() == vec!["b", "c", "d"] {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(plan.table.snapshot().collection_ids(), vec!["b", "c", "d"]);
    coordinator.abort();
}

#[tokio::test]
async fn test_file_store_drives_bootstrap() {
    let (_dir, collections) = common::create_file_collections().await;
    collections.set("acme-1", common::create_collection(&["example.com", "*.example.com"])).await.unwrap();

    let bootstrap = ServerBootstrap::from_store(common::create_web_config(CollectionSelector::All, false), collections);
    let plan = bootstrap.prepare().await.unwrap();
    let resolution = plan.resolver().resolve_server_name(Some("www.example.com")).unwrap();
    assert!(matches!(resolution, Resolution::Wildcard(_)));
}

#[tokio::test]
async fn test_running_table_follows_external_imports() {
    let (dir, collections) = common::create_file_collections().await;
    collections.set("acme-1", common::create_collection(&["one.example.com"])).await.unwrap();
    let watched = Arc::new(CollectionStore::new(Arc::new(FileObjectStore::open_watched(dir.path()).await.unwrap())));

    let bootstrap = ServerBootstrap::from_store(common::create_web_config(CollectionSelector::All, false), watched);
    let mut plan = bootstrap.prepare().await.unwrap();
    let coordinator = plan.spawn_coordinator(Duration::ZERO).unwrap();

    collections.set("acme-2", common::create_collection(&["two.example.com"])).await.unwrap();
    for _ in 0..500 {
        if plan.table.snapshot().collection_ids() == vec!["acme-1", "acme-2"] {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    let resolution = plan.resolver().resolve_server_name(Some("two.example.com")).unwrap();
    assert!(matches!(resolution, Resolution::Exact(_)));
    coordinator.abort();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_start_binds_listener() {
    let collections = common::create_memory_collections();
    collections.set("acme-1", common::create_collection(&["example.com"])).await.unwrap();
    let bootstrap = ServerBootstrap::from_store(common::create_web_config(CollectionSelector::All, true), collections);

    let mut plan = bootstrap.prepare().await.unwrap();
    let routes = status_routes(plan.status());
    let running = bootstrap.start_plan(&mut plan, routes).unwrap();
    assert_eq!(running.mode, ServerMode::CollectionsHttps);
    assert!(running.coordinator.is_some());
    assert!(Arc::ptr_eq(&running.table, &plan.table));

    let handle = running.handle.clone();
    let server = tokio::spawn(running.run());
    handle.stop(false).await;
    assert!(server.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_start_rejects_bad_address() {
    let collections = common::create_memory_collections();
    let mut config = common::create_web_config(CollectionSelector::Disabled, true);
    config.bind_address = String::from("not-an-address");
    let bootstrap = ServerBootstrap::from_store(config, collections);
    let result = bootstrap.start(status_routes(BootstrapPlan::plain().status())).await;
    assert!(matches!(result, Err(BootstrapError::ListenerConstruction(_))));
}
