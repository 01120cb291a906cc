use domain::{CallContext, GatewayConnectionStats, GatewayIdentifiers};
use std::time::{Duration, Instant};

#[test]
fn unique_id_without_tenant_is_gateway_id() {
    let ids = GatewayIdentifiers::new("gateway-1");
    assert_eq!(ids.unique_id(), "gateway-1");
}

#[test]
fn unique_id_appends_tenant() {
    let ids = GatewayIdentifiers::with_tenant("gateway-1", "tenant-1");
    assert_eq!(ids.unique_id(), "gateway-1@tenant-1");

    let empty_tenant = GatewayIdentifiers::with_tenant("gateway-1", "");
    assert_eq!(empty_tenant.unique_id(), "gateway-1");
}

#[test]
fn unique_id_separator_in_parts_does_not_collide() {
    let embedded = GatewayIdentifiers::new("gw@tenant");
    let scoped = GatewayIdentifiers::with_tenant("gw", "tenant");
    assert_eq!(scoped.unique_id(), "gw@tenant");
    assert_eq!(embedded.unique_id(), "gw%40tenant");
    assert_ne!(embedded.unique_id(), scoped.unique_id());

    let escaped_literal = GatewayIdentifiers::new("gw%40tenant");
    assert_eq!(escaped_literal.unique_id(), "gw%2540tenant");
    assert_ne!(escaped_literal.unique_id(), embedded.unique_id());

    let split_left = GatewayIdentifiers::with_tenant("a@b", "c");
    let split_right = GatewayIdentifiers::with_tenant("a", "b@c");
    assert_ne!(split_left.unique_id(), split_right.unique_id());
}

#[test]
fn call_context_huge_timeout_means_no_deadline() {
    let ctx = CallContext::new("req-huge").with_timeout(Duration::MAX);
    assert!(ctx.deadline.is_none());
    assert!(!ctx.is_expired());
}

#[test]
fn call_context_deadline() {
    let ctx = CallContext::new("req-1");
    assert!(ctx.deadline.is_none());
    assert!(!ctx.is_expired());

    let ctx = CallContext::new("req-2").with_timeout(Duration::from_secs(60));
    assert!(!ctx.is_expired());

    let past = Instant::now() - Duration::from_millis(1);
    let ctx = CallContext::new("req-3").with_deadline(past);
    assert!(ctx.is_expired());
}

#[test]
fn stats_missing_categories_default() {
    let stats: GatewayConnectionStats =
        serde_json::from_str(r#"{"uplink":{"uplink_count":5}}"#).expect("parse");
    assert_eq!(stats.uplink.uplink_count, 5);
    assert!(stats.uplink.last_uplink_received_at_ms.is_none());
    assert_eq!(stats.downlink.downlink_count, 0);
    assert!(stats.status.protocol.is_empty());
    assert!(!stats.is_empty());
    assert!(GatewayConnectionStats::default().is_empty());
}
