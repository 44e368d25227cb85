use std::sync::Arc;

use confronto::{ComparisonSession, Confronto, ConfrontoError};
use confronto_core::{AssetId, CompareMetric};
use confronto_mock::MockConnector;

fn session() -> Arc<ComparisonSession> {
    let engine = Confronto::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    Arc::new(ComparisonSession::new(Arc::new(engine)))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn a_superseded_computation_is_discarded_not_applied() {
    let session = session();

    // First request is slow: the mock stalls 200ms on the "stall" asset.
    let slow = {
        let session = session.clone();
        tokio::spawn(async move {
            session
                .compare(
                    &AssetId::from("stall"),
                    &AssetId::from("bitcoin"),
                    CompareMetric::Price,
                )
                .await
        })
    };

    // Give the slow request time to take its generation, then supersede it.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    let fast = session
        .compare(
            &AssetId::from("ethereum"),
            &AssetId::from("bitcoin"),
            CompareMetric::Price,
        )
        .await;

    // The newer request lands; the older one must not.
    assert!(fast.is_ok());
    let slow = slow.await.unwrap();
    assert!(matches!(slow, Err(ConfrontoError::Superseded)));
}

#[tokio::test]
async fn sequential_requests_all_land() {
    let session = session();
    for _ in 0..3 {
        let m = session
            .compare(
                &AssetId::from("bitcoin"),
                &AssetId::from("ethereum"),
                CompareMetric::Price,
            )
            .await
            .unwrap();
        assert!(m.multiplier > 1.0);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn superseded_errors_beat_underlying_failures() {
    // Even when the stale computation itself failed (here: a provider
    // timeout), the caller sees `Superseded`: the failure belongs to inputs
    // nobody is looking at anymore.
    let engine = Confronto::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(std::time::Duration::from_millis(100))
        .build()
        .unwrap();
    let session = Arc::new(ComparisonSession::new(Arc::new(engine)));

    let slow = {
        let session = session.clone();
        tokio::spawn(async move {
            session
                .compare(
                    &AssetId::from("stall"),
                    &AssetId::from("stall"),
                    CompareMetric::Price,
                )
                .await
        })
    };
    tokio::time::sleep(std::time::Duration::from_millis(30)).await;
    let _ = session
        .compare(
            &AssetId::from("bitcoin"),
            &AssetId::from("ethereum"),
            CompareMetric::Price,
        )
        .await;

    let slow = slow.await.unwrap();
    assert!(matches!(slow, Err(ConfrontoError::Superseded)));
}
