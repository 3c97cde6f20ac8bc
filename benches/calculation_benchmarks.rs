//! Performance benchmarks for the Commission Engine.
//!
//! Covers the pure rule functions directly and the `/report` endpoint through
//! the router, including a batch of mixed submissions.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use commission_engine::api::{AppState, create_router};
use commission_engine::calculation::{compute_bonus, compute_commission};
use commission_engine::config::ConfigLoader;
use commission_engine::models::{CommissionRequest, PerformanceMetrics, PlanKind};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(&config)
}

fn create_request(plan: PlanKind, annual: &str) -> CommissionRequest {
    CommissionRequest {
        plan,
        product: None,
        state: "TX".to_string(),
        age: 45,
        monthly_premium: None,
        annual_premium: Some(Decimal::from_str(annual).unwrap()),
        is_aep: false,
    }
}

fn create_report_body(i: usize) -> String {
    let plan = PlanKind::KNOWN[i % PlanKind::KNOWN.len()].id().to_string();
    serde_json::json!({
        "client": { "full_name": format!("Client {:04}", i) },
        "policy": {
            "plan": plan,
            "state": "TX",
            "age": 40 + (i % 40),
            "monthly_premium": format!("{}.{:02}", 50 + i % 400, i % 100),
            "is_aep": i % 2 == 0
        },
        "metrics": {
            "total_apps": i % 400,
            "ancillary_attach": (i % 25).to_string(),
            "closing_rate": (i % 30).to_string(),
            "placement_rate": "80",
            "compliance_rate": "90"
        }
    })
    .to_string()
}

fn bench_compute_commission(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_commission");

    for plan in [PlanKind::MaMapd, PlanKind::UhoneHip, PlanKind::MedSupp] {
        let request = create_request(plan.clone(), "1234.56");
        group.bench_with_input(BenchmarkId::new("plan", plan.id()), &request, |b, request| {
            b.iter(|| black_box(compute_commission(black_box(request))))
        });
    }

    group.finish();
}

fn bench_compute_bonus(c: &mut Criterion) {
    let metrics = PerformanceMetrics {
        total_apps: 210,
        ancillary_attach: Decimal::from(13),
        closing_rate: Decimal::from(19),
        placement_rate: Decimal::from(80),
        compliance_rate: Decimal::from(90),
    };

    c.bench_function("compute_bonus_aep", |b| {
        b.iter(|| black_box(compute_bonus(black_box(&metrics), true)))
    });
}

fn bench_report_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_report_body(1);

    c.bench_function("report_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/report")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

fn bench_report_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let requests: Vec<String> = (0..100).map(create_report_body).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("report_batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(requests.len());
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/report")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_commission,
    bench_compute_bonus,
    bench_report_endpoint,
    bench_report_batch_100,
);
criterion_main!(benches);
