use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use procboard::model::{OrderStatus, PurchaseOrder};
use procboard::{filter, group_by_status, Query};

/// Seed a synthetic order book far beyond the dozens of records the
/// dashboards actually hold, so per-record cost stays visible.
fn make_orders(n: usize) -> Vec<PurchaseOrder> {
    let regions = ["North", "South", "East", "West", "Central"];
    let suppliers = [
        "Acme Supplies",
        "Global Materials",
        "Quality Products",
        "Prime Distributors",
        "Superior Goods",
    ];

    (0..n)
        .map(|i| PurchaseOrder {
            id: format!("PO-2023-{i:04}"),
            supplier_name: suppliers[i % suppliers.len()].to_string(),
            order_date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
            delivery_date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            status: OrderStatus::DOMAIN[i % OrderStatus::DOMAIN.len()],
            total: 1000.0 + i as f64,
            items: (i % 9 + 1) as u32,
            region: regions[i % regions.len()].to_string(),
        })
        .collect()
}

fn bench_filter_search(c: &mut Criterion) {
    let orders = make_orders(4096);
    let query = Query::builder().search("global").build().unwrap();

    let mut group = c.benchmark_group("filter");
    group.throughput(Throughput::Elements(orders.len() as u64));
    group.bench_function("search_substring", |b| {
        b.iter(|| filter(&orders, &query).unwrap())
    });
    group.finish();
}

fn bench_filter_clauses(c: &mut Criterion) {
    let orders = make_orders(4096);
    let query = Query::builder()
        .field("region", "East")
        .field("status", "in_transit")
        .build()
        .unwrap();

    let mut group = c.benchmark_group("filter");
    group.throughput(Throughput::Elements(orders.len() as u64));
    group.bench_function("exact_clauses", |b| {
        b.iter(|| filter(&orders, &query).unwrap())
    });
    group.finish();
}

fn bench_group_by_status(c: &mut Criterion) {
    let orders = make_orders(4096);

    let mut group = c.benchmark_group("group");
    group.throughput(Throughput::Elements(orders.len() as u64));
    group.bench_function("by_status", |b| {
        b.iter(|| group_by_status(&orders, OrderStatus::DOMAIN).unwrap())
    });
    group.finish();
}

criterion_group!(
    filtering,
    bench_filter_search,
    bench_filter_clauses,
    bench_group_by_status
);
criterion_main!(filtering);
