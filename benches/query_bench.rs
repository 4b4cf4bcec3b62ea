//! Benchmarks for the report queries
//!
//! Run with: cargo bench --bench query_bench

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use northwind_reports::query::{
    city_statistics, customer_activity, first_order_dates_ranked, products_by_category_and_stock,
    suppliers_by_location_grouped, suppliers_by_location_nested,
};
use northwind_reports::{Customer, Dataset, Order, Product, Supplier};
use rust_decimal::Decimal;

const CITIES: [(&str, &str); 6] = [
    ("Berlin", "Germany"),
    ("London", "UK"),
    ("Paris", "France"),
    ("Madrid", "Spain"),
    ("Portland", "USA"),
    ("México D.F.", "Mexico"),
];

/// Generate a synthetic dataset with `count` customers
fn generate_dataset(count: usize) -> Dataset {
    let customers = (0..count)
        .map(|i| {
            let (city, country) = CITIES[i % CITIES.len()];
            let orders = (0..(i % 12))
                .map(|n| {
                    let date = NaiveDate::from_ymd_opt(1996 + (n % 3) as i32, 1 + (n % 12) as u32, 1 + (i % 28) as u32)
                        .unwrap();
                    Order::new(n as u32, date, Decimal::new((i * 37 + n * 113) as i64 % 500_000, 2))
                })
                .collect();
            Customer::new(format!("C{:05}", i), city, country).with_orders(orders)
        })
        .collect();

    let suppliers = (0..count / 4)
        .map(|i| {
            let (city, country) = CITIES[(i * 5) % CITIES.len()];
            Supplier::new(format!("Supplier {}", i), city, country)
        })
        .collect();

    let products = (0..count)
        .map(|i| {
            Product::new(
                i as u32,
                format!("Product {}", i),
                format!("Category {}", i % 8),
                Decimal::new((i * 731) as i64 % 10_000, 2),
                (i % 5) as i32,
            )
        })
        .collect();

    Dataset::new(customers, products, suppliers).unwrap()
}

/// Compare the two customer/supplier formulations
fn bench_supplier_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("supplier_join");

    for count in [100, 1000, 5000].iter() {
        let dataset = generate_dataset(*count);
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("nested", count), &dataset, |b, dataset| {
            b.iter(|| black_box(suppliers_by_location_nested(dataset).count()));
        });
        group.bench_with_input(BenchmarkId::new("grouped", count), &dataset, |b, dataset| {
            b.iter(|| black_box(suppliers_by_location_grouped(dataset).count()));
        });
    }

    group.finish();
}

/// Benchmark the grouping and sorting queries
fn bench_grouping(c: &mut Criterion) {
    let dataset = generate_dataset(5000);
    let mut group = c.benchmark_group("grouping");

    group.bench_function("ranked_first_orders", |b| {
        b.iter(|| black_box(first_order_dates_ranked(&dataset)));
    });
    group.bench_function("category_and_stock", |b| {
        b.iter(|| black_box(products_by_category_and_stock(&dataset)));
    });
    group.bench_function("city_statistics", |b| {
        b.iter(|| black_box(city_statistics(&dataset)));
    });
    group.bench_function("customer_activity", |b| {
        b.iter(|| black_box(customer_activity(&dataset).count()));
    });

    group.finish();
}

criterion_group!(benches, bench_supplier_join, bench_grouping);
criterion_main!(benches);
