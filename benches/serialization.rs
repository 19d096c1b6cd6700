use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use toon_codec::{decode, encode, from_str, to_string, to_value, DecodeOptions, EncodeOptions};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn sample_products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{i}"),
            name: format!("Product {i}"),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = sample_user();
    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let toon = "id: 123\nname: Alice\nemail: alice@example.com\nactive: true";
    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(toon)))
    });
}

fn benchmark_tabular_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabular_array");
    for size in [10u32, 100, 500] {
        let products = sample_products(size);
        let toon = to_string(&products).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &products, |b, p| {
            b.iter(|| to_string(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &toon, |b, toon| {
            b.iter(|| from_str::<Vec<Product>>(black_box(toon)))
        });
    }
    group.finish();
}

fn benchmark_value_codec(c: &mut Criterion) {
    let value = to_value(&sample_products(100)).unwrap();
    let text = encode(&value, &EncodeOptions::default()).unwrap();

    let mut group = c.benchmark_group("value_codec");
    group.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&value), &EncodeOptions::default()))
    });
    group.bench_function("decode_strict", |b| {
        b.iter(|| decode(black_box(&text), &DecodeOptions::default()))
    });
    group.bench_function("decode_lenient", |b| {
        let options = DecodeOptions::new().with_strict(false);
        b.iter(|| decode(black_box(&text), &options))
    });
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = sample_user();
    let mut group = c.benchmark_group("comparison");

    group.bench_function("toon_serialize", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    let toon_str = to_string(&user).unwrap();
    let json_str = serde_json::to_string(&user).unwrap();

    group.bench_function("toon_deserialize", |b| {
        b.iter(|| from_str::<User>(black_box(&toon_str)))
    });
    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<User>(black_box(&json_str)))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_tabular_arrays,
    benchmark_value_codec,
    benchmark_comparison_with_json
);
criterion_main!(benches);
