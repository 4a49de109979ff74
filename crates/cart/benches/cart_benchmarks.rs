use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::sync::Arc;

use shopcart_cart::CartManager;
use shopcart_catalog::{Item, ItemCatalog};
use shopcart_events::TracingCartEventLog;

/// Catalog + cart with `lines` distinct items, each in the cart once.
///
/// Events go to tracing with no subscriber installed, so memory stays flat.
fn filled_cart(lines: usize) -> CartManager {
    let catalog = Arc::new(ItemCatalog::new());
    for i in 0..lines {
        let sku = format!("SKU{i:05}");
        catalog
            .add_item(Item::new(sku.as_str(), "Bench Item", 1.0 + i as f64))
            .unwrap();
    }
    let cart = CartManager::new(catalog, Arc::new(TracingCartEventLog::new()));
    for i in 0..lines {
        cart.add_item_to_cart(&format!("SKU{i:05}"), 3).unwrap();
    }
    cart
}

fn bench_calculate_total(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_total");

    for lines in [10usize, 100, 1_000] {
        let cart = filled_cart(lines);
        group.throughput(Throughput::Elements(lines as u64));

        group.bench_with_input(BenchmarkId::new("no_discount", lines), &lines, |b, _| {
            b.iter(|| black_box(cart.calculate_total(None).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("discount10", lines), &lines, |b, _| {
            b.iter(|| black_box(cart.calculate_total(Some("DISCOUNT10")).unwrap()));
        });
    }

    group.finish();
}

fn bench_add_remove_cycle(c: &mut Criterion) {
    let catalog = Arc::new(ItemCatalog::new());
    catalog.add_item(Item::new("CYCLE", "Cycle", 5.0)).unwrap();
    let cart = CartManager::new(catalog, Arc::new(TracingCartEventLog::new()));

    c.bench_function("add_remove_cycle", |b| {
        b.iter(|| {
            cart.add_item_to_cart(black_box("CYCLE"), 2).unwrap();
            cart.remove_item_from_cart(black_box("CYCLE")).unwrap();
        });
    });
}

criterion_group!(benches, bench_calculate_total, bench_add_remove_cycle);
criterion_main!(benches);
