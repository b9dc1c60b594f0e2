use std::hint::black_box;

use bootstrap_nav_menu::{ItemSpacing, MenuItem, NavMenu, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn example_items() -> Vec<MenuItem<String>> {
    vec![
        MenuItem::new_leaf("home".to_owned(), "Home").url("/"),
        MenuItem::new(
            "products".to_owned(),
            "Products",
            vec![
                MenuItem::new_leaf("alpha".to_owned(), "Alpha").url("/products/alpha"),
                MenuItem::new(
                    "beta".to_owned(),
                    "Beta",
                    vec![
                        MenuItem::new_leaf("cloud".to_owned(), "Cloud").url("/products/beta/cloud"),
                        MenuItem::new_leaf("on-prem".to_owned(), "On-Prem")
                            .url("/products/beta/on-prem"),
                    ],
                )
                .expect("all item identifiers are unique"),
                MenuItem::new_leaf("gamma".to_owned(), "Gamma").url("/products/gamma"),
            ],
        )
        .expect("all item identifiers are unique"),
        MenuItem::new_leaf("pricing".to_owned(), "Pricing").url("/pricing"),
        MenuItem::new_leaf("contact".to_owned(), "Contact").url("/contact"),
    ]
}

/// One hundred top-level sections with ten entries each.
fn wide_items() -> Vec<MenuItem<String>> {
    (0..100)
        .map(|section| {
            let children = (0..10)
                .map(|entry| {
                    MenuItem::new_leaf(format!("s{section}-e{entry}"), format!("Entry {entry}"))
                        .url(format!("/s{section}/e{entry}"))
                })
                .collect();
            MenuItem::new(format!("s{section}"), format!("Section {section}"), children)
                .expect("all item identifiers are unique")
        })
        .collect()
}

fn init(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("init");
    group.throughput(Throughput::Elements(1));

    group.bench_function("empty", |bencher| {
        bencher.iter(|| {
            black_box(NavMenu::<String>::new(black_box(vec![])).unwrap());
        });
    });

    group.bench_function("example-items", |bencher| {
        bencher.iter(|| {
            black_box(NavMenu::new(black_box(example_items())).unwrap());
        });
    });

    group.bench_function("wide-items", |bencher| {
        bencher.iter(|| {
            black_box(NavMenu::new(black_box(wide_items())).unwrap());
        });
    });

    group.finish();
}

fn renders(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let menu = NavMenu::new(example_items()).unwrap();
    group.bench_function("example-items", |bencher| {
        bencher.iter(|| {
            black_box(black_box(&menu).render());
        });
    });

    let compact = NavMenu::new(example_items())
        .unwrap()
        .options(RenderOptions::new().item_spacing(ItemSpacing::Discard));
    group.bench_function("example-items-compact", |bencher| {
        bencher.iter(|| {
            black_box(black_box(&compact).render());
        });
    });

    let wide = NavMenu::new(wide_items()).unwrap();
    group.bench_function("wide-items", |bencher| {
        bencher.iter(|| {
            black_box(black_box(&wide).render());
        });
    });

    group.finish();
}

criterion_group!(benches, init, renders);
criterion_main!(benches);
