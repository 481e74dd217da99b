use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crk_core::annotate::{annotate, annotate_inventory};
use crk_core::dialect_view::{dialect_view, OutputSchema};
use crk_core::inventory::{parse_inventory_toml, Inventory, DEFAULT_INVENTORY_TOML};
use crk_core::syllabic::Dialect;
use crk_core::table::Table;

static RANGES: &[(&str, u32, u32)] = &[
    ("vowels", 0x1401, 0x140B),
    ("t-series", 0x144C, 0x145F),
    ("th-series", 0x15A7, 0x15AD),
];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("inventory/parse", |b| {
        b.iter(|| parse_inventory_toml(DEFAULT_INVENTORY_TOML).unwrap());
    });
}

fn bench_annotate(c: &mut Criterion) {
    let inventory = Inventory::builtin();
    let mut group = c.benchmark_group("annotate/range");
    for &(label, first, last) in RANGES {
        let code_points: Vec<u32> = inventory
            .code_points()
            .into_iter()
            .filter(|cp| (first..=last).contains(cp))
            .collect();
        group.bench_with_input(
            BenchmarkId::new(label, code_points.len()),
            &code_points,
            |b, code_points| {
                b.iter(|| annotate(inventory, code_points.iter().copied()).unwrap());
            },
        );
    }
    group.finish();

    c.bench_function("annotate/inventory", |b| {
        b.iter(|| annotate_inventory(inventory).unwrap());
    });
}

fn bench_views(c: &mut Criterion) {
    let records = annotate_inventory(Inventory::builtin()).unwrap();
    let table = Table::from_records(&records);
    let mut group = c.benchmark_group("dialect_view");
    for dialect in Dialect::ALL {
        group.bench_with_input(BenchmarkId::new("current", dialect), &dialect, |b, &d| {
            b.iter(|| dialect_view(&table, d, OutputSchema::Current).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_annotate, bench_views);
criterion_main!(benches);
