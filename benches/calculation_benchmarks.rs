//! Performance benchmarks for the salary calculator.
//!
//! Covers the single calculation, deduction evaluation on its own, and a
//! batch of packages across the tax brackets.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use salary_calculator::calculation::TaxCalculator;
use salary_calculator::config::ConfigLoader;
use salary_calculator::models::PayFrequency;

/// Creates a calculator from the shipped settings file.
fn create_test_calculator() -> TaxCalculator {
    let loader = ConfigLoader::load("./config/salary.yaml").expect("Failed to load config");
    TaxCalculator::new(loader.tax().clone())
}

fn bench_single_calculation(c: &mut Criterion) {
    let calculator = create_test_calculator();
    let salary = Decimal::from(65_000);

    c.bench_function("single_calculation", |b| {
        b.iter(|| {
            calculator
                .calculate(black_box(salary), black_box(PayFrequency::Monthly))
                .unwrap()
        })
    });
}

fn bench_deductions(c: &mut Criterion) {
    let calculator = create_test_calculator();
    let taxable_income = calculator.split_income(Decimal::from(65_000)).taxable_income;

    c.bench_function("deductions", |b| {
        b.iter(|| calculator.calculate_deductions(black_box(taxable_income)).unwrap())
    });
}

fn bench_batch(c: &mut Criterion) {
    let calculator = create_test_calculator();

    let mut group = c.benchmark_group("batch");
    for count in [100usize, 1000] {
        // packages spread from 10k to 300k so every bracket is hit
        let salaries: Vec<Decimal> = (0..count)
            .map(|i| Decimal::from(10_000 + (i as u64 * 290_000) / count as u64))
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &salaries, |b, salaries| {
            b.iter(|| {
                for salary in salaries {
                    for frequency in PayFrequency::ALL {
                        calculator.calculate(black_box(*salary), frequency).unwrap();
                    }
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_calculation, bench_deductions, bench_batch);
criterion_main!(benches);
