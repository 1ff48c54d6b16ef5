use bike_rentals_dashboard::{ChartRenderer, ChartStyle, DailyLazyFrame, MonthlyLineChart};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::prelude::*;

/// Two years of synthetic daily rows shaped like the real day dataset.
fn synthetic_days() -> DataFrame {
    let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    let days = 731;

    let dates: Vec<String> = (0..days)
        .map(|i| (start + Duration::days(i)).format("%Y-%m-%d").to_string())
        .collect();
    let seasons: Vec<i64> = (0..days).map(|i| (i / 91) % 4 + 1).collect();
    let holidays: Vec<i64> = (0..days).map(|i| i64::from(i % 30 == 0)).collect();
    let temps: Vec<f64> = (0..days)
        .map(|i| 0.5 + 0.35 * ((i as f64) / 365.0 * std::f64::consts::TAU).sin())
        .collect();
    let counts: Vec<i64> = temps.iter().map(|t| (t * 8000.0) as i64 + 500).collect();

    df!(
        "dteday" => dates,
        "season" => seasons,
        "holiday" => holidays,
        "temp" => temps,
        "cnt" => counts,
    )
    .unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let raw = synthetic_days();
    let daily = DailyLazyFrame::from_raw(raw.clone()).unwrap();
    let thresholds = daily.temperature_thresholds().unwrap();

    c.bench_function("daily_from_raw", |b| {
        b.iter(|| DailyLazyFrame::from_raw(black_box(raw.clone())))
    });
    c.bench_function("temperature_thresholds", |b| {
        b.iter(|| black_box(&daily).temperature_thresholds())
    });
    c.bench_function("season_means", |b| b.iter(|| black_box(&daily).season_means()));
    c.bench_function("monthly_totals", |b| b.iter(|| black_box(&daily).monthly_totals()));
    c.bench_function("temperature_distributions", |b| {
        b.iter(|| black_box(&daily).temperature_distributions(&thresholds))
    });

    let monthly = MonthlyLineChart::new(daily.monthly_totals().unwrap());
    let style = ChartStyle::default();
    c.bench_function("render_monthly_line", |b| {
        b.iter(|| monthly.render_svg(black_box(&style)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
