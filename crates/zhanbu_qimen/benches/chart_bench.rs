use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use zhanbu_almanac::{AlmanacRecord, FixedAlmanac, FourPillars, LunarDate};
use zhanbu_core::{SolarTerm, StemBranch};
use zhanbu_qimen::{ChartRequest, PillarMethod, compute_chart};

fn fixture() -> (FixedAlmanac, ChartRequest) {
    let record = AlmanacRecord {
        pillars: FourPillars {
            year: StemBranch::from_label("乙巳").unwrap(),
            month: StemBranch::from_label("癸未").unwrap(),
            day: StemBranch::from_label("癸巳").unwrap(),
            hour: StemBranch::from_label("己未").unwrap(),
        },
        prev_term: Some(SolarTerm::DaShu),
        month_term: Some(SolarTerm::XiaoShu),
        lunar: LunarDate::new(2025, 6, 11, false).unwrap(),
    };
    let instant = NaiveDate::from_ymd_opt(2025, 8, 4)
        .unwrap()
        .and_hms_opt(14, 25, 0)
        .unwrap();
    let mut request = ChartRequest::new(instant);
    request.method = PillarMethod::Hour;
    (FixedAlmanac::new(record), request)
}

fn chart_benchmark(c: &mut Criterion) {
    let (almanac, request) = fixture();
    c.bench_function("hour_chart", |b| {
        b.iter(|| compute_chart(black_box(&almanac), black_box(&request)))
    });
}

criterion_group!(benches, chart_benchmark);
criterion_main!(benches);
