use criterion::{Criterion, criterion_group, criterion_main};
use ghub_domain::params::ParamMap;
use ghub_domain::site::Site;
use ghub_donations::{donation_url, redirect_params};
use std::hint::black_box;

fn bench_redirect_params(c: &mut Criterion) {
    let mut group = c.benchmark_group("redirect_params");

    let default_site = Site::new(1u64, "GiveHub", "https://www.givehub.org");
    let partner = Site::new(2u64, "Partner", "https://partner.givehub.org");
    let broken = Site::new(2u64, "Broken", "not a valid uri");

    let incoming: ParamMap =
        [("utm_campaign", "spring"), ("utm_term", "birds"), ("inat_site_id", "2")]
            .into_iter()
            .collect();

    group.bench_function("cross_site", |b| {
        b.iter(|| {
            black_box(redirect_params(
                black_box(Some(&partner)),
                black_box(&default_site),
                black_box(&incoming),
            ));
        });
    });

    group.bench_function("first_touch", |b| {
        b.iter(|| {
            black_box(redirect_params(
                black_box(Some(&default_site)),
                black_box(&default_site),
                black_box(&ParamMap::new()),
            ));
        });
    });

    group.bench_function("unparseable_domain", |b| {
        b.iter(|| {
            black_box(redirect_params(
                black_box(Some(&broken)),
                black_box(&default_site),
                black_box(&incoming),
            ));
        });
    });

    group.finish();
}

fn bench_donation_url(c: &mut Criterion) {
    let default_site = Site::new(1u64, "GiveHub", "https://www.givehub.org");
    let partner = Site::new(2u64, "Partner", "https://partner.givehub.org");
    let incoming: ParamMap = [("utm_campaign", "spring")].into_iter().collect();
    let decision = redirect_params(Some(&partner), &default_site, &incoming).unwrap();

    c.bench_function("donation_url", |b| {
        b.iter(|| {
            black_box(donation_url(black_box("/donate"), black_box(&decision)));
        });
    });
}

criterion_group!(benches, bench_redirect_params, bench_donation_url);
criterion_main!(benches);
