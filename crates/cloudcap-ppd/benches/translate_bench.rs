// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for PPD parsing, full capability translation, and
// model name normalization in the cloudcap-ppd crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cloudcap_ppd::{normalize_model, parse_ppd, translate_ppd};

// ---------------------------------------------------------------------------
// Helper: a synthetic PPD of configurable size
// ---------------------------------------------------------------------------

/// Build a PPD with the standard groups plus `vendor_groups` extra PickOne
/// groups of eight options each.
fn build_ppd(vendor_groups: usize) -> String {
    let mut ppd = String::from(
        r#"*PPD-Adobe: "4.3"
*Manufacturer: "HP"
*NickName: "HP LaserJet 4250 PS v3010.107 cups-team Letter+Duplex"
*Throughput: "45"
*OpenUI *PageSize/Media Size: PickOne
*DefaultPageSize: Letter
*PageSize Letter/Letter: "<</PageSize[612 792]>>setpagedevice"
*PageSize Legal/Legal: "<</PageSize[612 1008]>>setpagedevice"
*PageSize A4/A4: "<</PageSize[595 842]>>setpagedevice"
*PageSize HalfLetter/5.5x8.5: "<</PageSize[396 612]>>setpagedevice"
*PageSize w288h432/4x6: "<</PageSize[288 432]>>setpagedevice"
*CloseUI: *PageSize
*OpenUI *ColorModel/Color Mode: PickOne
*DefaultColorModel: Gray
*ColorModel CMYK/Color: "(cmyk) RCsetdevicecolor"
*ColorModel Gray/Black and White: "(gray) RCsetdevicecolor"
*CloseUI: *ColorModel
*OpenUI *Duplex/Duplex: PickOne
*DefaultDuplex: None
*Duplex None/Off: ""
*Duplex DuplexNoTumble/Long Edge: ""
*Duplex DuplexTumble/Short Edge: ""
*CloseUI: *Duplex
*OpenUI *Resolution/Resolution: PickOne
*DefaultResolution: 600dpi
*Resolution 600dpi/600 dpi: ""
*Resolution 1200x1200dpi/1200 dpi: ""
*CloseUI: *Resolution
"#,
    );
    for g in 0..vendor_groups {
        ppd.push_str(&format!("*OpenUI *Vendor{g}/Vendor Option {g}: PickOne\n"));
        ppd.push_str(&format!("*DefaultVendor{g}: Choice0\n"));
        for o in 0..8 {
            ppd.push_str(&format!(
                "*Vendor{g} Choice{o}/Choice {o}: \"<</Vendor{g} {o}>>setpagedevice\"\n"
            ));
        }
        ppd.push_str(&format!("*CloseUI: *Vendor{g}\n"));
    }
    ppd
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark parsing alone at several document sizes.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_ppd");
    for vendor_groups in [0usize, 20, 200] {
        let ppd = build_ppd(vendor_groups);
        group.bench_function(format!("{vendor_groups} vendor groups"), |b| {
            b.iter(|| {
                let doc = parse_ppd(black_box(&ppd)).expect("parse failed");
                black_box(doc);
            });
        });
    }
    group.finish();
}

/// Benchmark the full text-to-descriptor path.
fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate_ppd");
    for vendor_groups in [0usize, 20, 200] {
        let ppd = build_ppd(vendor_groups);
        group.bench_function(format!("{vendor_groups} vendor groups"), |b| {
            b.iter(|| {
                let translation = translate_ppd(black_box(&ppd)).expect("translate failed");
                black_box(translation.descriptor);
            });
        });
    }
    group.finish();
}

/// Benchmark model name cleanup on a noisy and an already clean label.
fn bench_normalize_model(c: &mut Criterion) {
    c.bench_function("normalize_model (noisy)", |b| {
        b.iter(|| {
            black_box(normalize_model(black_box(
                "OfficeJet 7400 Foomatic/hpijs (recommended) - HPLIP 0.9.7",
            )))
        });
    });
    c.bench_function("normalize_model (clean)", |b| {
        b.iter(|| black_box(normalize_model(black_box("LaserJet 4250"))));
    });
}

criterion_group!(benches, bench_parse, bench_translate, bench_normalize_model);
criterion_main!(benches);
