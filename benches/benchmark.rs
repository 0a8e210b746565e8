use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sarf::catalog::Scheme;
use sarf::lexicon::{Derivative, RootIndex};
use sarf::morph::{apply_scheme, template, validate};

const LETTERS: [char; 10] = ['ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز'];

fn synthetic_roots() -> Vec<String> {
    let mut roots = Vec::new();
    for a in LETTERS {
        for b in LETTERS {
            for c in LETTERS {
                roots.push(format!("{a}{b}{c}"));
            }
        }
    }
    roots
}

fn schemes() -> Vec<Scheme> {
    vec![
        Scheme::new("اسم فاعل", template::ACTIVE_PARTICIPLE),
        Scheme::new("اسم مفعول", template::PASSIVE_PARTICIPLE),
        Scheme::new("المصدر", template::MASDAR),
        Scheme::new("الماضي", template::PAST),
        Scheme::new("المضارع", template::IMPERFECT),
        Scheme::new("اسم المكان", template::PLACE_NOUN),
        Scheme::new("الطلب", template::REQUEST),
    ]
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let roots = synthetic_roots();

    c.bench_function("insert 1k roots", |b| {
        b.iter(|| {
            let mut index = RootIndex::new();
            for root in &roots {
                index.insert(root, Vec::new());
            }
            black_box(index.height())
        })
    });

    let mut index = RootIndex::new();
    for root in &roots {
        index.insert(root, Vec::new());
    }
    let probe = roots[roots.len() / 2].clone();
    c.bench_function("search 1k", |b| {
        b.iter(|| black_box(index.search(&probe).is_some()))
    });

    c.bench_function("generate active participle", |b| {
        b.iter(|| black_box(apply_scheme("كتب", template::ACTIVE_PARTICIPLE, false)))
    });
    c.bench_function("generate hollow masdar", |b| {
        b.iter(|| black_box(apply_scheme("قول", template::MASDAR, true)))
    });

    let schemes = schemes();
    c.bench_function("validate fallback", |b| {
        b.iter(|| {
            let mut cold = RootIndex::new();
            black_box(validate("مكتوب", "كتب", &schemes, &mut cold).is_some())
        })
    });

    let mut warm = RootIndex::new();
    warm.insert("كتب", vec![Derivative::new("مكتوب", "اسم مفعول")]);
    c.bench_function("validate fast path", |b| {
        b.iter(|| black_box(validate("مكتوب", "كتب", &schemes, &mut warm).is_some()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
