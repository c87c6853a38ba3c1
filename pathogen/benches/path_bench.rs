use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathogen::path::normalize;
use pathogen::{EnvironmentConfig, NormalizedPath};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    // Benchmark absolute path normalization
    group.bench_function("absolute_path", |b| {
        b.iter(|| NormalizedPath::new(black_box("/absolute/path/to/file")));
    });

    // Benchmark relative path normalization
    group.bench_function("relative_path", |b| {
        b.iter(|| NormalizedPath::new(black_box("./relative/path")));
    });

    // Benchmark path with . and .. components
    group.bench_function("with_dots", |b| {
        b.iter(|| NormalizedPath::new(black_box("/a/b/../c/./d")));
    });

    // Benchmark path with many .. components
    group.bench_function("many_dots", |b| {
        b.iter(|| NormalizedPath::new(black_box("../.././////////some/path/../../x")));
    });

    // Benchmark windows path with a volume
    group.bench_function("windows_volume", |b| {
        b.iter(|| NormalizedPath::new(black_box("c:\\windows\\\\system32\\.\\\\\\drivers")));
    });

    group.finish();
}

fn bench_normalize_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_operations");

    group.bench_function("split_volume", |b| {
        b.iter(|| normalize::split_volume(black_box("c:\\windows\\system32")));
    });

    group.bench_function("collapse", |b| {
        b.iter(|| {
            normalize::collapse(
                pathogen::Anchor::Absolute,
                black_box("/a/b/../c/./d").split('/'),
            )
        });
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let env = EnvironmentConfig::default().with_cwd("/users/test/projects");

    let base = NormalizedPath::new("src/path");

    group.bench_function("absolute_candidate", |b| {
        b.iter(|| black_box(&base).resolve(black_box(&["/abc", "def"]), &env));
    });

    group.bench_function("working_directory", |b| {
        b.iter(|| black_box(&base).resolve(black_box(&["../lib"]), &env));
    });

    group.finish();
}

fn bench_relative(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative");
    let env = EnvironmentConfig::default();

    let from = NormalizedPath::new("/users/test/projects/pathogen/src/path");

    for to in [
        "/users/test/projects/pathogen/src/path",
        "/users/test/projects/pathogen/benches",
        "/etc/hosts",
    ] {
        group.bench_with_input(BenchmarkId::new("to", to), &to, |b, to| {
            b.iter(|| black_box(&from).relative(black_box(to), &env));
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let path = NormalizedPath::new("c:/users/test/projects/pathogen/src/path/");

    group.bench_function("to_unix", |b| {
        b.iter(|| black_box(&path).to_unix());
    });

    group.bench_function("to_windows", |b| {
        b.iter(|| black_box(&path).to_windows());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_normalize_operations,
    bench_resolve,
    bench_relative,
    bench_format
);
criterion_main!(benches);
