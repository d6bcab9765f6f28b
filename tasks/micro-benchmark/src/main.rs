use std::{fs, path::Path};

use clap::Parser;
use criterion::{Criterion, Throughput};
use globlink::{link, link_sync, LinkOptions};
use globlink_diagnostics::{enable_tracing_by_env, miette::IntoDiagnostic, Result};
use tempfile::tempdir;

#[derive(Debug, Parser)]
struct CliArgs {
    #[clap(long)]
    save_baseline: Option<String>,

    /// Number of files to link per iteration.
    #[clap(long, default_value_t = 256)]
    file_count: usize,
}

fn create_source_tree(root: &Path, file_count: usize) -> Result<()> {
    for index in 0..file_count {
        let dir = root.join(format!("group-{}", index % 16));
        fs::create_dir_all(&dir).into_diagnostic()?;
        fs::write(dir.join(format!("file-{index}.txt")), index.to_string()).into_diagnostic()?;
    }
    Ok(())
}

fn bench_link(c: &mut Criterion, source_dir: &Path, file_count: usize) {
    let mut group = c.benchmark_group("link");
    group.throughput(Throughput::Elements(file_count as u64));

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build().unwrap();
    let options = || LinkOptions::default().with_cwd(source_dir).with_force(true);

    group.bench_function("concurrent", |b| {
        b.to_async(&rt).iter(|| async {
            let dest = tempdir().unwrap();
            link(["**/*.txt"], dest.path(), options()).await.unwrap().len()
        });
    });

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let dest = tempdir().unwrap();
            link_sync(["**/*.txt"], dest.path(), options()).unwrap().len()
        });
    });

    group.bench_function("dry_run", |b| {
        let dest = tempdir().unwrap();
        b.iter(|| {
            link_sync(["**/*.txt"], dest.path(), options().with_dry_run(true)).unwrap().len()
        });
    });

    group.finish();
}

pub fn main() -> Result<()> {
    enable_tracing_by_env();
    let CliArgs { save_baseline, file_count } = CliArgs::parse();

    let source = tempdir().into_diagnostic()?;
    create_source_tree(source.path(), file_count)?;

    let mut criterion = Criterion::default().without_plots();
    if let Some(baseline) = save_baseline {
        criterion = criterion.save_baseline(baseline);
    }

    bench_link(&mut criterion, source.path(), file_count);

    Ok(())
}
