use crate::cli::ExonQcArgs;
use crate::qc::{
    classify_gene, locate_samples, read_report, write_report, ExonMatrix, FailIndicator, Panel,
    QcConfig, SampleSet,
};
use crate::utils::Result;
use itertools::Itertools;
use std::{path::Path, time};

pub fn exon_qc(args: ExonQcArgs) -> Result<()> {
    run(&QcConfig::from_args(&args))
}

pub fn run(config: &QcConfig) -> Result<()> {
    let start_timer = time::Instant::now();

    let panel = Panel::brca()?;
    let run_dir = config.run_dir();
    let samples = locate_samples(&run_dir)?;
    if samples.samples.is_empty() {
        log::warn!("No qualifying samples found in {}", run_dir.display());
    }

    let matrix = aggregate(&run_dir, &panel, &samples, config.min_depth)?;
    log_failed_exons(&matrix);

    write_report(
        &config.output_path(),
        &matrix,
        &samples.summary(),
        config.highlight,
    )?;

    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}

/// Reads and classifies every qualifying sample; the first failing sample
/// aborts the run.
pub fn aggregate(
    run_dir: &Path,
    panel: &Panel,
    samples: &SampleSet,
    min_depth: i64,
) -> Result<ExonMatrix> {
    let mut matrix = ExonMatrix::new(panel.exons(), samples.samples.clone());
    for sample in &samples.samples {
        let table = read_report(run_dir, sample)?;
        for layout in panel.layouts() {
            let calls = classify_gene(&table, layout, min_depth)?;
            let failed = calls
                .iter()
                .filter(|c| c.indicator == FailIndicator::Fail)
                .count();
            log::info!(
                "{}: {} {}/{} exons below depth {}",
                sample,
                layout.gene,
                failed,
                calls.len(),
                min_depth
            );
            matrix.record_calls(sample, &calls)?;
        }
    }
    Ok(matrix)
}

fn log_failed_exons(matrix: &ExonMatrix) {
    let failed = matrix
        .exons()
        .iter()
        .zip(matrix.totals())
        .filter(|(_, total)| *total > 0)
        .map(|(exon, total)| format!("{}({})", exon, total))
        .join(", ");
    if failed.is_empty() {
        log::info!("All exons passed in every sample");
    } else {
        log::info!("Failed exons: {}", failed);
    }
    let unset = matrix.unset_count();
    if unset > 0 {
        log::warn!("{} exon/sample cells were not classified", unset);
    }
}
