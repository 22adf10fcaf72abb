use crate::cli::SimulateArgs;
use crate::sim::{self, gc_fraction, LabeledSequence, SequenceSet, SimParams};
use crate::utils::{create_writer, open_output_writer, summary_stats, Result};
use itertools::Itertools;
use std::io::Write;
use std::path::Path;

pub fn simulate(args: SimulateArgs) -> Result<()> {
    let params = SimParams {
        motif: args.motif,
        seq_len: args.seq_len,
        gc_frac: args.gc_frac,
        center_size: args.center_size,
        min_motifs: args.min_motifs,
        max_motifs: args.max_motifs,
        num_pos: args.num_pos,
        num_neg: args.num_neg,
        test_size: args.test_size,
        validation_size: args.validation_size,
        seed: args.seed,
    };
    let set = sim::simulate(&params).map_err(|e| e.to_string())?;

    let fasta_suffix = if args.gzip { "fasta.gz" } else { "fasta" };
    create_writer(&args.output_prefix, fasta_suffix, |path| {
        write_fasta(&set, path)
    })?;
    create_writer(&args.output_prefix, "labels.tsv", |path| {
        write_labels(&set, path)
    })?;

    report_stats(&set);
    Ok(())
}

fn record_name(index: usize) -> String {
    format!("seq{}", index)
}

fn placement_field(seq: &LabeledSequence) -> String {
    if seq.placements.is_empty() {
        ".".to_string()
    } else {
        seq.placements
            .iter()
            .map(|p| format!("{}:{}", p.start, p.strand))
            .join(";")
    }
}

fn write_fasta(set: &SequenceSet, path: &str) -> Result<()> {
    let mut writer = open_output_writer(Path::new(path))?;
    for (index, seq) in set.iter().enumerate() {
        writeln!(
            writer,
            ">{} label={} split={}",
            record_name(index),
            seq.label,
            seq.split
        )
        .map_err(|e| e.to_string())?;
        writer
            .write_all(&seq.bases)
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|e| e.to_string())?;
    }
    log::info!("Wrote {} sequences to {}", set.len(), path);
    Ok(())
}

fn write_labels(set: &SequenceSet, path: &str) -> Result<()> {
    let mut writer = open_output_writer(Path::new(path))?;
    writeln!(writer, "name\tlabel\tsplit\tgc\tplacements").map_err(|e| e.to_string())?;
    for (index, seq) in set.iter().enumerate() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{:.4}\t{}",
            record_name(index),
            seq.label.as_f32() as u8,
            seq.split,
            gc_fraction(&seq.bases),
            placement_field(seq)
        )
        .map_err(|e| e.to_string())?;
    }
    log::info!("Wrote labels to {}", path);
    Ok(())
}

fn report_stats(set: &SequenceSet) {
    let gc: Vec<f64> = set.iter().map(|s| gc_fraction(&s.bases)).collect();
    if let Some(stats) = summary_stats(&gc) {
        log::info!(
            "GC fraction - Range: [{:.3},{:.3}], Median: {:.3}, Mean: {:.3}, StdDev: {:.3}",
            stats.min,
            stats.max,
            stats.median,
            stats.mean,
            stats.std_dev
        );
    }
    let counts: Vec<f64> = set.iter().map(|s| s.placements.len() as f64).collect();
    if let Some(stats) = summary_stats(&counts) {
        log::info!(
            "Motif instances per sequence - Range: [{},{}], Median: {:.2}, Mean: {:.2}",
            stats.min,
            stats.max,
            stats.median,
            stats.mean
        );
    }
}
