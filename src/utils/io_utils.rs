use super::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn create_writer<T, F>(output_prefix: &str, output_suffix: &str, f: F) -> Result<T>
where
    F: FnOnce(&str) -> Result<T>,
{
    let output_path = format!("{}.{}", output_prefix, output_suffix);
    f(&output_path)
}

/// Open a buffered output writer, gzip-compressing when the path carries a
/// .gz/.gzip extension.
pub fn open_output_writer(path: &Path) -> Result<Box<dyn Write>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::create(path).map_err(|e| e.to_string())?;
    if is_gzipped(path) {
        let encoder = GzEncoder::new(file, Compression::default());
        Ok(Box::new(BufWriter::new(encoder)))
    } else {
        Ok(Box::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::MultiGzDecoder;
    use std::io::Read;

    #[test]
    fn create_writer_joins_prefix_and_suffix() {
        let path = create_writer("out/run1", "fasta", |p| Ok(p.to_string())).unwrap();
        assert_eq!(path, "out/run1.fasta");
    }

    #[test]
    fn plain_writer_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        {
            let mut writer = open_output_writer(&path).unwrap();
            writer.write_all(b"ACGT\n").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ACGT\n");
    }

    #[test]
    fn gz_writer_produces_readable_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seqs.fasta.gz");
        {
            let mut writer = open_output_writer(&path).unwrap();
            writer.write_all(b">seq0\nACGT\n").unwrap();
        }
        let mut decoded = String::new();
        MultiGzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, ">seq0\nACGT\n");
    }
}
