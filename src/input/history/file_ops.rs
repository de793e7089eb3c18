use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use super::HistoryError;

/// Plain-text history file, one command per line. Saving truncates and
/// rewrites the whole file.
pub struct HistoryFile {
    file_path: PathBuf,
}

impl HistoryFile {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn read_lines(&self) -> Result<Vec<String>, HistoryError> {
        let mut lines = Vec::new();

        if self.file_path.exists() {
            let file = File::open(&self.file_path)?;
            let reader = BufReader::new(file);
            for line in reader.lines() {
                lines.push(line?);
            }
        }

        Ok(lines)
    }

    pub fn write_lines<'a>(
        &self,
        lines: impl Iterator<Item = &'a str>,
    ) -> Result<(), HistoryError> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let file = HistoryFile::new(std::env::temp_dir().join("vena_file_ops_missing"));
        assert!(file.read_lines().expect("missing file tolerated").is_empty());
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let path = std::env::temp_dir().join("vena_file_ops_truncate");
        let file = HistoryFile::new(path.clone());

        file.write_lines(["old one", "old two"].into_iter())
            .expect("first write");
        file.write_lines(["new"].into_iter()).expect("second write");

        assert_eq!(file.read_lines().expect("read back"), vec!["new"]);
        let _ = std::fs::remove_file(path);
    }
}
