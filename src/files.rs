//! Flat-file I/O: batch input, result export, and the real-time log

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use cidrnorm::Conversion;

/// Reads address tokens from a file, one per line. Surrounding whitespace
/// is trimmed and blank lines are skipped
pub fn read_token_list(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let token = line.trim();
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
    }
    Ok(tokens)
}

/// Writes one formatted result per line, replacing any previous export
pub fn export_results(results: &[Conversion], path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    for result in results {
        writeln!(file, "{result}")?;
    }
    Ok(())
}

/// Truncates the real-time log
pub fn clear_realtime_log(path: &Path) -> io::Result<()> {
    File::create(path).map(|_| ())
}

/// Appends one formatted result to the real-time log
pub fn append_realtime(result: &Conversion, path: &Path) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{result}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cidr2mask-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_export_round_trip() {
        let path = temp_path("export.txt");
        let results = vec![
            cidrnorm::convert("10.0.0.5/24").unwrap(),
            cidrnorm::convert("192.168.1.10").unwrap(),
        ];
        export_results(&results, &path).unwrap();

        // Re-reading the export yields the exact lines that were written
        let lines = read_token_list(&path).unwrap();
        assert_eq!(
            lines,
            vec![
                "10.0.0.0 255.255.255.0".to_string(),
                "host 192.168.1.10".to_string(),
            ]
        );
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let error = read_token_list(&temp_path("missing.txt")).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let path = temp_path("input.txt");
        std::fs::write(&path, "10.0.0.0/8\n\n   \n 192.168.1.1 \n").unwrap();
        assert_eq!(
            read_token_list(&path).unwrap(),
            vec!["10.0.0.0/8".to_string(), "192.168.1.1".to_string()]
        );
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_realtime_log_appends_and_clears() {
        let path = temp_path("rt.txt");
        let result = cidrnorm::convert("172.16.0.0/16").unwrap();
        append_realtime(&result, &path).unwrap();
        append_realtime(&result, &path).unwrap();
        assert_eq!(read_token_list(&path).unwrap().len(), 2);

        clear_realtime_log(&path).unwrap();
        assert!(read_token_list(&path).unwrap().is_empty());
        std::fs::remove_file(&path).unwrap();
    }
}
