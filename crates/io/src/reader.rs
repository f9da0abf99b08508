//! Plain-text strain file reader.
//!
//! The strain text format is one strain value per line, preceded by `#`
//! header lines carrying `key: value` pairs. Two headers are required:
//!
//! ```text
//! # start_time: 1126259446.0
//! # sample_rate: 4096.0
//! -1.1e-21
//! 2.3e-22
//! ...
//! ```
//!
//! Other `#` lines are free-form comments. Blank lines are skipped.

use std::fs;
use std::path::Path;

use tracing::info;

use oread_strain::StrainSeries;

use crate::error::IoError;

/// Header key for the absolute start time (GPS seconds).
pub const HEADER_START_TIME: &str = "start_time";

/// Header key for the sample rate in Hz.
pub const HEADER_SAMPLE_RATE: &str = "sample_rate";

/// Reads a strain series from a plain-text file.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::Io`] | the file cannot be read |
/// | [`IoError::MissingHeader`] | `start_time` or `sample_rate` header absent |
/// | [`IoError::Parse`] | malformed header value or sample line |
/// | [`IoError::Strain`] | parsed data fails series validation |
pub fn read_strain_txt(path: &Path) -> Result<StrainSeries, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;

    let mut start_time: Option<f64> = None;
    let mut sample_rate: Option<f64> = None;
    let mut samples: Vec<f64> = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if let Some((key, value)) = comment.split_once(':') {
                let key = key.trim();
                if key == HEADER_START_TIME || key == HEADER_SAMPLE_RATE {
                    let parsed: f64 =
                        value.trim().parse().map_err(|e| IoError::Parse {
                            path: path.to_path_buf(),
                            line: line_no,
                            reason: format!("header '{key}': {e}"),
                        })?;
                    if key == HEADER_START_TIME {
                        start_time = Some(parsed);
                    } else {
                        sample_rate = Some(parsed);
                    }
                }
            }
            continue;
        }
        let value: f64 = line.parse().map_err(|e| IoError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            reason: format!("{e}"),
        })?;
        samples.push(value);
    }

    let start_time = start_time.ok_or_else(|| IoError::MissingHeader {
        name: HEADER_START_TIME.to_string(),
        path: path.to_path_buf(),
    })?;
    let sample_rate = sample_rate.ok_or_else(|| IoError::MissingHeader {
        name: HEADER_SAMPLE_RATE.to_string(),
        path: path.to_path_buf(),
    })?;

    let series = StrainSeries::new(samples, sample_rate, start_time)?;
    info!(
        path = %path.display(),
        n_samples = series.len(),
        sample_rate,
        duration_s = series.duration(),
        "strain data loaded"
    );
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).expect("create file");
        f.write_all(content.as_bytes()).expect("write file");
        path
    }

    #[test]
    fn reads_valid_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_file(
            &dir,
            "event.txt",
            "# H1 strain, band-passed\n\
             # start_time: 1126259446.0\n\
             # sample_rate: 4096.0\n\
             \n\
             -1.5e-21\n\
             2.5e-22\n\
             0.0\n",
        );
        let series = read_strain_txt(&path).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.sample_rate(), 4096.0);
        assert_eq!(series.start_time(), 1126259446.0);
        assert_eq!(series.samples()[0], -1.5e-21);
    }

    #[test]
    fn missing_file_reported() {
        let err = read_strain_txt(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn missing_sample_rate_header_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_file(&dir, "event.txt", "# start_time: 0.0\n1.0\n2.0\n");
        let err = read_strain_txt(&path).unwrap_err();
        assert!(
            matches!(err, IoError::MissingHeader { ref name, .. } if name == "sample_rate"),
            "got: {err}"
        );
    }

    #[test]
    fn missing_start_time_header_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_file(&dir, "event.txt", "# sample_rate: 100.0\n1.0\n2.0\n");
        let err = read_strain_txt(&path).unwrap_err();
        assert!(
            matches!(err, IoError::MissingHeader { ref name, .. } if name == "start_time"),
            "got: {err}"
        );
    }

    #[test]
    fn malformed_sample_line_reported_with_location() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_file(
            &dir,
            "event.txt",
            "# start_time: 0.0\n# sample_rate: 100.0\n1.0\nnot-a-number\n",
        );
        let err = read_strain_txt(&path).unwrap_err();
        match err {
            IoError::Parse { line, .. } => assert_eq!(line, 4),
            other => panic!("expected Parse, got {other}"),
        }
    }

    #[test]
    fn malformed_header_value_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_file(
            &dir,
            "event.txt",
            "# start_time: tomorrow\n# sample_rate: 100.0\n1.0\n2.0\n",
        );
        let err = read_strain_txt(&path).unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 1, .. }));
    }

    #[test]
    fn single_sample_fails_validation() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_file(
            &dir,
            "event.txt",
            "# start_time: 0.0\n# sample_rate: 100.0\n1.0\n",
        );
        let err = read_strain_txt(&path).unwrap_err();
        assert!(matches!(err, IoError::Strain(_)));
    }

    #[test]
    fn free_form_comments_ignored() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_file(
            &dir,
            "event.txt",
            "# detector: H1\n# start_time: 5.0\n# sample_rate: 10.0\n# note: synthetic\n0.1\n0.2\n",
        );
        let series = read_strain_txt(&path).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.start_time(), 5.0);
    }
}
