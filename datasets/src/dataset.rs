//! Plain text tables of `z x y` samples
//!
//! Every line holds one sample as three whitespace separated floats in the
//! order `z x y`, without a header. Blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use svrkit::{Point, Sample, SampleSet};

use crate::error::{DatasetError, Result};

/// Options of [`load`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoaderParams {
    stride: Option<usize>,
    side_file: Option<PathBuf>,
}

impl LoaderParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only every `stride`-th sample of the source
    ///
    /// The kept samples are first written to a side file, which is then loaded
    /// in place of the source.
    pub fn downsample(mut self, stride: usize) -> Self {
        self.stride = Some(stride);
        self
    }

    /// Location of the down-sampled copy
    ///
    /// Defaults to the source's name prefixed with `small`, in the same
    /// directory.
    pub fn side_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.side_file = Some(path.into());
        self
    }

    pub fn stride(&self) -> Option<usize> {
        self.stride
    }

    fn side_file_for(&self, source: &Path) -> PathBuf {
        match &self.side_file {
            Some(path) => path.clone(),
            None => default_side_file(source),
        }
    }
}

/// `dir/name` becomes `dir/smallname`
pub fn default_side_file(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    source.with_file_name(format!("small{}", name))
}

/// Count the lines of a file, blank ones included
pub fn count_lines<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(DatasetError::io(path))?;

    let mut count = 0;
    for line in BufReader::new(file).lines() {
        line.map_err(DatasetError::io(path))?;
        count += 1;
    }

    Ok(count)
}

/// Parse a `z x y` line, `None` for blank lines
fn parse_line(line: &str, lineno: usize) -> Result<Option<Sample>> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != 3 {
        return Err(DatasetError::Parse {
            line: lineno,
            reason: format!("expected 3 fields `z x y`, found {}", fields.len()),
        });
    }

    let mut values = [0.0f64; 3];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = field.parse().map_err(|err| DatasetError::Parse {
            line: lineno,
            reason: format!("invalid number \"{}\": {}", field, err),
        })?;
        if !value.is_finite() {
            return Err(DatasetError::Parse {
                line: lineno,
                reason: format!("non-finite number \"{}\"", field),
            });
        }
    }
    let [z, x, y] = values;

    Ok(Some(Sample::new(Point::new(x, y), z)))
}

/// Read samples from at most `limit` lines of `reader`
pub fn read_samples<R: BufRead>(reader: R, limit: usize) -> Result<SampleSet> {
    let mut samples = Vec::with_capacity(limit);
    for (idx, line) in reader.lines().take(limit).enumerate() {
        if let Some(sample) = parse_line(&line?, idx + 1)? {
            samples.push(sample);
        }
    }
    debug!("parsed {} samples", samples.len());

    Ok(samples.into())
}

/// Whether `target` names the existing file `source`
fn same_file(source: &Path, target: &Path) -> Result<bool> {
    let source = source.canonicalize().map_err(DatasetError::io(source))?;
    match target.canonicalize() {
        Ok(target) => Ok(source == target),
        Err(_) => Ok(false),
    }
}

/// Copy every `stride`-th sample of `source` to `target`, starting with the first
///
/// Returns the number of samples written, `ceil(n / stride)` for a source of
/// `n` samples. A `target` that resolves to `source` is rejected before
/// anything is written.
pub fn downsample<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    target: Q,
    stride: usize,
) -> Result<usize> {
    if stride == 0 {
        return Err(DatasetError::InvalidStride);
    }
    let (source, target) = (source.as_ref(), target.as_ref());
    if same_file(source, target)? {
        return Err(DatasetError::SideFileIsSource {
            path: target.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(source).map_err(DatasetError::io(source))?);
    let mut writer = BufWriter::new(File::create(target).map_err(DatasetError::io(target))?);

    let (mut position, mut written) = (0, 0);
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(DatasetError::io(source))?;
        let sample = match parse_line(&line, idx + 1)? {
            Some(sample) => sample,
            None => continue,
        };

        if position % stride == 0 {
            writeln!(
                writer,
                "{} {} {}",
                sample.output, sample.input.x, sample.input.y
            )
            .map_err(DatasetError::io(target))?;
            written += 1;
        }
        position += 1;
    }
    writer.flush().map_err(DatasetError::io(target))?;

    Ok(written)
}

/// Load the samples of a `z x y` file
///
/// The lines are counted first and exactly that many are read. With
/// [`LoaderParams::downsample`] the file is reduced into a side file first,
/// and the side file is loaded instead.
pub fn load<P: AsRef<Path>>(path: P, params: &LoaderParams) -> Result<SampleSet> {
    let mut path = path.as_ref().to_path_buf();
    let mut nlines = count_lines(&path)?;
    info!("there are {} samples in \"{}\"", nlines, path.display());

    if let Some(stride) = params.stride {
        let side_file = params.side_file_for(&path);
        downsample(&path, &side_file, stride)?;

        nlines = count_lines(&side_file)?;
        info!(
            "after reducing the dataset there are {} samples in \"{}\"",
            nlines,
            side_file.display()
        );
        path = side_file;
    }

    let file = File::open(&path).map_err(DatasetError::io(&path))?;
    read_samples(BufReader::new(file), nlines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn two_lines() {
        let samples = read_samples("0.0 1.0 2.0\n0.5 -1.0 3.0\n".as_bytes(), 2).unwrap();
        assert_eq!(
            samples.as_slice(),
            &[
                Sample::new(Point::new(1.0, 2.0), 0.0),
                Sample::new(Point::new(-1.0, 3.0), 0.5)
            ]
        );
    }

    #[test]
    fn stops_after_limit() {
        let samples = read_samples("1 2 3\n4 5 6\n7 8 9\n".as_bytes(), 2).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].output, 4.0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let samples = read_samples("1 2 3\n\n  \n4 5 6\n\n".as_bytes(), 5).unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn tabs_and_exponents() {
        let samples = read_samples("1e-3\t-2.5E1   3\n".as_bytes(), 1).unwrap();
        assert_eq!(samples[0], Sample::new(Point::new(-25.0, 3.0), 0.001));
    }

    #[test]
    fn malformed_lines_name_their_position() {
        match read_samples("1 2 3\n4 five 6\n".as_bytes(), 2) {
            Err(DatasetError::Parse { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("five"));
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(matches!(
            read_samples("1 2\n".as_bytes(), 1),
            Err(DatasetError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read_samples("1 2 3 4\n".as_bytes(), 1),
            Err(DatasetError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        for input in &["nan 1 2\n", "1 inf 2\n", "1 2 -inf\n", "NaN Infinity 0\n"] {
            assert!(
                matches!(
                    read_samples(input.as_bytes(), 1),
                    Err(DatasetError::Parse { line: 1, .. })
                ),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn side_file_cannot_be_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data");
        fs::write(&path, "1 2 3\n4 5 6\n").unwrap();

        let params = LoaderParams::new().downsample(50).side_file(&path);
        assert!(matches!(
            load(&path, &params),
            Err(DatasetError::SideFileIsSource { .. })
        ));

        let aliased = dir.path().join(".").join("data");
        assert!(matches!(
            downsample(&path, &aliased, 1),
            Err(DatasetError::SideFileIsSource { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "1 2 3\n4 5 6\n");
    }

    #[test]
    fn missing_file_is_not_a_line_count() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(count_lines(&missing), Err(DatasetError::Io { .. })));
        assert!(matches!(
            load(&missing, &LoaderParams::new()),
            Err(DatasetError::Io { .. })
        ));
    }

    #[test]
    fn counts_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data");
        fs::write(&path, "1 2 3\n\n4 5 6").unwrap();

        assert_eq!(count_lines(&path).unwrap(), 3);
    }

    #[test]
    fn side_file_name() {
        assert_eq!(
            default_side_file(Path::new("/data/dataset_100")),
            PathBuf::from("/data/smalldataset_100")
        );
        assert_eq!(
            default_side_file(Path::new("dataset_100")),
            PathBuf::from("smalldataset_100")
        );
    }

    #[test]
    fn zero_stride_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data");
        fs::write(&path, "1 2 3\n").unwrap();

        let params = LoaderParams::new().downsample(0);
        assert!(matches!(load(&path, &params), Err(DatasetError::InvalidStride)));
    }
}
