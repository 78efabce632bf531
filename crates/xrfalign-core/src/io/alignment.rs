use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::{Result, XrfError};

const HEADER: &str = "# xrfalign alignment v1";

/// The per-projection alignment bookkeeping, detached from the volume.
///
/// This is what gets exported for later batch application: one record per
/// projection, parallel sequences throughout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignmentRecord {
    pub fnames: Vec<String>,
    pub x_shifts: Vec<i32>,
    pub y_shifts: Vec<i32>,
    pub centers: Vec<f64>,
}

impl AlignmentRecord {
    pub fn len(&self) -> usize {
        self.fnames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fnames.is_empty()
    }
}

/// Save the dataset's alignment bookkeeping as a tab-separated text file:
/// `filename<TAB>x_shift<TAB>y_shift<TAB>center`, one line per projection.
pub fn save_alignment(path: &Path, dataset: &Dataset) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{HEADER}")?;
    for i in 0..dataset.num_projections() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            dataset.fnames[i], dataset.x_shifts[i], dataset.y_shifts[i], dataset.centers[i]
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Load an alignment file written by [`save_alignment`].
pub fn load_alignment(path: &Path) -> Result<AlignmentRecord> {
    let reader = BufReader::new(File::open(path)?);
    let mut record = AlignmentRecord::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('\t').collect();
        if fields.len() != 4 {
            return Err(XrfError::InvalidAlignmentFile(format!(
                "line {}: expected 4 tab-separated fields, got {}",
                lineno + 1,
                fields.len()
            )));
        }

        record.fnames.push(fields[0].to_string());
        record.x_shifts.push(parse_field(fields[1], lineno, "x shift")?);
        record.y_shifts.push(parse_field(fields[2], lineno, "y shift")?);
        record.centers.push(parse_field(fields[3], lineno, "center")?);
    }

    Ok(record)
}

fn parse_field<T: std::str::FromStr>(field: &str, lineno: usize, what: &str) -> Result<T> {
    field.parse().map_err(|_| {
        XrfError::InvalidAlignmentFile(format!(
            "line {}: invalid {what} value {field:?}",
            lineno + 1
        ))
    })
}
