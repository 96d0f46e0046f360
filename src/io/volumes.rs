use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::tvdt::VolumeObservation;

const HEADER: &str = "case,dt,vol_ov,valid_ov,vol_om,valid_om";

/// Read longitudinal lesion volumes, one row per scan, ordered by scan date
/// within case. A site's volume counts only when its validity flag is >= 1.
pub fn read_raw_volumes(path: &Path) -> Result<Vec<VolumeObservation>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut header = String::new();
    reader.read_line(&mut header)?;
    if header.trim_end() != HEADER {
        bail!(
            "unexpected raw-volume header {:?}; expected {:?}",
            header.trim_end(),
            HEADER
        );
    }

    let mut observations = Vec::new();
    let mut line = String::new();
    let mut row = 1;
    while reader.read_line(&mut line)? > 0 {
        row += 1;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            line.clear();
            continue;
        }
        observations
            .push(parse_row(trimmed).with_context(|| format!("row {}: bad volume record", row))?);
        line.clear();
    }

    if observations.is_empty() {
        bail!("raw-volume table {} has no rows", path.display());
    }

    Ok(observations)
}

fn parse_row(line: &str) -> Result<VolumeObservation> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 6 {
        bail!("expected 6 fields, got {}", fields.len());
    }
    let days_since_first: f64 = fields[1]
        .parse()
        .with_context(|| format!("bad dt {:?}", fields[1]))?;
    Ok(VolumeObservation {
        case_id: fields[0].to_string(),
        days_since_first,
        vol_ov: parse_site_volume(fields[2], fields[3])?,
        vol_om: parse_site_volume(fields[4], fields[5])?,
    })
}

fn parse_site_volume(volume: &str, valid: &str) -> Result<Option<f64>> {
    let valid: i64 = valid
        .parse()
        .with_context(|| format!("bad validity flag {:?}", valid))?;
    if valid < 1 {
        return Ok(None);
    }
    let volume: f64 = volume
        .parse()
        .with_context(|| format!("bad volume {:?}", volume))?;
    Ok(Some(volume))
}
