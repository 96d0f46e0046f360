use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::sampler::types::SiteParams;

const HEADER: &str = "site,max_volume,ln_beta_mean,ln_beta_std";

/// Read the fitted per-site parameter table: exactly one `ovarian` and one
/// `omental` row. Returns `(ovarian, omental)`.
pub fn read_site_params(path: &Path) -> Result<(SiteParams, SiteParams)> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut header = String::new();
    reader.read_line(&mut header)?;
    if header.trim_end() != HEADER {
        bail!(
            "unexpected site-parameter header {:?}; expected {:?}",
            header.trim_end(),
            HEADER
        );
    }

    let mut ovarian = None;
    let mut omental = None;
    let mut line = String::new();
    let mut row = 1;
    while reader.read_line(&mut line)? > 0 {
        row += 1;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            line.clear();
            continue;
        }
        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() != 4 {
            bail!("row {}: expected 4 fields, got {}", row, fields.len());
        }
        let max_volume: f64 = fields[1]
            .parse()
            .with_context(|| format!("row {}: bad max_volume {:?}", row, fields[1]))?;
        let ln_beta_mean: f64 = fields[2]
            .parse()
            .with_context(|| format!("row {}: bad ln_beta_mean {:?}", row, fields[2]))?;
        let ln_beta_std: f64 = fields[3]
            .parse()
            .with_context(|| format!("row {}: bad ln_beta_std {:?}", row, fields[3]))?;
        let params = SiteParams::new(max_volume, ln_beta_mean, ln_beta_std)
            .with_context(|| format!("row {}: invalid {} parameters", row, fields[0]))?;
        let slot = match fields[0] {
            "ovarian" => &mut ovarian,
            "omental" => &mut omental,
            other => bail!("row {}: unknown site {:?}", row, other),
        };
        if slot.replace(params).is_some() {
            bail!("row {}: duplicate {} row", row, fields[0]);
        }
        line.clear();
    }

    match (ovarian, omental) {
        (Some(ov), Some(om)) => Ok((ov, om)),
        (None, _) => bail!("missing ovarian row in {}", path.display()),
        (_, None) => bail!("missing omental row in {}", path.display()),
    }
}
