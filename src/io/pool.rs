use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Read a size-at-metastasis pool: one positive volume (cm3) per line.
pub fn read_size_at_met_pool(path: &Path) -> Result<Vec<f64>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut pool = Vec::new();
    let mut line = String::new();
    let mut row = 0;
    while reader.read_line(&mut line)? > 0 {
        row += 1;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            line.clear();
            continue;
        }
        let value: f64 = trimmed
            .parse()
            .with_context(|| format!("row {}: bad pool entry {:?}", row, trimmed))?;
        if value <= 0.0 {
            bail!("row {}: pool entry should be positive; got {}", row, value);
        }
        pool.push(value);
        line.clear();
    }

    if pool.is_empty() {
        bail!("size-at-metastasis pool {} is empty", path.display());
    }

    Ok(pool)
}
