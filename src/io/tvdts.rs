use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::tvdt::CaseDoubling;

const HEADER: &str = "case,dt,ratio_ov,ratio_om,tvdt_ov,tvdt_om";

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn write_tvdts<W: Write>(w: &mut W, rows: &[CaseDoubling]) -> Result<()> {
    writeln!(w, "{}", HEADER)?;
    for r in rows {
        writeln!(
            w,
            "{},{},{},{},{},{}",
            r.case_id,
            r.dt,
            optional(r.ratio_ov),
            optional(r.ratio_om),
            optional(r.tvdt_ov),
            optional(r.tvdt_om)
        )?;
    }
    Ok(())
}

pub fn write_tvdts_csv(path: &Path, rows: &[CaseDoubling]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_tvdts(&mut w, rows)
}
