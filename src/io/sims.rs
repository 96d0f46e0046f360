use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::simulation::types::TumourTrial;

const HEADER: &str = "trial,omental_primary,size_at_met,beta_primary,beta_met,\
time_to_met,time_to_ca125,time_to_us,met_size_at_ca125,met_size_at_us";

pub fn write_sims<W: Write>(w: &mut W, trials: &[TumourTrial]) -> Result<()> {
    writeln!(w, "{}", HEADER)?;
    for t in trials {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{},{},{}",
            t.trial,
            t.omental_primary,
            t.size_at_met,
            t.beta_primary,
            t.beta_met,
            t.time_to_met,
            t.time_to_ca125,
            t.time_to_us,
            t.met_size_at_ca125,
            t.met_size_at_us
        )?;
    }
    Ok(())
}

pub fn write_sims_csv(path: &Path, trials: &[TumourTrial]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_sims(&mut w, trials)
}

pub fn read_sims<R: BufRead>(mut reader: R) -> Result<Vec<TumourTrial>> {
    let mut header = String::new();
    reader.read_line(&mut header)?;
    if header.trim_end() != HEADER {
        bail!(
            "unexpected simulation table header {:?}; expected {:?}",
            header.trim_end(),
            HEADER
        );
    }

    let mut trials = Vec::new();
    let mut line = String::new();
    let mut row = 1;
    while reader.read_line(&mut line)? > 0 {
        row += 1;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            line.clear();
            continue;
        }
        trials.push(
            parse_trial(trimmed).with_context(|| format!("row {}: bad simulation record", row))?,
        );
        line.clear();
    }

    Ok(trials)
}

pub fn read_sims_csv(path: &Path) -> Result<Vec<TumourTrial>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_sims(BufReader::new(file))
}

fn parse_trial(line: &str) -> Result<TumourTrial> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 10 {
        bail!("expected 10 fields, got {}", fields.len());
    }
    let float = |i: usize| -> Result<f64> {
        fields[i]
            .parse()
            .with_context(|| format!("bad float {:?}", fields[i]))
    };
    Ok(TumourTrial {
        trial: fields[0]
            .parse()
            .with_context(|| format!("bad trial index {:?}", fields[0]))?,
        omental_primary: fields[1]
            .parse()
            .with_context(|| format!("bad omental_primary flag {:?}", fields[1]))?,
        size_at_met: float(2)?,
        beta_primary: float(3)?,
        beta_met: float(4)?,
        time_to_met: float(5)?,
        time_to_ca125: float(6)?,
        time_to_us: float(7)?,
        met_size_at_ca125: float(8)?,
        met_size_at_us: float(9)?,
    })
}
