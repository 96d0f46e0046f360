//----------------------------------------
// analysis mod types
//----------------------------------------

/// Which detection assay's crossing time to compare against metastasis
/// onset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMarker {
    Ca125,
    Ultrasound,
}

impl DetectionMarker {
    pub fn label(&self) -> &'static str {
        match self {
            DetectionMarker::Ca125 => "CA125",
            DetectionMarker::Ultrasound => "ultrasound",
        }
    }
}

/// Descriptive statistics of a window-of-opportunity series.
#[derive(Debug, Clone, Copy)]
pub struct WooSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: f64,
}
