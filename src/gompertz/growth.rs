use crate::error::MetsimErr;
use crate::gompertz::error::GompertzErr;

/// A Gompertz growth curve starting from volume `v0` at `t = 0`.
///
/// The carrying capacity parameter `k = ln(vmax / v0)` bounds the achievable
/// volume: `V(t) = v0 * exp(k * (1 - exp(-beta * t)))` increases
/// monotonically from `v0` towards the asymptote `v0 * exp(k)`.
#[derive(Debug, Clone, Copy)]
pub struct GompertzCurve {
    k: f64,
    beta: f64,
    v0: f64,
}

impl GompertzCurve {
    pub fn new(k: f64, beta: f64, v0: f64) -> Result<Self, MetsimErr> {
        if v0 <= 0.0 {
            return Err(GompertzErr::NonPositiveInitialVolume(v0).into());
        }
        if beta <= 0.0 {
            return Err(GompertzErr::NonPositiveDecayRate(beta).into());
        }
        if k <= 0.0 {
            return Err(GompertzErr::NonPositiveCapacity(k).into());
        }
        Ok(Self { k, beta, v0 })
    }

    /// Build a curve from the site's maximum volume, deriving
    /// `k = ln(max_volume / v0)` once.
    pub fn from_max_volume(max_volume: f64, beta: f64, v0: f64) -> Result<Self, MetsimErr> {
        if v0 <= 0.0 {
            return Err(GompertzErr::NonPositiveInitialVolume(v0).into());
        }
        if max_volume <= 0.0 {
            return Err(GompertzErr::NonPositiveCapacity(max_volume).into());
        }
        Self::new((max_volume / v0).ln(), beta, v0)
    }

    pub fn carrying_capacity(&self) -> f64 {
        self.v0 * self.k.exp()
    }

    /// Volume at time `t` (days). Defined for negative `t` as well, where the
    /// curve drops below `v0`; callers use this to express "not yet seeded".
    pub fn volume_at(&self, t: f64) -> f64 {
        self.v0 * (self.k * (1.0 - (-self.beta * t).exp())).exp()
    }

    /// Closed-form inverse of `volume_at`:
    /// `t = -(1 / beta) * ln(1 - ln(volume / v0) / k)`.
    ///
    /// `volume` must lie strictly between `v0` and the carrying capacity,
    /// otherwise the log arguments leave their domains.
    pub fn time_to_volume(&self, volume: f64) -> Result<f64, MetsimErr> {
        let vmax = self.carrying_capacity();
        if !(volume > self.v0 && volume < vmax) {
            return Err(GompertzErr::VolumeOutOfRange {
                volume,
                v0: self.v0,
                vmax,
            }
            .into());
        }
        Ok(-(1.0 - (volume / self.v0).ln() / self.k).ln() / self.beta)
    }
}
