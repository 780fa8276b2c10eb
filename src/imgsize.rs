use crate::core::Viewport;

/// Outcome of asking a source for its intrinsic pixel size.
///
/// Remote and inline sources cannot be measured at compile time; they stay
/// `Loading` and the caller falls back to an explicit or zero viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeStatus {
    Loading,
    Error,
    Success,
}

/// Intrinsic size report for one image source. Width and height are zero
/// unless the status is `Success`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeProbe {
    pub width: f64,
    pub height: f64,
    pub status: ProbeStatus,
}

impl SizeProbe {
    fn unresolved(status: ProbeStatus) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            status,
        }
    }

    /// The measured size as a viewport, if the probe succeeded.
    pub fn viewport(self) -> Option<Viewport> {
        match self.status {
            ProbeStatus::Success => Some(Viewport {
                width: self.width,
                height: self.height,
            }),
            _ => None,
        }
    }
}

/// Measure a source without decoding its pixels. Only image headers are
/// read. This never fails; unreadable sources come back as `Error` and
/// sources that must resolve client-side come back as `Loading`.
pub fn probe_size(source: &str) -> SizeProbe {
    if source.starts_with("http://") || source.starts_with("https://") || source.starts_with("data:")
    {
        return SizeProbe::unresolved(ProbeStatus::Loading);
    }
    match image::image_dimensions(source) {
        Ok((width, height)) => SizeProbe {
            width: f64::from(width),
            height: f64::from(height),
            status: ProbeStatus::Success,
        },
        Err(_) => SizeProbe::unresolved(ProbeStatus::Error),
    }
}
