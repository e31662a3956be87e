use std::fmt;
use std::str::FromStr;

use image::imageops::FilterType;
use image::Rgba;

use crate::error::SlimError;

/// Resampling filter used when building the scaled region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ScaleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ScaleFilter::Nearest => FilterType::Nearest,
            ScaleFilter::Triangle => FilterType::Triangle,
            ScaleFilter::CatmullRom => FilterType::CatmullRom,
            ScaleFilter::Gaussian => FilterType::Gaussian,
            ScaleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ScaleFilter {
    type Err = SlimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(ScaleFilter::Nearest),
            "triangle" | "bilinear" => Ok(ScaleFilter::Triangle),
            "catmull-rom" | "catmullrom" | "cubic" => Ok(ScaleFilter::CatmullRom),
            "gaussian" => Ok(ScaleFilter::Gaussian),
            "lanczos3" | "lanczos" => Ok(ScaleFilter::Lanczos3),
            other => Err(SlimError::InvalidConfig(format!(
                "unknown scale filter '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ScaleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScaleFilter::Nearest => "nearest",
            ScaleFilter::Triangle => "triangle",
            ScaleFilter::CatmullRom => "catmull-rom",
            ScaleFilter::Gaussian => "gaussian",
            ScaleFilter::Lanczos3 => "lanczos3",
        };
        f.write_str(name)
    }
}

/// Opaque RGB background color, parsed from `RRGGBB` or `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Background(pub Rgba<u8>);

impl Default for Background {
    fn default() -> Self {
        Background(Rgba([0, 0, 0, 255]))
    }
}

impl FromStr for Background {
    type Err = SlimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || SlimError::InvalidConfig(format!("invalid background color '{s}'"));
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Background(Rgba([channel(0)?, channel(2)?, channel(4)?, 255])))
    }
}

/// Rendering options shared by every front end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewerConfig {
    pub filter: ScaleFilter,
    pub background: Background,
}
