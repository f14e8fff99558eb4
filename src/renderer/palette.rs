//! Theme color tables for the starfield

use super::surface::Glow;
use crate::consts::ORB_GLOW_BLUR;
use crate::theme::Theme;

/// Orb and star colors for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub orb_fill: &'static str,
    pub orb_glow: &'static str,
    pub orb_alpha: f32,
    pub star_fill: &'static str,
    pub star_glow: &'static str,
    pub spark_fill: &'static str,
    pub spark_glow: &'static str,
}

pub const DARK: Palette = Palette {
    orb_fill: "#a78bfa",
    orb_glow: "#38bdf8",
    orb_alpha: 0.18,
    star_fill: "#fff",
    star_glow: "#a78bfa",
    spark_fill: "#fffbe6",
    spark_glow: "#f472b6",
};

pub const LIGHT: Palette = Palette {
    orb_fill: "#2563eb",
    orb_glow: "#f472b6",
    orb_alpha: 0.13,
    star_fill: "#0a1a33",
    star_glow: "#2563eb",
    spark_fill: "#2563eb",
    spark_glow: "#38bdf8",
};

const STAR_BLUR: f32 = 8.0;
const SPARK_BLUR: f32 = 16.0;

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn orb_glow(&self) -> Glow {
        Glow {
            color: self.orb_glow,
            blur: ORB_GLOW_BLUR,
        }
    }

    /// Fill color and glow for a star
    pub fn star(&self, spark: bool) -> (&'static str, Glow) {
        if spark {
            (
                self.spark_fill,
                Glow {
                    color: self.spark_glow,
                    blur: SPARK_BLUR,
                },
            )
        } else {
            (
                self.star_fill,
                Glow {
                    color: self.star_glow,
                    blur: STAR_BLUR,
                },
            )
        }
    }
}
