//! Named color palettes.
//!
//! Each palette carries three 7-step roles: `gradient` drives bar coloring
//! and color scales, `surface` colors surface plots, `accent` is used for
//! markers and the legend host. Lookup is by name and never fails; unknown
//! names fall back to the default palette.

use crate::color::Color;

/// Number of colors per palette role.
pub const PALETTE_STEPS: usize = 7;

/// A named gradient/surface/accent palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub gradient: [Color; PALETTE_STEPS],
    pub surface: [Color; PALETTE_STEPS],
    pub accent: [Color; PALETTE_STEPS],
}

const fn hex7(values: [u32; PALETTE_STEPS]) -> [Color; PALETTE_STEPS] {
    [
        Color::from_hex(values[0]),
        Color::from_hex(values[1]),
        Color::from_hex(values[2]),
        Color::from_hex(values[3]),
        Color::from_hex(values[4]),
        Color::from_hex(values[5]),
        Color::from_hex(values[6]),
    ]
}

const AURORA: Palette = Palette {
    name: "aurora",
    gradient: hex7([0x10243E, 0x1B4965, 0x2D6E8E, 0x42A5B3, 0x62D2C5, 0x9BE8D8, 0xDFFBF2]),
    surface: hex7([0x0B1D33, 0x173F5F, 0x20639B, 0x3CAEA3, 0x64C9B9, 0xA8E6CF, 0xE8F9F3]),
    accent: hex7([0x1B4965, 0x2D6E8E, 0x42A5B3, 0x62D2C5, 0x86E3CE, 0xB5F0E5, 0xE0FFF8]),
};

const SUNSET: Palette = Palette {
    name: "sunset",
    gradient: hex7([0x2D1B4E, 0x6B2D5C, 0xA63A50, 0xD9594C, 0xF28C45, 0xFBBF54, 0xFDE8A9]),
    surface: hex7([0x3A1C52, 0x7A3B69, 0xB04A5A, 0xDD6B53, 0xF2994A, 0xF7C566, 0xFCEBB6]),
    accent: hex7([0x6B2D5C, 0xA63A50, 0xD9594C, 0xF28C45, 0xF9A557, 0xFBC96E, 0xFEE9B2]),
};

const OCEAN: Palette = Palette {
    name: "ocean",
    gradient: hex7([0x03045E, 0x023E8A, 0x0077B6, 0x0096C7, 0x00B4D8, 0x48CAE4, 0xCAF0F8]),
    surface: hex7([0x02045A, 0x034078, 0x0369A1, 0x0891B2, 0x22B8CF, 0x67E0F0, 0xD6F6FC]),
    accent: hex7([0x023E8A, 0x0077B6, 0x0096C7, 0x00B4D8, 0x41C7E0, 0x90E0EF, 0xDCF7FC]),
};

const EMBER: Palette = Palette {
    name: "ember",
    gradient: hex7([0x250902, 0x641220, 0x85182A, 0xA71E34, 0xC71F37, 0xE01E37, 0xF9BEC7]),
    surface: hex7([0x2B0A03, 0x6E1423, 0x8E1C2E, 0xB21E35, 0xCE2039, 0xE5383B, 0xFAC9CF]),
    accent: hex7([0x641220, 0x85182A, 0xA71E34, 0xC71F37, 0xDA1E37, 0xEE4950, 0xFBD3D9]),
};

const BUILTIN: [&Palette; 4] = [&AURORA, &SUNSET, &OCEAN, &EMBER];

impl Palette {
    /// The palette used when no name (or an unknown name) is given.
    pub fn default_palette() -> &'static Palette {
        &AURORA
    }

    /// Look up a palette by name, falling back to the default.
    ///
    /// An empty name means "no preference" and resolves to the default
    /// without the unknown-name warning.
    pub fn by_name(name: &str) -> &'static Palette {
        if name.is_empty() {
            return Palette::default_palette();
        }
        match BUILTIN.iter().copied().find(|p| p.name == name) {
            Some(palette) => palette,
            None => {
                tracing::warn!(name, "unknown palette, falling back to default");
                Palette::default_palette()
            }
        }
    }

    /// Names of all built-in palettes.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|p| p.name)
    }

    /// Gradient color for a normalized value in `[0, 1]`.
    ///
    /// Buckets into the 7-step gradient: `floor(normalized * 6)`, clamped.
    /// Non-finite input (the all-zero-heights case divides nothing here, but
    /// callers may pass NaN) maps to step 0.
    pub fn grade(&self, normalized: f64) -> Color {
        if !normalized.is_finite() {
            return self.gradient[0];
        }
        let idx = (normalized * (PALETTE_STEPS - 1) as f64).floor() as isize;
        self.gradient[idx.clamp(0, PALETTE_STEPS as isize - 1) as usize]
    }

    /// Evenly spaced `(position, color)` stops over a palette role, for
    /// renderer color scales. Stop `i` sits at `i / (len - 1)`.
    pub fn color_stops(colors: &[Color; PALETTE_STEPS]) -> Vec<(f32, Color)> {
        colors
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f32 / (PALETTE_STEPS - 1) as f32, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back() {
        let p = Palette::by_name("definitely-not-a-palette");
        assert_eq!(p.name, Palette::default_palette().name);
    }

    #[test]
    fn test_known_names_resolve() {
        for name in Palette::names() {
            assert_eq!(Palette::by_name(name).name, name);
        }
    }

    #[test]
    fn test_grade_clamps() {
        let p = Palette::default_palette();
        assert_eq!(p.grade(-1.0), p.gradient[0]);
        assert_eq!(p.grade(0.0), p.gradient[0]);
        assert_eq!(p.grade(1.0), p.gradient[6]);
        assert_eq!(p.grade(10.0), p.gradient[6]);
        assert_eq!(p.grade(f64::NAN), p.gradient[0]);
    }

    #[test]
    fn test_grade_buckets() {
        let p = Palette::default_palette();
        assert_eq!(p.grade(0.5), p.gradient[3]);
        assert_eq!(p.grade(0.99), p.gradient[5]);
    }

    #[test]
    fn test_color_stop_positions() {
        let stops = Palette::color_stops(&Palette::default_palette().gradient);
        assert_eq!(stops.len(), PALETTE_STEPS);
        assert_eq!(stops[0].0, 0.0);
        assert_eq!(stops[6].0, 1.0);
        assert!((stops[3].0 - 0.5).abs() < 1e-6);
    }
}
