// File: crates/board-core/src/theme.rs
// Summary: Light/Dark theming for dashboard widget colors.

/// An sRGB color carried as channel bytes; widgets emit it as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation toward `other`; `t` is clamped into `[0, 1]`.
    /// Used for heatmap tile shading.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
        };
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub surface: Rgb,
    pub card: Rgb,
    pub grid: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    pub accent: Rgb,
    pub gain: Rgb,
    pub loss: Rgb,
    pub spark_stroke: Rgb,
    pub spark_fill: Rgb,
    pub gauge_track: Rgb,
    pub gauge_value: Rgb,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            surface: Rgb::new(18, 18, 20),
            card: Rgb::new(28, 28, 32),
            grid: Rgb::new(40, 40, 45),
            text: Rgb::new(235, 235, 245),
            text_muted: Rgb::new(150, 150, 160),
            accent: Rgb::new(255, 230, 70),
            gain: Rgb::new(40, 200, 120),
            loss: Rgb::new(220, 80, 80),
            spark_stroke: Rgb::new(64, 160, 255),
            spark_fill: Rgb::new(64, 160, 255),
            gauge_track: Rgb::new(52, 52, 60),
            gauge_value: Rgb::new(64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            surface: Rgb::new(250, 250, 252),
            card: Rgb::new(255, 255, 255),
            grid: Rgb::new(230, 230, 235),
            text: Rgb::new(20, 20, 30),
            text_muted: Rgb::new(100, 100, 110),
            accent: Rgb::new(30, 120, 240),
            gain: Rgb::new(20, 160, 90),
            loss: Rgb::new(200, 60, 60),
            spark_stroke: Rgb::new(32, 120, 200),
            spark_fill: Rgb::new(32, 120, 200),
            gauge_track: Rgb::new(225, 225, 232),
            gauge_value: Rgb::new(32, 120, 200),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            surface: Rgb::new(0, 0, 0),
            card: Rgb::new(16, 16, 16),
            grid: Rgb::new(34, 34, 34),
            text: Rgb::new(255, 255, 255),
            text_muted: Rgb::new(190, 190, 190),
            accent: Rgb::new(255, 255, 0),
            gain: Rgb::new(0, 255, 128),
            loss: Rgb::new(255, 64, 64),
            spark_stroke: Rgb::new(0, 200, 255),
            spark_fill: Rgb::new(0, 200, 255),
            gauge_track: Rgb::new(48, 48, 48),
            gauge_value: Rgb::new(0, 200, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}
