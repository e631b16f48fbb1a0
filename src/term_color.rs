use ratatui::style::Color;

/// Channel values of the xterm 6x6x6 colour cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// How many colours the attached terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    TrueColor,
    Indexed256,
}

impl ColorSupport {
    /// `COLORTERM=truecolor` or `COLORTERM=24bit` selects true colour.
    pub fn detect() -> Self {
        match std::env::var("COLORTERM") {
            Ok(value) => Self::from_colorterm(&value),
            Err(_) => ColorSupport::Indexed256,
        }
    }

    pub fn from_colorterm(value: &str) -> Self {
        let value = value.to_ascii_lowercase();
        if value.contains("truecolor") || value.contains("24bit") {
            ColorSupport::TrueColor
        } else {
            ColorSupport::Indexed256
        }
    }

    pub fn map(self, (r, g, b): (u8, u8, u8)) -> Color {
        match self {
            ColorSupport::TrueColor => Color::Rgb(r, g, b),
            ColorSupport::Indexed256 => Color::Indexed(xterm_index(r, g, b)),
        }
    }
}

/// Nearest xterm-256 entry, choosing between the colour cube and the gray
/// ramp.
pub fn xterm_index(r: u8, g: u8, b: u8) -> u8 {
    let (ri, rv) = nearest_level(r);
    let (gi, gv) = nearest_level(g);
    let (bi, bv) = nearest_level(b);
    let cube = 16 + 36 * ri + 6 * gi + bi;
    let cube_dist = distance_sq((r, g, b), (rv, gv, bv));

    let avg = (r as u16 + g as u16 + b as u16) / 3;
    let step = (avg.saturating_sub(8) + 5) / 10;
    let step = step.min(23) as u8;
    let gray = 8 + step * 10;
    let gray_dist = distance_sq((r, g, b), (gray, gray, gray));

    if gray_dist < cube_dist {
        232 + step
    } else {
        cube
    }
}

fn nearest_level(v: u8) -> (u8, u8) {
    let mut best = (0u8, CUBE_LEVELS[0]);
    for (idx, level) in CUBE_LEVELS.iter().copied().enumerate() {
        if v.abs_diff(level) < v.abs_diff(best.1) {
            best = (idx as u8, level);
        }
    }
    best
}

fn distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| {
        let v = x.abs_diff(y) as u32;
        v * v
    };
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}
