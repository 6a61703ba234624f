/// Shape variant. Closed set: geometry matches on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    Circle = 0,
    Square = 1,
    Triangle = 2,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Square];

    /// Number of world-space vertices this kind carries
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeKind::Circle => 0,
            ShapeKind::Square => 4,
            ShapeKind::Triangle => 3,
        }
    }
}

/// Packed 0xRRGGBB display color. Opaque to the physics.
pub type Color = u32;

pub const COLOR_WHITE: Color = 0x00ff_ffff;

/// Parse `#rrggbb` (leading `#` optional)
pub fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("color '{}' must be #rrggbb", s));
    }
    u32::from_str_radix(hex, 16).map_err(|e| format!("color '{}': {}", s, e))
}

pub fn format_hex_color(c: Color) -> String {
    format!("#{:06x}", c & 0x00ff_ffff)
}
