//! 色の型と色変換関数

/// 正規化された RGB 色（各チャンネル 0.0〜1.0）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// 8bit RGB に変換（255倍して0方向へ切り捨て、丸めなし）
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ]
    }

    /// フレームバッファ用の u32 形式（0xRRGGBB）
    pub fn to_u32(self) -> u32 {
        rgb8_to_u32(self.to_rgb8())
    }
}

/// 8bit RGB を u32 形式（0xRRGGBB）に詰める
pub fn rgb8_to_u32([r, g, b]: [u8; 3]) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// 線形補間 `a + (b - a) * t`
///
/// `t` はクランプしない。0〜1 の外を渡すと2色の外側へ外挿される。
pub fn mix(a: Color, b: Color, t: f64) -> Color {
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
    }
}

/// 空グラデーションに使う基準色の組
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPalette {
    pub night_sky: Color,
    pub day_sky: Color,
    pub night_fog: Color,
    pub day_fog: Color,
    pub sunset: Color,
}

impl SkyPalette {
    pub const DEFAULT: SkyPalette = SkyPalette {
        night_sky: Color::new(0.00, 0.00, 0.08), // 夜空（ほぼ黒の紺）
        day_sky: Color::new(0.43, 0.77, 0.98),   // 昼の青空
        night_fog: Color::new(0.00, 0.00, 0.09), // 夜の霧
        day_fog: Color::new(0.53, 0.81, 0.98),   // 昼の霧（薄い水色）
        sunset: Color::new(1.00, 0.60, 0.40),    // 夕焼けのオレンジ
    };
}

impl Default for SkyPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
