//! 空グラデーション計算関数
//!
//! 横方向（time）が昼夜サイクルの位相、縦方向が地平線からの距離。
//! どの関数も純粋関数で、同じ入力には常に同じ色を返す。

use std::f64::consts::PI;

use super::colors::{mix, Color, SkyPalette};
use super::constants::{FOG_EDGE, SKY_EDGE, SUNSET_END, SUNSET_START};

/// エルミート補間（0〜1 にクランプしてから t²(3-2t)）
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// 昼の度合い `((sin(0.5π·cos(πt)) + 1) / 2)²`
///
/// time=0 で 1（昼）、time=1 で 0（夜）。周期は 2 で、t と -t、
/// 1-t と 1+t が同じ値になる（テクスチャはミラー参照で1日を表す）。
pub fn dayness(time: f64) -> f64 {
    let d = ((0.5 * PI * (time * PI).cos()).sin() + 1.0) / 2.0;
    d * d
}

/// 夕焼けの強さ
///
/// `SUNSET_START < time < SUNSET_END` の外では 0。
/// 内側の y はクランプしないので、time が 0.5 を過ぎると曲線は下がり始め、
/// 0.55 以降の負の値は max で 0 に切り落とされる。
pub fn sunset_intensity(time: f64) -> f64 {
    if time <= SUNSET_START || time >= SUNSET_END {
        return 0.0;
    }
    let y = 10.0 * (time - SUNSET_START);
    (y * y * (3.0 - 2.0 * y)).max(0.0)
}

/// 行番号から地平線までの距離（中央で 0、上下端で 1 に近づく）
pub fn distance_from_horizon(row: usize, height: usize) -> f64 {
    let h = height as f64;
    (row as f64 - h / 2.0).abs() / h * 2.0
}

impl SkyPalette {
    /// 空の色（夜空と昼空を dayness で補間）
    pub fn sky_color(&self, time: f64) -> Color {
        mix(self.night_sky, self.day_sky, dayness(time))
    }

    /// 夕焼けを混ぜた霧の色
    pub fn fog_color(&self, time: f64) -> Color {
        let fog = mix(self.night_fog, self.day_fog, dayness(time));
        mix(fog, self.sunset, sunset_intensity(time))
    }

    /// 1列分（上から下へ height 行）の色を計算
    pub fn column(&self, time: f64, height: usize) -> Vec<Color> {
        let sky = self.sky_color(time);
        let fog = self.fog_color(time);

        (0..height)
            .map(|row| {
                let skyness = smoothstep(FOG_EDGE, SKY_EDGE, distance_from_horizon(row, height));
                mix(fog, sky, skyness)
            })
            .collect()
    }
}

/// 1列分の 8bit RGB を生成
pub fn generate_column(palette: &SkyPalette, time: f64, height: usize) -> Vec<[u8; 3]> {
    palette
        .column(time, height)
        .into_iter()
        .map(Color::to_rgb8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn smoothstep_endpoints_and_monotonic() {
        assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < EPS);

        let mut prev = 0.0;
        for i in 0..=1000 {
            let v = smoothstep(0.0, 1.0, i as f64 / 1000.0);
            assert!(v >= prev, "{} < {} at step {}", v, prev, i);
            prev = v;
        }
    }

    #[test]
    fn smoothstep_clamps_outside_edges() {
        assert_eq!(smoothstep(0.15, 0.4, 0.0), 0.0);
        assert_eq!(smoothstep(0.15, 0.4, 0.15), 0.0);
        assert_eq!(smoothstep(0.15, 0.4, 0.4), 1.0);
        assert_eq!(smoothstep(0.15, 0.4, 0.9), 1.0);
        assert_eq!(smoothstep(0.15, 0.4, -3.0), 0.0);
    }

    #[test]
    fn dayness_shape() {
        assert!((dayness(0.0) - 1.0).abs() < EPS);
        assert!((dayness(0.5) - 0.25).abs() < EPS);
        assert!(dayness(1.0).abs() < EPS);
        for i in 0..=100 {
            let d = dayness(i as f64 / 100.0);
            assert!((0.0..=1.0).contains(&d));
        }
    }

    #[test]
    fn dayness_is_periodic_and_mirrored() {
        assert!((dayness(0.0) - dayness(2.0)).abs() < EPS);
        for t in [0.1, 0.3, 0.45, 0.9] {
            assert!((dayness(t) - dayness(-t)).abs() < EPS);
            assert!((dayness(1.0 - t) - dayness(1.0 + t)).abs() < EPS);
        }
    }

    #[test]
    fn sunset_is_zero_outside_window() {
        for t in [0.0, 0.2, 0.39, 0.4, 0.6, 0.61, 0.8, 1.0, -0.5, 1.5] {
            assert_eq!(sunset_intensity(t), 0.0, "time {}", t);
        }
    }

    #[test]
    fn sunset_ramp_values() {
        assert!((sunset_intensity(0.45) - 0.5).abs() < 1e-12);
        assert!((sunset_intensity(0.5) - 1.0).abs() < 1e-12);
        // y > 1.5 で生の式は負になり 0 に切り落とされる
        assert_eq!(sunset_intensity(0.58), 0.0);
        assert!(sunset_intensity(0.52) > 0.0);
    }

    #[test]
    fn horizon_distance() {
        assert_eq!(distance_from_horizon(512, 1024), 0.0);
        assert_eq!(distance_from_horizon(0, 1024), 1.0);
        assert!((distance_from_horizon(1023, 1024) - 1022.0 / 1024.0).abs() < EPS);
        assert_eq!(distance_from_horizon(256, 1024), 0.5);
    }

    #[test]
    fn column_is_fog_at_horizon_and_sky_at_edges() {
        let palette = SkyPalette::DEFAULT;
        let time = 0.45;
        let column = palette.column(time, 1024);
        assert_eq!(column.len(), 1024);
        assert_eq!(column[512], palette.fog_color(time));
        assert_close(column[0], palette.sky_color(time));
        assert_close(column[1023], palette.sky_color(time));
    }

    fn assert_close(a: Color, b: Color) {
        for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
            assert!((x - y).abs() < EPS, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn sunset_tints_fog_only() {
        let palette = SkyPalette::DEFAULT;
        let plain = mix(palette.night_fog, palette.day_fog, dayness(0.5));
        let fog = palette.fog_color(0.5);
        assert!((fog.r - palette.sunset.r).abs() < 1e-12);
        assert!(fog.r > plain.r);
        assert_eq!(palette.sky_color(0.5), mix(palette.night_sky, palette.day_sky, dayness(0.5)));
    }

    #[test]
    fn generate_column_is_deterministic() {
        let palette = SkyPalette::DEFAULT;
        for time in [0.0, 0.42, 0.5, 0.77] {
            assert_eq!(
                generate_column(&palette, time, 256),
                generate_column(&palette, time, 256)
            );
        }
    }

    #[test]
    fn channels_stay_in_unit_range() {
        let palette = SkyPalette::DEFAULT;
        for i in 0..200 {
            let time = i as f64 / 200.0;
            for c in palette.column(time, 64) {
                for v in [c.r, c.g, c.b] {
                    assert!(v >= -EPS && v <= 1.0 + EPS, "time {} value {}", time, v);
                }
            }
        }
    }
}
