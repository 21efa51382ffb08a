//! 空テクスチャの生成・保存・縮小

use std::fs;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};
use log::debug;
use rayon::prelude::*;

use crate::common::colors::{rgb8_to_u32, SkyPalette};
use crate::common::gradient::generate_column;
use crate::error::{Result, SkyError};

/// 正方形の空グラデーションテクスチャ
///
/// x 方向が昼夜サイクルの位相（time = x / size）、y 方向が地平線からの距離。
/// 生成後は読み取り専用。
pub struct SkyTexture {
    size: usize,
    image: RgbImage,
}

impl SkyTexture {
    /// 全列を計算してテクスチャを作る
    ///
    /// 列ごとに独立なので並列に計算し、すべて揃ってからバッファへ書き込む。
    pub fn generate(palette: &SkyPalette, size: usize) -> Self {
        let columns: Vec<Vec<[u8; 3]>> = (0..size)
            .into_par_iter()
            .map(|x| generate_column(palette, x as f64 / size as f64, size))
            .collect();

        let mut image = RgbImage::new(size as u32, size as u32);
        for (x, column) in columns.iter().enumerate() {
            for (y, &rgb) in column.iter().enumerate() {
                image.put_pixel(x as u32, y as u32, Rgb(rgb));
            }
        }
        debug!("{}x{} のテクスチャを生成", size, size);

        Self { size, image }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.image.get_pixel(x as u32, y as u32).0
    }

    /// x 列目を上から順に返す
    pub fn column(&self, x: usize) -> Vec<[u8; 3]> {
        (0..self.size).map(|y| self.pixel(x, y)).collect()
    }

    /// PNG で保存する
    ///
    /// 一時ファイルに書いてからリネームするので、失敗しても
    /// 書きかけの画像が `path` に残ることはない。
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("png.tmp");

        if let Err(source) = self.image.save_with_format(&tmp_path, ImageFormat::Png) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SkyError::Save {
                path: path.to_path_buf(),
                source,
            });
        }

        fs::rename(&tmp_path, path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            SkyError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!("{} -> {} にリネーム", tmp_path.display(), path.display());
        Ok(())
    }

    /// ウィンドウ表示用に縮小した u32 バッファ（0xRRGGBB）を作る
    pub fn scaled(&self, width: usize, height: usize) -> Vec<u32> {
        let resized = imageops::resize(&self.image, width as u32, height as u32, FilterType::Nearest);
        resized.pixels().map(|p| rgb8_to_u32(p.0)).collect()
    }

    /// 焼き込んだテクスチャを時刻と仰角で参照する
    ///
    /// `time` は周期 2 のミラー参照（0→1 で昼から夜、1→2 で夜から昼へ戻る）。
    /// `elevation` は 1 が上端、0 が地平線、-1 が下端で、範囲外は端に張り付く。
    pub fn sample(&self, time: f64, elevation: f64) -> [u8; 3] {
        let mut phase = time.rem_euclid(2.0);
        if phase > 1.0 {
            phase = 2.0 - phase;
        }
        let last = self.size - 1;
        let x = ((phase * self.size as f64) as usize).min(last);
        let y = ((1.0 - elevation.clamp(-1.0, 1.0)) * 0.5 * self.size as f64) as usize;
        self.pixel(x, y.min(last))
    }
}
