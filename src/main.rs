//! 昼夜サイクルの空グラデーション生成ツール
//!
//! 横軸を1日の位相、縦軸を地平線からの距離として空の色を計算し、
//! sky.png に保存してからウィンドウに縮小表示する。
//!
//! 操作方法:
//!   - ウィンドウを閉じる: 終了

use std::process::ExitCode;
use std::time::Instant;

use log::{error, info};
use sky_gradient::common::{colors::SkyPalette, constants::*};
use sky_gradient::texture::SkyTexture;
use sky_gradient::viewer::Viewer;

fn run() -> sky_gradient::Result<()> {
    let start = Instant::now();
    let texture = SkyTexture::generate(&SkyPalette::DEFAULT, TEXTURE_SIZE);
    info!(
        "テクスチャ生成完了: {}x{} ({:.2?})",
        TEXTURE_SIZE,
        TEXTURE_SIZE,
        start.elapsed()
    );

    texture.save(OUTPUT_FILE)?;
    info!("画像を保存しました: {}", OUTPUT_FILE);

    let frame = texture.scaled(WINDOW_SIZE, WINDOW_SIZE);

    let mut viewer = Viewer::new(WINDOW_TITLE, WINDOW_SIZE, WINDOW_SIZE)?;
    viewer.run(&frame)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════╗");
    println!("║  空グラデーション生成 (昼夜サイクル)     ║");
    println!("╚══════════════════════════════════════════╝");

    match run() {
        Ok(()) => {
            println!("終了しました");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
