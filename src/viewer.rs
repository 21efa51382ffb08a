//! テクスチャ表示ウィンドウ
//!
//! 閉じる要求だけを受け付ける受動的な表示ループ。
//! キーボード・マウス・リサイズには反応しない。

use log::{debug, info};
use minifb::{Window, WindowOptions};

use crate::common::constants::TARGET_FPS;
use crate::error::Result;

/// 表示ループの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Running,
    Terminated,
}

impl ViewerState {
    /// 閉じる要求があれば Terminated へ。Terminated からは戻らない。
    pub fn next(self, close_requested: bool) -> Self {
        match self {
            ViewerState::Running if close_requested => ViewerState::Terminated,
            state => state,
        }
    }
}

/// 表示先（ウィンドウ）の最小インターフェース
pub trait Surface {
    fn close_requested(&self) -> bool;

    /// フレームを描画する。フレームレートの制限もここで行う。
    fn present(&mut self, frame: &[u32], width: usize, height: usize) -> Result<()>;
}

impl Surface for Window {
    fn close_requested(&self) -> bool {
        !self.is_open()
    }

    fn present(&mut self, frame: &[u32], width: usize, height: usize) -> Result<()> {
        self.update_with_buffer(frame, width, height)?;
        Ok(())
    }
}

/// 閉じる要求が来るまで同じフレームを描き続ける。描画したフレーム数を返す。
pub fn run_loop<S: Surface>(
    surface: &mut S,
    frame: &[u32],
    width: usize,
    height: usize,
) -> Result<u64> {
    let mut state = ViewerState::Running;
    let mut frames = 0u64;

    loop {
        state = state.next(surface.close_requested());
        if state == ViewerState::Terminated {
            break;
        }
        surface.present(frame, width, height)?;
        frames += 1;
    }

    debug!("{} フレーム描画", frames);
    Ok(frames)
}

/// 固定サイズのビューア
pub struct Viewer {
    window: Window,
    width: usize,
    height: usize,
}

impl Viewer {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;
        window.set_target_fps(TARGET_FPS);
        info!("ウィンドウを開きました: {}x{}", width, height);

        Ok(Self {
            window,
            width,
            height,
        })
    }

    /// `frame` はウィンドウと同じサイズの 0xRRGGBB バッファ
    pub fn run(&mut self, frame: &[u32]) -> Result<()> {
        run_loop(&mut self.window, frame, self.width, self.height)?;
        info!("ウィンドウが閉じられました");
        Ok(())
    }
}
