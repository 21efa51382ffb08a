use std::path::PathBuf;

use thiserror::Error;

/// 起動時に発生しうる致命的エラー
#[derive(Debug, Error)]
pub enum SkyError {
    #[error("画像の保存に失敗しました ({path}): {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("ファイル操作に失敗しました ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ウィンドウの操作に失敗しました: {0}")]
    Window(#[from] minifb::Error),
}

pub type Result<T> = std::result::Result<T, SkyError>;
