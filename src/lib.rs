//! 昼夜サイクルの空グラデーションテクスチャ生成ライブラリ
//!
//! - `common`: 定数・色・グラデーション計算（純粋関数）
//! - `texture`: テクスチャ全体の生成・保存・縮小
//! - `viewer`: 縮小済みテクスチャを表示するウィンドウ

pub mod common;
pub mod error;
pub mod texture;
pub mod viewer;

pub use error::{Result, SkyError};
