//! 共通定数

/// 生成するテクスチャの一辺（ピクセル）
pub const TEXTURE_SIZE: usize = 1024;

/// 表示ウィンドウの一辺（テクスチャより小さい）
pub const WINDOW_SIZE: usize = 512;

/// 表示ループの上限フレームレート
pub const TARGET_FPS: usize = 60;

/// 出力画像ファイル名
pub const OUTPUT_FILE: &str = "sky.png";

/// ウィンドウタイトル
pub const WINDOW_TITLE: &str = "Sky Gradient";

/// 夕焼けが現れる時間帯（開区間）
pub const SUNSET_START: f64 = 0.4;
pub const SUNSET_END: f64 = 0.6;

/// 地平線からの距離がこれ未満なら霧の色のみ
pub const FOG_EDGE: f64 = 0.15;

/// 地平線からの距離がこれを超えると空の色のみ
pub const SKY_EDGE: f64 = 0.4;
