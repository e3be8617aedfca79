// src/simulation/mod.rs

pub mod csv;
pub mod framework;
pub mod load_parameters;

use thiserror::Error;

use crate::config::ConfigError;
use crate::math::error::MathError;

/// プロットのタイトル
pub const PLOT_TITLE: &str = "Kalman filter demonstration";
/// 横軸ラベル
pub const X_AXIS_LABEL: &str = "time";
/// 縦軸ラベル
pub const Y_AXIS_LABEL: &str = "value";
/// 系列ラベル（真の信号・観測信号・フィルタ済み信号）
pub const SERIES_LABELS: [&str; 3] = ["true signal", "noisy signal", "filtered signal"];

/// 1回のシミュレーション実行の結果
///
/// 4つの系列はすべて同じ長さで、インデックスが揃っている:
/// filtered_signal[i] は noisy_signal[i] を観測した直後の推定値であり、
/// noisy_signal[i] は time[i] における true_signal[i] の観測値である。
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    pub run_id: u64,               // 実行識別子（古い結果の破棄に使用）
    pub time: Vec<f64>,            // 時間軸 (s)
    pub true_signal: Vec<f64>,     // 真の信号
    pub noisy_signal: Vec<f64>,    // 観測信号
    pub filtered_signal: Vec<f64>, // フィルタ済み推定値
}

impl SampleSeries {
    /// サンプル数を返す
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// 系列が空かどうかを返す
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// シミュレーション実行時のエラー
#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    #[error("設定が不正です: {0}")]
    Config(#[from] ConfigError),
    #[error("フィルタ計算に失敗しました: {0}")]
    Filter(#[from] MathError),
}
