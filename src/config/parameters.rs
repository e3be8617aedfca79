// src/config/parameters.rs

use serde::Deserialize;
use thiserror::Error;

/// シミュレーションパラメータの構造体
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationParameters {
    pub frequency: f64,         // 信号周波数 (Hz)
    pub amplitude: f64,         // 信号振幅
    pub offset: f64,            // 信号オフセット（直流成分）
    pub sampling_interval: f64, // サンプリング間隔 (s)
    pub total_time: f64,        // シミュレーション総時間 (s)
    pub noise_variance: f64,    // 観測ノイズの分散
}

/// パラメータ検証エラー
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("サンプリング間隔は正の値でなければなりません: {0}")]
    NonPositiveSamplingInterval(f64),
    #[error("総時間は負であってはなりません: {0}")]
    NegativeTotalTime(f64),
    #[error("ノイズ分散は負であってはなりません: {0}")]
    NegativeNoiseVariance(f64),
}

impl SimulationParameters {
    /// パラメータの妥当性を検証する
    ///
    /// # 戻り値
    /// - 妥当な場合は`Ok(())`、不正な場合は`ConfigError`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling_interval <= 0.0 {
            return Err(ConfigError::NonPositiveSamplingInterval(
                self.sampling_interval,
            ));
        }
        if self.total_time < 0.0 {
            return Err(ConfigError::NegativeTotalTime(self.total_time));
        }
        if self.noise_variance < 0.0 {
            return Err(ConfigError::NegativeNoiseVariance(self.noise_variance));
        }
        Ok(())
    }

    /// サンプル数 N = floor(total_time / sampling_interval) を計算する
    ///
    /// # 戻り値
    /// - サンプル数（総時間がサンプリング間隔に満たない場合は0）
    pub fn sample_count(&self) -> usize {
        let n = self.total_time / self.sampling_interval;
        if n <= 0.0 {
            0
        } else {
            n.floor() as usize
        }
    }
}
