// src/models/signal.rs

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::config::SimulationParameters;

/// 時間軸を生成する純粋関数
///
/// # 引数
/// - `params`: シミュレーションパラメータ
///
/// # 戻り値
/// - time[i] = i · sampling_interval の系列（total_time 以降のサンプルは含まない）
pub fn generate_time_axis(params: &SimulationParameters) -> Vec<f64> {
    (0..params.sample_count())
        .map(|i| i as f64 * params.sampling_interval)
        .collect()
}

/// 真の信号を生成する純粋関数
///
/// # 引数
/// - `params`: シミュレーションパラメータ
/// - `time`: 時間軸
///
/// # 戻り値
/// - trueSignal[i] = offset + amplitude · sin(2π · frequency · time[i]) の系列
pub fn generate_true_signal(params: &SimulationParameters, time: &[f64]) -> Vec<f64> {
    time.iter()
        .map(|&t| params.offset + params.amplitude * (2.0 * PI * params.frequency * t).sin())
        .collect()
}

/// 真の信号に観測ノイズを加える
///
/// ノイズは各サンプルごとに独立な平均0・標準偏差 √noise_variance の正規分布から
/// 生成する。
///
/// # 引数
/// - `true_signal`: 真の信号の系列
/// - `noise_variance`: 観測ノイズの分散（非負）
/// - `rng`: 乱数生成器
///
/// # 戻り値
/// - ノイズを加えた観測信号の系列
pub fn add_observation_noise<R: Rng>(
    true_signal: &[f64],
    noise_variance: f64,
    rng: &mut R,
) -> Vec<f64> {
    let noise_std_dev = noise_variance.sqrt();
    true_signal
        .iter()
        .map(|&value| {
            let z: f64 = rng.sample(StandardNormal);
            value + z * noise_std_dev
        })
        .collect()
}
