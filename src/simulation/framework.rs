// src/simulation/framework.rs

use rand::Rng;

use crate::config::SimulationParameters;
use crate::math::{FilterConstants, KalmanFilter};
use crate::models::signal::{add_observation_noise, generate_time_axis, generate_true_signal};
use crate::simulation::{SampleSeries, SimulationError};

/// 1回のシミュレーション実行
///
/// パラメータを検証し、時間軸・真の信号・観測信号を生成したうえで、
/// 新しいフィルタで観測系列をフィルタリングする。
///
/// # 引数
/// - `run_id`: 実行識別子
/// - `params`: シミュレーションパラメータ
/// - `constants`: フィルタ定数
/// - `rng`: 乱数生成器
///
/// # 戻り値
/// - 4系列がインデックス揃いになった`SampleSeries`
/// - 設定が不正な場合・フィルタが縮退した場合はエラーとし、部分的な結果は返さない
pub fn run_simulation<R: Rng>(
    run_id: u64,
    params: &SimulationParameters,
    constants: FilterConstants,
    rng: &mut R,
) -> Result<SampleSeries, SimulationError> {
    // 設定の検証（計算開始前に失敗させる）
    params.validate()?;

    let time = generate_time_axis(params);
    let true_signal = generate_true_signal(params, &time);
    let noisy_signal = add_observation_noise(&true_signal, params.noise_variance, rng);

    // フィルタ状態は実行ごとに新規生成し、実行間で共有しない
    let mut filter = KalmanFilter::new(constants);
    let filtered_signal = filter.filter_sequence(&noisy_signal)?;

    Ok(SampleSeries {
        run_id,
        time,
        true_signal,
        noisy_signal,
        filtered_signal,
    })
}

/// パラメータ変更を受けて再計算を行うランナー
///
/// パラメータが変わるたびに`on_parameters_changed`を呼ぶことで、
/// 完結した独立の実行を1回行い、成功した場合のみ最新結果を置き換える。
/// 失敗した実行は以前の結果を置き換えない（古くても正しいデータを優先する）。
pub struct SimulationRunner {
    constants: FilterConstants,
    next_run_id: u64,
    latest: Option<SampleSeries>,
}

impl SimulationRunner {
    /// フィルタ定数を指定してランナーを生成する
    pub fn new(constants: FilterConstants) -> SimulationRunner {
        SimulationRunner {
            constants,
            next_run_id: 0,
            latest: None,
        }
    }

    /// パラメータ変更時の再計算
    ///
    /// # 引数
    /// - `params`: 変更後のシミュレーションパラメータ
    /// - `rng`: 乱数生成器
    ///
    /// # 戻り値
    /// - 成功した場合は公開された最新の`SampleSeries`への参照
    pub fn on_parameters_changed<R: Rng>(
        &mut self,
        params: &SimulationParameters,
        rng: &mut R,
    ) -> Result<&SampleSeries, SimulationError> {
        let run_id = self.next_run_id;
        self.next_run_id += 1;

        let series = run_simulation(run_id, params, self.constants, rng)?;
        Ok(self.latest.insert(series))
    }

    /// 最後に公開された結果を返す
    pub fn latest(&self) -> Option<&SampleSeries> {
        self.latest.as_ref()
    }
}
