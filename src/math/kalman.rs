// src/math/kalman.rs

use crate::math::error::MathError;

/// スカラーカルマンフィルタの固定定数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConstants {
    pub f: f64,  // 状態遷移
    pub h: f64,  // 観測モデル
    pub q: f64,  // プロセスノイズ分散
    pub r: f64,  // 観測ノイズ分散
    pub p0: f64, // 初期誤差共分散
    pub x0: f64, // 初期状態推定値
}

impl Default for FilterConstants {
    fn default() -> Self {
        FilterConstants {
            f: 1.0,
            h: 1.0,
            q: 1.0,
            r: 10.0,
            p0: 1.0,
            x0: 0.0,
        }
    }
}

/// スカラーカルマンフィルタ
///
/// 状態推定値 x と誤差共分散 P を保持し、predict / update の繰り返しで更新する。
/// 1回のシミュレーション実行ごとに新しいインスタンスを生成し、実行後は破棄する。
#[derive(Debug, Clone, PartialEq)]
pub struct KalmanFilter {
    pub constants: FilterConstants,
    pub x: f64, // 現在の状態推定値
    pub p: f64, // 現在の誤差共分散
}

impl KalmanFilter {
    /// フィルタ定数から初期状態のフィルタを生成する
    pub fn new(constants: FilterConstants) -> KalmanFilter {
        KalmanFilter {
            constants,
            x: constants.x0,
            p: constants.p0,
        }
    }

    /// 予測ステップ
    ///
    /// x ← F·x、P ← F·P·F + Q を適用する。
    ///
    /// # 戻り値
    /// - 事前推定値（a priori）
    pub fn predict(&mut self) -> f64 {
        self.x = self.constants.f * self.x;
        self.p = self.constants.f * self.p * self.constants.f + self.constants.q;
        self.x
    }

    /// 更新ステップ
    ///
    /// # 引数
    /// - `z`: 観測値
    ///
    /// # 戻り値
    /// - 事後推定値（a posteriori）
    /// - イノベーション共分散 S = H·P·H + R がゼロの場合は`MathError::DegenerateInnovation`
    pub fn update(&mut self, z: f64) -> Result<f64, MathError> {
        let s = self.constants.h * self.p * self.constants.h + self.constants.r;
        if s == 0.0 {
            return Err(MathError::DegenerateInnovation);
        }
        let k = self.p * self.constants.h / s;
        self.x = self.x + k * (z - self.constants.h * self.x);
        self.p = (1.0 - k * self.constants.h) * self.p;
        Ok(self.x)
    }

    /// 観測系列全体のフィルタリング
    ///
    /// 観測値ごとに predict → update を順に適用し、事後推定値の系列を返す。
    /// 出力の各要素はそれまでの観測値のみに依存する（因果的・一方向パス）。
    ///
    /// # 引数
    /// - `observations`: 観測値の系列
    ///
    /// # 戻り値
    /// - 同じ長さのフィルタ済み推定値の系列
    /// - 途中で縮退した場合はエラーとし、部分的な系列は返さない
    pub fn filter_sequence(&mut self, observations: &[f64]) -> Result<Vec<f64>, MathError> {
        let mut estimates = Vec::with_capacity(observations.len());
        for &z in observations {
            self.predict();
            estimates.push(self.update(z)?);
        }
        Ok(estimates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 基準定数 {F:1, H:1, Q:1, R:10, P0:1, x0:0} での最初の1ステップ。
    /// predict で P = 1·1·1 + 1 = 2 となり、update では
    /// K = 2 / (2 + 10) = 1/6、x = 0 + (1/6)·(z − 0) = z/6 となる。
    #[test]
    fn test_first_predict_update_step() {
        let mut kf = KalmanFilter::new(FilterConstants::default());

        let a_priori = kf.predict();
        assert_eq!(a_priori, 0.0);
        assert_eq!(kf.p, 2.0);

        let z = 12.0;
        let estimate = kf.update(z).unwrap();
        let expected_k = 2.0 / 12.0;
        assert!((estimate - expected_k * z).abs() < 1e-12);
        assert!((kf.p - (1.0 - expected_k) * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_filter_sequence_output_length_matches_input() {
        let mut kf = KalmanFilter::new(FilterConstants::default());
        let observations = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let estimates = kf.filter_sequence(&observations).unwrap();
        assert_eq!(estimates.len(), observations.len());
    }

    #[test]
    fn test_filter_sequence_empty_input() {
        let mut kf = KalmanFilter::new(FilterConstants::default());
        let estimates = kf.filter_sequence(&[]).unwrap();
        assert!(estimates.is_empty());
    }

    /// 出力はそれまでの観測値のみに依存する（因果性）。
    /// 後続の観測値を書き換えても前半の出力は変化しない。
    #[test]
    fn test_filter_sequence_is_causal() {
        let observations: Vec<f64> = (0..100).map(|i| (i as f64 * 0.1).sin()).collect();
        let mut tampered = observations.clone();
        for z in tampered.iter_mut().skip(50) {
            *z = 1e6;
        }

        let full = KalmanFilter::new(FilterConstants::default())
            .filter_sequence(&observations)
            .unwrap();
        let prefix = KalmanFilter::new(FilterConstants::default())
            .filter_sequence(&tampered)
            .unwrap();

        for i in 0..50 {
            assert_eq!(full[i], prefix[i]);
        }
    }

    /// 同じ定数と同じ観測系列に対して、出力はビット単位で一致する
    #[test]
    fn test_filter_sequence_is_deterministic() {
        let observations: Vec<f64> = (0..200).map(|i| 10.0 + (i as f64).cos()).collect();
        let first = KalmanFilter::new(FilterConstants::default())
            .filter_sequence(&observations)
            .unwrap();
        let second = KalmanFilter::new(FilterConstants::default())
            .filter_sequence(&observations)
            .unwrap();
        assert_eq!(first, second);
    }

    /// 非縮退の定数 (F,H,Q,R,P0 ≥ 0) であれば、P は全ステップで非負を保つ
    #[test]
    fn test_covariance_stays_non_negative() {
        let constant_sets = [
            FilterConstants::default(),
            FilterConstants {
                f: 0.5,
                h: 2.0,
                q: 0.01,
                r: 1.0,
                p0: 100.0,
                x0: 0.0,
            },
            FilterConstants {
                f: 1.2,
                h: 0.1,
                q: 5.0,
                r: 0.001,
                p0: 0.0,
                x0: 3.0,
            },
            FilterConstants {
                f: 0.0,
                h: 1.0,
                q: 0.0,
                r: 2.0,
                p0: 1.0,
                x0: -1.0,
            },
        ];

        for constants in constant_sets {
            let mut kf = KalmanFilter::new(constants);
            for i in 0..1000 {
                kf.predict();
                kf.update((i as f64 * 0.01).sin()).unwrap();
                assert!(
                    kf.p >= 0.0,
                    "P が負になりました: P = {}, constants = {:?}",
                    kf.p,
                    constants
                );
            }
        }
    }

    /// 縮退した定数 {F:1, H:0, Q:0, R:0, P0:0} では S = 0 となり、
    /// NaN を出力する代わりにエラーを返す
    #[test]
    fn test_degenerate_constants_are_rejected() {
        let constants = FilterConstants {
            f: 1.0,
            h: 0.0,
            q: 0.0,
            r: 0.0,
            p0: 0.0,
            x0: 0.0,
        };
        let mut kf = KalmanFilter::new(constants);
        let result = kf.filter_sequence(&[1.0, 2.0, 3.0]);
        assert_eq!(result, Err(MathError::DegenerateInnovation));
    }
}
