// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("イノベーション共分散 S がゼロのためゲインを計算できません。")]
    DegenerateInnovation,
    // 他の数値計算エラーを追加可能
}
