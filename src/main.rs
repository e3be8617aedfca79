// src/main.rs

use std::error::Error;
use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;

use math::FilterConstants;
use simulation::csv::*;
use simulation::framework::*;
use simulation::load_parameters::*;

mod config;
mod math;
mod models;
mod simulation;

fn main() -> Result<(), Box<dyn Error>> {
    // シミュレーションパラメータの読み込み
    let params = load_simulation_parameters("config/parameters.yaml")?;

    // ランナーの初期化（フィルタ定数はこのスコープでは固定）
    let mut runner = SimulationRunner::new(FilterConstants::default());
    let mut rng = StdRng::from_entropy();

    // シミュレーションの実行
    let series = runner.on_parameters_changed(&params, &mut rng)?;

    // CSV出力の設定
    std::fs::create_dir_all("output")?;
    let mut writer: Box<dyn Write> = setup_csv_output("output/simulation_results.csv")?;

    // CSV行の作成と書き込み
    for index in 0..series.len() {
        let row = create_csv_row(series, index);
        writer.write_all(row.as_bytes())?;
    }

    Ok(())
}
