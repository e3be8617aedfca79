// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;

use serde_yaml::from_reader;

use crate::config::SimulationParameters;

/// シミュレーションパラメータの読み込み
pub fn load_simulation_parameters(path: &str) -> Result<SimulationParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    let params: SimulationParameters = from_reader(file)?;
    Ok(params)
}
