// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

use crate::simulation::{SampleSeries, PLOT_TITLE, SERIES_LABELS, X_AXIS_LABEL, Y_AXIS_LABEL};

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(path: &str) -> Result<Box<dyn Write>, Box<dyn Error>> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
///
/// プロット用のタイトルと軸ラベルをコメント行として先頭に書き込み、
/// 続けて列ヘッダーを書き込む。
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    let mut header = format!("# {}\n# x: {}, y: {}\n", PLOT_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL);
    header.push_str(&format!(
        "{}(s),{},{},{}\n",
        X_AXIS_LABEL, SERIES_LABELS[0], SERIES_LABELS[1], SERIES_LABELS[2]
    ));
    writer.write_all(header.as_bytes())?;
    Ok(())
}

/// CSV行の作成
pub fn create_csv_row(series: &SampleSeries, index: usize) -> String {
    format!(
        "{},{},{},{}\n",
        series.time[index],
        series.true_signal[index],
        series.noisy_signal[index],
        series.filtered_signal[index]
    )
}
