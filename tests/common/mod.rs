//! Synthetic Ames-style CSV shared by the integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const ROWS: usize = 60;

/// Rows with `TotalBsmtSF` missing (every 20th)
pub const BASEMENT_GAPS: usize = 3;

fn row(i: usize) -> String {
    let id = i + 1;
    let zoning = if i % 3 == 0 { "RM" } else { "RL" };
    let area = 800 + 25 * i + (i * 37 % 11) * 10;
    let year = 1950 + (i * 7) % 60;
    let quality = 1 + i % 10;
    let garage = i % 4;
    let basement = if i % 20 == 0 { "NA".to_string() } else { (400 + 10 * i).to_string() };
    let alley = if i % 2 == 0 { "NA" } else { "Grvl" };
    let pool = if i == 5 { "Gd" } else { "NA" };
    let price = 50_000 + 100 * area + 10_000 * quality;

    format!(
        "{},{},{},{},{},{},{},{},{},{}",
        id, zoning, area, year, quality, garage, basement, alley, pool, price
    )
}

pub fn csv_text() -> String {
    let mut text = String::from(
        "Id,MSZoning,GrLivArea,YearBuilt,OverallQual,GarageCars,TotalBsmtSF,Alley,PoolQC,SalePrice\n",
    );
    for i in 0..ROWS {
        text.push_str(&row(i));
        text.push('\n');
    }
    text
}

/// Write the CSV as `name` inside `dir`
pub fn write_csv(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, csv_text()).unwrap();
    path
}
