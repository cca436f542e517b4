use crate::chart::TypeChart;
use crate::types::Type;

/// The full chart, attacker rows by defender columns, both in chart order.
pub fn chart_matrix() -> Vec<Vec<f32>> {
    let chart = TypeChart::global();
    Type::ALL
        .iter()
        .map(|&attacker| chart.row(attacker).to_vec())
        .collect()
}

pub fn write_csv(matrix: &[Vec<f32>], path: &std::path::Path) -> anyhow::Result<()> {
    let mut out = String::new();
    for (row_idx, row) in matrix.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            if col_idx > 0 {
                out.push(',');
            }
            out.push_str(&format!("{value:.2}"));
        }
        if row_idx + 1 < matrix.len() {
            out.push('\n');
        }
    }
    std::fs::write(path, out)?;
    Ok(())
}
