// ==========================================
// Right-to-Repair 备件责任预测 - 序列导出
// ==========================================
// 职责: 将缺口序列写为 CSV，供表格工具查看
// ==========================================

use std::io::Write;

use crate::api::error::ApiResult;
use crate::domain::forecast::ForecastPoint;

/// 将预测/缺口序列写入 CSV（含表头）
///
/// 列顺序与 `ForecastPoint` 字段一致
pub fn write_series_csv<W: Write>(writer: W, series: &[ForecastPoint]) -> ApiResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in series {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;

    tracing::debug!(rows = series.len(), "序列导出完成");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(t: f64, gap: f64) -> ForecastPoint {
        ForecastPoint {
            t_years: t,
            cumulative_failure_fraction: 0.5,
            expected_failures: 50.0,
            parts_required: 55.0,
            available_inventory: 55.0 - gap,
            gap,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &[point(0.0, 0.0), point(0.25, 12.5)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "t_years,cumulative_failure_fraction,expected_failures,parts_required,available_inventory,gap"
        );
        assert!(lines[2].starts_with("0.25,"));
        assert!(lines[2].ends_with(",12.5"));
    }

    #[test]
    fn test_empty_series_writes_nothing() {
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
