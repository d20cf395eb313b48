//! Turning report tables into downloadable documents.

use thiserror::Error;

use greenscape_inventory::ReportTable;

use crate::mail::ReportDocument;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv buffer flush failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait ReportRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn extension(&self) -> &'static str;

    fn render(&self, table: &ReportTable) -> Result<Vec<u8>, RenderError>;

    /// Render and name the result after the report kind.
    fn document(&self, table: &ReportTable) -> Result<ReportDocument, RenderError> {
        Ok(ReportDocument {
            kind: table.kind,
            file_name: format!("{}.{}", table.kind.file_stem(), self.extension()),
            content_type: self.content_type().to_string(),
            bytes: self.render(table)?,
        })
    }
}

/// Header row followed by one record per table row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl ReportRenderer for CsvRenderer {
    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, table: &ReportTable) -> Result<Vec<u8>, RenderError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        writer
            .into_inner()
            .map_err(|e| RenderError::Io(std::io::Error::other(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenscape_inventory::ReportKind;

    fn table() -> ReportTable {
        ReportTable {
            kind: ReportKind::Inventory,
            headers: vec!["Item Name".to_string(), "Price".to_string()],
            rows: vec![
                vec!["Rake".to_string(), "Rs.450.00".to_string()],
                vec!["Seeds, mixed".to_string(), "Rs.80.00".to_string()],
            ],
        }
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let bytes = CsvRenderer.render(&table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["Item Name,Price", "Rake,Rs.450.00", "\"Seeds, mixed\",Rs.80.00"]
        );
    }

    #[test]
    fn header_only_table_renders_single_line() {
        let mut empty = table();
        empty.rows.clear();
        let text = String::from_utf8(CsvRenderer.render(&empty).unwrap()).unwrap();
        assert_eq!(text, "Item Name,Price\n");
    }

    #[test]
    fn document_is_named_after_report_kind() {
        let mut low = table();
        low.kind = ReportKind::LowStock;
        let doc = CsvRenderer.document(&low).unwrap();
        assert_eq!(doc.file_name, "low_stock_alerts_report.csv");
        assert_eq!(doc.kind, ReportKind::LowStock);
        assert!(doc.content_type.starts_with("text/csv"));
    }
}
