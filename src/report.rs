use std::io::Write;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{self, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            name => bail!("Unknown output format: {}", name),
        }
    }
}

// 1 入力ごとの変換結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    pub input: String,
    pub value: Option<u64>,
    pub error_kind: Option<ErrorKind>,
    pub error: Option<String>,
}

impl ConversionRecord {
    pub fn new(input: impl Into<String>, result: &error::Result<u64>) -> Self {
        let input = input.into();
        match result {
            Ok(value) => ConversionRecord {
                input,
                value: Some(*value),
                error_kind: None,
                error: None,
            },
            Err(e) => ConversionRecord {
                input,
                value: None,
                error_kind: Some(e.kind()),
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.value.is_some()
    }
}

// csv は Option<ErrorKind> を直接書けないので文字列にしておく
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow<'a> {
    input: &'a str,
    value: Option<u64>,
    error_kind: Option<&'static str>,
    error: Option<&'a str>,
}

pub fn write_report<W: Write>(
    out: W,
    records: &[ConversionRecord],
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(out, records),
        ReportFormat::Json => write_json(out, records),
        ReportFormat::Csv => write_csv(out, records),
    }
}

fn write_text<W: Write>(mut out: W, records: &[ConversionRecord]) -> Result<()> {
    for record in records {
        match (&record.value, &record.error) {
            (Some(value), _) => writeln!(out, "{}\t{}", record.input, value)?,
            (None, Some(error)) => writeln!(out, "{}\terror: {}", record.input, error)?,
            (None, None) => bail!("Record has neither value nor error: {:?}", record),
        }
    }
    Ok(())
}

fn write_json<W: Write>(mut out: W, records: &[ConversionRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, records).context("Failed to write json")?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(out: W, records: &[ConversionRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer
            .serialize(CsvRow {
                input: &record.input,
                value: record.value,
                error_kind: record.error_kind.map(|k| k.as_str()),
                error: record.error.as_deref(),
            })
            .with_context(|| format!("Failed to write csv row: {:?}", record))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_number;

    fn records() -> Vec<ConversionRecord> {
        ["二〇一七", "十十"]
            .iter()
            .map(|&s| ConversionRecord::new(s, &to_number(s)))
            .collect()
    }

    fn render(format: ReportFormat) -> String {
        let mut out = Vec::new();
        write_report(&mut out, &records(), format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_report() {
        assert_eq!(
            render(ReportFormat::Text),
            "二〇一七\t2017\n十十\terror: 十 appears more than once in subsequence 十十\n"
        );
    }

    #[test]
    fn json_report() {
        let parsed: Vec<ConversionRecord> =
            serde_json::from_str(&render(ReportFormat::Json)).unwrap();
        assert_eq!(parsed, records());
        assert!(render(ReportFormat::Json).contains("\"errorKind\": \"parse\""));
    }

    #[test]
    fn csv_report() {
        let csv = render(ReportFormat::Csv);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("input,value,errorKind,error"));
        assert_eq!(lines.next(), Some("二〇一七,2017,,"));
        assert_eq!(
            lines.next(),
            Some("十十,,parse,十 appears more than once in subsequence 十十")
        );
    }

    #[test]
    fn unknown_format() {
        assert!(ReportFormat::of("xml").is_err());
        assert_eq!(ReportFormat::of("csv").unwrap(), ReportFormat::Csv);
    }
}
