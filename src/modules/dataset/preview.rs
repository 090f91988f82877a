//! Best-effort tabular previews for uploaded datasets.
//!
//! Every entry point here is a pure function of the uploaded bytes and
//! metadata. [`assemble`] never fails: parse problems are folded into
//! [`PreviewResult::Error`] so the upload acknowledgement always goes out.

use serde_json::Value;

use crate::modules::dataset::{model::UploadedFile, schema::PreviewResult};

/// Maximum number of sample rows materialised in a preview
pub const PREVIEW_ROWS: usize = 5;

pub const UPLOADED_MESSAGE: &str = "File uploaded successfully";
pub const PREVIEW_FAILED_MESSAGE: &str = "Could not generate preview";

const CSV_MIME: &str = "text/csv";
const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Json,
    Unknown,
}

#[derive(thiserror::Error, Debug)]
pub enum PreviewError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record {0} is null")]
    NullRecord(usize),
}

/// Decide which extractor handles a file. CSV wins over JSON when the
/// declared type and the extension disagree. Suffixes are matched
/// case-sensitively, so `data.CSV` without a declared type is `Unknown`.
pub fn classify(declared_type: &str, name: &str) -> DatasetFormat {
    if declared_type == CSV_MIME || name.ends_with(".csv") {
        DatasetFormat::Csv
    } else if declared_type == JSON_MIME || name.ends_with(".json") {
        DatasetFormat::Json
    } else {
        DatasetFormat::Unknown
    }
}

pub fn unknown_preview() -> PreviewResult {
    PreviewResult::Unknown { message: UPLOADED_MESSAGE.to_string() }
}

pub fn error_preview() -> PreviewResult {
    PreviewResult::Error { message: PREVIEW_FAILED_MESSAGE.to_string() }
}

/// Header plus up to five sample rows. Lines are split on `\n` only, so a
/// CRLF file keeps its `\r` on the last field of each line.
pub fn extract_csv(text: &str) -> PreviewResult {
    // Every newline terminates the header or a data line
    let total_rows = text.matches('\n').count();

    let mut lines = text.split('\n');
    let headers: Vec<String> =
        lines.next().unwrap_or_default().split(',').map(str::to_string).collect();

    let rows: Vec<Vec<String>> = lines
        .take(PREVIEW_ROWS)
        .map(|line| line.split(',').map(str::to_string).collect::<Vec<_>>())
        // blank or single-field lines are not shown, but still counted
        .filter(|row| row.len() > 1)
        .collect();

    let total_columns = headers.len();
    PreviewResult::Csv { headers, rows, total_rows, total_columns }
}

/// Preview of a top-level JSON array of records.
///
/// Headers come from the first record only. Records with a different key
/// set are read through those same headers, with `null` for anything
/// missing; this is a known limitation kept for compatibility with the
/// dashboard client, not something to widen here.
pub fn extract_json(text: &str) -> Result<PreviewResult, PreviewError> {
    let data: Value = serde_json::from_str(text)?;

    let Value::Array(records) = data else {
        return Ok(unknown_preview());
    };

    let sample = &records[..records.len().min(PREVIEW_ROWS)];
    let headers = match sample.first() {
        Some(first) => record_keys(first)?,
        None => Vec::new(),
    };

    let rows = sample
        .iter()
        .enumerate()
        .map(|(index, record)| {
            headers.iter().map(|key| record_field(record, key, index)).collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_columns = headers.len();
    Ok(PreviewResult::Json { headers, rows, total_rows: records.len(), total_columns })
}

fn record_keys(record: &Value) -> Result<Vec<String>, PreviewError> {
    match record {
        Value::Object(map) => Ok(map.keys().cloned().collect()),
        Value::Array(items) => Ok((0..items.len()).map(|i| i.to_string()).collect()),
        Value::String(s) => Ok((0..s.chars().count()).map(|i| i.to_string()).collect()),
        Value::Null => Err(PreviewError::NullRecord(0)),
        Value::Bool(_) | Value::Number(_) => Ok(Vec::new()),
    }
}

fn record_field(record: &Value, key: &str, index: usize) -> Result<Value, PreviewError> {
    let value = match record {
        Value::Object(map) => map.get(key).cloned(),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)).cloned(),
        Value::String(s) => key
            .parse::<usize>()
            .ok()
            .and_then(|i| s.chars().nth(i))
            .map(|c| Value::String(c.to_string())),
        Value::Null => return Err(PreviewError::NullRecord(index)),
        Value::Bool(_) | Value::Number(_) => None,
    };
    Ok(value.unwrap_or(Value::Null))
}

/// Build the preview for an uploaded file. Total: never returns an error.
pub fn assemble(file: &UploadedFile) -> PreviewResult {
    let format = classify(&file.declared_type, &file.name);
    if format == DatasetFormat::Unknown {
        return unknown_preview();
    }

    let decoded = String::from_utf8_lossy(&file.content);
    let text = decoded.strip_prefix('\u{feff}').unwrap_or(&*decoded);

    match format {
        DatasetFormat::Csv => extract_csv(text),
        DatasetFormat::Json => extract_json(text).unwrap_or_else(|e| {
            log::warn!("Preview generation error for '{}': {}", file.name, e);
            error_preview()
        }),
        DatasetFormat::Unknown => unknown_preview(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file(name: &str, declared_type: &str, content: &str) -> UploadedFile {
        UploadedFile::new(name, declared_type, content.as_bytes().to_vec())
    }

    // === classify ===

    #[test]
    fn test_classify_by_mime_or_extension() {
        assert_eq!(classify("text/csv", "upload"), DatasetFormat::Csv);
        assert_eq!(classify("", "flows.csv"), DatasetFormat::Csv);
        assert_eq!(classify("application/json", "upload"), DatasetFormat::Json);
        assert_eq!(classify("", "flows.json"), DatasetFormat::Json);
        assert_eq!(classify("", "capture.pcap"), DatasetFormat::Unknown);
        assert_eq!(classify("application/vnd.tcpdump.pcap", "x"), DatasetFormat::Unknown);
    }

    #[test]
    fn test_classify_csv_wins_conflicts() {
        assert_eq!(classify("application/json", "flows.csv"), DatasetFormat::Csv);
        assert_eq!(classify("text/csv", "flows.json"), DatasetFormat::Csv);
    }

    #[test]
    fn test_classify_extension_is_case_sensitive() {
        assert_eq!(classify("", "data.CSV"), DatasetFormat::Unknown);
        assert_eq!(classify("", "data.Json"), DatasetFormat::Unknown);
    }

    // === extract_csv ===

    #[test]
    fn test_csv_basic() {
        let preview = extract_csv("a,b,c\n1,2,3\n4,5,6");
        assert_eq!(
            preview,
            PreviewResult::Csv {
                headers: vec!["a".into(), "b".into(), "c".into()],
                rows: vec![
                    vec!["1".into(), "2".into(), "3".into()],
                    vec!["4".into(), "5".into(), "6".into()],
                ],
                total_rows: 2,
                total_columns: 3,
            }
        );
    }

    #[test]
    fn test_csv_header_only() {
        let PreviewResult::Csv { headers, rows, total_rows, total_columns } =
            extract_csv("src_ip,dst_ip,label")
        else {
            panic!("Expected Csv variant");
        };
        assert_eq!(headers.len(), 3);
        assert!(rows.is_empty());
        assert_eq!(total_rows, 0);
        assert_eq!(total_columns, 3);
    }

    #[test]
    fn test_csv_empty_content() {
        let preview = extract_csv("");
        assert_eq!(
            preview,
            PreviewResult::Csv {
                headers: vec!["".into()],
                rows: vec![],
                total_rows: 0,
                total_columns: 1
            }
        );
    }

    #[test]
    fn test_csv_caps_sample_at_five_rows() {
        let mut text = String::from("x,y");
        for i in 0..20 {
            text.push_str(&format!("\n{i},{}", i * 2));
        }
        let PreviewResult::Csv { rows, total_rows, .. } = extract_csv(&text) else {
            panic!("Expected Csv variant");
        };
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4], vec!["4".to_string(), "8".to_string()]);
        assert_eq!(total_rows, 20);
    }

    #[test]
    fn test_csv_drops_single_field_lines_but_counts_them() {
        // trailing newline yields an empty last line
        let PreviewResult::Csv { rows, total_rows, .. } = extract_csv("a,b\n1,2\n\nlonely\n3,4\n")
        else {
            panic!("Expected Csv variant");
        };
        assert_eq!(rows, vec![vec!["1".to_string(), "2".to_string()], vec!["3".into(), "4".into()]]);
        assert_eq!(total_rows, 5);
    }

    #[test]
    fn test_csv_keeps_carriage_returns() {
        let PreviewResult::Csv { headers, rows, .. } = extract_csv("a,b\r\n1,2\r\n") else {
            panic!("Expected Csv variant");
        };
        assert_eq!(headers, vec!["a".to_string(), "b\r".to_string()]);
        assert_eq!(rows[0], vec!["1".to_string(), "2\r".to_string()]);
    }

    // === extract_json ===

    #[test]
    fn test_json_array_of_records() {
        let preview = extract_json(r#"[{"x":1},{"x":2},{"x":3}]"#).unwrap();
        assert_eq!(
            preview,
            PreviewResult::Json {
                headers: vec!["x".into()],
                rows: vec![vec![json!(1)], vec![json!(2)], vec![json!(3)]],
                total_rows: 3,
                total_columns: 1,
            }
        );
    }

    #[test]
    fn test_json_headers_keep_document_order() {
        let PreviewResult::Json { headers, .. } =
            extract_json(r#"[{"protocol":"tcp","bytes":10,"attack":"dos"}]"#).unwrap()
        else {
            panic!("Expected Json variant");
        };
        assert_eq!(headers, vec!["protocol", "bytes", "attack"]);
    }

    #[test]
    fn test_json_uses_first_record_keys_only() {
        let PreviewResult::Json { headers, rows, .. } =
            extract_json(r#"[{"a":1,"b":2},{"a":3,"c":4}]"#).unwrap()
        else {
            panic!("Expected Json variant");
        };
        assert_eq!(headers, vec!["a", "b"]);
        assert_eq!(rows[1], vec![json!(3), Value::Null]);
    }

    #[test]
    fn test_json_caps_sample_but_counts_all() {
        let records: Vec<Value> = (0..12).map(|i| json!({ "id": i })).collect();
        let text = serde_json::to_string(&records).unwrap();
        let PreviewResult::Json { rows, total_rows, total_columns, .. } =
            extract_json(&text).unwrap()
        else {
            panic!("Expected Json variant");
        };
        assert_eq!(rows.len(), 5);
        assert_eq!(total_rows, 12);
        assert_eq!(total_columns, 1);
    }

    #[test]
    fn test_json_empty_array() {
        let preview = extract_json("[]").unwrap();
        assert_eq!(
            preview,
            PreviewResult::Json { headers: vec![], rows: vec![], total_rows: 0, total_columns: 0 }
        );
    }

    #[test]
    fn test_json_object_root_is_unknown() {
        let preview = extract_json(r#"{"x":1}"#).unwrap();
        assert_eq!(preview, PreviewResult::Unknown { message: UPLOADED_MESSAGE.into() });
    }

    #[test]
    fn test_json_invalid_is_error() {
        assert!(matches!(extract_json("not json"), Err(PreviewError::Json(_))));
    }

    #[test]
    fn test_json_null_first_record_is_error() {
        assert!(matches!(extract_json("[null]"), Err(PreviewError::NullRecord(0))));
    }

    #[test]
    fn test_json_null_later_record_is_error_when_headers_exist() {
        assert!(matches!(extract_json(r#"[{"a":1},null]"#), Err(PreviewError::NullRecord(1))));
        // no headers means nothing is read from the null record
        assert!(extract_json("[1,null]").is_ok());
    }

    #[test]
    fn test_json_scalar_and_nested_array_records() {
        let PreviewResult::Json { headers, rows, .. } = extract_json("[5,6]").unwrap() else {
            panic!("Expected Json variant");
        };
        assert!(headers.is_empty());
        assert_eq!(rows, vec![Vec::<Value>::new(), Vec::new()]);

        let PreviewResult::Json { headers, rows, .. } = extract_json("[[1,2],[3]]").unwrap() else {
            panic!("Expected Json variant");
        };
        assert_eq!(headers, vec!["0", "1"]);
        assert_eq!(rows, vec![vec![json!(1), json!(2)], vec![json!(3), Value::Null]]);
    }

    // === assemble ===

    #[test]
    fn test_assemble_dispatches() {
        let csv = assemble(&file("flows.csv", "", "a,b\n1,2"));
        assert!(matches!(csv, PreviewResult::Csv { total_rows: 1, .. }));

        let json = assemble(&file("flows.json", "", r#"[{"a":1}]"#));
        assert!(matches!(json, PreviewResult::Json { total_rows: 1, .. }));

        let pcap = assemble(&file("capture.pcap", "application/vnd.tcpdump.pcap", "\u{0}\u{1}"));
        assert_eq!(pcap, unknown_preview());
    }

    #[test]
    fn test_assemble_converts_parse_failures() {
        let preview = assemble(&file("flows.json", "application/json", "not json"));
        assert_eq!(preview, PreviewResult::Error { message: PREVIEW_FAILED_MESSAGE.into() });
    }

    #[test]
    fn test_assemble_csv_mime_beats_json_extension() {
        let preview = assemble(&file("flows.json", "text/csv", r#"[{"a":1}]"#));
        assert!(matches!(preview, PreviewResult::Csv { .. }));
    }

    #[test]
    fn test_assemble_strips_byte_order_mark() {
        let preview = assemble(&file("flows.json", "", "\u{feff}[{\"a\":1}]"));
        assert!(matches!(preview, PreviewResult::Json { .. }));
    }

    #[test]
    fn test_assemble_tolerates_invalid_utf8() {
        let upload = UploadedFile::new("flows.csv", "", vec![b'a', b',', 0xff, b'\n', b'1', b',', b'2']);
        let PreviewResult::Csv { headers, total_rows, .. } = assemble(&upload) else {
            panic!("Expected Csv variant");
        };
        assert_eq!(headers[1], "\u{fffd}");
        assert_eq!(total_rows, 1);
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let upload = file("flows.json", "", r#"[{"a":1,"b":[1,2]},{"a":2}]"#);
        let first = serde_json::to_vec(&assemble(&upload)).unwrap();
        let second = serde_json::to_vec(&assemble(&upload)).unwrap();
        assert_eq!(first, second);
    }
}
