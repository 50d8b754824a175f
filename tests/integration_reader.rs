//! Integration tests for the typed record reader over real files
//!
//! These tests exercise the full pipeline (file open, skip, tokenize,
//! assemble, convert) the way the CLI drives it, including a non-default
//! dialect with semicolon fields and single-quote escaping.

use std::fs::File;
use std::io::{BufReader, Write};

use tempfile::NamedTempFile;
use typedcsv::config::ParserConfig;
use typedcsv::parser::{FieldType, RecordReader, Schema, Value};
use typedcsv::{Error, ParseErrorKind};

/// Write content to a temp file and return its handle
fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn open_reader(
    file: &NamedTempFile,
    schema: Schema,
    config: ParserConfig,
) -> RecordReader<BufReader<File>> {
    let source = BufReader::new(File::open(file.path()).unwrap());
    RecordReader::new(source, schema, config).unwrap()
}

#[test]
fn test_parse_csv_file_end_to_end() {
    let file = write_temp_file("city,population,area\nLondon,8900000,1572.0\nYork,210000,271.9\n");
    let schema = Schema::new(vec![FieldType::Text, FieldType::Integer, FieldType::Float]);
    let config = ParserConfig {
        skip_lines: 1,
        ..ParserConfig::default()
    };

    let records: Vec<_> = open_reader(&file, schema, config)
        .collect::<typedcsv::Result<Vec<_>>>()
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get(0), Some(&Value::Text("London".to_string())));
    assert_eq!(records[0].get(1), Some(&Value::Integer(8_900_000)));
    assert_eq!(records[1].get(2), Some(&Value::Float(271.9)));
}

#[test]
fn test_parse_semicolon_dialect_with_header_skip() {
    // Same dialect the original driving program used: skip one line,
    // semicolon fields, single-quote escaping
    let file = write_temp_file(concat!(
        "name;score;ratio\n",
        "'Smith; John';10;0.5\n",
        "'O''Brien';7;1.25\n",
    ));
    let schema = Schema::new(vec![FieldType::Text, FieldType::Integer, FieldType::Float]);
    let config = ParserConfig {
        skip_lines: 1,
        row_delimiter: '\n',
        field_delimiter: ';',
        escape_char: '\'',
    };

    let records: Vec<_> = open_reader(&file, schema, config)
        .collect::<typedcsv::Result<Vec<_>>>()
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].get(0),
        Some(&Value::Text("Smith; John".to_string()))
    );
    assert_eq!(records[1].get(0), Some(&Value::Text("O'Brien".to_string())));
    assert_eq!(records[1].get(2), Some(&Value::Float(1.25)));
}

#[test]
fn test_error_position_survives_file_pipeline() {
    let file = write_temp_file("ok,1\nok,2\noops,notanint\n");
    let schema = Schema::new(vec![FieldType::Text, FieldType::Integer]);

    let mut reader = open_reader(&file, schema, ParserConfig::default());
    assert!(reader.next().unwrap().is_ok());
    assert!(reader.next().unwrap().is_ok());

    match reader.next().unwrap() {
        Err(Error::Parse(e)) => {
            assert_eq!(
                e.kind,
                ParseErrorKind::Conversion {
                    raw: "notanint".to_string()
                }
            );
            assert_eq!((e.line, e.column), (3, 2));
        }
        other => panic!("expected conversion error, got {:?}", other),
    }
}

#[test]
fn test_record_display_matches_tuple_form() {
    let file = write_temp_file("a,1,2.5\n");
    let schema = Schema::new(vec![FieldType::Text, FieldType::Integer, FieldType::Float]);

    let mut reader = open_reader(&file, schema, ParserConfig::default());
    let record = reader.next().unwrap().unwrap();
    assert_eq!(record.to_string(), "(a, 1, 2.5)");
}

#[test]
fn test_fresh_readers_over_same_file_agree() {
    let file = write_temp_file("a,1\n\"bad\nc,3\n");
    let schema = Schema::new(vec![FieldType::Text, FieldType::Integer]);

    let run = || -> Vec<String> {
        open_reader(&file, schema.clone(), ParserConfig::default())
            .map(|r| match r {
                Ok(record) => record.to_string(),
                Err(e) => e.to_string(),
            })
            .collect()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert!(first[1].contains("unclosed escape character"));
}
