//! Lazy, single-pass production of typed records from a buffered source.

use std::io::BufRead;

use tracing::debug;

use super::record::{Record, assemble};
use super::schema::Schema;
use super::tokenizer::tokenize;
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Streaming reader that turns delimited text into typed records.
///
/// The reader exclusively owns its source and is strictly pull-based: apart
/// from discarding the configured `skip_lines` during construction, no input
/// is read until `next()` is called. It is forward-only, single-pass, and
/// finite; once the source runs out the iterator stays fused, and re-parsing
/// requires a fresh reader over a freshly positioned source. Nothing is
/// buffered beyond the current raw line.
///
/// Each `next()` yields either one typed record or one positioned error.
/// After a parse error the reader continues with the line after the failing
/// one; callers that want fail-fast semantics stop at the first `Err`. An
/// I/O failure from the source also surfaces as an `Err` item and exhausts
/// the reader.
pub struct RecordReader<R: BufRead> {
    source: R,
    schema: Schema,
    config: ParserConfig,
    line_number: usize,
    exhausted: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Create a reader and discard the configured number of leading lines.
    ///
    /// Skipped lines are consumed from the source but never counted: the
    /// first data record reports line 1 regardless of the skip. Reaching the
    /// end of input while skipping leaves the reader exhausted.
    pub fn new(source: R, schema: Schema, config: ParserConfig) -> Result<Self> {
        config.validate()?;

        let mut reader = Self {
            source,
            schema,
            config,
            line_number: 0,
            exhausted: false,
        };

        for _ in 0..reader.config.skip_lines {
            if !reader.discard_raw_line()? {
                reader.exhausted = true;
                break;
            }
        }

        debug!(
            "record reader ready: skip_lines={}, arity={}",
            reader.config.skip_lines,
            reader.schema.arity()
        );
        Ok(reader)
    }

    /// 1-based number of the most recently consumed data line (0 before the
    /// first record)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// True once the underlying source has run out of lines
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Read one raw line, exclusive of the row delimiter; `None` at end of
    /// input.
    fn read_raw_line(&mut self) -> Result<Option<String>> {
        let delimiter = self.config.row_delimiter as u8;
        let mut buf = Vec::new();

        let n = self
            .source
            .read_until(delimiter, &mut buf)
            .map_err(|e| Error::io("failed to read from source", e))?;
        if n == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&delimiter) {
            buf.pop();
        }

        let line =
            String::from_utf8(buf).map_err(|_| Error::encoding(self.line_number + 1))?;
        Ok(Some(line))
    }

    /// Consume one raw line without inspecting its content; false at end of
    /// input.
    fn discard_raw_line(&mut self) -> Result<bool> {
        let delimiter = self.config.row_delimiter as u8;
        let mut buf = Vec::new();

        let n = self
            .source
            .read_until(delimiter, &mut buf)
            .map_err(|e| Error::io("failed to skip line", e))?;
        Ok(n != 0)
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let line = match self.read_raw_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                self.exhausted = true;
                debug!("source exhausted after {} data lines", self.line_number);
                return None;
            }
            Err(e) => {
                self.exhausted = true;
                return Some(Err(e));
            }
        };

        self.line_number += 1;
        let result = tokenize(&line, self.line_number, &self.config)
            .and_then(|fields| assemble(&fields, &self.schema, self.line_number));

        match result {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                debug!("rejected line {}: {}", self.line_number, e);
                Some(Err(e.into()))
            }
        }
    }
}
