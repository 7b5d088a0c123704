//! Reading candidate files into memory.

use std::fs;

use rayon::prelude::*;

use guardrails_core::errors::{FileFinding, ParseError};

use super::pool;
use super::types::ScannedFile;

/// File contents paired with the candidate they came from.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub file: ScannedFile,
    pub text: String,
}

/// Read every candidate in parallel, preserving input order.
///
/// Unreadable and non-UTF-8 files become `PARSE_ERROR` findings and the run
/// continues without them.
pub fn read_sources(files: &[ScannedFile], threads: usize) -> (Vec<SourceText>, Vec<FileFinding>) {
    let outcomes: Vec<Result<SourceText, FileFinding>> =
        pool::install(threads, || files.par_iter().map(read_one).collect());

    let mut sources = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(source) => sources.push(source),
            Err(finding) => errors.push(finding),
        }
    }
    (sources, errors)
}

fn read_one(file: &ScannedFile) -> Result<SourceText, FileFinding> {
    let bytes = fs::read(&file.path).map_err(|e| {
        FileFinding::new(
            file.relative_path.clone(),
            ParseError::Unreadable {
                path: file.path.clone(),
                message: e.to_string(),
            },
        )
    })?;
    let mut text = String::from_utf8(bytes).map_err(|e| {
        FileFinding::new(
            file.relative_path.clone(),
            ParseError::Unreadable {
                path: file.path.clone(),
                message: e.utf8_error().to_string(),
            },
        )
    })?;
    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }
    Ok(SourceText {
        file: file.clone(),
        text,
    })
}
