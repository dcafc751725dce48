//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path, sync::Arc};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{Column, CsvReadOptions, CsvReader, DataType}};
use tracing::info;

use crate::{error::LoadError, records::Record, types::{AreaCode, DogSexVocabulary}};
use super::columns::{self, source_name};

/// Every column is read as a string so IDs keep leading zeros and codes are
/// parsed by [`AreaCode::from_text`] rather than a lossy numeric cast.
fn string_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

/// Reads a CSV file from `path` into a Polars DataFrame of string columns.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReader::new(file)
        .with_options(string_options())
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(csv.as_bytes()))
        .with_options(string_options())
        .finish()
        .with_context(|| "[io::csv::read] Failed to read CSV from string")
}

/// Read registration records from a CSV file.
pub(crate) fn read_records(path: &Path, vocabulary: &DogSexVocabulary) -> Result<Vec<Record>> {
    let df = read_csv(path)?;
    let records = records_from_frame(&df, vocabulary)
        .with_context(|| format!("[io::csv::read] Malformed records in {}", path.display()))?;
    info!(path = %path.display(), rows = records.len(), "loaded records");
    Ok(records)
}

/// Extract typed records from a DataFrame with source or canonical headers.
pub(crate) fn records_from_frame(df: &DataFrame, vocabulary: &DogSexVocabulary) -> Result<Vec<Record>> {
    let owner_ids = required_strings(df, columns::OWNER_ID)?;
    let owner_sexes = required_strings(df, columns::OWNER_SEX)?;
    let dog_sexes = required_strings(df, columns::DOG_SEX)?;
    let area_codes = required_area_codes(df, columns::AREA_CODE)?;

    let area_labels = optional_strings(df, columns::AREA_LABEL)?;
    let breeds = optional_strings(df, columns::BREED)?;
    let colors = optional_strings(df, columns::DOG_COLOR)?;
    let birth_years = optional_i32(df, columns::DOG_BIRTH_YEAR)?;
    let record_years = optional_i32(df, columns::RECORD_YEAR)?;

    let domain = vocabulary.resolve(dog_sexes.iter().map(|s| &**s));

    let records = (0..df.height())
        .map(|row| Record {
            owner_id: owner_ids[row].clone(),
            owner_sex: owner_sexes[row].clone(),
            dog_sex: domain.get(&dog_sexes[row]).cloned()
                .unwrap_or_else(|| vocabulary.classify(&dog_sexes[row])),
            area_code: area_codes[row],
            area_label: area_labels.as_ref().and_then(|v| v[row].clone()),
            breed: breeds.as_ref().and_then(|v| v[row].clone()),
            dog_birth_year: birth_years.as_ref().and_then(|v| v[row]),
            dog_color: colors.as_ref().and_then(|v| v[row].clone()),
            record_year: record_years.as_ref().and_then(|v| v[row]),
        })
        .collect();

    Ok(records)
}

/// Find a column by canonical name, falling back to its source header.
fn find_column<'a>(df: &'a DataFrame, canonical: &'static str) -> Option<&'a Column> {
    df.column(canonical).ok()
        .or_else(|| source_name(canonical).and_then(|name| df.column(name).ok()))
}

fn require_column<'a>(df: &'a DataFrame, canonical: &'static str) -> Result<&'a Column> {
    find_column(df, canonical).ok_or_else(|| {
        anyhow::Error::from(LoadError::MissingColumn {
            column: canonical,
            source_name: source_name(canonical).unwrap_or(canonical),
        })
    })
}

/// String values of a column; blank cells count as missing.
fn strings(column: &Column) -> Result<Vec<Option<Arc<str>>>> {
    let column = column.cast(&DataType::String)?;
    let values = column.str()?.into_iter()
        .map(|value| value.map(str::trim).filter(|s| !s.is_empty()).map(Arc::from))
        .collect();
    Ok(values)
}

fn required_strings(df: &DataFrame, canonical: &'static str) -> Result<Vec<Arc<str>>> {
    strings(require_column(df, canonical)?)?.into_iter().enumerate()
        .map(|(row, value)| value.ok_or_else(|| anyhow::Error::from(LoadError::NullValue { column: canonical, row })))
        .collect()
}

fn optional_strings(df: &DataFrame, canonical: &'static str) -> Result<Option<Vec<Option<Arc<str>>>>> {
    find_column(df, canonical).map(strings).transpose()
}

fn required_area_codes(df: &DataFrame, canonical: &'static str) -> Result<Vec<AreaCode>> {
    strings(require_column(df, canonical)?)?.into_iter().enumerate()
        .map(|(row, value)| {
            let value = value.ok_or_else(|| anyhow::Error::from(LoadError::NullValue { column: canonical, row }))?;
            AreaCode::from_text(&value).ok_or_else(|| {
                anyhow::Error::from(LoadError::InvalidValue { column: canonical, row, value: value.to_string() })
            })
        })
        .collect()
}

/// Integer values of an optional column; unparseable cells count as missing.
fn optional_i32(df: &DataFrame, canonical: &'static str) -> Result<Option<Vec<Option<i32>>>> {
    find_column(df, canonical)
        .map(|column| -> Result<Vec<Option<i32>>> {
            Ok(strings(column)?.into_iter()
                .map(|value| value.and_then(|v| v.parse().ok()))
                .collect())
        })
        .transpose()
}
