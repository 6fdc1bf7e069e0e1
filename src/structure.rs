use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::{
    error::ConvertError,
    matrix::{cell_count, AsymmetricMatrix},
    parse,
};

pub const WEIGHT_SECTION: &str = "EDGE_WEIGHT_SECTION";
const TERMINATOR: &str = "EOF";

/// A line of the header part of an ATSP file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    Entry { key: &'a str, value: &'a str },
    WeightSection,
    Other,
}

impl<'a> HeaderLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if let Some((key, value)) = line.split_once(':') {
            HeaderLine::Entry {
                key: key.trim(),
                value: value.trim(),
            }
        } else if line == WEIGHT_SECTION {
            HeaderLine::WeightSection
        } else {
            HeaderLine::Other
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Header {
    entries: HashMap<String, String>,
}

impl Header {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("NAME")
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone)]
pub struct AtspFile {
    pub header: Header,
    pub matrix: AsymmetricMatrix,
}

impl AtspFile {
    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }
}

pub fn parse_atsp_file(path: &Path) -> Result<AtspFile, ConvertError> {
    let text = fs::read_to_string(path).map_err(|e| ConvertError::file_access(path, e))?;
    parse_atsp(&text)
}

pub fn parse_atsp(text: &str) -> Result<AtspFile, ConvertError> {
    let mut lines = text.lines();
    let header = read_header(&mut lines)?;

    let dimension = parse::read_dimension(
        header
            .get("DIMENSION")
            .ok_or_else(|| ConvertError::format("Missing DIMENSION in header"))?,
    )?;
    info!(
        "Parsed header of {:?} with DIMENSION {}",
        header.name().unwrap_or("<unnamed>"),
        dimension
    );

    let body = lines
        .map(str::trim)
        .take_while(|line| !line.is_empty() && *line != TERMINATOR)
        .collect::<Vec<_>>()
        .join(" ");
    let weights = parse::read::<i64>(&body, cell_count(dimension)?)?;
    let matrix = AsymmetricMatrix::from_row_major(dimension, weights)?;

    Ok(AtspFile { header, matrix })
}

fn read_header<'a, I>(lines: &mut I) -> Result<Header, ConvertError>
where
    I: Iterator<Item = &'a str>,
{
    let mut header = Header::default();
    for line in lines {
        match HeaderLine::classify(line) {
            HeaderLine::Entry { key, value } => {
                debug!("Header entry {} = {:?}", key, value);
                header.insert(key, value);
            }
            HeaderLine::WeightSection => return Ok(header),
            HeaderLine::Other => {}
        }
    }
    Err(ConvertError::format(&format!(
        "Missing {} marker",
        WEIGHT_SECTION
    )))
}
