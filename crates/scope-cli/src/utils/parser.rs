use crate::cli::OutputFormat;
use aminoscope::core::models::residue::is_canonical;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid mutation '{0}'. Expected 'POS:RES' with a 1-based position (e.g., '6:V').")]
    InvalidMutationFormat(String),

    #[error("Invalid position '{0}'. Positions are 1-based.")]
    InvalidPosition(String),

    #[error("'{0}' is not a single residue code.")]
    InvalidResidueCode(String),

    #[error("'{0}' is not one of the 20 canonical residue codes.")]
    NonCanonicalResidue(char),

    #[error("Invalid boolean '{0}'. Expected 'true' or 'false'.")]
    InvalidBool(String),

    #[error("Unknown output format '{0}'. Expected 'text', 'json', 'toml' or 'csv'.")]
    UnknownFormat(String),
}

/// A single-residue substitution requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    /// 1-based position.
    pub position: usize,
    pub residue: char,
}

pub fn parse_residue_code(s: &str) -> Result<char, ParseError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseError::InvalidResidueCode(s.to_string())),
    }
}

pub fn parse_mutation(s: &str) -> Result<Mutation, ParseError> {
    let (position, residue) = s
        .split_once(':')
        .ok_or_else(|| ParseError::InvalidMutationFormat(s.to_string()))?;

    let position = position.trim();
    let position: usize = position
        .parse()
        .ok()
        .filter(|&p| p > 0)
        .ok_or_else(|| ParseError::InvalidPosition(position.to_string()))?;

    let residue = parse_residue_code(residue.trim())?.to_ascii_uppercase();
    if !is_canonical(residue) {
        return Err(ParseError::NonCanonicalResidue(residue));
    }

    Ok(Mutation { position, residue })
}

pub fn parse_bool(s: &str) -> Result<bool, ParseError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ParseError::InvalidBool(s.to_string())),
    }
}

pub fn parse_format(s: &str) -> Result<OutputFormat, ParseError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "toml" => Ok(OutputFormat::Toml),
        "csv" => Ok(OutputFormat::Csv),
        _ => Err(ParseError::UnknownFormat(s.to_string())),
    }
}
