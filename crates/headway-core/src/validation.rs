use crate::types::{Cylinder, DiskGeometry};
use crate::{HeadwayError, Result};
use serde::Serialize;
use std::num::IntErrorKind;

/// Field name used in errors about the head position
pub const INITIAL_FIELD: &str = "initial position";

/// A request set and head position that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedInput {
    /// Requests in the order they were supplied, duplicates kept
    pub requests: Vec<Cylinder>,
    /// Starting head position
    pub initial: Cylinder,
}

fn request_field(index: usize) -> String {
    format!("request #{}", index + 1)
}

/// A well-formed integer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerToken<'a> {
    Value(i64),
    /// Integer too large for `i64`, kept as written
    Overflow(&'a str),
}

impl IntegerToken<'_> {
    /// Check the token against the disk and convert it to a cylinder
    pub fn check(&self, field: &str, geometry: &DiskGeometry) -> Result<Cylinder> {
        match *self {
            IntegerToken::Value(value) => geometry.check(value, field),
            IntegerToken::Overflow(text) => {
                Err(HeadwayError::range_error(text, field, geometry.size()))
            }
        }
    }
}

/// Parse a single integer token.
///
/// Integers beyond `i64` are not a parse failure; they come back as
/// `IntegerToken::Overflow` so the range check can reject them.
pub fn parse_integer<'a>(raw: &'a str, field: &str) -> Result<IntegerToken<'a>> {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(value) => Ok(IntegerToken::Value(value)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(IntegerToken::Overflow(raw))
        }
        Err(_) => Err(HeadwayError::parse_error(raw, field)),
    }
}

fn parse_requests<'a>(tokens: &[&'a str]) -> Result<Vec<IntegerToken<'a>>> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, &token)| parse_integer(token, &request_field(i)))
        .collect()
}

fn check_requests(parsed: &[IntegerToken<'_>], geometry: &DiskGeometry) -> Result<Vec<Cylinder>> {
    parsed
        .iter()
        .enumerate()
        .map(|(i, token)| token.check(&request_field(i), geometry))
        .collect()
}

/// Split a raw request list into tokens.
///
/// Tokens are separated by commas and/or whitespace. A blank input is an
/// empty list; an empty slot between two commas is kept so it fails parsing.
pub fn tokenize_request_list(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    for piece in raw.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            tokens.push(piece);
        } else {
            tokens.extend(piece.split_whitespace());
        }
    }
    tokens
}

/// Validate already-numeric requests and head position against the disk.
///
/// Order is preserved and nothing is deduplicated.
pub fn validate_values(
    requests: &[i64],
    initial: i64,
    geometry: &DiskGeometry,
) -> Result<ValidatedInput> {
    let requests = requests
        .iter()
        .enumerate()
        .map(|(i, &value)| geometry.check(value, &request_field(i)))
        .collect::<Result<Vec<_>>>()?;

    let initial = geometry.check(initial, INITIAL_FIELD)?;

    Ok(ValidatedInput { requests, initial })
}

/// Parse and validate raw request tokens and a raw head position.
///
/// Every token is parsed before any range check, so a non-numeric value is
/// reported ahead of an out-of-range one.
pub fn validate_tokens(
    requests: &[&str],
    initial: &str,
    geometry: &DiskGeometry,
) -> Result<ValidatedInput> {
    let parsed = parse_requests(requests)?;
    let initial = parse_integer(initial, INITIAL_FIELD)?;

    let requests = check_requests(&parsed, geometry)?;
    let initial = initial.check(INITIAL_FIELD, geometry)?;

    Ok(ValidatedInput { requests, initial })
}

/// Parse and validate a comma separated request list and a head position
pub fn validate_input(
    raw_requests: &str,
    raw_initial: &str,
    geometry: &DiskGeometry,
) -> Result<ValidatedInput> {
    let tokens = tokenize_request_list(raw_requests);
    validate_tokens(&tokens, raw_initial, geometry)
}

/// Parse and validate a comma separated request list on its own.
///
/// Like `validate_tokens`, every token is parsed before any range check.
pub fn parse_request_list(raw: &str, geometry: &DiskGeometry) -> Result<Vec<Cylinder>> {
    let tokens = tokenize_request_list(raw);
    let parsed = parse_requests(&tokens)?;
    check_requests(&parsed, geometry)
}
