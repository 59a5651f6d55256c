use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern is empty")]
    Empty,
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Residue class opened at position {position} is never closed")]
    UnterminatedClass { position: usize },
    #[error("Residue class at position {position} lists no residues")]
    EmptyClass { position: usize },
    #[error("Repetition at position {position} must be a positive integer in braces")]
    InvalidRepetition { position: usize },
    #[error("Repetition at position {position} has no element to repeat")]
    DanglingRepetition { position: usize },
}

/// One fixed-width position of a motif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternElement {
    Residue(char),
    Any,
    OneOf(Vec<char>),
    NoneOf(Vec<char>),
}

impl PatternElement {
    #[inline]
    pub fn matches(&self, residue: char) -> bool {
        match self {
            PatternElement::Residue(code) => *code == residue,
            PatternElement::Any => true,
            PatternElement::OneOf(codes) => codes.contains(&residue),
            PatternElement::NoneOf(codes) => !codes.contains(&residue),
        }
    }
}

/// A fixed-width sequence pattern.
///
/// Syntax: upper- or lower-case residue letters, `.` for any residue, `[ST]` for any
/// of a set, `[^P]` for anything but a set, and `{n}` to repeat the previous element
/// `n` times. Every element consumes exactly one residue, so a match always spans
/// [`width`](MotifPattern::width) residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifPattern {
    source: String,
    elements: Vec<PatternElement>,
}

impl MotifPattern {
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let mut elements: Vec<PatternElement> = Vec::new();
        let mut chars = source.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            match ch {
                '.' => elements.push(PatternElement::Any),
                '[' => {
                    let negated = chars.next_if(|&(_, c)| c == '^').is_some();
                    let mut codes = Vec::new();
                    loop {
                        match chars.next() {
                            Some((_, ']')) => break,
                            Some((_, c)) if c.is_ascii_alphabetic() => {
                                codes.push(c.to_ascii_uppercase())
                            }
                            Some((pos, c)) => {
                                return Err(PatternError::UnexpectedCharacter {
                                    ch: c,
                                    position: pos,
                                });
                            }
                            None => return Err(PatternError::UnterminatedClass { position }),
                        }
                    }
                    if codes.is_empty() {
                        return Err(PatternError::EmptyClass { position });
                    }
                    elements.push(if negated {
                        PatternElement::NoneOf(codes)
                    } else {
                        PatternElement::OneOf(codes)
                    });
                }
                '{' => {
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) if c.is_ascii_digit() => digits.push(c),
                            _ => return Err(PatternError::InvalidRepetition { position }),
                        }
                    }
                    let count: usize = digits
                        .parse()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or(PatternError::InvalidRepetition { position })?;
                    let previous = elements
                        .last()
                        .cloned()
                        .ok_or(PatternError::DanglingRepetition { position })?;
                    elements.extend(std::iter::repeat_n(previous, count - 1));
                }
                c if c.is_ascii_alphabetic() => {
                    elements.push(PatternElement::Residue(c.to_ascii_uppercase()))
                }
                c => return Err(PatternError::UnexpectedCharacter { ch: c, position }),
            }
        }

        if elements.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            source: source.to_string(),
            elements,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.elements.len()
    }

    pub fn matches_at(&self, residues: &[char], start: usize) -> bool {
        residues
            .get(start..start + self.width())
            .is_some_and(|window| {
                window
                    .iter()
                    .zip(&self.elements)
                    .all(|(&residue, element)| element.matches(residue))
            })
    }

    /// Left-to-right, non-overlapping matches: after a hit, scanning resumes right
    /// after the matched span.
    pub fn find_iter<'p, 's>(&'p self, residues: &'s [char]) -> Matches<'p, 's> {
        Matches {
            pattern: self,
            residues,
            cursor: 0,
        }
    }

    pub fn count_matches(&self, residues: &[char]) -> usize {
        self.find_iter(residues).count()
    }
}

impl FromStr for MotifPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MotifPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.source)
    }
}

pub struct Matches<'p, 's> {
    pattern: &'p MotifPattern,
    residues: &'s [char],
    cursor: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.pattern.width();
        while self.cursor + width <= self.residues.len() {
            let start = self.cursor;
            if self.pattern.matches_at(self.residues, start) {
                self.cursor = start + width;
                return Some(start..self.cursor);
            }
            self.cursor += 1;
        }
        self.cursor = self.residues.len();
        None
    }
}
