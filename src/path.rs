//! The path-data mini-language: numeric cursor and command parser.
//!
//! Grammar: a command letter in {M, L, Q, C, Z} followed by its operand
//! points. Coordinates within a point are separated by a literal comma,
//! points by spaces. L, Q, and C admit implicit repetition: extra operand
//! tuples follow one letter until the next non-space character is a letter
//! (any letter, including the same one) or input ends.

use std::fmt;

use crate::error::ConvertError;

/// A decimal literal kept as text so emitted output preserves the exact
/// source formatting. Dot-free literals get a `.0` suffix at construction;
/// literals already containing `.` pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number(String);

impl Number {
    fn from_literal(text: String) -> Self {
        if text.contains('.') {
            Number(text)
        } else {
            Number(text + ".0")
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An (x, y) coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: Number,
    pub y: Number,
}

/// One drawing operation parsed out of a path-data string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Control point, then end point.
    QuadTo(Point, Point),
    /// Two control points, then end point.
    CubicTo(Point, Point, Point),
    ClosePath,
}

/// Cursor over the path-data characters: owns the input and the position.
struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(data: &str) -> Self {
        Cursor {
            chars: data.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Skips spaces and reports whether any input remains.
    fn skip_whitespace(&mut self) -> bool {
        while self.peek() == Some(' ') {
            self.pos += 1;
        }
        self.pos < self.chars.len()
    }

    /// Greedily consumes a maximal run of digit/`.`/`-`/`e` characters.
    /// An empty run means the input is malformed where a number was
    /// required.
    fn read_number(&mut self) -> Result<Number, ConvertError> {
        self.skip_whitespace();
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(c) if c.is_ascii_digit() || c == '.' || c == '-' || c == 'e'
        ) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(ConvertError::EmptyNumber { offset: start });
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        Ok(Number::from_literal(text))
    }

    /// Asserts the next character is `expected` and advances past it.
    fn expect(&mut self, expected: char) -> Result<(), ConvertError> {
        let offset = self.pos;
        match self.advance() {
            Some(c) if c == expected => Ok(()),
            found => Err(ConvertError::UnexpectedChar {
                expected,
                found,
                offset,
            }),
        }
    }

    fn read_point(&mut self) -> Result<Point, ConvertError> {
        let x = self.read_number()?;
        self.expect(',')?;
        let y = self.read_number()?;
        Ok(Point { x, y })
    }

    /// Repetition lookahead: another operand tuple follows only when the
    /// next non-space character is a digit or a minus sign. A letter there
    /// ends the repetition and is read as the next command.
    fn at_coordinate(&mut self) -> bool {
        self.skip_whitespace() && matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '-')
    }
}

/// Parses a path-data string into its ordered command sequence.
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>, ConvertError> {
    let mut cursor = Cursor::new(data);
    let mut commands = Vec::new();

    while cursor.skip_whitespace() {
        let Some(letter) = cursor.advance() else {
            break;
        };
        match letter {
            'M' => commands.push(PathCommand::MoveTo(cursor.read_point()?)),
            'L' => {
                while cursor.at_coordinate() {
                    commands.push(PathCommand::LineTo(cursor.read_point()?));
                }
            }
            'Q' => {
                while cursor.at_coordinate() {
                    let control = cursor.read_point()?;
                    let end = cursor.read_point()?;
                    commands.push(PathCommand::QuadTo(control, end));
                }
            }
            'C' => {
                while cursor.at_coordinate() {
                    let control1 = cursor.read_point()?;
                    let control2 = cursor.read_point()?;
                    let end = cursor.read_point()?;
                    commands.push(PathCommand::CubicTo(control1, control2, end));
                }
            }
            'Z' => commands.push(PathCommand::ClosePath),
            other => return Err(ConvertError::UnknownPathCommand(other)),
        }
    }

    Ok(commands)
}
