// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that turns a hex color string into its red, green and
//! blue channels. Two forms are accepted:
//! - `#RRGGBB`, eg: `#e88388`, each pair is taken as is.
//! - `#RGB`, eg: `#E88`, each digit is scaled by `255 / 15` (so `E` becomes `238`).
//!
//! Anything after the first six digits is ignored, so `#e883881` reads as `#e88388`.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{map, map_res}};

/// Each digit of the short form is multiplied by this (`0xF * 17 == 0xFF`).
pub const SHORT_FORM_FACTOR: u8 = 255 / 15;
pub const SHORT_FORM_DIGITS: usize = 3;
pub const LONG_FORM_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum HexColorParseError {
    #[error("hex color '{input}' does not start with '#'")]
    #[diagnostic(
        code(r3bl_colorize::hex::missing_hash_prefix),
        help("Write the color as #RGB or #RRGGBB, eg: #e88388")
    )]
    MissingHashPrefix { input: String },

    #[error(
        "hex color '{input}' is truncated, expected {expected_digits} digits but found \
         {found_digits}"
    )]
    #[diagnostic(
        code(r3bl_colorize::hex::truncated),
        help("Only the 3 digit (#RGB) and 6 digit (#RRGGBB) forms are supported")
    )]
    Truncated {
        input: String,
        expected_digits: usize,
        found_digits: usize,
    },

    #[error("hex color '{input}' has a non hexadecimal character '{found}' at {position}")]
    #[diagnostic(code(r3bl_colorize::hex::invalid_digit))]
    InvalidHexDigit {
        input: String,
        found: char,
        position: usize,
    },
}

/// Parse `#RGB` or `#RRGGBB` into `(red, green, blue)`. Input with more than three
/// digits is read as `#RRGGBB` and whatever follows the sixth digit is ignored.
///
/// # Errors
///
/// Returns a [`HexColorParseError`] describing the first problem found. No partial
/// color is ever returned.
pub fn parse_hex_color(input: &str) -> Result<(u8, u8, u8), HexColorParseError> {
    let Ok((digits, _)) = hash_prefix(input) else {
        return Err(HexColorParseError::MissingHashPrefix {
            input: input.to_owned(),
        });
    };

    let (expected_digits, result) = if digits.len() == SHORT_FORM_DIGITS {
        (SHORT_FORM_DIGITS, parsers::short_form(digits))
    } else {
        (LONG_FORM_DIGITS, parsers::long_form(digits))
    };

    match result {
        Ok((trailing, rgb)) => {
            if !trailing.is_empty() {
                tracing::debug!(
                    message = "ignoring input after hex color",
                    input = input,
                    trailing = trailing
                );
            }
            Ok(rgb)
        }
        Err(nom::Err::Error(error) | nom::Err::Failure(error)) => {
            Err(classify_failure(input, digits, error.input, expected_digits))
        }
        Err(nom::Err::Incomplete(_)) => Err(HexColorParseError::Truncated {
            input: input.to_owned(),
            expected_digits,
            found_digits: digits.chars().count(),
        }),
    }
}

fn hash_prefix(input: &str) -> IResult<&str, &str> { tag("#").parse(input) }

/// A segment parser stopped at `remaining`. If there's a bad character ahead, report it,
/// otherwise the input simply ran out.
fn classify_failure(
    input: &str,
    digits: &str,
    remaining: &str,
    expected_digits: usize,
) -> HexColorParseError {
    match remaining
        .char_indices()
        .find(|(_, it)| !it.is_ascii_hexdigit())
    {
        Some((offset, found)) => HexColorParseError::InvalidHexDigit {
            input: input.to_owned(),
            found,
            position: input.len() - remaining.len() + offset,
        },
        None => HexColorParseError::Truncated {
            input: input.to_owned(),
            expected_digits,
            found_digits: digits.chars().count(),
        },
    }
}

/// These are [Parser] implementations that are used by [parse_hex_color].
mod parsers {
    use super::{IResult, Parser, SHORT_FORM_FACTOR, map, map_res, take_while_m_n};

    type Rgb = (u8, u8, u8);

    pub fn long_form(input: &str) -> IResult<&str, Rgb> {
        (hex_segment(2), hex_segment(2), hex_segment(2)).parse(input)
    }

    pub fn short_form(input: &str) -> IResult<&str, Rgb> {
        map(
            (hex_segment(1), hex_segment(1), hex_segment(1)),
            |(red, green, blue)| {
                (
                    red * SHORT_FORM_FACTOR,
                    green * SHORT_FORM_FACTOR,
                    blue * SHORT_FORM_FACTOR,
                )
            },
        )
        .parse(input)
    }

    /// Exactly `width` hex digits, as one byte.
    fn hex_segment<'a>(
        width: usize,
    ) -> impl Parser<&'a str, Output = u8, Error = nom::error::Error<&'a str>> {
        map_res(
            take_while_m_n(width, width, |it: char| it.is_ascii_hexdigit()),
            |it: &str| u8::from_str_radix(it, 16),
        )
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("#e88388", (232, 131, 136))]
    #[test_case("#E88388", (232, 131, 136))]
    #[test_case("#000000", (0, 0, 0))]
    #[test_case("#ffffff", (255, 255, 255))]
    #[test_case("#E88", (238, 136, 136))]
    #[test_case("#fff", (255, 255, 255))]
    #[test_case("#000", (0, 0, 0))]
    fn test_parse_valid(input: &str, expected: (u8, u8, u8)) {
        assert_eq2!(parse_hex_color(input), Ok(expected));
    }

    #[test]
    fn test_missing_hash() {
        assert_eq2!(
            parse_hex_color("D290E4"),
            Err(HexColorParseError::MissingHashPrefix {
                input: "D290E4".into()
            })
        );
        assert!(matches!(
            parse_hex_color(""),
            Err(HexColorParseError::MissingHashPrefix { .. })
        ));
    }

    #[test_case("#", 0)]
    #[test_case("#E", 1)]
    #[test_case("#E8", 2)]
    #[test_case("#E883", 4)]
    #[test_case("#ff000", 5)]
    fn test_truncated(input: &str, found_digits: usize) {
        assert_eq2!(
            parse_hex_color(input),
            Err(HexColorParseError::Truncated {
                input: input.into(),
                expected_digits: LONG_FORM_DIGITS,
                found_digits,
            })
        );
    }

    #[test_case("#XYZ", 'X', 1)]
    #[test_case("#E8Z", 'Z', 3)]
    #[test_case("#ff00zz", 'z', 5)]
    #[test_case("#12345g", 'g', 6)]
    fn test_invalid_digit(input: &str, found: char, position: usize) {
        assert_eq2!(
            parse_hex_color(input),
            Err(HexColorParseError::InvalidHexDigit {
                input: input.into(),
                found,
                position,
            })
        );
    }

    #[test_case("#e883881")]
    #[test_case("#e88388ff")]
    #[test_case("#e88388 is pink")]
    fn test_input_after_long_form_is_ignored(input: &str) {
        assert_eq2!(parse_hex_color(input), Ok((232, 131, 136)));
    }

    #[test]
    fn test_error_message() {
        let error = parse_hex_color("#E8").unwrap_err();
        assert_eq2!(
            error.to_string(),
            "hex color '#E8' is truncated, expected 6 digits but found 2"
        );
    }
}
