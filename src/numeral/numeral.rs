use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::NumeralFault;

use super::radix::{check_radix, digit_value, parse_exponent, parse_radix};

lazy_static! {
    static ref NUMERAL_PATTERN: Regex = Regex::new(
        r"^(?P<integer>[0-9A-Z]*)(?:\.(?P<fraction>[0-9A-Z]*))?(?:_(?P<radix>[0-9]*))?(?:(?P<marker>[ep])(?P<exponent>[+-]?[0-9A-Z]*)(?:_(?P<exponent_radix>[0-9]*))?)?$"
    )
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExponentMarker {
    /// `e`: a power of the mantissa radix
    Radix,
    /// `p`: a power of two
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exponent {
    pub marker: ExponentMarker,
    pub value: i64,
}

/// A decomposed numeral literal.
///
/// The text form is `<digits>[.<digits>]['_'<radix>][{e|p}[sign]<digits>['_'<radix>]]`.
/// Lexers already re-base suffixed digits into their default radix, so the
/// suffixes only show up in text built by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    pub integer: String,
    pub fraction: String,
    pub radix: u32,
    pub exponent: Option<Exponent>,
}

impl Numeral {
    /// Reads `text`, using `default_radix` wherever no `_radix` suffix is
    /// given.
    pub fn parse(text: &str, default_radix: u32) -> Result<Numeral, NumeralFault> {
        check_radix(default_radix)?;

        let captures = NUMERAL_PATTERN
            .captures(text)
            .ok_or(NumeralFault::NotANumeral)?;
        let group = |name: &str| captures.name(name).map(|m| m.as_str());

        let integer = group("integer").unwrap_or("").to_string();
        let fraction = group("fraction").unwrap_or("").to_string();
        if integer.is_empty() && fraction.is_empty() {
            return Err(NumeralFault::NotANumeral);
        }

        let radix = match group("radix") {
            Some(radix) => parse_radix(radix)?,
            None => default_radix,
        };

        for c in integer.chars().chain(fraction.chars()) {
            digit_value(c, radix)?;
        }

        let exponent = match group("marker") {
            Some(marker) => {
                let exponent_radix = match group("exponent_radix") {
                    Some(radix) => parse_radix(radix)?,
                    None => default_radix,
                };
                let value = parse_exponent(group("exponent").unwrap_or(""), exponent_radix)?;
                let marker = if marker == "p" {
                    ExponentMarker::Binary
                } else {
                    ExponentMarker::Radix
                };

                Some(Exponent { marker, value })
            }
            None => None,
        };

        Ok(Numeral {
            integer,
            fraction,
            radix,
            exponent,
        })
    }

    pub fn is_integer(&self) -> bool {
        self.fraction.chars().all(|c| c == '0') && self.exponent.is_none()
    }

    /// Approximate value of the numeral.
    pub fn to_f64(&self) -> f64 {
        let radix = self.radix as f64;
        let mut value = 0.0;

        for c in self.integer.chars() {
            value = value * radix + digit_value(c, self.radix).unwrap_or(0) as f64;
        }

        let mut scale = 1.0;
        for c in self.fraction.chars() {
            scale /= radix;
            value += digit_value(c, self.radix).unwrap_or(0) as f64 * scale;
        }

        match &self.exponent {
            Some(Exponent {
                marker: ExponentMarker::Radix,
                value: exponent,
            }) => value * radix.powf(*exponent as f64),
            Some(Exponent {
                marker: ExponentMarker::Binary,
                value: exponent,
            }) => value * 2f64.powf(*exponent as f64),
            None => value,
        }
    }
}

impl Display for Numeral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.integer)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        write!(f, "_{}", self.radix)?;
        if let Some(exponent) = &self.exponent {
            let marker = match exponent.marker {
                ExponentMarker::Radix => 'e',
                ExponentMarker::Binary => 'p',
            };
            write!(f, "{}{:+}_10", marker, exponent.value)?;
        }

        Ok(())
    }
}
