use crate::errors::errors::NumeralFault;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn check_radix(radix: u32) -> Result<u32, NumeralFault> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(radix)
    } else {
        Err(NumeralFault::RadixOutOfRange { radix })
    }
}

/// Value of `digit` in `radix`. Letters are accepted in either case.
pub fn digit_value(digit: char, radix: u32) -> Result<u32, NumeralFault> {
    digit
        .to_digit(MAX_RADIX)
        .filter(|value| *value < radix)
        .ok_or(NumeralFault::DigitNotInRadix { digit, radix })
}

fn digit_char(value: u32) -> char {
    DIGITS[value as usize] as char
}

/// Reads the decimal radix written after an underscore.
pub fn parse_radix(text: &str) -> Result<u32, NumeralFault> {
    if text.is_empty() {
        return Err(NumeralFault::MissingRadix);
    }

    let mut radix: u32 = 0;
    for c in text.chars() {
        let digit = digit_value(c, 10)?;
        radix = radix
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(NumeralFault::RadixOutOfRange { radix: u32::MAX })?;
    }

    check_radix(radix)
}

/// Re-expresses an unsigned numeral `digits[.fraction]` from radix `from` in
/// radix `to`.
///
/// The integer part is converted exactly. The fraction keeps as many digits
/// as `from` had precision for, `ceil(n * ln(from) / ln(to))`, rounded half
/// up. Output digits are upper case, leading zeros of the integer part and
/// trailing zeros of the fraction are dropped, and an empty fraction drops
/// the point.
pub fn convert(numeral: &str, from: u32, to: u32) -> Result<String, NumeralFault> {
    check_radix(from)?;
    check_radix(to)?;

    let (integer, fraction) = numeral.split_once('.').unwrap_or((numeral, ""));
    let integer_digits = to_values(integer, from)?;
    let fraction_digits = to_values(fraction, from)?;

    let mut integer_out = convert_integer(&integer_digits, from, to);

    let mut fraction_out = Vec::new();
    if !fraction_digits.is_empty() {
        let places = fraction_places(fraction_digits.len(), from, to);
        fraction_out = convert_fraction(&fraction_digits, from, to, places + 1);

        if fraction_out.len() > places {
            let guard = fraction_out.pop().unwrap_or(0);
            if guard * 2 >= to && round_up(&mut fraction_out, to) {
                // the carry ran out of the fraction
                if round_up(&mut integer_out, to) {
                    integer_out.insert(0, 1);
                }
            }
        }

        while fraction_out.last() == Some(&0) {
            fraction_out.pop();
        }
    }

    let mut result: String = if integer_out.is_empty() {
        String::from("0")
    } else {
        integer_out.iter().map(|d| digit_char(*d)).collect()
    };

    if !fraction_out.is_empty() {
        result.push('.');
        result.extend(fraction_out.iter().map(|d| digit_char(*d)));
    }

    Ok(result)
}

fn to_values(digits: &str, radix: u32) -> Result<Vec<u32>, NumeralFault> {
    digits.chars().map(|c| digit_value(c, radix)).collect()
}

fn fraction_places(len: usize, from: u32, to: u32) -> usize {
    if from == to {
        return len;
    }

    (len as f64 * (from as f64).ln() / (to as f64).ln()).ceil() as usize
}

/// Repeated long division by `to`. An empty result means zero.
fn convert_integer(digits: &[u32], from: u32, to: u32) -> Vec<u32> {
    let mut number: Vec<u32> = digits.iter().copied().skip_while(|d| *d == 0).collect();
    let mut result = Vec::new();

    while !number.is_empty() {
        let mut remainder = 0;
        let mut quotient = Vec::with_capacity(number.len());

        for digit in &number {
            let accumulator = remainder * from + digit;
            let q = accumulator / to;
            remainder = accumulator % to;

            if !quotient.is_empty() || q != 0 {
                quotient.push(q);
            }
        }

        result.push(remainder);
        number = quotient;
    }

    result.reverse();
    result
}

/// Repeated multiplication by `to`, stopping early once the fraction is
/// exhausted.
fn convert_fraction(digits: &[u32], from: u32, to: u32, places: usize) -> Vec<u32> {
    let mut fraction = digits.to_vec();
    let mut result = Vec::with_capacity(places);

    while result.len() < places && fraction.iter().any(|d| *d != 0) {
        let mut carry = 0;
        for digit in fraction.iter_mut().rev() {
            let accumulator = *digit * to + carry;
            *digit = accumulator % from;
            carry = accumulator / from;
        }
        result.push(carry);
    }

    result
}

/// Adds one to the last digit, returning true if the carry overflowed.
fn round_up(digits: &mut [u32], radix: u32) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit + 1 < radix {
            *digit += 1;
            return false;
        }
        *digit = 0;
    }

    true
}

/// Reads a signed exponent, `+` or `-` optional.
pub fn parse_exponent(text: &str, radix: u32) -> Result<i64, NumeralFault> {
    check_radix(radix)?;

    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if digits.is_empty() {
        return Err(NumeralFault::MissingExponent);
    }

    let mut value: i64 = 0;
    for c in digits.chars() {
        let digit = digit_value(c, radix)?;
        value = value
            .checked_mul(radix as i64)
            .and_then(|v| v.checked_add(digit as i64))
            .ok_or(NumeralFault::ExponentOverflow)?;
    }

    Ok(if negative { -value } else { value })
}

/// Writes an exponent in `radix` with an explicit sign, e.g. `+1A`.
pub fn format_exponent(value: i64, radix: u32) -> Result<String, NumeralFault> {
    check_radix(radix)?;

    let sign = if value < 0 { '-' } else { '+' };
    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();

    loop {
        digits.push(digit_char((magnitude % radix as u64) as u32));
        magnitude /= radix as u64;
        if magnitude == 0 {
            break;
        }
    }

    let mut result = String::with_capacity(digits.len() + 1);
    result.push(sign);
    result.extend(digits.iter().rev());
    Ok(result)
}
