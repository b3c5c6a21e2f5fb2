//! Canonical text for numeric literal values.

/// Render `value` the way ECMAScript `Number.prototype.toString()` does.
///
/// Integers below 1e21 print without exponent, fractions down to 1e-6 print
/// in positional form, and everything else uses `d.ddde+N`.
pub fn js_number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", js_number_to_string(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let formatted = format!("{value:e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|ch| *ch != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        let mut out = digits;
        out.extend(std::iter::repeat('0').take((n - k) as usize));
        out
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", e.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", e.abs())
        }
    }
}

/// Parse decimal literal text (no separators) into a number.
pub(crate) fn parse_decimal(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse `digits` in `radix`, exactly while the value fits in 128 bits.
pub(crate) fn parse_int_radix(digits: &str, radix: u32) -> f64 {
    let mut exact: Option<u128> = Some(0);
    let mut approx = 0.0f64;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        exact = exact
            .and_then(|value| value.checked_mul(radix as u128))
            .and_then(|value| value.checked_add(digit as u128));
        approx = approx * radix as f64 + digit as f64;
    }
    match exact {
        Some(value) => value as f64,
        None => approx,
    }
}

/// Convert a `0b`/`0o`/`0x` bigint literal (with its trailing `n`) to decimal
/// digits. Decimal input only loses its leading zeros and suffix.
pub fn parse_pseudo_big_int(text: &str) -> String {
    let bytes = text.as_bytes();
    let log2_base = match bytes.get(1) {
        Some(b'b' | b'B') => 1,
        Some(b'o' | b'O') => 3,
        Some(b'x' | b'X') => 4,
        _ => {
            let body = text.strip_suffix('n').unwrap_or(text);
            let trimmed = body.trim_start_matches('0');
            return if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() };
        }
    };

    let start_index = 2;
    let end_index = if bytes.last() == Some(&b'n') { bytes.len() - 1 } else { bytes.len() };
    if end_index <= start_index {
        return "0".to_string();
    }
    let bits_needed = (end_index - start_index) * log2_base;
    let mut segments = vec![0u16; (bits_needed >> 4) + usize::from(bits_needed & 15 != 0)];

    // Little-endian 16-bit segments.
    let mut bit_offset = 0usize;
    for &digit_char in bytes[start_index..end_index].iter().rev() {
        let digit = (digit_char as char).to_digit(16).unwrap_or(0);
        let segment = bit_offset >> 4;
        let shifted = digit << (bit_offset & 15);
        segments[segment] |= shifted as u16;
        let residual = shifted >> 16;
        if residual != 0 && segment + 1 < segments.len() {
            segments[segment + 1] |= residual as u16;
        }
        bit_offset += log2_base;
    }

    // Repeated division by ten.
    let mut base10 = Vec::new();
    let mut first_nonzero_segment = segments.len() - 1;
    let mut segments_remaining = true;
    while segments_remaining {
        let mut mod10 = 0u32;
        segments_remaining = false;
        for segment in (0..=first_nonzero_segment).rev() {
            let new_segment = (mod10 << 16) | segments[segment] as u32;
            let segment_value = new_segment / 10;
            segments[segment] = segment_value as u16;
            mod10 = new_segment - segment_value * 10;
            if segment_value != 0 && !segments_remaining {
                first_nonzero_segment = segment;
                segments_remaining = true;
            }
        }
        base10.push(char::from(b'0' + mod10 as u8));
    }
    base10.iter().rev().collect()
}
