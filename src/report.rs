use std::io::{self, Write};

/// How many sorted values are printed.
pub const REPORT_LIMIT: usize = 30;

/// Format a float the way Python's `repr` does: shortest round-trip digits,
/// `1.0` rather than `1`, scientific below `1e-4` or from `1e16` upwards.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e2".
    let sci = format!("{v:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if !(-4..16).contains(&exp) {
        let (head, tail) = digits.split_at(1);
        let mantissa = if tail.is_empty() {
            head.to_string()
        } else {
            format!("{head}.{tail}")
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exp.abs())
    } else if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("{sign}0.{zeros}{digits}")
    } else {
        let int_len = exp as usize + 1;
        if digits.len() > int_len {
            let (int_part, frac) = digits.split_at(int_len);
            format!("{sign}{int_part}.{frac}")
        } else {
            let zeros = "0".repeat(int_len - digits.len());
            format!("{sign}{digits}{zeros}.0")
        }
    }
}

/// Render up to `limit` leading values as a list literal, e.g. `[0.1, 0.3]`.
///
/// Values from an all-integer column are written without a fractional part.
pub fn format_report(values: &[f64], integer: bool, limit: usize) -> String {
    let items: Vec<String> = values
        .iter()
        .take(limit)
        .map(|&v| {
            if integer && v.is_finite() {
                format!("{}", v as i64)
            } else {
                format_float(v)
            }
        })
        .collect();
    format!("[{}]", items.join(", "))
}

/// Write the report line for the sorted values to `out`.
pub fn write_report(
    out: &mut dyn Write,
    values: &[f64],
    integer: bool,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "{}", format_report(values, integer, limit))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_match_python_repr() {
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(123.45), "123.45");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-0.25), "-0.25");
        assert_eq!(format_float(2.0 / 3.0), "0.6666666666666666");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(0.0), "0.0");
    }

    #[test]
    fn three_values_listed_in_order() {
        assert_eq!(format_report(&[0.1, 0.3, 0.5], false, REPORT_LIMIT), "[0.1, 0.3, 0.5]");
    }

    #[test]
    fn integer_column_prints_literals() {
        assert_eq!(format_report(&[1.0, 2.0, 40.0], true, REPORT_LIMIT), "[1, 2, 40]");
        assert_eq!(format_report(&[1.0, 2.0], false, REPORT_LIMIT), "[1.0, 2.0]");
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert_eq!(format_report(&[], false, REPORT_LIMIT), "[]");
    }

    #[test]
    fn truncates_to_limit() {
        let values: Vec<f64> = (0..45).map(|i| i as f64).collect();
        let line = format_report(&values, false, REPORT_LIMIT);
        let items: Vec<&str> = line.trim_matches(['[', ']']).split(", ").collect();

        assert_eq!(items.len(), 30);
        assert_eq!(items.first(), Some(&"0.0"));
        assert_eq!(items.last(), Some(&"29.0"));
    }

    #[test]
    fn write_report_emits_one_line() {
        let mut out = Vec::new();
        write_report(&mut out, &[0.5, 0.75], false, REPORT_LIMIT).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[0.5, 0.75]\n");
    }
}
