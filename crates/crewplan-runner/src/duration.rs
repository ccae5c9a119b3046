use serde_json::{Map, Value};

/// Bound pairs a model may use to express a range as an object.
const BOUND_KEYS: &[(&str, &str)] = &[
    ("lower", "upper"),
    ("lower_bound", "upper_bound"),
    ("min", "max"),
];

/// Extract an hour estimate from free-form text.
///
/// Takes the first numeric token (integer or decimal); trailing unit words
/// such as `hours` or `h` are ignored. For a range like `20-40` this is the
/// lower number. Returns `None` when there is no number or the number is not
/// finite and strictly positive.
pub fn parse_duration_text(text: &str) -> Option<f64> {
    first_number(text).filter(|v| usable_hours(*v))
}

/// Extract an hour estimate from a JSON `duration` field.
///
/// Numbers are taken as-is, strings go through [`parse_duration_text`].
/// Objects may carry bounds (`lower`/`upper`, `lower_bound`/`upper_bound`,
/// `min`/`max`, lower bound wins), a `total`, a `breakdown` whose entries are
/// summed, or nested objects that are summed.
pub fn parse_duration_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| usable_hours(*v)),
        Value::String(s) => parse_duration_text(s),
        Value::Object(map) => parse_duration_map(map),
        _ => None,
    }
}

fn usable_hours(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn parse_duration_map(map: &Map<String, Value>) -> Option<f64> {
    for (low_key, high_key) in BOUND_KEYS {
        if let (Some(low), Some(_)) = (map.get(*low_key), map.get(*high_key)) {
            return parse_duration_value(low);
        }
    }

    if let Some(total) = map.get("total") {
        return parse_duration_value(total);
    }

    if let Some(Value::Object(breakdown)) = map.get("breakdown") {
        return sum_parsed(breakdown.values());
    }

    sum_parsed(map.values().filter(|v| v.is_object()))
}

fn sum_parsed<'a>(values: impl Iterator<Item = &'a Value>) -> Option<f64> {
    let parsed: Vec<f64> = values.filter_map(parse_duration_value).collect();
    if parsed.is_empty() {
        return None;
    }
    Some(parsed.iter().sum::<f64>()).filter(|v| usable_hours(*v))
}

/// First integer or decimal in `text`. A `-` counts as a sign only when it
/// does not follow a letter or digit, so `20-40` reads as `20`.
fn first_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        let starts_decimal = bytes[i] == b'.' && i + 1 < len && bytes[i + 1].is_ascii_digit();
        if !bytes[i].is_ascii_digit() && !starts_decimal {
            i += 1;
            continue;
        }

        let negative = i > 0
            && bytes[i - 1] == b'-'
            && (i < 2 || !bytes[i - 2].is_ascii_alphanumeric());
        let start = if negative { i - 1 } else { i };

        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < len && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < len && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }

        return text[start..i].parse().ok();
    }

    None
}
