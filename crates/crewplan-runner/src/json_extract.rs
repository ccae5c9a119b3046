use std::collections::HashMap;

use serde_json::{Map, Value};

/// Return the first well-formed JSON object or array embedded in `text`.
///
/// Markdown fence lines (```` ``` ```` with an optional language tag) are
/// dropped first. Candidates are found left to right with a bracket scan that
/// skips brackets inside string literals; the first candidate that parses
/// wins. Malformed input yields `None`, never an error.
pub fn extract_json(text: &str) -> Option<Value> {
    fragments(&strip_code_fences(text)).next()
}

/// Like [`extract_json`] but only accepts a JSON object.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    fragments(&strip_code_fences(text)).find_map(|value| match value {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

/// Remove markdown code fence lines, keeping everything between them.
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Every parseable JSON fragment in order of its opening bracket.
///
/// One scan records where every bracket it opens is closed, so later
/// candidates inside an already scanned span are looked up instead of
/// rescanned. This keeps long runs of unclosed brackets linear.
fn fragments(text: &str) -> impl Iterator<Item = Value> + '_ {
    let mut spans: HashMap<usize, Option<usize>> = HashMap::new();
    text.char_indices()
        .filter(|(_, c)| *c == '{' || *c == '[')
        .filter_map(move |(start, _)| {
            if !spans.contains_key(&start) {
                scan_spans(text, start, &mut spans);
            }
            let end = spans.get(&start).copied().flatten()?;
            serde_json::from_str(&text[start..end]).ok()
        })
}

/// Scan the bracketed span opening at `start`, skipping string literals.
/// Every bracket opened on the way is recorded with the end of its span,
/// or `None` if it never closes or closes with the wrong bracket.
fn scan_spans(text: &str, start: usize, spans: &mut HashMap<usize, Option<usize>>) {
    let mut stack: Vec<(usize, char)> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        let pos = start + offset;
        match c {
            '"' => in_string = true,
            '{' => stack.push((pos, '}')),
            '[' => stack.push((pos, ']')),
            '}' | ']' => match stack.pop() {
                Some((open, close)) if close == c => {
                    spans.insert(open, Some(pos + c.len_utf8()));
                    if stack.is_empty() {
                        return;
                    }
                }
                Some((open, _)) => {
                    spans.insert(open, None);
                    break;
                }
                None => break,
            },
            _ => {}
        }
    }

    // Still open: unterminated, or below the mismatched bracket.
    for (open, _) in stack {
        spans.insert(open, None);
    }
    spans.entry(start).or_insert(None);
}
