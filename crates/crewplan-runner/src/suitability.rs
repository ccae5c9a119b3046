use crewplan_core::{Suitability, Verdict};

use crate::logger::Logger;

pub const UNDETERMINED_REASON: &str = "Unable to determine suitability.";

/// Normalize a free-form YES/NO answer.
///
/// The reply is ASCII-uppercased and searched for `YES`, then `NO`; YES wins
/// when both appear. The reason is whatever follows the first `:` after the
/// matched token, trimmed, falling back to the verdict's stock reason. A
/// reply with neither token is a NO with [`UNDETERMINED_REASON`].
pub fn interpret_suitability(reply: &str, logger: &dyn Logger) -> Suitability {
    let reply = reply.trim();
    // ASCII uppercasing keeps byte offsets valid for `reply`.
    let upper = reply.to_ascii_uppercase();

    let (verdict, after) = if let Some(pos) = upper.find("YES") {
        (Verdict::Yes, pos + "YES".len())
    } else if let Some(pos) = upper.find("NO") {
        (Verdict::No, pos + "NO".len())
    } else {
        logger.warn(&format!("unparseable suitability reply: {reply}"));
        return Suitability::no(UNDETERMINED_REASON);
    };

    let reason = reply[after..]
        .find(':')
        .map(|i| reply[after + i + 1..].trim())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| verdict.default_reason());

    Suitability {
        verdict,
        reason: reason.to_string(),
    }
}
