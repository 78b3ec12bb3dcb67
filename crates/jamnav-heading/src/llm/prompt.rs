//! Prompt text for LLM heading requests.

use std::fmt::Write;

use crate::HeadingRequest;

/// Render the heading request prompt.
///
/// Includes the agent id, its safe position, the last `history_segments`
/// trajectory samples, the step bound, and the reply character budget.
pub fn build_prompt(req: &HeadingRequest<'_>, history_segments: usize, max_response_chars: usize) -> String {
    let mut prompt = String::with_capacity(512);

    // Writing into a String cannot fail.
    let _ = writeln!(
        prompt,
        "Agent {} lost communication in a jamming zone and has returned to its last known safe position {}.",
        req.agent, req.position,
    );

    let mut recent = req.recent_history(history_segments).peekable();
    if recent.peek().is_some() {
        let _ = writeln!(prompt, "Recent positions, oldest first:");
        for entry in recent {
            let _ = writeln!(
                prompt,
                "  tick {}: {} communication quality {:.1}",
                entry.tick.0, entry.position, entry.communication_quality,
            );
        }
    }

    let _ = writeln!(
        prompt,
        "Field bounds: {}. Choose the next position for this agent, no more than {:.3} units away and outside every jamming zone.",
        req.field, req.max_step,
    );
    let _ = write!(
        prompt,
        "Reply with exactly one coordinate pair formatted as (x, y) and nothing else, at most {max_response_chars} characters.",
    );
    prompt
}
