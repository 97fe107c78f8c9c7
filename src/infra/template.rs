//! Minimal template rendering — string substitution over a flat variable map.
//!
//! Templates use `{{name}}` placeholders. No conditionals, no loops; the
//! variable set for each artifact is fixed, so plain substitution is all the
//! drivers need.

/// Render `template`, replacing every `{{name}}` with its value.
///
/// Placeholders without a matching variable are left untouched so that a
/// template typo surfaces verbatim in the generated artifact instead of
/// silently disappearing.
#[must_use]
pub fn render(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}
