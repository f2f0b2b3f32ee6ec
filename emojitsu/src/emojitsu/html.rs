/// Signature of the escaper used by the renderer before emoji substitution.
pub type EscapeFn = fn(&str) -> String;

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
