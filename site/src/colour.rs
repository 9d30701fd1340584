//! Colours the S3 letters so the three pairings stay recognisable.

use crate::renderer::escape_html;

/// Colour used for each S3 letter.
#[must_use]
pub fn colour_of(letter: char) -> Option<&'static str> {
    match letter {
        'a' => Some("red"),
        'b' => Some("blue"),
        'c' => Some("green"),
        _ => None,
    }
}

/// Wraps every `a`, `b`, `c` in a coloured span; other characters are
/// escaped and left as they are.
///
/// ```
/// use quotient_site::colour::colourise;
///
/// assert_eq!(colourise("c"), "<span style=\"color:green;\">c</span>");
/// ```
#[must_use]
pub fn colourise(text: &str) -> String {
    let mut html = String::with_capacity(text.len() * 4);
    for letter in text.chars() {
        match colour_of(letter) {
            Some(colour) => {
                html.push_str(&format!("<span style=\"color:{colour};\">{letter}</span>"));
            }
            None => html.push_str(&escape_html(letter.encode_utf8(&mut [0; 4]))),
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colours_letters() {
        assert_eq!(
            colourise("(ab)"),
            "(<span style=\"color:red;\">a</span><span style=\"color:blue;\">b</span>)"
        );
    }

    #[test]
    fn identity_is_left_alone() {
        assert_eq!(colourise("() = id"), "() = id");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(colourise("<c>"), "&lt;<span style=\"color:green;\">c</span>&gt;");
    }
}
