//! Flattens rich-text editor output into the plain-text body stored on a
//! request document.
//!
//! The editor emits a fragment of top-level `<p>` elements. Each paragraph
//! becomes one line of the stored body, separated by literal `<br>` tokens.
//! A paragraph whose sole content is a line-break tag is how the editor
//! represents an intentionally blank line; it contributes one `<br>` of its
//! own, independent of the index-based separator rule. An empty paragraph
//! followed by a non-empty one therefore yields two `<br>` tokens, not one.
//! That asymmetry is load-bearing: stored bodies are rendered downstream
//! with exactly these tokens, so the rule must not be "fixed" here.

/// Paragraph boundary token in the stored body.
pub const LINE_BREAK: &str = "<br>";

/// Converts an HTML fragment into the stored plain-text body.
///
/// Best effort on malformed input: anything that is not part of a
/// paragraph is skipped, an unclosed final paragraph runs to the end of
/// the fragment, and nothing panics.
pub fn normalize(fragment: &str) -> String {
    let mut output = String::with_capacity(fragment.len());

    for (index, inner) in paragraphs(fragment).into_iter().enumerate() {
        if is_break_only(inner) {
            output.push_str(LINE_BREAK);
        } else {
            if index != 0 {
                output.push_str(LINE_BREAK);
            }
            output.push_str(&text_content(inner));
        }
    }

    output
}

/// Inner spans of every `<p>` element in document order.
fn paragraphs(fragment: &str) -> Vec<&str> {
    let bytes = fragment.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' || !is_open_p(bytes, i) {
            i += 1;
            continue;
        }
        let Some(open_end) = find_byte(bytes, i, b'>') else {
            // open tag never closes; nothing more to scan
            break;
        };
        let content_start = open_end + 1;
        match find_close_p(bytes, content_start) {
            Some(close_start) => {
                spans.push(&fragment[content_start..close_start]);
                i = match find_byte(bytes, close_start, b'>') {
                    Some(close_end) => close_end + 1,
                    None => bytes.len(),
                };
            }
            None => {
                // unclosed paragraph: its content runs to the end
                spans.push(&fragment[content_start..]);
                break;
            }
        }
    }

    spans
}

fn is_open_p(bytes: &[u8], at: usize) -> bool {
    if bytes.get(at + 1).map(u8::to_ascii_lowercase) != Some(b'p') {
        return false;
    }
    matches!(
        bytes.get(at + 2),
        None | Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r')
    )
}

fn find_close_p(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 2 < bytes.len() {
        if bytes[i] == b'<'
            && bytes[i + 1] == b'/'
            && bytes[i + 2].to_ascii_lowercase() == b'p'
            && matches!(
                bytes.get(i + 3),
                None | Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r')
            )
        {
            return Some(i);
        }
        i += 1;
    }
    None
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from..].iter().position(|&b| b == needle).map(|p| from + p)
}

/// True when the paragraph's entire content is a single line-break tag,
/// i.e. the editor's encoding of a blank line.
fn is_break_only(inner: &str) -> bool {
    let trimmed = inner.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() < 4 || bytes[0] != b'<' {
        return false;
    }
    if bytes[1].to_ascii_lowercase() != b'b' || bytes[2].to_ascii_lowercase() != b'r' {
        return false;
    }
    let mut rest = trimmed[3..].trim_start();
    if let Some(stripped) = rest.strip_prefix('/') {
        rest = stripped;
    }
    rest == ">"
}

/// Text content of a paragraph: inline markup stripped, then basic
/// character entities decoded. Decoding must come second so that an
/// escaped `&lt;b&gt;` survives as literal text.
fn text_content(inner: &str) -> String {
    decode_entities(&strip_tags(inner))
}

fn strip_tags(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut in_tag = false;
    for ch in inner.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        // entity bodies are short; a distant ';' means a bare ampersand
        match tail[1..].find(';').filter(|end| *end <= 10) {
            Some(end) => match decode_entity(&tail[1..end + 1]) {
                Some(decoded) => {
                    out.push(decoded);
                    rest = &tail[end + 2..];
                }
                None => {
                    out.push('&');
                    rest = &tail[1..];
                }
            },
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let digits = body.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
