//! Text escaping for markup output.

use std::borrow::Cow;

/// Escapes HTML special characters in text content.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// # Examples
///
/// ```
/// use prerender_ssr::escape::escape_html;
///
/// assert_eq!(escape_html("<br />Paragraph"), "&lt;br /&gt;Paragraph");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Escapes an attribute value for use inside double quotes.
///
/// Only `&` and `"` are replaced. A single scan decides which of the two
/// replacements are needed before any allocation happens.
///
/// # Examples
///
/// ```
/// use prerender_ssr::escape::escape_attr;
///
/// assert_eq!(escape_attr(r#"say "hi" & go"#), "say &quot;hi&quot; &amp; go");
/// assert_eq!(escape_attr("<b>"), "<b>");
/// ```
pub fn escape_attr(value: &str) -> Cow<'_, str> {
	let mut has_amp = false;
	let mut has_quot = false;
	for b in value.bytes() {
		match b {
			b'&' => has_amp = true,
			b'"' => has_quot = true,
			_ => continue,
		}
		if has_amp && has_quot {
			break;
		}
	}

	if !has_amp && !has_quot {
		return Cow::Borrowed(value);
	}

	let mut escaped = Cow::Borrowed(value);
	if has_amp {
		escaped = Cow::Owned(escaped.replace('&', "&amp;"));
	}
	if has_quot {
		escaped = Cow::Owned(escaped.replace('"', "&quot;"));
	}
	escaped
}
