//! Project page query string: `?id=03&lb=1&img=-1`.

use url::form_urlencoded;

/// Parameters the project page reads from its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Project id, left-padded with `0` to two characters.
    pub id: String,
    /// `lb=1` asks the lightbox to open on load.
    pub lightbox: bool,
    /// Requested start image; negative means "last".
    pub start: i64,
}

impl PageQuery {
    /// Parse a `location.search` string (leading `?` optional).
    pub fn parse(search: &str, default_id: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let mut id = None;
        let mut lb = None;
        let mut img = None;
        for (key, value) in form_urlencoded::parse(search.as_bytes()) {
            // First occurrence wins, like URLSearchParams.get.
            match key.as_ref() {
                "id" if id.is_none() => id = Some(value.into_owned()),
                "lb" if lb.is_none() => lb = Some(value.into_owned()),
                "img" if img.is_none() => img = Some(value.into_owned()),
                _ => {}
            }
        }

        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => default_id.to_string(),
        };
        let start = img
            .filter(|v| !v.is_empty())
            .and_then(|v| parse_int_prefix(&v))
            .unwrap_or(0);

        Self {
            id: pad_id(&id),
            lightbox: lb.as_deref() == Some("1"),
            start,
        }
    }
}

/// Left-pad an id with `0` to two characters. Longer ids are untouched.
pub fn pad_id(id: &str) -> String {
    format!("{id:0>2}")
}

/// Leading-integer parse: optional whitespace and sign, then digits.
/// Trailing garbage is ignored; no digits at all yields `None`.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Resolve a requested start index against a gallery of `len` images.
///
/// Negative and too-large requests both land on the last image. An empty
/// gallery has no valid index.
pub fn resolve_start(start: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    if start < 0 {
        return Some(last);
    }
    Some(usize::try_from(start).map_or(last, |i| i.min(last)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let q = PageQuery::parse("", "01");
        assert_eq!(q.id, "01");
        assert!(!q.lightbox);
        assert_eq!(q.start, 0);
    }

    #[test]
    fn pads_short_ids() {
        assert_eq!(PageQuery::parse("?id=3", "01").id, "03");
        assert_eq!(PageQuery::parse("?id=12", "01").id, "12");
        assert_eq!(PageQuery::parse("?id=123", "01").id, "123");
        assert_eq!(PageQuery::parse("?id=", "01").id, "01");
    }

    #[test]
    fn lightbox_request() {
        let q = PageQuery::parse("?id=04&lb=1&img=-1", "01");
        assert_eq!(q.id, "04");
        assert!(q.lightbox);
        assert_eq!(q.start, -1);
        assert!(!PageQuery::parse("?lb=true", "01").lightbox);
    }

    #[test]
    fn non_numeric_img_defaults_to_zero() {
        assert_eq!(PageQuery::parse("?img=abc", "01").start, 0);
        assert_eq!(PageQuery::parse("?img=", "01").start, 0);
        assert_eq!(PageQuery::parse("?img=3abc", "01").start, 3);
    }

    #[test]
    fn int_prefix() {
        assert_eq!(parse_int_prefix(" 42"), Some(42));
        assert_eq!(parse_int_prefix("-7x"), Some(-7));
        assert_eq!(parse_int_prefix("+5"), Some(5));
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("x1"), None);
    }

    #[test]
    fn start_clamping() {
        assert_eq!(resolve_start(-1, 5), Some(4));
        assert_eq!(resolve_start(-30, 5), Some(4));
        assert_eq!(resolve_start(2, 5), Some(2));
        assert_eq!(resolve_start(5, 5), Some(4));
        assert_eq!(resolve_start(i64::MAX, 5), Some(4));
        assert_eq!(resolve_start(0, 0), None);
    }
}
