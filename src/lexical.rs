//! Lexical path algebra over plain strings.
//!
//! Nothing in this module touches the filesystem or the process environment. All
//! functions follow the conventional rules used by the host's path library: `clean`
//! removes `.` elements, resolves `..` where that is possible without consulting the
//! disk, and collapses repeated separators.

use std::path::MAIN_SEPARATOR;

const SEP: u8 = MAIN_SEPARATOR as u8;

#[inline]
pub(crate) fn is_sep(b: u8) -> bool {
    #[cfg(windows)]
    {
        b == b'\\' || b == b'/'
    }
    #[cfg(not(windows))]
    {
        b == b'/'
    }
}

/// Length of the leading volume name (`C:` on Windows), zero elsewhere.
pub(crate) fn volume_len(path: &str) -> usize {
    #[cfg(windows)]
    {
        let b = path.as_bytes();
        if b.len() >= 2 && b[1] == b':' && b[0].is_ascii_alphabetic() {
            return 2;
        }
        0
    }
    #[cfg(not(windows))]
    {
        let _ = path;
        0
    }
}

/// Lexical normalization: the shortest path equivalent to `path` by purely lexical
/// processing. Returns `"."` for an empty result.
pub(crate) fn clean(path: &str) -> String {
    let vol_len = volume_len(path);
    let (volume, rest) = path.split_at(vol_len);
    let rest = rest.as_bytes();
    if rest.is_empty() {
        return format!("{volume}.");
    }

    let rooted = is_sep(rest[0]);
    let n = rest.len();
    let mut out: Vec<u8> = Vec::with_capacity(n);
    let mut r = 0;
    // `dotdot` marks where `..` may no longer backtrack.
    let mut dotdot = 0;
    if rooted {
        out.push(SEP);
        r = 1;
        dotdot = 1;
    }

    while r < n {
        if is_sep(rest[r]) {
            r += 1;
        } else if rest[r] == b'.' && (r + 1 == n || is_sep(rest[r + 1])) {
            r += 1;
        } else if rest[r] == b'.'
            && rest[r + 1] == b'.'
            && (r + 2 == n || is_sep(rest[r + 2]))
        {
            r += 2;
            if out.len() > dotdot {
                out.pop();
                while out.len() > dotdot && !is_sep(out[out.len() - 1]) {
                    out.pop();
                }
                if out.len() > dotdot {
                    // drop the separator preceding the removed element
                    out.pop();
                }
            } else if !rooted {
                if !out.is_empty() {
                    out.push(SEP);
                }
                out.extend_from_slice(b"..");
                dotdot = out.len();
            }
        } else {
            if (rooted && out.len() != 1) || (!rooted && !out.is_empty()) {
                out.push(SEP);
            }
            while r < n && !is_sep(rest[r]) {
                out.push(rest[r]);
                r += 1;
            }
        }
    }

    if out.is_empty() {
        out.push(b'.');
    }
    // Only ASCII separators and dots were inserted or removed at char boundaries.
    let cleaned =
        String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
    format!("{volume}{cleaned}")
}

/// Joins elements with the separator and cleans the result. Empty elements are ignored;
/// an absolute element later in the list does not reset the base. Returns `""` if every
/// element is empty.
pub(crate) fn join<I, S>(elements: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    let mut any = false;
    for element in elements {
        let element = element.as_ref();
        if element.is_empty() {
            continue;
        }
        if any {
            joined.push(MAIN_SEPARATOR);
        }
        joined.push_str(element);
        any = true;
    }
    if !any {
        return String::new();
    }
    clean(&joined)
}

/// All but the last element of `path`, after cleaning. `dir("")` is `"."`; the root is
/// its own parent.
pub(crate) fn dir(path: &str) -> String {
    let path = clean(path);
    let vol_len = volume_len(&path);
    let bytes = path.as_bytes();
    let mut i = bytes.len();
    while i > vol_len && !is_sep(bytes[i - 1]) {
        i -= 1;
    }
    let parent = clean(&path[vol_len..i]);
    format!("{}{}", &path[..vol_len], parent)
}

/// The last element of `path`, with trailing separators removed. `base("")` is `"."`;
/// a path made only of separators yields a single separator.
pub(crate) fn base(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let mut p = path.as_bytes();
    while !p.is_empty() && is_sep(p[p.len() - 1]) {
        p = &p[..p.len() - 1];
    }
    if p.is_empty() {
        return MAIN_SEPARATOR.to_string();
    }
    let vol_len = volume_len(path).min(p.len());
    let p = &p[vol_len..];
    let start = p.iter().rposition(|&b| is_sep(b)).map_or(0, |i| i + 1);
    let name = &p[start..];
    if name.is_empty() {
        return MAIN_SEPARATOR.to_string();
    }
    String::from_utf8_lossy(name).into_owned()
}

/// Suffix beginning at the final dot in the final element; empty if there is none.
pub(crate) fn ext(path: &str) -> &str {
    let bytes = path.as_bytes();
    for i in (0..bytes.len()).rev() {
        if is_sep(bytes[i]) {
            break;
        }
        if bytes[i] == b'.' {
            return &path[i..];
        }
    }
    ""
}

/// Splits on every separator. A leading volume and a leading root separator are kept as
/// their own segments; empty segments from repeated separators are dropped.
pub(crate) fn parts(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let vol_len = volume_len(path);
    if vol_len > 0 {
        segments.push(path[..vol_len].to_string());
    }
    let rest = &path[vol_len..];
    if rest.as_bytes().first().is_some_and(|&b| is_sep(b)) {
        segments.push(MAIN_SEPARATOR.to_string());
    }
    segments.extend(
        rest.split(|c: char| c.is_ascii() && is_sep(c as u8))
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );
    segments
}

pub(crate) fn is_absolute(path: &str) -> bool {
    std::path::Path::new(path).is_absolute()
}

/// Local paths are relative, non-empty, and do not escape upward after cleaning.
pub(crate) fn is_local(path: &str) -> bool {
    if path.is_empty() || is_absolute(path) || volume_len(path) > 0 {
        return false;
    }
    let cleaned = clean(path);
    if cleaned == ".." {
        return false;
    }
    let bytes = cleaned.as_bytes();
    !(bytes.len() > 2 && bytes[0] == b'.' && bytes[1] == b'.' && is_sep(bytes[2]))
}

/// Validates a slash-separated portable path and converts it to the host form.
pub(crate) fn localize(path: &str) -> Result<String, &'static str> {
    if path.contains('\0') {
        return Err("contains a NUL byte");
    }
    if !is_valid_portable(path) {
        return Err("not a valid slash-separated relative path");
    }
    Ok(path.replace('/', &MAIN_SEPARATOR.to_string()))
}

fn is_valid_portable(path: &str) -> bool {
    if path == "." {
        return true;
    }
    path.split('/')
        .all(|element| !element.is_empty() && element != "." && element != "..")
}

/// A path lexically equivalent to `target` when joined onto `base`.
pub(crate) fn rel(base: &str, target: &str) -> Result<String, &'static str> {
    const CANNOT: &str = "can't be made relative without knowing the working directory";

    let base_vol = &base[..volume_len(base)];
    let targ_vol = &target[..volume_len(target)];
    let base_clean = clean(base);
    let targ_clean = clean(target);
    if same_word(&targ_clean, &base_clean) {
        return Ok(".".to_string());
    }
    let mut b = &base_clean[base_vol.len()..];
    let t = &targ_clean[targ_vol.len()..];
    if b == "." {
        b = "";
    }

    let base_slashed = b.as_bytes().first().is_some_and(|&c| is_sep(c));
    let targ_slashed = t.as_bytes().first().is_some_and(|&c| is_sep(c));
    if base_slashed != targ_slashed || !same_word(base_vol, targ_vol) {
        return Err(CANNOT);
    }

    let bb = b.as_bytes();
    let tb = t.as_bytes();
    let (bl, tl) = (bb.len(), tb.len());
    let (mut b0, mut bi, mut t0, mut ti) = (0, 0, 0, 0);
    loop {
        while bi < bl && !is_sep(bb[bi]) {
            bi += 1;
        }
        while ti < tl && !is_sep(tb[ti]) {
            ti += 1;
        }
        if !same_word(&t[t0..ti], &b[b0..bi]) {
            break;
        }
        if bi < bl {
            bi += 1;
        }
        if ti < tl {
            ti += 1;
        }
        b0 = bi;
        t0 = ti;
        // equal paths returned early, so exhausting both here means nothing is left to compare
        if b0 >= bl && t0 >= tl {
            break;
        }
    }

    if &b[b0..bi] == ".." {
        return Err(CANNOT);
    }
    if b0 != bl {
        let seps = bb[b0..bl].iter().filter(|&&c| is_sep(c)).count();
        let mut out = String::from("..");
        for _ in 0..seps {
            out.push(MAIN_SEPARATOR);
            out.push_str("..");
        }
        if t0 != tl {
            out.push(MAIN_SEPARATOR);
            out.push_str(&t[t0..]);
        }
        return Ok(out);
    }
    Ok(t[t0..].to_string())
}

fn same_word(a: &str, b: &str) -> bool {
    #[cfg(windows)]
    {
        a.eq_ignore_ascii_case(b)
    }
    #[cfg(not(windows))]
    {
        a == b
    }
}

/// True when `path` starts with a `~` that stands alone or is followed by a separator.
pub(crate) fn has_tilde_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.first() == Some(&b'~') && (bytes.len() == 1 || is_sep(bytes[1]))
}

/// Replaces a leading `~` with `home`. Returns `None` when no expansion applies.
pub(crate) fn expand_tilde(path: &str, home: &str) -> Option<String> {
    has_tilde_prefix(path).then(|| format!("{home}{}", &path[1..]))
}
