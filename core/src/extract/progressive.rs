//! Starting / finishing pace for progressive runs: the first two M:SS values
//! in the text, taken in order, both per-km.

use std::sync::LazyLock;

use regex::Regex;

static MMSS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}:\d{2})").expect("valid m:ss regex"));

pub fn extract(text: &str) -> Option<(String, String)> {
    let lower = text.to_lowercase();
    if !lower.contains("progressive") {
        return None;
    }
    let mut paces = MMSS_RE.find_iter(&lower);
    let start = paces.next()?;
    let finish = paces.next()?;
    Some((
        format!("{}/km", start.as_str()),
        format!("{}/km", finish.as_str()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_progressive_keyword_and_two_paces() {
        assert_eq!(
            extract("progressive run from 6:00 down to 5:15"),
            Some(("6:00/km".to_string(), "5:15/km".to_string()))
        );
        assert_eq!(extract("run from 6:00 down to 5:15"), None);
        assert_eq!(extract("progressive run at 6:00"), None);
    }
}
