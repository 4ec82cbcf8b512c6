//! Free-text dependency heuristic

/// Look for a `key=`/`id=` style token next to `target`.
///
/// Only the first line containing `target` is considered. Its first
/// whitespace-separated token starting with one of `prefixes` yields the text
/// after its last `=`, with surrounding quotes stripped. A result that is empty
/// or equal to `target` does not count.
pub fn find_in_text<S: AsRef<str>>(text: &str, target: &str, prefixes: &[S]) -> Option<String> {
    if target.is_empty() {
        return None;
    }
    let line = text.lines().find(|line| line.contains(target))?;
    let part = line
        .split_whitespace()
        .find(|part| prefixes.iter().any(|p| part.starts_with(p.as_ref())))?;
    let value = part
        .rsplit('=')
        .next()?
        .trim_matches(|c| c == '"' || c == '\'');

    (!value.is_empty() && value != target).then(|| value.to_string())
}
