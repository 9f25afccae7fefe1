//! Reader for `.env`-style credential files.
//!
//! Lines look like `KEY=VALUE`. Blank lines and lines starting with `#` are
//! skipped, and surrounding single or double quotes are stripped from values.

use std::{fs, io, path::Path};

use tracing::{debug, warn};

/// Look up `key` in the contents of a credential file.
pub fn find_value(contents: &str, key: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, value)| unquote(value.trim()).to_string())
}

/// Read `path` and look up `key`. A missing file or missing key both yield `None`.
pub fn lookup(path: &Path, key: &str) -> Option<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "credential file not found");
            return None;
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read credential file");
            return None;
        }
    };

    let value = find_value(&contents, key);
    if value.is_none() {
        debug!(path = %path.display(), key, "key not present in credential file");
    }
    value
}

fn unquote(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn strips_double_quotes() {
        let contents = "WEATHER_API_KEY=\"abc123\"\n";
        assert_eq!(find_value(contents, "WEATHER_API_KEY").as_deref(), Some("abc123"));
    }

    #[test]
    fn strips_single_quotes_and_whitespace() {
        let contents = "  WEATHER_API_KEY = 'abc123'  \n";
        assert_eq!(find_value(contents, "WEATHER_API_KEY").as_deref(), Some("abc123"));
    }

    #[test]
    fn ignores_comments_and_blank_lines() {
        let contents = "# WEATHER_API_KEY=xyz\n\nOTHER=1\n";
        assert_eq!(find_value(contents, "WEATHER_API_KEY"), None);
    }

    #[test]
    fn first_match_wins_and_keeps_equals_in_value() {
        let contents = "WEATHER_API_KEY=a=b\nWEATHER_API_KEY=second\n";
        assert_eq!(find_value(contents, "WEATHER_API_KEY").as_deref(), Some("a=b"));
    }

    #[test]
    fn key_match_is_exact() {
        let contents = "WEATHER_API_KEY_OLD=old\nweather_api_key=lower\n";
        assert_eq!(find_value(contents, "WEATHER_API_KEY"), None);
    }

    #[test]
    fn lookup_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# comment").expect("write");
        writeln!(file, "WEATHER_API_KEY=\"abc123\"").expect("write");

        assert_eq!(lookup(file.path(), "WEATHER_API_KEY").as_deref(), Some("abc123"));
    }

    #[test]
    fn lookup_missing_file_is_none() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert_eq!(lookup(&dir.path().join(".env"), "WEATHER_API_KEY"), None);
    }
}
