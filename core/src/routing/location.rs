use std::fmt;
use url::form_urlencoded;

/// Ordered query string pairs, decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    /// Parses a raw query string. A leading `?` is allowed.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self(form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }

    /// Replaces the first value for `key` in place and drops any later ones, or appends a new pair.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.0[first].1 = value;
                let rest = self.0.split_off(first + 1);
                self.0.extend(rest.into_iter().filter(|(k, _)| *k != key));
            }
            None => self.0.push((key, value)),
        }
    }

    pub fn retain_keys(&mut self, keys: &[&str]) {
        self.0.retain(|(k, _)| keys.contains(&k.as_str()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A navigation target as seen by the matcher: a path relative to the app root plus its query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Query,
}

impl Location {
    pub fn new(path: impl Into<String>, query: Query) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Splits `path?query#fragment`. The fragment is dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        match url.split_once('?') {
            Some((path, query)) => Self::new(path, Query::parse(query)),
            None => Self::new(url, Query::default()),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn segments(&self) -> Vec<&str> {
        segments(&self.path).collect()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query.to_query_string())?;
        }
        Ok(())
    }
}

/// Non-empty path segments; leading, trailing and doubled slashes carry no meaning.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Removes the deployment prefix from a browser pathname. Paths outside `base` are returned as-is.
pub fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_path_query_and_fragment() {
        let location = Location::parse("/swap?inputCurrency=MOVE&exactAmount=1.5#top");
        assert_eq!(location.path(), "/swap");
        assert_eq!(location.query().get("inputCurrency"), Some("MOVE"));
        assert_eq!(location.query().get("exactAmount"), Some("1.5"));
        assert_eq!(location.segments(), vec!["swap"]);
    }

    #[test]
    fn segments_ignore_extra_slashes() {
        let location = Location::parse("//add///A/B/");
        assert_eq!(location.segments(), vec!["add", "A", "B"]);
        assert!(Location::parse("").segments().is_empty());
        assert!(Location::parse("/").segments().is_empty());
    }

    #[test]
    fn query_decodes_and_reencodes() {
        let query = Query::parse("?recipient=a%20b&x=1+2");
        assert_eq!(query.get("recipient"), Some("a b"));
        assert_eq!(query.get("x"), Some("1 2"));
        assert_eq!(query.to_query_string(), "recipient=a+b&x=1+2");
    }

    #[test]
    fn set_replaces_first_value_in_place() {
        let mut query = Query::parse("outputCurrency=A&foo=1&outputCurrency=B");
        query.set("outputCurrency", "C");
        assert_eq!(query.to_query_string(), "outputCurrency=C&foo=1");
    }

    #[test]
    fn set_appends_a_missing_key() {
        let mut query = Query::parse("foo=1");
        query.set("outputCurrency", "C");
        assert_eq!(query.to_query_string(), "foo=1&outputCurrency=C");
    }

    #[test]
    fn retain_keys_drops_unknown_pairs() {
        let mut query = Query::parse("utm_source=x&inputCurrency=MOVE&ref=y");
        query.retain_keys(&["inputCurrency"]);
        assert_eq!(query.iter().collect::<Vec<_>>(), vec![("inputCurrency", "MOVE")]);
    }

    #[test]
    fn strip_base_only_removes_whole_prefix() {
        assert_eq!(strip_base("/movement-interface/swap", "/movement-interface"), "/swap");
        assert_eq!(strip_base("/movement-interface", "/movement-interface/"), "");
        assert_eq!(strip_base("/movement-interfaces/swap", "/movement-interface"), "/movement-interfaces/swap");
        assert_eq!(strip_base("/pool", "/movement-interface"), "/pool");
        assert_eq!(strip_base("/pool", ""), "/pool");
    }

    #[test]
    fn display_omits_empty_query() {
        assert_eq!(Location::parse("swap").to_string(), "swap");
        assert_eq!(Location::parse("swap?a=1").to_string(), "swap?a=1");
    }
}
