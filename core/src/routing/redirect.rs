use super::{
    location::{Location, Query},
    route::{Page, PathParams, COIN_ID_A, COIN_ID_B, TARGET},
};
use crate::constants::{
    query_keys::{INPUT_CURRENCY, OUTPUT_CURRENCY, SWAP},
    DEFAULT_INPUT, DEFAULT_OUTPUT,
};
use std::{borrow::Cow, fmt};

/// Decides whether two asset identifiers name the same underlying asset.
pub trait AssetIdentity {
    fn same_asset(&self, a: &str, b: &str) -> bool;
}

impl<F> AssetIdentity for F
where
    F: Fn(&str, &str) -> bool,
{
    fn same_asset(&self, a: &str, b: &str) -> bool {
        self(a, b)
    }
}

/// Identifiers are equal ignoring ASCII case, so `0xAbC` and `0xabc` collapse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl AssetIdentity for CaseInsensitive {
    fn same_asset(&self, a: &str, b: &str) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exact;

impl AssetIdentity for Exact {
    fn same_asset(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

/// How a route's URL is rewritten into its canonical form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// `swap/:target` becomes `swap?outputCurrency=:target`.
    SwapTarget,
    /// Collapses a liquidity pair of an asset with itself.
    DuplicateAssets,
    /// Anything unknown lands on `swap`, keeping only swap query keys.
    SwapOnly,
}

/// A path relative to the app root, plus the query it should carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalPath {
    path: String,
    query: Query,
}

impl CanonicalPath {
    pub fn new(path: impl Into<String>, query: Query) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Browser URL under the deployment prefix `base`.
    pub fn href(&self, base: &str) -> String {
        format!("{}/{self}", base.trim_end_matches('/'))
    }

    pub fn to_location(&self) -> Location {
        Location::new(self.path.clone(), self.query.clone())
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query.to_query_string())?;
        }
        Ok(())
    }
}

/// Assets assumed for a bare `add` URL. Both identifiers must be non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultPair {
    pub input: String,
    pub output: String,
}

impl DefaultPair {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        let (input, output) = (input.into(), output.into());
        debug_assert!(!input.is_empty() && !output.is_empty());
        Self { input, output }
    }
}

impl Default for DefaultPair {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalizer<I = CaseInsensitive> {
    defaults: DefaultPair,
    identity: I,
}

impl Normalizer {
    pub fn new(defaults: DefaultPair) -> Self {
        Self::with_identity(defaults, CaseInsensitive)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DefaultPair::default())
    }
}

impl<I: AssetIdentity> Normalizer<I> {
    pub fn with_identity(defaults: DefaultPair, identity: I) -> Self {
        Self { defaults, identity }
    }

    pub fn defaults(&self) -> &DefaultPair {
        &self.defaults
    }

    /// Canonical URL for a matched route, or `None` when the URL already is canonical.
    pub fn normalize(&self, rule: Rule, params: &PathParams, query: &Query) -> Option<CanonicalPath> {
        match rule {
            Rule::SwapTarget => {
                let target = params.get(TARGET)?;
                let mut query = query.clone();
                query.set(OUTPUT_CURRENCY, target);
                Some(CanonicalPath::new(Page::Swap.slug(), query))
            }
            Rule::DuplicateAssets => self.dedupe_assets(params, query),
            Rule::SwapOnly => {
                let mut query = query.clone();
                query.retain_keys(SWAP);
                Some(CanonicalPath::new(Page::Swap.slug(), query))
            }
        }
    }

    fn dedupe_assets(&self, params: &PathParams, query: &Query) -> Option<CanonicalPath> {
        match (params.get(COIN_ID_A), params.get(COIN_ID_B)) {
            (Some(a), Some(b)) => self
                .identity
                .same_asset(a, b)
                .then(|| add_liquidity_path(a, None)),
            (Some(_), None) => None,
            (None, _) => {
                let from = query_asset(query, INPUT_CURRENCY).unwrap_or(self.defaults.input.as_str());
                let to = query_asset(query, OUTPUT_CURRENCY).unwrap_or(self.defaults.output.as_str());
                let to = (!self.identity.same_asset(from, to)).then(|| path_segment(to));
                Some(add_liquidity_path(&path_segment(from), to.as_deref()))
            }
        }
    }
}

/// An asset named in the query, unless it is empty or a dot segment a browser would collapse.
fn query_asset<'a>(query: &'a Query, key: &str) -> Option<&'a str> {
    query
        .get(key)
        .filter(|value| !matches!(*value, "" | "." | ".."))
}

/// `a` and `b` must already be single path segments.
fn add_liquidity_path(a: &str, b: Option<&str>) -> CanonicalPath {
    let slug = Page::AddLiquidity.slug();
    let path = match b {
        Some(b) => format!("{slug}/{a}/{b}"),
        None => format!("{slug}/{a}"),
    };
    CanonicalPath::new(path, Query::default())
}

/// Percent-encodes an identifier from a query string so that it stays one path segment and
/// comes back unchanged from a browser's URL parser. Dot segments are rejected by `query_asset`.
fn path_segment(value: &str) -> Cow<'_, str> {
    if value.bytes().all(is_segment_byte) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        if is_segment_byte(byte) {
            escaped.push(char::from(byte));
        } else {
            escaped.push_str(&format!("%{byte:02X}"));
        }
    }
    Cow::Owned(escaped)
}

// RFC 3986 `pchar` minus `%`; none of these are rewritten by the WHATWG path parser.
fn is_segment_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"-._~:@!$&'()*+,;=".contains(&byte)
}
