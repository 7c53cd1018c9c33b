//! URL to page resolution.
//!
//! Every navigation is turned into a [`NavigationIntent`] before anything renders: either a page
//! with the parameters its route bound, or a canonical URL to replace the current one with.
//! Resolution is pure; the same location always resolves the same way.

mod location;
mod redirect;
mod route;

pub use location::{segments, strip_base, Location, Query};
pub use redirect::{AssetIdentity, CanonicalPath, CaseInsensitive, DefaultPair, Exact, Normalizer, Rule};
pub use route::{
    match_path, Matched, Page, PathParams, Route, Segment, Target, CATCH_ALL, COIN_ID_A,
    COIN_ID_B, ROUTES, TARGET,
};

use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationIntent {
    Render { page: Page, params: PathParams },
    /// `replace` keeps the non-canonical URL out of the history stack.
    Redirect { to: CanonicalPath, replace: bool },
}

impl NavigationIntent {
    pub fn page(&self) -> Option<Page> {
        match self {
            NavigationIntent::Render { page, .. } => Some(*page),
            NavigationIntent::Redirect { .. } => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&CanonicalPath> {
        match self {
            NavigationIntent::Render { .. } => None,
            NavigationIntent::Redirect { to, .. } => Some(to),
        }
    }
}

/// Path Matcher and Redirect Normalizer composed.
#[derive(Clone, Debug)]
pub struct Resolver<I = CaseInsensitive> {
    normalizer: Normalizer<I>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Normalizer::default())
    }
}

impl<I: AssetIdentity> Resolver<I> {
    pub fn new(normalizer: Normalizer<I>) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer<I> {
        &self.normalizer
    }

    pub fn resolve(&self, location: &Location) -> NavigationIntent {
        let Matched { route, params } = match_path(location.path());

        let intent = match route.target {
            Target::Page(page) => NavigationIntent::Render { page, params },
            Target::Normalize { rule, page } => {
                match self.normalizer.normalize(rule, &params, location.query()) {
                    Some(to) => NavigationIntent::Redirect { to, replace: true },
                    None => NavigationIntent::Render { page, params },
                }
            }
        };

        debug!(path = location.path(), ?intent, "resolved navigation");
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::new(Normalizer::new(DefaultPair::new("MOVE", "USDC")))
    }

    #[test]
    fn redirects_replace_history() {
        let intent = resolver().resolve(&Location::parse("/nonsense/path"));
        assert!(matches!(intent, NavigationIntent::Redirect { replace: true, .. }));
        assert_eq!(intent.page(), None);
        assert_eq!(intent.redirect_target().map(CanonicalPath::path), Some("swap"));
    }

    #[test]
    fn render_carries_params() {
        let intent = resolver().resolve(&Location::parse("/remove/X/Y"));
        assert_eq!(intent.page(), Some(Page::RemoveLiquidity));
        let NavigationIntent::Render { params, .. } = intent else {
            panic!("expected a render intent");
        };
        assert_eq!(params.get(COIN_ID_A), Some("X"));
        assert_eq!(params.get(COIN_ID_B), Some("Y"));
    }

    #[test]
    fn swap_query_does_not_affect_the_intent() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(&Location::parse("swap")),
            resolver.resolve(&Location::parse("swap?inputCurrency=MOVE&outputCurrency=USDC"))
        );
    }
}
