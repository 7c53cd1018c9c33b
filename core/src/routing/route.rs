use super::{location::segments, redirect::Rule};
use serde::{Deserialize, Serialize};

pub const TARGET: &str = "target";
pub const COIN_ID_A: &str = "coinIdA";
pub const COIN_ID_B: &str = "coinIdB";

/// The trading pages the shell can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Swap,
    Pool,
    AddLiquidity,
    RemoveLiquidity,
    Chart,
}

impl Page {
    /// First path segment of the page's canonical URL.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Swap => "swap",
            Page::Pool => "pool",
            Page::AddLiquidity => "add",
            Page::RemoveLiquidity => "remove",
            Page::Chart => "charts",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Swap => "Swap",
            Page::Pool => "Pool",
            Page::AddLiquidity => "Add Liquidity",
            Page::RemoveLiquidity => "Remove Liquidity",
            Page::Chart => "Charts",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Matches one segment, ASCII case-insensitively.
    Literal(&'static str),
    /// Binds one segment verbatim.
    Param(&'static str),
    /// Matches whatever is left, including nothing.
    CatchAll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Page(Page),
    /// Run `rule`; render `page` when the URL is already canonical.
    Normalize { rule: Rule, page: Page },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static [Segment],
    pub target: Target,
}

use Segment::*;

pub const CATCH_ALL: Route = Route {
    pattern: &[CatchAll],
    target: Target::Normalize {
        rule: Rule::SwapOnly,
        page: Page::Swap,
    },
};

/// Tried in order; the first structural match wins.
pub static ROUTES: &[Route] = &[
    Route {
        pattern: &[Literal("swap"), Param(TARGET)],
        target: Target::Normalize {
            rule: Rule::SwapTarget,
            page: Page::Swap,
        },
    },
    Route {
        pattern: &[Literal("swap")],
        target: Target::Page(Page::Swap),
    },
    Route {
        pattern: &[Literal("pool")],
        target: Target::Page(Page::Pool),
    },
    Route {
        pattern: &[Literal("add")],
        target: Target::Normalize {
            rule: Rule::DuplicateAssets,
            page: Page::AddLiquidity,
        },
    },
    Route {
        pattern: &[Literal("add"), Param(COIN_ID_A)],
        target: Target::Page(Page::AddLiquidity),
    },
    Route {
        pattern: &[Literal("add"), Param(COIN_ID_A), Param(COIN_ID_B)],
        target: Target::Normalize {
            rule: Rule::DuplicateAssets,
            page: Page::AddLiquidity,
        },
    },
    Route {
        pattern: &[Literal("remove"), Param(COIN_ID_A), Param(COIN_ID_B)],
        target: Target::Page(Page::RemoveLiquidity),
    },
    Route {
        pattern: &[Literal("charts")],
        target: Target::Page(Page::Chart),
    },
    CATCH_ALL,
];

/// Parameters bound by a matched route, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(&'static str, String)>);

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn bind(&mut self, name: &'static str, value: &str) {
        debug_assert!(self.get(name).is_none(), "duplicate parameter `{name}`");
        self.0.push((name, value.to_string()));
    }
}

impl Route {
    /// Binds the route's parameters if `segments` has exactly this route's shape.
    pub fn matches(&self, segments: &[&str]) -> Option<PathParams> {
        let mut params = PathParams::default();

        for (index, pattern) in self.pattern.iter().enumerate() {
            match pattern {
                CatchAll => return Some(params),
                Literal(literal) => {
                    if !segments.get(index)?.eq_ignore_ascii_case(literal) {
                        return None;
                    }
                }
                Param(name) => params.bind(*name, segments.get(index)?),
            }
        }

        (segments.len() == self.pattern.len()).then_some(params)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matched {
    pub route: &'static Route,
    pub params: PathParams,
}

/// Finds the first route in [`ROUTES`] whose shape fits `path`.
pub fn match_path(path: &str) -> Matched {
    let segments: Vec<&str> = segments(path).collect();

    ROUTES
        .iter()
        .find_map(|route| {
            route
                .matches(&segments)
                .map(|params| Matched { route, params })
        })
        .unwrap_or(Matched {
            route: &CATCH_ALL,
            params: PathParams::default(),
        })
}
