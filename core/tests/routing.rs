use interface_core::{
    routing::{
        strip_base, DefaultPair, Location, NavigationIntent, Normalizer, Page, Query, Resolver,
        COIN_ID_A, COIN_ID_B,
    },
    BASE_URL,
};
use proptest::prelude::*;
use url::Url;

const ORIGIN: &str = "https://app.example";

fn resolver() -> Resolver {
    Resolver::new(Normalizer::new(DefaultPair::new("MOVE", "USDC")))
}

fn resolve(url: &str) -> NavigationIntent {
    resolver().resolve(&Location::parse(url))
}

fn redirect_of(url: &str) -> String {
    match resolve(url) {
        NavigationIntent::Redirect { to, replace } => {
            assert!(replace, "{url} should replace history");
            to.to_string()
        }
        intent => panic!("{url} should redirect, got {intent:?}"),
    }
}

fn rendered(url: &str) -> (Page, Vec<(&'static str, String)>) {
    match resolve(url) {
        NavigationIntent::Render { page, params } => (
            page,
            params
                .iter()
                .map(|(name, value)| (name, value.to_string()))
                .collect(),
        ),
        intent => panic!("{url} should render, got {intent:?}"),
    }
}

/// The location the shell sees once the browser has parsed `href`.
fn browser_location(href: &str) -> Location {
    let url = Url::parse(ORIGIN)
        .and_then(|origin| origin.join(href))
        .unwrap_or_else(|error| panic!("{href}: {error}"));
    Location::new(
        strip_base(url.path(), BASE_URL),
        Query::parse(url.query().unwrap_or_default()),
    )
}

fn follow_redirect(url: &str) -> NavigationIntent {
    let resolver = resolver();
    match resolver.resolve(&browser_location(&format!("{BASE_URL}/{url}"))) {
        NavigationIntent::Redirect { to, .. } => resolver.resolve(&browser_location(&to.href(BASE_URL))),
        intent => panic!("{url} should redirect, got {intent:?}"),
    }
}

#[test]
fn swap_target_redirects_with_preselected_output() {
    let NavigationIntent::Redirect { to, .. } = resolve("swap/ABC") else {
        panic!("expected a redirect");
    };
    assert_eq!(to.path(), "swap");
    assert_eq!(to.query().get("outputCurrency"), Some("ABC"));
}

#[test]
fn duplicate_add_pair_collapses() {
    assert_eq!(redirect_of("add/X/X"), "add/X");
}

#[test]
fn distinct_add_pair_renders() {
    assert_eq!(
        rendered("add/X/Y"),
        (
            Page::AddLiquidity,
            vec![(COIN_ID_A, "X".to_string()), (COIN_ID_B, "Y".to_string())]
        )
    );
    assert_eq!(
        rendered("add/X"),
        (Page::AddLiquidity, vec![(COIN_ID_A, "X".to_string())])
    );
}

#[test]
fn remove_never_redirects() {
    assert_eq!(
        rendered("remove/X/Y"),
        (
            Page::RemoveLiquidity,
            vec![(COIN_ID_A, "X".to_string()), (COIN_ID_B, "Y".to_string())]
        )
    );
    // same asset twice is the destination page's problem
    assert_eq!(rendered("remove/X/X").0, Page::RemoveLiquidity);
}

#[test]
fn unknown_paths_land_on_swap() {
    assert_eq!(redirect_of("nonsense/path"), "swap");
    assert_eq!(redirect_of(""), "swap");
    assert_eq!(
        redirect_of("/tokens/MOVE?inputCurrency=MOVE&utm_campaign=x"),
        "swap?inputCurrency=MOVE"
    );
}

#[test]
fn bare_add_fills_in_the_default_pair() {
    assert_eq!(redirect_of("add"), "add/MOVE/USDC");
    assert_eq!(rendered("add/MOVE/USDC").0, Page::AddLiquidity);
}

#[test]
fn redirects_survive_the_browser_url_parser() {
    for url in [
        "add?inputCurrency=a%5Cb",
        "add?inputCurrency=a%09b&outputCurrency=c%20d",
        "add?inputCurrency=%7Bx%7D&outputCurrency=%60y%5E",
        "add?inputCurrency=%25%2F%3F%23",
        "add?inputCurrency=%C3%A9",
        "swap/ABC?recipient=a%20b",
        "nonsense?inputCurrency=a%5Cb",
    ] {
        let intent = follow_redirect(url);
        assert!(matches!(intent, NavigationIntent::Render { .. }), "{url} -> {intent:?}");
    }
}

#[test]
fn escaped_query_assets_keep_their_pair() {
    let NavigationIntent::Render { page, params } = follow_redirect("add?inputCurrency=a%5Cb") else {
        panic!("expected a render");
    };
    assert_eq!(page, Page::AddLiquidity);
    assert_eq!(params.get(COIN_ID_A), Some("a%5Cb"));
    assert_eq!(params.get(COIN_ID_B), Some("USDC"));
}

#[test]
fn dot_segment_assets_fall_back_to_defaults() {
    for url in ["add?inputCurrency=..", "add?inputCurrency=%2e%2e", "add?outputCurrency=."] {
        assert_eq!(redirect_of(url), "add/MOVE/USDC", "{url}");
        assert_eq!(
            follow_redirect(url),
            resolve("add/MOVE/USDC"),
            "{url}"
        );
    }
}

#[test]
fn static_pages_render() {
    assert_eq!(rendered("swap").0, Page::Swap);
    assert_eq!(rendered("pool").0, Page::Pool);
    assert_eq!(rendered("charts").0, Page::Chart);
}

#[test]
fn resolution_is_deterministic() {
    for url in ["swap/ABC?x=1", "add", "add/A/a", "nonsense", "pool"] {
        assert_eq!(resolve(url), resolve(url), "{url}");
    }
}

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("swap".to_string()),
        Just("SWAP".to_string()),
        Just("pool".to_string()),
        Just("add".to_string()),
        Just("remove".to_string()),
        Just("charts".to_string()),
        Just("MOVE".to_string()),
        Just("move".to_string()),
        Just("..".to_string()),
        "[a-zA-Z0-9:%._~-]{1,12}",
    ]
}

fn url() -> impl Strategy<Value = String> {
    let path = prop::collection::vec(segment(), 0..5);
    let query = prop::collection::vec(
        (
            prop_oneof![
                Just("inputCurrency".to_string()),
                Just("outputCurrency".to_string()),
                Just("exactAmount".to_string()),
                Just("utm_source".to_string()),
            ],
            "[a-zA-Z0-9/?#%. ]{0,8}",
        ),
        0..4,
    );
    (path, query).prop_map(|(path, query)| {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query)
            .finish();
        format!("/{}?{query}", path.join("/"))
    })
}

proptest! {
    #[test]
    fn every_path_resolves(raw in ".*") {
        // totality: the catch-all guarantees a decision for any input
        let intent = resolve(&raw);
        prop_assert!(intent.page().is_some() || intent.redirect_target().is_some());
    }

    #[test]
    fn canonical_paths_are_fixed_points(url in url()) {
        let resolver = resolver();
        let incoming = browser_location(&format!("{BASE_URL}{url}"));
        if let NavigationIntent::Redirect { to, .. } = resolver.resolve(&incoming) {
            let again = resolver.resolve(&to.to_location());
            prop_assert!(
                matches!(again, NavigationIntent::Render { .. }),
                "{} -> {} -> {:?}", url, to, again
            );
            // the replaced URL goes through the browser's parser before it is matched again
            let href = to.href(BASE_URL);
            let reparsed = resolver.resolve(&browser_location(&href));
            prop_assert_eq!(reparsed, again, "{}", href);
        }
    }
}
