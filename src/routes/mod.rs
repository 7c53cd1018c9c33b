use interface_core::{
    routing::{Page, PathParams, COIN_ID_A, COIN_ID_B},
    Error,
};
use leptos::prelude::*;

mod add_liquidity;
mod chart;
mod pool;
mod remove_liquidity;
mod swap;

pub use add_liquidity::AddLiquidity;
pub use chart::Chart;
pub use pool::Pool;
pub use remove_liquidity::RemoveLiquidity;
pub use swap::Swap;

/// Mounts the component for `page`, handing it the parameters its route bound.
pub fn page_view(page: Page, params: PathParams) -> AnyView {
    let param = |name: &str| params.get(name).map(str::to_string);

    match page {
        Page::Swap => view! { <Swap /> }.into_any(),
        Page::Pool => view! { <Pool /> }.into_any(),
        Page::AddLiquidity => {
            view! { <AddLiquidity coin_id_a=param(COIN_ID_A) coin_id_b=param(COIN_ID_B) /> }
                .into_any()
        }
        // the matcher only activates this route when both segments are present
        Page::RemoveLiquidity => match (param(COIN_ID_A), param(COIN_ID_B)) {
            (Some(coin_id_a), Some(coin_id_b)) => {
                view! { <RemoveLiquidity coin_id_a coin_id_b /> }.into_any()
            }
            (None, _) => Err::<(), _>(Error::MissingParam(COIN_ID_A.into())).into_any(),
            (_, None) => Err::<(), _>(Error::MissingParam(COIN_ID_B.into())).into_any(),
        },
        Page::Chart => view! { <Chart /> }.into_any(),
    }
}
