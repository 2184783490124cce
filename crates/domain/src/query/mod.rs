//! In-memory query engine over player collections.
//!
//! A listing runs filter → sort → paginate over a snapshot of all players;
//! a count runs the filter alone.

mod filter;
mod order;
mod page;

pub use filter::{filter_players, PlayerFilter};
pub use order::{sort_players, PlayerOrder};
pub use page::{paginate, PageRequest, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

use crate::entities::Player;

/// Filter, order and slice `players` into a single page.
pub fn select_page(
    players: Vec<Player>,
    filter: &PlayerFilter,
    order: Option<PlayerOrder>,
    page: PageRequest,
) -> Vec<Player> {
    let mut matching = filter_players(players, filter);
    sort_players(&mut matching, order);
    paginate(matching, page)
}

/// Number of `players` matching `filter`.
pub fn count_matching(players: Vec<Player>, filter: &PlayerFilter) -> usize {
    filter_players(players, filter).len()
}
