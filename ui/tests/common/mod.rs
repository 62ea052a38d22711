use chrono::Utc;
use egui_kittest::Harness;
use userview_business::{UserRecord, UsersCompute};
use userview_ui::app::users_page;
use userview_ui::state::State;

/// Twelve users whose fetch order differs from their name order.
///
/// Names, emails and cities are all distinct from each other and from the column headers,
/// so every cell can be looked up by its exact label.
#[allow(unused)]
pub fn sample_records() -> Vec<UserRecord> {
    [
        ("Mallory", "Berlin"),
        ("Alice", "Paris"),
        ("Trent", "Oslo"),
        ("Bob", "Lisbon"),
        ("Carol", "Madrid"),
        ("Dave", "Rome"),
        ("Eve", "Vienna"),
        ("Frank", "Prague"),
        ("Grace", "Dublin"),
        ("Heidi", "Athens"),
        ("Ivan", "Warsaw"),
        ("Judy", "Zurich"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, city), id)| {
        let email = format!("{}@example.com", name.to_lowercase());
        UserRecord::new(id, name, email, city)
    })
    .collect()
}

/// State whose fetch already succeeded with `records`.
#[allow(unused)]
pub fn loaded_state(records: Vec<UserRecord>) -> State {
    let mut state = State::default();
    state
        .ctx
        .updater()
        .set(UsersCompute::loaded(records, Utc::now()));
    state.ctx.settle();
    state
}

/// Harness rendering only the users page over a pre-loaded state.
#[allow(unused)]
pub fn users_page_harness<'a>(records: Vec<UserRecord>) -> Harness<'a, State> {
    let mut harness =
        Harness::new_ui_state(|ui, state: &mut State| users_page(state, ui), loaded_state(records));
    harness.run();
    harness
}

#[allow(unused)]
pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
