use gitlogs_shared::{
    admin::SAVE_NOTICE_MS, poller::HEALTH_POLL_INTERVAL_MS, AdminAction, AdminCommand,
    HealthPoller, PollerCommand,
};
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::{pages::admin::store::{run_command, AdminContext}, storage};

/// Keeps a value in sync with the auth token written by other tabs.
///
/// The `storage` listener is attached on mount and removed on unmount.
#[hook]
pub fn use_auth_token_sync(on_change: Callback<Option<String>>) {
    use_effect_with((), move |_| {
        let listener = storage::subscribe_auth_token(move |token| on_change.emit(token));
        move || drop(listener)
    });
}

/// Drives the health poller from the admin gate.
///
/// Opening the gate loads the overview and stats immediately, then polls
/// `/api/health` every [`HEALTH_POLL_INTERVAL_MS`]. Closing it (or leaving
/// the page) drops the interval.
#[hook]
pub fn use_health_poller(store: AdminContext) {
    // Ticks must see the latest reducer handle, not the one captured when
    // the interval was created.
    let latest = use_mut_ref(|| store.clone());
    *latest.borrow_mut() = store.clone();
    let poller = use_mut_ref(HealthPoller::default);
    let can_use_admin = store.can_use_admin();

    use_effect_with(can_use_admin, move |open| {
        let command = poller.borrow_mut().sync(*open);
        if let Some(command) = command {
            let store = latest.borrow().clone();
            for immediate in command.immediate_commands() {
                run_command(&store, *immediate);
            }
        }
        let interval = match command {
            Some(PollerCommand::Start) => {
                let latest = latest.clone();
                let poller = poller.clone();
                Some(Interval::new(HEALTH_POLL_INTERVAL_MS, move || {
                    let due = poller.borrow().on_tick();
                    if due {
                        // Dispatching may re-render synchronously, which
                        // writes `latest`; release the borrow first.
                        let store = latest.borrow().clone();
                        run_command(&store, AdminCommand::LoadOverview);
                    }
                }))
            },
            Some(PollerCommand::Stop) | None => None,
        };
        move || drop(interval)
    });
}

/// Clears the "API key saved" notice after [`SAVE_NOTICE_MS`].
#[hook]
pub fn use_save_notice_timeout(store: AdminContext) {
    let notice_id = store.save_notice().map(|notice| notice.id);
    use_effect_with(notice_id, move |id| {
        let timeout = id.map(|id| {
            Timeout::new(SAVE_NOTICE_MS, move || store.dispatch(AdminAction::ClearNotice(id)))
        });
        move || drop(timeout)
    });
}
