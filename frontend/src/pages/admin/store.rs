use std::{ops::Deref, rc::Rc};

use gitlogs_shared::{AdminAction, AdminCommand, AdminState, GateTransition, Plan};
use yew::prelude::*;

use crate::{api, storage};

/// Reducer wrapper around the shared admin controller.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminStore {
    state: AdminState,
}

impl AdminStore {
    /// Loads the saved key and auth token; the page always opens in user
    /// mode.
    pub fn load() -> Self {
        let credentials = storage::credentials();
        Self {
            state: AdminState::new(credentials.read_admin_key(), credentials.read_auth_token()),
        }
    }
}

impl Deref for AdminStore {
    type Target = AdminState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Reducible for AdminStore {
    type Action = AdminAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.state.apply(action) == GateTransition::Closed {
            log::info!("admin gate closed; overview and stats cleared");
        }
        Rc::new(next)
    }
}

pub type AdminContext = UseReducerHandle<AdminStore>;

/// Plans `command` against the current state and, when allowed, sends it in
/// the background. The answer is dispatched back tagged with its epoch.
pub fn run_command(store: &AdminContext, command: AdminCommand) {
    match store.plan(command) {
        Plan::Dispatch(call) => {
            store.dispatch(AdminAction::Started {
                slot: call.slot,
                epoch: call.epoch,
            });
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let finished = api::run_admin_call(call).await;
                store.dispatch(finished);
            });
        },
        Plan::Rejected {
            slot,
            message,
        } => store.dispatch(AdminAction::Rejected {
            slot,
            message,
        }),
        Plan::Skip => log::debug!("{command:?} skipped while admin gate is closed"),
    }
}

/// Callback that runs `command` on click.
pub fn command_callback(store: &AdminContext, command: AdminCommand) -> Callback<MouseEvent> {
    let store = store.clone();
    Callback::from(move |_| run_command(&store, command))
}
