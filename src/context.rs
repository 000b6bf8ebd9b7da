//! Application Context
//!
//! Shared state provided via Leptos Context API. Every board mutation goes
//! through [`AppContext::apply`], which writes touched keys through to
//! storage and raises the mutation's notice as a toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DndSignals;
use log::warn;
use now_later_core::{BoardState, Notice, Outcome, Quadrant, StateRepository};

use crate::storage::BrowserStore;
use crate::store::{store_dismiss_toast, store_push_toast, UiStore};

/// Task cards dragged onto quadrant panels
pub type QuadrantDnd = DndSignals<String, Quadrant>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Boards, session and preferences
    pub state: RwSignal<BoardState>,
    repo: StoredValue<StateRepository<BrowserStore>>,
    pub ui: UiStore,
    toast_duration_ms: u32,
}

impl AppContext {
    pub fn new(
        state: RwSignal<BoardState>,
        repo: StateRepository<BrowserStore>,
        ui: UiStore,
        toast_duration_ms: u32,
    ) -> Self {
        Self {
            state,
            repo: StoredValue::new(repo),
            ui,
            toast_duration_ms,
        }
    }

    /// Run a mutation, persist what it touched and show its notice
    pub fn apply(&self, op: impl FnOnce(&mut BoardState) -> Outcome) {
        let mut outcome = Outcome::unchanged();
        self.state.maybe_update(|state| {
            outcome = op(state);
            outcome.changed()
        });

        if outcome.changed() {
            let persisted = self.state.with_untracked(|state| {
                self.repo
                    .with_value(|repo| repo.persist(state, outcome.touched))
            });
            if let Err(err) = persisted {
                warn!("changes kept in memory only: {err}");
                self.notify(Notice::error("Changes could not be saved"));
            }
        }
        if let Some(notice) = outcome.notice {
            self.notify(notice);
        }
    }

    /// Show a toast that dismisses itself
    pub fn notify(&self, notice: Notice) {
        let ui = self.ui;
        let id = store_push_toast(&ui, notice);
        let delay = self.toast_duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store_dismiss_toast(&ui, id);
        });
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

pub fn use_quadrant_dnd() -> QuadrantDnd {
    use_context::<QuadrantDnd>().expect("QuadrantDnd should be provided")
}
