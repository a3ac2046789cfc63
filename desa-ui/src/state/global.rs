//! Global Application State
//!
//! Reactive state management using Leptos signals.

use gloo_timers::callback::Timeout;
use indeks_desa::charts::ChartTheme;
use indeks_desa::preferences::{PreferenceStore, PresentationContext, Theme};
use indeks_desa::spotlight::{MockResultProvider, Spotlight};
use leptos::*;

use super::storage::LocalStorage;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Working preferences and their storage
    pub preferences: StoredValue<PreferenceStore<LocalStorage>>,
    /// Theme and typography applied to the root element
    pub presentation: RwSignal<PresentationContext>,
    /// Search overlay
    pub spotlight: RwSignal<Spotlight<MockResultProvider>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Pending auto-clear for each toast; replacing one cancels the old timer
    toast_timers: StoredValue<[Option<Timeout>; 2]>,
}

const SUCCESS_SLOT: usize = 0;
const ERROR_SLOT: usize = 1;

/// Provide global state to the component tree
pub fn provide_global_state() {
    let mut store = PreferenceStore::new(LocalStorage::new());
    store.load();

    let state = GlobalState {
        presentation: create_rw_signal(store.presentation()),
        preferences: store_value(store),
        spotlight: create_rw_signal(Spotlight::new(MockResultProvider::default())),
        success: create_rw_signal(None),
        error: create_rw_signal(None),
        toast_timers: store_value([None, None]),
    };

    provide_context(state);
}

/// The state installed by `provide_global_state`
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    pub fn theme(&self) -> Theme {
        self.presentation.with(|p| p.theme)
    }

    pub fn chart_theme(&self) -> ChartTheme {
        self.theme().chart_theme()
    }

    /// Run `f` against the preference store, then mirror its presentation
    pub fn with_preferences<R>(&self, f: impl FnOnce(&mut PreferenceStore<LocalStorage>) -> R) -> Option<R> {
        let result = self.preferences.try_update_value(f);
        if let Some(ctx) = self.preferences.try_with_value(|store| store.presentation()) {
            self.presentation.set(ctx);
        }
        result
    }

    /// Flip light/dark and persist the choice
    pub fn toggle_theme(&self) {
        let next = self.theme().toggled();
        if let Some(Err(e)) = self.with_preferences(|store| store.set_theme(next)) {
            self.show_error(&format!("Gagal menyimpan tema: {}", e));
        }
    }

    /// Show a success message (auto-clears after timeout). Suppressed when
    /// notifications are turned off.
    pub fn show_success(&self, message: &str) {
        let enabled = self
            .preferences
            .try_with_value(|store| store.current().notifications)
            .unwrap_or(true);
        if !enabled {
            return;
        }

        self.flash(self.success, SUCCESS_SLOT, message, 3000);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.flash(self.error, ERROR_SLOT, message, 5000);
    }

    fn flash(&self, signal: RwSignal<Option<String>>, slot: usize, message: &str, millis: u32) {
        signal.set(Some(message.to_string()));
        let timer = Timeout::new(millis, move || signal.set(None));
        self.toast_timers.update_value(|timers| timers[slot] = Some(timer));
    }
}
