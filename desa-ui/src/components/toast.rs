//! Toasts for saved settings, theme failures and presentation-only exports.

use leptos::*;

use crate::state::use_global_state;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Failure,
}

impl Tone {
    fn heading(self) -> &'static str {
        match self {
            Tone::Success => "Berhasil",
            Tone::Failure => "Gagal",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Tone::Success => "border-l-4 border-green-500 bg-white dark:bg-gray-800",
            Tone::Failure => "border-l-4 border-red-500 bg-white dark:bg-gray-800",
        }
    }
}

/// Bottom-right stack; each slot clears itself or on click
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    let slot = move |signal: RwSignal<Option<String>>, tone: Tone| {
        move || {
            signal.get().map(|text| {
                view! { <ToastCard text=text tone=tone on_dismiss=move || signal.set(None) /> }
            })
        }
    };

    view! {
        <div class="fixed bottom-6 right-4 z-50 flex flex-col gap-2 w-80" role="status">
            {slot(state.success, Tone::Success)}
            {slot(state.error, Tone::Failure)}
        </div>
    }
}

#[component]
fn ToastCard<F>(text: String, tone: Tone, on_dismiss: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class=format!("{} rounded-lg shadow-lg px-4 py-3 flex items-start gap-3", tone.classes())>
            <div class="flex-1">
                <div class="text-sm font-semibold">{tone.heading()}</div>
                <div class="text-sm text-gray-600 dark:text-gray-300">{text}</div>
            </div>
            <button
                on:click=move |_| on_dismiss()
                title="Tutup"
                class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
            >
                "×"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_text_and_colour() {
        assert_eq!(Tone::Success.heading(), "Berhasil");
        assert_eq!(Tone::Failure.heading(), "Gagal");
        assert!(Tone::Success.classes().contains("green"));
        assert!(Tone::Failure.classes().contains("red"));
    }
}
