//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::toast_stack::ToastStack;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::storage::{LocalStorage, Registry};
use crate::util::{clock, dark_mode, welcome};

/// Root component.
///
/// Loads the board registry from localStorage, applies the stored theme,
/// and provides the shared signals (registry, chrome state, toasts) that
/// pages and components pick up via context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);

    let registry = RwSignal::new(Registry::load(LocalStorage, clock::now_ms()));
    let ui = RwSignal::new(UiState { dark_mode: dark, show_welcome: welcome::should_show() });
    let toasts = RwSignal::new(ToastState::default());
    provide_context(registry);
    provide_context(ui);
    provide_context(toasts);

    view! {
        <Title text="TaskFlow"/>

        <AppHeader/>
        <main class="app-main">
            <Router>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </main>
        <ToastStack/>
    }
}

/// Sticky header with the app title and the dark-mode toggle.
#[component]
fn AppHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    view! {
        <header class="app-header">
            <h1 class="app-header__title">"TaskFlow"</h1>
            <button
                class="app-header__theme"
                on:click=on_toggle
                aria-label="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
            </button>
        </header>
    }
}
