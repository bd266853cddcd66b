//! Dismissible first-visit welcome banner.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::welcome;

/// Getting-started banner shown until the user dismisses it once.
#[component]
pub fn WelcomeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_dismiss = move |_| {
        welcome::dismiss();
        ui.update(|state| state.show_welcome = false);
    };

    view! {
        <div class="welcome-banner">
            <h2 class="welcome-banner__title">"Welcome to TaskFlow!"</h2>
            <p>"Your visual task management solution. Here's how to get started:"</p>
            <ul class="welcome-banner__tips">
                <li>"Select or create a board from the sidebar"</li>
                <li>"Add columns for different stages (To Do, In Progress, Done)"</li>
                <li>"Create cards for your tasks and drag them between columns"</li>
            </ul>
            <button class="btn btn--ghost" on:click=on_dismiss>
                "Got it!"
            </button>
        </div>
    }
}
