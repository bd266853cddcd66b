//! Home page: board sidebar, welcome banner, and the selected board's
//! kanban area.

use board::registry::Board;
use leptos::prelude::*;

use crate::components::kanban_board::KanbanBoard;
use crate::components::toast_stack::notify;
use crate::components::welcome_banner::WelcomeBanner;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::UiState;
use crate::storage::Registry;
use crate::util::clock;

/// The single main page: every board intent (create, select, delete) goes
/// through the registry signal; the kanban area remounts per selection.
#[component]
pub fn HomePage() -> impl IntoView {
    let registry = expect_context::<RwSignal<Registry>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let new_title = RwSignal::new(String::new());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let created = registry
            .try_update(|r| r.create(&new_title.get_untracked(), clock::now_ms()))
            .flatten();
        if let Some(created) = created {
            notify(
                toasts,
                ToastKind::Success,
                &format!("Board \"{}\" created!", created.title),
            );
            new_title.set(String::new());
        }
    };

    let on_delete = move |target: &Board| {
        let prompt = format!("Are you sure you want to delete \"{}\"?", target.title);
        let confirmed = web_sys::window()
            .is_some_and(|w| w.confirm_with_message(&prompt).unwrap_or(false));
        if confirmed {
            let id = target.id.clone();
            registry.update(|r| r.delete(&id));
            notify(toasts, ToastKind::Info, "Board deleted");
        }
    };

    view! {
        <div class="home-page">
            <Show when=move || ui.get().show_welcome>
                <WelcomeBanner/>
            </Show>

            <div class="home-page__layout">
                <aside class="board-sidebar">
                    <h2 class="board-sidebar__heading">"Your Boards"</h2>

                    <div class="board-sidebar__list">
                        {move || {
                            let selected = registry.with(|r| r.selected().map(str::to_owned));
                            let boards = registry.with(|r| r.boards().to_vec());
                            if boards.is_empty() {
                                view! {
                                    <p class="board-sidebar__empty">
                                        "No boards yet. Create your first board!"
                                    </p>
                                }
                                    .into_any()
                            } else {
                                boards
                                    .into_iter()
                                    .map(|entry| {
                                        let active =
                                            selected.as_deref() == Some(entry.id.as_str());
                                        let class = if active {
                                            "board-sidebar__item board-sidebar__item--active"
                                        } else {
                                            "board-sidebar__item"
                                        };
                                        let id = entry.id.clone();
                                        view! {
                                            <button
                                                class=class
                                                on:click=move |_| {
                                                    registry.update(|r| r.select(&id));
                                                }
                                            >
                                                <span class="board-sidebar__item-title">
                                                    {entry.title.clone()}
                                                </span>
                                                <span class="board-sidebar__item-date">
                                                    {clock::format_date(entry.created_at)}
                                                </span>
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </div>

                    <form class="board-sidebar__create" on:submit=on_create>
                        <h3>"Create New Board"</h3>
                        <input
                            type="text"
                            placeholder="Board name"
                            prop:value=move || new_title.get()
                            on:input=move |ev| new_title.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn--primary" title="Create board">
                            "+"
                        </button>
                    </form>
                </aside>

                <div class="home-page__content">
                    {move || {
                        registry
                            .with(|r| r.selected_board().cloned())
                            .map_or_else(
                                || {
                                    view! {
                                        <div class="board-view board-view--empty">
                                            <h2>"No Board Selected"</h2>
                                            <p>
                                                "Please select a board from the sidebar or create a new one to get started."
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                },
                                |current| {
                                    let for_delete = current.clone();
                                    view! {
                                        <div class="board-view">
                                            <header class="board-view__header">
                                                <h1 class="board-view__title">
                                                    {current.title.clone()}
                                                </h1>
                                                <button
                                                    class="btn btn--outline"
                                                    on:click=move |_| on_delete(&for_delete)
                                                >
                                                    "Delete Board"
                                                </button>
                                            </header>
                                            <KanbanBoard board_id=current.id.clone()/>
                                        </div>
                                    }
                                        .into_any()
                                },
                            )
                    }}
                </div>
            </div>
        </div>
    }
}
