//! A single kanban lane: header with card count, the card list, and the
//! drop-target behavior for drags.

use board::column::Column;
use board::drag::DragState;
use leptos::prelude::*;

use crate::components::card_form::CardEditor;
use crate::components::kanban_card::KanbanCard;
use crate::components::toast_stack::notify;
use crate::state::toast::{ToastKind, ToastState};
use crate::storage::Content;

/// One column of the board. Hovering a drag over it records it as the drop
/// target (and highlights it); the move itself is applied by the dragged
/// card's drag-end handler.
#[component]
pub fn KanbanColumn(column: Column) -> impl IntoView {
    let content = expect_context::<RwSignal<Content>>();
    let drag = expect_context::<RwSignal<DragState>>();
    let editor = expect_context::<RwSignal<Option<CardEditor>>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let highlight = {
        let column_id = column.id.clone();
        move || drag.with(|d| d.hovered() == Some(column_id.as_str()))
    };

    let on_drag_over = {
        let column_id = column.id.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            // dragover fires continuously; only write on an actual change.
            if drag.with_untracked(|d| d.hovered() != Some(column_id.as_str())) {
                drag.update(|d| d.hover(&column_id));
            }
        }
    };

    let on_add_card = {
        let column_id = column.id.clone();
        move |_| {
            editor.set(Some(CardEditor { column_id: column_id.clone(), card: None }));
        }
    };

    let on_delete_column = {
        let column_id = column.id.clone();
        move |_| {
            let confirmed = web_sys::window().is_some_and(|w| {
                w.confirm_with_message(
                    "Are you sure you want to delete this column? All cards will be lost.",
                )
                .unwrap_or(false)
            });
            if confirmed {
                content.update(|c| c.delete_column(&column_id));
                notify(toasts, ToastKind::Info, "Column deleted");
            }
        }
    };

    let count = column.cards.len();
    let cards = column.cards.clone();
    let column_id = column.id.clone();

    view! {
        <section
            class=move || {
                if highlight() { "kanban-column kanban-column--over" } else { "kanban-column" }
            }
            on:dragover=on_drag_over
        >
            <header class="kanban-column__header">
                <span class="kanban-column__title">{column.title.clone()}</span>
                <span class="kanban-column__count">{count}</span>
                <button title="Add card" on:click=on_add_card>
                    "+"
                </button>
                <button title="Delete column" on:click=on_delete_column>
                    "\u{2715}"
                </button>
            </header>
            <div class="kanban-column__cards">
                {cards
                    .into_iter()
                    .map(|card| view! { <KanbanCard column_id=column_id.clone() card/> })
                    .collect::<Vec<_>>()}
                {(count == 0)
                    .then(|| view! { <p class="kanban-column__empty">"No cards yet"</p> })}
            </div>
        </section>
    }
}
