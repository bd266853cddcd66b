//! A draggable task card within a column.

use board::card::{Card, Priority};
use board::drag::DragState;
use leptos::prelude::*;

use crate::components::card_form::CardEditor;
use crate::components::toast_stack::notify;
use crate::state::toast::{ToastKind, ToastState};
use crate::storage::Content;

/// One card: title, optional description, priority pill, optional due date.
/// Dragging it records the drag source; releasing it applies the move when a
/// drop target column was recorded during the gesture.
#[component]
pub fn KanbanCard(column_id: String, card: Card) -> impl IntoView {
    let content = expect_context::<RwSignal<Content>>();
    let drag = expect_context::<RwSignal<DragState>>();
    let editor = expect_context::<RwSignal<Option<CardEditor>>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Dims the card element while it is being dragged.
    let lifted = RwSignal::new(false);

    let on_drag_start = {
        let column_id = column_id.clone();
        let card_id = card.id.clone();
        move |_ev: leptos::ev::DragEvent| {
            drag.update(|d| d.begin(&column_id, &card_id));
            lifted.set(true);
        }
    };

    let on_drag_end = move |_ev: leptos::ev::DragEvent| {
        lifted.set(false);
        let mv = drag.try_update(DragState::finish).flatten();
        if let Some(mv) = mv {
            content.update(|c| c.move_card(&mv));
            notify(toasts, ToastKind::Success, "Card moved");
        }
    };

    let on_edit = {
        let column_id = column_id.clone();
        let card = card.clone();
        move |_| {
            editor.set(Some(CardEditor {
                column_id: column_id.clone(),
                card: Some(card.clone()),
            }));
        }
    };

    let on_delete = {
        let column_id = column_id.clone();
        let card_id = card.id.clone();
        move |_| {
            content.update(|c| c.delete_card(&column_id, &card_id));
            notify(toasts, ToastKind::Info, "Card deleted");
        }
    };

    let pill_class = match card.priority {
        Priority::Low => "kanban-card__pill kanban-card__pill--low",
        Priority::Medium => "kanban-card__pill kanban-card__pill--medium",
        Priority::High => "kanban-card__pill kanban-card__pill--high",
    };

    view! {
        <article
            class=move || {
                if lifted.get() { "kanban-card kanban-card--lifted" } else { "kanban-card" }
            }
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
        >
            <div class="kanban-card__row">
                <h3 class="kanban-card__title">{card.title.clone()}</h3>
                <span class="kanban-card__actions">
                    <button title="Edit card" on:click=on_edit>
                        "\u{270e}"
                    </button>
                    <button title="Delete card" on:click=on_delete>
                        "\u{2715}"
                    </button>
                </span>
            </div>
            {(!card.description.is_empty())
                .then(|| view! { <p class="kanban-card__description">{card.description.clone()}</p> })}
            <div class="kanban-card__meta">
                <span class=pill_class>{card.priority.label()}</span>
                {(!card.due_date.is_empty())
                    .then(|| view! { <span class="kanban-card__due">{card.due_date.clone()}</span> })}
            </div>
        </article>
    }
}
