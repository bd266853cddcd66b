//! Kanban area for one board: the lanes, the add-column form, and the card
//! form modal.
//!
//! This component owns the board's content store and drag state. It is
//! remounted whenever the selected board changes, which reloads (or seeds)
//! that board's column/card tree from storage.

use board::drag::DragState;
use leptos::prelude::*;

use crate::components::card_form::{CardEditor, CardForm};
use crate::components::kanban_column::KanbanColumn;
use crate::components::toast_stack::notify;
use crate::state::toast::{ToastKind, ToastState};
use crate::storage::{Content, LocalStorage};
use crate::util::clock;

/// The columns-and-cards area for `board_id`.
#[component]
pub fn KanbanBoard(board_id: String) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let content = RwSignal::new(Content::load(LocalStorage, board_id));
    let drag = RwSignal::new(DragState::default());
    let editor = RwSignal::new(None::<CardEditor>);
    provide_context(content);
    provide_context(drag);
    provide_context(editor);

    let show_form = RwSignal::new(false);
    let column_title = RwSignal::new(String::new());

    let on_add_column = move |_| {
        let added = content
            .try_update(|c| c.add_column(&column_title.get_untracked(), clock::now_ms()))
            .flatten();
        if added.is_some() {
            notify(toasts, ToastKind::Success, "Column added");
            column_title.set(String::new());
            show_form.set(false);
        }
    };

    let on_cancel_column = move |_| {
        show_form.set(false);
        column_title.set(String::new());
    };

    view! {
        <div class="kanban">
            <div class="kanban__lanes">
                {move || {
                    content
                        .with(|c| c.columns().to_vec())
                        .into_iter()
                        .map(|column| view! { <KanbanColumn column/> })
                        .collect::<Vec<_>>()
                }}

                <div class="kanban__new-lane">
                    <Show
                        when=move || show_form.get()
                        fallback=move || {
                            view! {
                                <button
                                    class="kanban__add-column"
                                    on:click=move |_| show_form.set(true)
                                >
                                    "+ Add Column"
                                </button>
                            }
                        }
                    >
                        <div class="kanban__column-form">
                            <input
                                type="text"
                                placeholder="Column name"
                                prop:value=move || column_title.get()
                                on:input=move |ev| column_title.set(event_target_value(&ev))
                            />
                            <div class="kanban__column-form-actions">
                                <button class="btn btn--primary" on:click=on_add_column>
                                    "Add Column"
                                </button>
                                <button class="btn" on:click=on_cancel_column>
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>

            {move || editor.get().map(|target| view! { <CardForm target/> })}
        </div>
    }
}
