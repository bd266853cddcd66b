//! Modal form for creating or editing a card.

use board::card::{Card, CardDraft, Priority};
use leptos::prelude::*;

use crate::components::toast_stack::notify;
use crate::state::toast::{ToastKind, ToastState};
use crate::storage::Content;
use crate::util::clock;

/// Which card the modal is working on: the target column, plus the existing
/// card when editing (`None` when creating a new one).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardEditor {
    pub column_id: String,
    pub card: Option<Card>,
}

const PRIORITIES: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

/// Card form modal. Title is required; description, priority, and due date
/// are optional. Submitting routes through the content store's upsert, so a
/// blank title never mutates anything.
#[component]
pub fn CardForm(target: CardEditor) -> impl IntoView {
    let content = expect_context::<RwSignal<Content>>();
    let editor = expect_context::<RwSignal<Option<CardEditor>>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let editing = target.card.is_some();
    let initial = target.card.as_ref().map(Card::to_draft).unwrap_or_default();

    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let priority = RwSignal::new(initial.priority);
    let due_date = RwSignal::new(initial.due_date);

    let column_id = target.column_id;
    let card_id = target.card.map(|card| card.id);

    let close = move |_| editor.set(None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = CardDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: priority.get_untracked(),
            due_date: due_date.get_untracked(),
        };
        if !draft.has_title() {
            return;
        }
        let saved = content
            .try_update(|c| c.upsert_card(&column_id, card_id.as_deref(), &draft, clock::now_ms()))
            .flatten();
        if saved.is_some() {
            notify(
                toasts,
                ToastKind::Success,
                if editing { "Card updated" } else { "Card added" },
            );
            editor.set(None);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__titlebar">
                    <h2>{if editing { "Edit Card" } else { "Add New Card" }}</h2>
                    <button class="dialog__close" on:click=close aria-label="Close">
                        "\u{2715}"
                    </button>
                </div>

                <form class="card-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Card title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input card-form__description"
                            placeholder="Card description"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <fieldset class="card-form__priorities">
                        <legend>"Priority"</legend>
                        {PRIORITIES
                            .into_iter()
                            .map(|level| {
                                view! {
                                    <label class=move || {
                                        if priority.get() == level {
                                            "card-form__priority card-form__priority--active"
                                        } else {
                                            "card-form__priority"
                                        }
                                    }>
                                        <input
                                            type="radio"
                                            name="priority"
                                            prop:checked=move || priority.get() == level
                                            on:change=move |_| priority.set(level)
                                        />
                                        {level.label()}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </fieldset>

                    <label class="dialog__label">
                        "Due Date"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| due_date.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="dialog__actions">
                        <button type="submit" class="btn btn--primary">
                            {if editing { "Update Card" } else { "Add Card" }}
                        </button>
                        <button type="button" class="btn" on:click=close>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
