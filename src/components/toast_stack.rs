//! Toast notifications: the stack component and the `notify` helper.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen.
const TOAST_DURATION_MS: u32 = 3_000;

/// Push a toast and schedule its auto-dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let id = toasts
        .try_update(|state| state.push(kind, message))
        .unwrap_or_default();
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.update(|state| state.dismiss(id));
    });
}

/// Fixed-position stack of active toasts; clicking one dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts()
                    .iter()
                    .cloned()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Info => "toast toast--info",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| {
                                toasts.update(|state| state.dismiss(id));
                            }>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
