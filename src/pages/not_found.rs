//! 404 page for unknown routes.

use leptos::prelude::*;

/// Fallback page with a link back to the boards.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <a class="btn btn--primary" href="/">
                "Back to Boards"
            </a>
        </div>
    }
}
