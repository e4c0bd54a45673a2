use leptos::*;
use leptos_router::A;

use crate::pages::{ABOUT_PATH, HOME_PATH, HOW_IT_WORKS_PATH};
use crate::services::{check_health, HttpAnalysisClient};
use crate::{backend_url, BackendStatus, APP_NAME};

#[component]
pub fn Navbar() -> impl IntoView {
    let (status, set_status) = create_signal(BackendStatus::Checking);

    // One probe per mount, the badge does not poll.
    spawn_local(async move {
        let client = HttpAnalysisClient::new(backend_url());
        set_status.set(check_health(&client).await);
    });

    view! {
        <nav class="navbar">
            <div class="navbar-logo">"⚖️ " {APP_NAME}</div>
            <ul class="navbar-links">
                <li><A href=HOME_PATH>"Home"</A></li>
                <li><A href=HOW_IT_WORKS_PATH>"How It Works"</A></li>
                <li><A href=ABOUT_PATH>"About"</A></li>
            </ul>
            <span class=move || format!("backend-status {}", status.with(BackendStatus::css_class))>
                <span class="status-dot"></span>
                {move || status.with(BackendStatus::label)}
            </span>
        </nav>
    }
}
