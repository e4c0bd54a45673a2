use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use super::{page_title, HOME_PATH};

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text=page_title("Not Found")/>
        <div class="page not-found">
            <h2>"Page not found"</h2>
            <A href=HOME_PATH>"Back to the upload page"</A>
        </div>
    }
}
