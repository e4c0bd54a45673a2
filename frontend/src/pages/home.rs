use leptos::*;
use leptos_meta::Title;

use super::page_title;
use crate::{FileUpload, Hero};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text=page_title("Home")/>
        <div class="home">
            <Hero/>
            <FileUpload/>
        </div>
    }
}
