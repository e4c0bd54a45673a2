use leptos::*;
use leptos_meta::Title;

use super::page_title;
use crate::APP_NAME;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text=page_title("About")/>
        <div class="page about">
            <h2>"About " {APP_NAME}</h2>
            <p>
                "Legal documents are often filled with jargon and complex clauses that make "
                "them hard to understand for the general public. " {APP_NAME} " bridges this "
                "gap by using AI to simplify these documents into plain, human-friendly explanations."
            </p>
            <p>
                "Our mission is to empower individuals, startups, and small businesses to "
                "understand their contracts, agreements, and policies without needing advanced "
                "legal knowledge."
            </p>
            <p>
                "We believe that everyone deserves access to clarity when it comes to legal "
                "matters, and that's exactly what " {APP_NAME} " provides."
            </p>
        </div>
    }
}
