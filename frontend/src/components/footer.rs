//! Footer component

use chrono::Datelike;
use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <p class="copyright">{copyright_line(year)}</p>
            <p class="tagline">"Built with ❤️ at Hackathons to make legal documents simpler."</p>
        </footer>
    }
}

fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, APP_NAME)
}
