//! Hero section component

use leptos::*;

use crate::ACCEPTED_FILE_TYPES;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h2 class="title">"📂 Upload Your Legal Document"</h2>
            <p class="subtitle">
                "Supported formats: " {supported_formats()}
            </p>
        </div>
    }
}

/// ".txt,.doc,.docx,.pdf" as "TXT, DOC, DOCX, PDF".
fn supported_formats() -> String {
    ACCEPTED_FILE_TYPES
        .split(',')
        .map(|ext| ext.trim_start_matches('.').to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_formats() {
        assert_eq!(supported_formats(), "TXT, DOC, DOCX, PDF");
    }
}
