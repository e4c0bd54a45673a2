//! Result area: plain text or a severity-coloured risk table.

use leptos::*;

use crate::{AnalysisResult, RiskItem};

#[component]
pub fn ResultView(result: AnalysisResult) -> impl IntoView {
    let body = match result {
        AnalysisResult::Text { body } => view! {
            <textarea class="result-textarea" readonly=true prop:value=body></textarea>
        }
        .into_view(),
        AnalysisResult::Risks { items } => view! { <RiskTable items=items/> }.into_view(),
    };

    view! {
        <div class="result-card full-screen-result">
            <h4>"Result:"</h4>
            {body}
        </div>
    }
}

#[component]
pub fn RiskTable(items: Vec<RiskItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="risk-empty">"No risks found."</p> }.into_view();
    }

    view! {
        <table class="risk-table">
            <thead>
                <tr>
                    <th>"Clause"</th>
                    <th>"Severity"</th>
                    <th>"Details"</th>
                </tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|risk| {
                        let class_name = risk.css_class();
                        view! {
                            <tr class=class_name>
                                <td>{risk.clause}</td>
                                <td>{risk.severity}</td>
                                <td>{risk.details}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}
