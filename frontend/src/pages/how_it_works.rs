use leptos::*;
use leptos_meta::Title;

use super::page_title;

/// One card of the walkthrough.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "Upload Your Document",
        description: "Upload a contract, policy, or legal document in PDF or text format.",
    },
    Step {
        number: 2,
        title: "AI Simplification",
        description: "Our AI processes the text and translates legal jargon into simple terms.",
    },
    Step {
        number: 3,
        title: "Get Easy Explanations",
        description: "Read the simplified version instantly, broken down by sections and clauses.",
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <Title text=page_title("How It Works")/>
        <div class="page how-it-works">
            <h2>"How It Works"</h2>
            <div class="steps">
                {STEPS
                    .iter()
                    .map(|step| view! {
                        <div class="step-card">
                            <div class="step-number">"Step " {step.number}</div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered_in_order() {
        let numbers: Vec<u8> = STEPS.iter().map(|step| step.number).collect();
        assert_eq!(numbers, [1, 2, 3]);
    }
}
