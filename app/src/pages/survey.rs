use leptos::prelude::*;
use qvision_core::Event;
use qvision_core::survey::{Answers, Questionnaire};

use crate::store::{Store, stamp};

/// Step-by-step risk questionnaire. Completing it emits `SurveyCompleted`.
#[component]
pub fn SurveyPage() -> impl IntoView {
    let store = Store::get();
    let questionnaire = StoredValue::new(Questionnaire::standard());
    let total = questionnaire.with_value(|q| q.len());

    let step = RwSignal::new(0usize);
    let answers = RwSignal::new(questionnaire.with_value(Answers::for_questionnaire));
    let error = RwSignal::new(None::<String>);

    let current = move || questionnaire.with_value(|q| q.questions().get(step.get()).copied());
    let is_last = move || step.get() + 1 >= total;
    let answered_here = move || answers.with(|a| a.get(step.get()).is_some());
    let complete = move || questionnaire.with_value(|q| answers.with(|a| a.is_complete_for(q)));

    let pick = move |choice: usize| {
        let idx = step.get_untracked();
        answers.update(|a| a.answer(idx, choice));
        error.set(None);
        if idx + 1 < total {
            step.set(idx + 1);
        }
    };

    let submit = move |_| {
        let (id, timestamp) = stamp("QS");
        let outcome = questionnaire
            .with_value(|q| answers.with_untracked(|a| q.evaluate(a, id, timestamp)));
        match outcome {
            Ok(result) => store.dispatch(Event::SurveyCompleted(result)),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <section class="survey">
            <header class="page-header">
                <h2>"Risk Assessment"</h2>
                <p class="page-kicker">
                    {move || format!("{} of {} answered", answers.with(|a| a.answered()), total)}
                </p>
            </header>

            <div class="progress">
                <div
                    class="progress-fill"
                    style=move || {
                        let done = answers.with(|a| a.answered()) as f64 / total.max(1) as f64;
                        format!("width: {:.0}%", done * 100.0)
                    }
                ></div>
            </div>

            {move || {
                current()
                    .map(|question| {
                        let selected = move || answers.with(|a| a.get(step.get()));
                        view! {
                            <div class="card question">
                                <div class="question-count">
                                    {format!("Question {} of {}", step.get() + 1, total)}
                                </div>
                                <h3>{question.prompt}</h3>
                                <div class="choices">
                                    {question
                                        .choices
                                        .iter()
                                        .enumerate()
                                        .map(|(idx, choice)| {
                                            view! {
                                                <button
                                                    class=move || {
                                                        if selected() == Some(idx) {
                                                            "choice selected"
                                                        } else {
                                                            "choice"
                                                        }
                                                    }
                                                    on:click=move |_| pick(idx)
                                                >
                                                    {choice.label}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
            }}

            <Show when=move || error.with(|e| e.is_some())>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="survey-actions">
                <button
                    class="btn btn-secondary"
                    disabled=move || step.get() == 0
                    on:click=move |_| step.update(|s| *s = s.saturating_sub(1))
                >
                    "Back"
                </button>
                <Show
                    when=is_last
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn-secondary"
                                disabled=move || !answered_here()
                                on:click=move |_| step.update(|s| *s += 1)
                            >
                                "Next"
                            </button>
                        }
                    }
                >
                    <button class="btn btn-primary" disabled=move || !complete() on:click=submit>
                        "Complete Assessment"
                    </button>
                </Show>
            </div>
        </section>
    }
}
