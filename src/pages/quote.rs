use std::rc::Rc;

use yew::prelude::*;

use crate::components::form_field::{Field, InputKind, FORM_STYLES};
use crate::components::icons::{Icon, IconKind};
use crate::components::shared::{PageHeader, SectionTitle};
use crate::config;
use crate::motion::hooks::use_page_title;
use crate::motion::reveal::Motion;
use crate::site::content::SITE_PHOTO;
use crate::site::forms::FormField;
use crate::site::quote::{QuoteField, QuoteForm, QuoteMsg, QuoteWizard, Step, Submission};
use crate::Route;

impl Reducible for QuoteWizard {
    type Action = QuoteMsg;

    fn reduce(self: Rc<Self>, action: QuoteMsg) -> Rc<Self> {
        let mut next = (*self).clone();
        next.update(action);
        next.into()
    }
}

fn step_icon(step: Step) -> IconKind {
    match step {
        Step::PersonalInfo => IconKind::Home,
        Step::Location => IconKind::Building,
        Step::ProjectDetails => IconKind::Hammer,
        Step::Review => IconKind::Send,
    }
}

/// Fields grouped into rows; two-field rows share a line on wide screens.
fn step_rows(step: Step) -> &'static [&'static [QuoteField]] {
    use QuoteField::*;
    match step {
        Step::PersonalInfo => &[&[Name], &[Email], &[Phone], &[HearAbout]],
        Step::Location => &[&[Address], &[City, State], &[Zip]],
        Step::ProjectDetails => &[&[ProjectType], &[ProjectSize], &[Budget, Timeline], &[Description]],
        Step::Review => &[],
    }
}

fn input_kind(field: QuoteField) -> InputKind {
    match field {
        QuoteField::Email => InputKind::Email,
        QuoteField::Phone => InputKind::Tel,
        QuoteField::Description => InputKind::TextArea { rows: 5 },
        other => other.options().map(InputKind::Select).unwrap_or_default(),
    }
}

fn placeholder(field: QuoteField) -> &'static str {
    match field {
        QuoteField::Name => "John Doe",
        QuoteField::Email => "you@example.com",
        QuoteField::Phone => "(555) 123-4567",
        QuoteField::Address => "123 Main St",
        QuoteField::City => "Cityville",
        QuoteField::State => "State",
        QuoteField::Zip => "12345",
        QuoteField::Description => {
            "Please provide details about your project, including any specific requirements or questions..."
        }
        _ => "",
    }
}

#[function_component(Quote)]
pub fn quote() -> Html {
    use_page_title(Route::Quote.page_title());

    let wizard = use_reducer(QuoteWizard::default);
    let step = wizard.step;

    let step_item = Motion::rise(20.0).duration(0.6);
    let field_item = Motion::rise(20.0).duration(0.5);

    let dispatch = |msg: fn() -> QuoteMsg| {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| wizard.dispatch(msg()))
    };
    let onedit = {
        let wizard = wizard.dispatcher();
        Callback::from(move |(field, value): (QuoteField, String)| wizard.dispatch(QuoteMsg::Edit(field, value)))
    };
    let onsubmit = {
        let wizard = wizard.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            wizard.dispatch(QuoteMsg::Submit);
        })
    };

    let mut index = 0;
    let mut field = |field: QuoteField| {
        let style = field_item.style(true, index, 0.1);
        index += 1;
        html! {
            <Field<QuoteField>
                {field}
                value={wizard.form.value(field).to_string()}
                error={wizard.errors.message(field)}
                kind={input_kind(field)}
                placeholder={placeholder(field)}
                {style}
                onedit={onedit.clone()}
            />
        }
    };

    let step_content = if step == Step::Review {
        review(&wizard.form)
    } else {
        html! {
            <>
                <h3 class="step-heading">{step.heading()}</h3>
                { for step_rows(step).iter().map(|row| match row {
                    [single] => field(*single),
                    pair => html! {
                        <div class="form-row">
                            { for pair.iter().map(|f| field(*f)) }
                        </div>
                    },
                }) }
            </>
        }
    };

    html! {
        <div class="quote-page">
            <PageHeader
                title="Request a Quote"
                subtitle="Get a free, no-obligation quote for your construction project"
                image={SITE_PHOTO}
            />

            <section class="section-padding">
                <div class="container-custom quote-container">
                    <SectionTitle
                        title="Get a Customized Quote"
                        subtitle="Fill out the form below and our team will provide you with a detailed estimate for your project"
                        centered={true}
                    />

                    <div key={step.number()} class="quote-steps">
                        { for wizard.progress().into_iter().enumerate().map(|(i, item)| html! {
                            <div
                                class={classes!("step-item", item.active.then(|| "active"))}
                                style={step_item.style(true, i, 0.2)}
                            >
                                <div class={classes!(
                                    "step-badge",
                                    item.reached.then(|| "reached"),
                                    item.step.fields().iter().any(|f| wizard.errors.contains(*f)).then(|| "has-errors"),
                                )}>
                                    <Icon kind={step_icon(item.step)} size={20} />
                                </div>
                                <div class="step-title">{item.step.title()}</div>
                                <div class="step-number">{format!("Step {}", item.step.number())}</div>
                            </div>
                        }) }
                    </div>

                    <div class="quote-card">
                        if let Some(submission) = wizard.submission.as_ref() {
                            { success(submission, dispatch(|| QuoteMsg::StartOver)) }
                        } else {
                            <form key={step.number()} {onsubmit} novalidate={true}>
                                {step_content}
                                <div class="wizard-buttons">
                                    if step.previous().is_some() {
                                        <button type="button" class="btn btn-secondary" onclick={dispatch(|| QuoteMsg::Previous)}>
                                            {"Previous"}
                                        </button>
                                    }
                                    if step.next().is_some() {
                                        <button type="button" class="btn btn-primary push-right" onclick={dispatch(|| QuoteMsg::Next)}>
                                            {"Next"}
                                        </button>
                                    } else {
                                        <button type="submit" class="btn btn-accent push-right">
                                            <Icon kind={IconKind::Send} size={18} />
                                            {"Submit Quote Request"}
                                        </button>
                                    }
                                </div>
                            </form>
                        }
                    </div>
                </div>
            </section>

            <style>{FORM_STYLES}</style>
            <style>{QUOTE_STYLES}</style>
        </div>
    }
}

struct ReviewSection {
    heading: &'static str,
    rows: &'static [(QuoteField, &'static str, Option<&'static str>)],
}

const REVIEW: &[ReviewSection] = &[
    ReviewSection {
        heading: "Personal Information",
        rows: &[
            (QuoteField::Name, "Name", None),
            (QuoteField::Email, "Email", None),
            (QuoteField::Phone, "Phone", None),
            (QuoteField::HearAbout, "How did you hear about us", Some("Not specified")),
        ],
    },
    ReviewSection {
        heading: "Project Location",
        rows: &[
            (QuoteField::Address, "Address", None),
            (QuoteField::City, "City", None),
            (QuoteField::State, "State/Province", None),
            (QuoteField::Zip, "ZIP/Postal Code", None),
        ],
    },
    ReviewSection {
        heading: "Project Details",
        rows: &[
            (QuoteField::ProjectType, "Project Type", None),
            (QuoteField::ProjectSize, "Project Size", None),
            (QuoteField::Budget, "Budget Range", None),
            (QuoteField::Timeline, "Timeline", None),
            (QuoteField::Description, "Project Description", Some("Not provided")),
        ],
    },
];

fn review(form: &QuoteForm) -> Html {
    let panel = Motion::rise(20.0).duration(0.5);
    html! {
        <>
            <h3 class="step-heading">{Step::Review.heading()}</h3>
            { for REVIEW.iter().enumerate().map(|(i, section)| html! {
                <div class="form-control review-panel" style={panel.style(true, i, 0.1)}>
                    <h4>{section.heading}</h4>
                    <div class="review-grid">
                        { for section.rows.iter().map(|(field, label, fallback)| {
                            let value = form.value(*field);
                            let shown = match fallback {
                                Some(fallback) if value.is_empty() => *fallback,
                                _ => value,
                            };
                            let wide = matches!(field, QuoteField::Address | QuoteField::Description);
                            html! {
                                <div class={classes!(wide.then(|| "wide"))} title={field.label()}>
                                    <p class="review-label">{*label}</p>
                                    <p class="review-value">{shown.to_string()}</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            }) }
            <div class="form-control review-notice" style={panel.style(true, REVIEW.len(), 0.1)}>
                <Icon kind={IconKind::Info} size={20} />
                <p>
                    {"Please review all the information above carefully before submitting. Once submitted, one of our representatives will contact you within 1-2 business days to discuss your project further."}
                </p>
            </div>
        </>
    }
}

fn success(submission: &Submission, start_over: Callback<MouseEvent>) -> Html {
    html! {
        <div class="quote-success">
            <div class="success-badge">
                <Icon kind={IconKind::Check} size={40} />
            </div>
            <h2>{"Quote Request Submitted!"}</h2>
            <p>
                {format!(
                    "Thank you for requesting a quote from {}. Our team will review your project details and get back to you within 1-2 business days.",
                    config::COMPANY_NAME,
                )}
            </p>
            <div class="reference">
                <p>{"Reference Number:"}</p>
                <p class="reference-code">{submission.reference.to_string()}</p>
            </div>
            <div>
                <button class="btn btn-ghost" onclick={start_over}>{"Request Another Quote"}</button>
            </div>
        </div>
    }
}

const QUOTE_STYLES: &str = r#"
.quote-container { max-width: 64rem; }
.quote-steps { display: flex; flex-wrap: wrap; justify-content: center; margin-bottom: 3rem; }
.step-item { display: flex; flex-direction: column; align-items: center; margin: 0 1.5rem; text-align: center; opacity: 0.6; }
.step-item.active { opacity: 1; }
.step-badge {
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 0.5rem;
    background: #e5e7eb;
    color: #6b7280;
}
.step-badge.reached { background: #2563eb; color: #ffffff; }
.step-badge.has-errors { box-shadow: 0 0 0 3px #fca5a5; }
.step-title { font-size: 0.875rem; font-weight: 700; }
.step-number { font-size: 0.75rem; color: #6b7280; }
.quote-card { background: #ffffff; padding: 2rem; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07); }
.step-heading { color: #1e3a8a; font-size: 1.25rem; margin-bottom: 1rem; }
.wizard-buttons { display: flex; margin-top: 2rem; }
.push-right { margin-left: auto; }
.btn-accent { background: #f97316; color: #ffffff; }
.btn-accent:hover { background: #ea580c; }
.review-panel { background: #eff6ff; padding: 1.5rem; border-radius: 0.5rem; margin-bottom: 1.5rem; }
.review-panel h4 { color: #1e3a8a; font-size: 1.125rem; margin-bottom: 0.75rem; }
.review-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 0.5rem 1.5rem; }
.review-grid .wide { grid-column: 1 / -1; }
.review-label { font-size: 0.875rem; color: #6b7280; margin: 0; }
.review-value { color: #1f2937; margin: 0; }
.review-notice {
    display: flex;
    gap: 0.75rem;
    background: #fff7ed;
    border-left: 4px solid #f97316;
    padding: 1rem;
    border-radius: 0 0.5rem 0.5rem 0;
    color: #9a3412;
    font-size: 0.875rem;
}
.review-notice .icon { flex-shrink: 0; color: #f97316; }
.review-notice p { margin: 0; }
.quote-success { text-align: center; padding: 2rem 0; }
.success-badge {
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1.5rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #dcfce7;
    color: #16a34a;
}
.quote-success h2 { color: #1e3a8a; font-size: 1.5rem; margin-bottom: 1rem; }
.quote-success > p { color: #4b5563; max-width: 28rem; margin: 0 auto 1.5rem; }
.reference { display: inline-block; background: #eff6ff; padding: 1rem; border-radius: 0.5rem; margin-bottom: 1.5rem; }
.reference p { margin: 0; color: #374151; }
.reference .reference-code { color: #1e40af; font-weight: 700; }
"#;
