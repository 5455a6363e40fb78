use std::rc::Rc;

use yew::prelude::*;

use crate::components::form_field::{Field, InputKind, FORM_STYLES};
use crate::components::icons::{Icon, IconKind};
use crate::components::shared::{PageHeader, SectionTitle};
use crate::config;
use crate::motion::hooks::{use_in_view, use_page_title};
use crate::motion::reveal::{Motion, Trigger};
use crate::site::contact::{ContactField, ContactMsg, ContactState};
use crate::site::content::CONTACT_PHOTO;
use crate::Route;

impl Reducible for ContactState {
    type Action = ContactMsg;

    fn reduce(self: Rc<Self>, action: ContactMsg) -> Rc<Self> {
        let mut next = (*self).clone();
        next.update(action);
        next.into()
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_page_title(Route::Contact.page_title());

    let state = use_reducer(ContactState::default);
    let info = use_node_ref();
    let form = use_node_ref();
    let info_shown = use_in_view(info.clone(), Trigger::at(0.7));
    let form_shown = use_in_view(form.clone(), Trigger::at(0.7));
    let info_item = Motion::slide(-20.0).duration(0.6);
    let form_item = Motion::rise(20.0).duration(0.5);

    let onedit = {
        let state = state.dispatcher();
        Callback::from(move |(field, value): (ContactField, String)| state.dispatch(ContactMsg::Edit(field, value)))
    };
    let onsubmit = {
        let state = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ContactMsg::Submit);
        })
    };
    let send_another = {
        let state = state.dispatcher();
        Callback::from(move |_: MouseEvent| state.dispatch(ContactMsg::SendAnother))
    };

    let field = |field: ContactField, kind: InputKind, placeholder: &'static str, index: usize| {
        html! {
            <Field<ContactField>
                {field}
                value={state.form.value(field).to_string()}
                error={state.errors.message(field)}
                {kind}
                {placeholder}
                style={form_item.style(form_shown, index, 0.1)}
                onedit={onedit.clone()}
            />
        }
    };

    let details = [
        (IconKind::MapPin, "Our Location", vec![config::ADDRESS]),
        (IconKind::Phone, "Phone Number", vec![config::PHONE, config::PHONE_HOURS]),
        (IconKind::Mail, "Email Address", vec![config::EMAIL, "We aim to respond within 24 hours"]),
        (IconKind::Clock, "Office Hours", config::OFFICE_HOURS.to_vec()),
    ];
    let map_index = details.len();

    html! {
        <div class="contact-page">
            <PageHeader
                title="Contact Us"
                subtitle="Get in touch with our team for any inquiries or to discuss your project"
                image={CONTACT_PHOTO}
            />

            <section class="section-padding">
                <div class="container-custom contact-layout">
                    <div ref={info}>
                        <SectionTitle
                            title="Get In Touch"
                            subtitle="We're here to answer your questions and discuss your construction needs"
                        />
                        <div class="contact-items">
                            { for details.into_iter().enumerate().map(|(i, (icon, heading, lines))| html! {
                                <div class="contact-item" style={info_item.style(info_shown, i, 0.1)}>
                                    <div class="contact-icon"><Icon kind={icon} /></div>
                                    <div>
                                        <h3>{heading}</h3>
                                        { for lines.into_iter().map(|line| html! { <p>{line}</p> }) }
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="map-placeholder" style={info_item.style(info_shown, map_index, 0.1)}>
                            <p>{"Google Map would be embedded here"}</p>
                        </div>
                    </div>

                    <div class="contact-card">
                        <h2>{"Send Us a Message"}</h2>
                        if state.submitted {
                            <div class="success-message">
                                <p class="success-title">{"Thank you for your message!"}</p>
                                <p>{"We have received your inquiry and will get back to you as soon as possible."}</p>
                                <button class="link-button" onclick={send_another}>{"Send another message"}</button>
                            </div>
                        } else {
                            <form ref={form} {onsubmit} novalidate={true}>
                                { field(ContactField::Name, InputKind::Text, "John Doe", 0) }
                                <div class="form-row">
                                    { field(ContactField::Email, InputKind::Email, "you@example.com", 1) }
                                    { field(ContactField::Phone, InputKind::Tel, "(555) 123-4567", 2) }
                                </div>
                                { field(ContactField::Subject, InputKind::Text, "Project Inquiry", 3) }
                                { field(
                                    ContactField::Message,
                                    InputKind::TextArea { rows: 5 },
                                    "Please provide details about your inquiry or project...",
                                    4,
                                ) }
                                <div class="form-control" style={form_item.style(form_shown, 5, 0.1)}>
                                    <button type="submit" class="btn btn-primary full-width">
                                        <Icon kind={IconKind::Send} size={18} />
                                        {"Send Message"}
                                    </button>
                                </div>
                            </form>
                        }
                    </div>
                </div>
            </section>

            <style>{FORM_STYLES}</style>
            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 3rem;
                    align-items: start;
                }
                .contact-items { display: grid; gap: 1.5rem; }
                .contact-item { display: flex; align-items: flex-start; gap: 1rem; }
                .contact-icon { background: #dbeafe; color: #2563eb; padding: 0.75rem; border-radius: 0.5rem; }
                .contact-item h3 { color: #1e3a8a; font-size: 1.125rem; margin-bottom: 0.25rem; }
                .contact-item p { color: #4b5563; margin: 0; }
                .map-placeholder {
                    margin-top: 2rem;
                    height: 16rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #e5e7eb;
                    border-radius: 0.5rem;
                    color: #6b7280;
                }
                .contact-card { background: #ffffff; padding: 2rem; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07); }
                .contact-card h2 { color: #1e3a8a; font-size: 1.5rem; margin-bottom: 1.5rem; }
                .full-width { width: 100%; }
                .success-message {
                    background: #dcfce7;
                    border-left: 4px solid #22c55e;
                    color: #15803d;
                    padding: 1rem;
                    border-radius: 0.25rem;
                    animation: bm-reveal 500ms cubic-bezier(0.215, 0.61, 0.355, 1) both;
                    --bm-from-transform: translateY(-20px);
                }
                .success-message p { margin: 0 0 0.25rem; }
                .success-title { font-weight: 700; }
                .link-button {
                    margin-top: 1rem;
                    border: none;
                    background: none;
                    padding: 0;
                    color: #2563eb;
                    font: inherit;
                    font-weight: 500;
                    cursor: pointer;
                }
                .link-button:hover { color: #1e40af; }
                "#}
            </style>
        </div>
    }
}
