use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::motion::hooks::use_in_view;
use crate::motion::reveal::{Motion, Trigger};
use crate::site::content::{Project, Service, Testimonial};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: &'static Service,
    /// Seconds before the card rises into place.
    #[prop_or_default]
    pub delay: f64,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), Trigger::at(0.9));
    let motion = Motion::rise(50.0).duration(0.6).delay(props.delay);
    let service = props.service;

    html! {
        <div ref={node} class="service-card" style={motion.style(shown, 0, 0.0)}>
            <div class="service-icon"><Icon kind={IconKind::from(service.icon)} /></div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <div class="service-more">
                <span>{"Learn More"}</span>
                <Icon kind={IconKind::ArrowRight} size={16} class={classes!("service-arrow")} />
            </div>
            <style>
                {r#"
                .service-card {
                    background: #ffffff;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
                    padding: 1.5rem;
                    transition: box-shadow 0.3s ease;
                }
                .service-card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.12); }
                .service-icon {
                    display: inline-block;
                    background: #dbeafe;
                    color: #1e40af;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    margin-bottom: 1rem;
                }
                .service-card h3 { font-size: 1.25rem; margin-bottom: 0.75rem; transition: color 0.3s ease; }
                .service-card:hover h3, .service-card:hover .service-more { color: #f97316; }
                .service-card p { color: #4b5563; margin: 0 0 1rem; }
                .service-more { display: flex; align-items: center; gap: 0.5rem; color: #2563eb; font-weight: 500; }
                .service-arrow { transition: transform 0.3s ease; }
                .service-card:hover .service-arrow { transform: translateX(0.5rem); }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: &'static Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = props.testimonial;

    html! {
        <div class="testimonial-card">
            <div class="testimonial-stars">
                { for testimonial.stars().iter().map(|&filled| html! {
                    <Icon
                        kind={IconKind::Star}
                        size={18}
                        filled={filled}
                        class={classes!(if filled { "star-on" } else { "star-off" })}
                    />
                }) }
            </div>
            <p class="testimonial-content">{testimonial.content}</p>
            <div class="testimonial-author">
                <img src={testimonial.image.url()} alt={testimonial.name} />
                <div>
                    <h4>{testimonial.name}</h4>
                    <p>{testimonial.role}</p>
                </div>
            </div>
            <style>
                {r#"
                .testimonial-card {
                    background: #ffffff;
                    border-radius: 0.5rem;
                    padding: 2rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
                    transition: transform 0.3s cubic-bezier(0.215, 0.61, 0.355, 1), box-shadow 0.3s cubic-bezier(0.215, 0.61, 0.355, 1);
                    height: 100%;
                }
                .testimonial-card:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .testimonial-stars { display: flex; gap: 0.25rem; margin-bottom: 1.25rem; }
                .star-on { color: #f97316; }
                .star-off { color: #d1d5db; }
                .testimonial-content { color: #374151; font-style: italic; margin: 0 0 1.5rem; }
                .testimonial-author { display: flex; align-items: center; gap: 1rem; }
                .testimonial-author img { width: 3rem; height: 3rem; border-radius: 9999px; object-fit: cover; }
                .testimonial-author h4 { color: #1e3a8a; }
                .testimonial-author p { color: #4b5563; font-size: 0.875rem; margin: 0; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub style: AttrValue,
}

/// Tall image tile with an overlaid caption; used by the featured grid.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <div class="project-card" style={props.style.clone()}>
            <div class="project-card-image">
                <img src={project.image.url()} alt={project.title} />
                <div class="project-card-shade"></div>
            </div>
            <div class="project-card-caption">
                <div class="project-card-kind">{project.kind}</div>
                <h3>{project.title}</h3>
                <Link<Route> to={Route::ProjectDetail { id: project.id }} classes="project-card-link">
                    <span>{"View Project"}</span>
                    <Icon kind={IconKind::ArrowRight} size={16} />
                </Link<Route>>
            </div>
            <style>
                {r#"
                .project-card { position: relative; overflow: hidden; border-radius: 0.5rem; }
                .project-card-image { position: relative; aspect-ratio: 4 / 5; overflow: hidden; }
                .project-card-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
                .project-card:hover .project-card-image img { transform: scale(1.1); }
                .project-card-shade {
                    position: absolute;
                    inset: 0;
                    opacity: 0.8;
                    background: linear-gradient(to top, #1e3a8a, rgba(30, 58, 138, 0.5), transparent);
                }
                .project-card-caption { position: absolute; left: 0; right: 0; bottom: 0; padding: 1.5rem; color: #ffffff; }
                .project-card-kind { color: #fb923c; font-size: 0.875rem; margin-bottom: 0.5rem; }
                .project-card-caption h3 { font-size: 1.25rem; margin-bottom: 1rem; }
                .project-card-link { display: inline-flex; align-items: center; gap: 0.5rem; }
                .project-card-link:hover { color: #fb923c; }
                "#}
            </style>
        </div>
    }
}
