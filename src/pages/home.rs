use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{ProjectCard, ServiceCard, TestimonialCard};
use crate::components::icons::{Icon, IconKind};
use crate::components::shared::{CtaSection, SectionTitle};
use crate::motion::hooks::{use_count_up, use_in_view, use_page_title};
use crate::motion::reveal::{Motion, Timeline, Trigger};
use crate::site::content::{
    featured_projects, Stat, HERO_PHOTO, HOME_HIGHLIGHTS, SERVICES, STATS, TEAM_AT_WORK_PHOTO, TESTIMONIALS,
};
use crate::Route;

fn hero_timeline() -> Timeline {
    Timeline::new()
        .then(Motion::fade().duration(1.0))
        .at(Motion::rise(50.0).duration(0.8), -0.5)
        .at(Motion::rise(30.0).duration(0.8), -0.6)
        .staggered(Motion::rise(20.0).duration(0.6), -0.4, 0.2, 2)
}

#[function_component(Home)]
pub fn home() -> Html {
    use_page_title(Route::Home.page_title());

    html! {
        <div class="home-page">
            <Hero />
            <ServicesSection />
            <AboutTeaser />
            <StatsBand />
            <FeaturedProjects />
            <Testimonials />
            <CtaSection
                title="Ready to Start Your Construction Project?"
                subtitle="Contact us today for a free consultation and quote. Let's build something amazing together."
                button_text="Get a Free Quote"
                to={Route::Quote}
            />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let timeline = hero_timeline();
    let buttons = timeline.step(3);
    let background = format!("background-image: url({});", HERO_PHOTO.url());

    html! {
        <div class="hero" style={background}>
            <div class="hero-overlay" style={timeline.step(0).style(true, 0, 0.0)}></div>
            <div class="container-custom hero-content">
                <h1 style={timeline.step(1).style(true, 0, 0.0)}>
                    {"Building Excellence, "}<br class="hero-break" />
                    <span class="accent">{"Constructing Dreams"}</span>
                </h1>
                <p style={timeline.step(2).style(true, 0, 0.0)}>
                    {"Quality construction services for residential and commercial projects. Expert craftsmanship and unmatched reliability."}
                </p>
                <div class="hero-buttons">
                    <div style={buttons.style(true, 0, 0.2)}>
                        <Link<Route> to={Route::Portfolio} classes="btn btn-primary">{"View Our Projects"}</Link<Route>>
                    </div>
                    <div style={buttons.style(true, 1, 0.2)}>
                        <Link<Route> to={Route::Quote} classes="btn btn-outline">{"Request a Quote"}</Link<Route>>
                    </div>
                </div>
            </div>
            <div class="scroll-indicator">
                <div class="scroll-mouse"><div class="scroll-wheel"></div></div>
                <span>{"Scroll Down"}</span>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background-size: cover;
                    background-position: center;
                }
                .hero-overlay { position: absolute; inset: 0; background: rgba(30, 58, 138, 0.75); }
                .hero-content { position: relative; z-index: 1; text-align: center; padding-top: 5rem; padding-bottom: 5rem; }
                .hero h1 { color: #ffffff; font-size: clamp(2.25rem, 6vw, 3.75rem); margin-bottom: 1.5rem; }
                .hero p { color: #dbeafe; font-size: clamp(1.25rem, 3vw, 1.5rem); max-width: 42rem; margin: 0 auto 2rem; }
                .hero-buttons { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #ffffff;
                    text-align: center;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .scroll-mouse {
                    position: relative;
                    width: 2rem;
                    height: 3rem;
                    margin: 0 auto 0.5rem;
                    border: 2px solid #ffffff;
                    border-radius: 9999px;
                }
                .scroll-wheel {
                    position: absolute;
                    top: 0.5rem;
                    left: 50%;
                    width: 0.375rem;
                    height: 0.75rem;
                    margin-left: -0.1875rem;
                    background: #ffffff;
                    border-radius: 9999px;
                    animation: bm-bounce 1s infinite;
                }
                @keyframes bm-bounce {
                    0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                    50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                }
                @media (max-width: 767px) { .hero-break { display: none; } }
                "#}
            </style>
        </div>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    html! {
        <section class="section-padding bg-light">
            <div class="container-custom">
                <SectionTitle
                    title="Our Services"
                    subtitle="Professional construction services tailored to your specific needs"
                    centered={true}
                />
                <div class="grid grid-3">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <ServiceCard {service} delay={i as f64 * 0.1} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutTeaser)]
fn about_teaser() -> Html {
    let content = use_node_ref();
    let image = use_node_ref();
    let content_shown = use_in_view(content.clone(), Trigger::at(0.7));
    let image_shown = use_in_view(image.clone(), Trigger::at(0.7));
    let item = Motion::rise(30.0).duration(0.8);

    html! {
        <section class="section-padding">
            <div class="container-custom about-teaser">
                <div ref={content} class="about-teaser-text">
                    <div style={item.style(content_shown, 0, 0.1)}>
                        <div class="accent-bar"></div>
                        <h2>{"Building Excellence Since 2000"}</h2>
                    </div>
                    <p style={item.style(content_shown, 1, 0.1)}>
                        {"BuildMaster Construction has been delivering exceptional construction services for over 25 years. Our commitment to quality craftsmanship, innovative design, and customer satisfaction has made us a trusted name in the construction industry."}
                    </p>
                    <div style={item.style(content_shown, 2, 0.1)}>
                        <h3>{"Why Choose Us"}</h3>
                        <ul class="check-list">
                            { for HOME_HIGHLIGHTS.iter().map(|point| html! {
                                <li><Icon kind={IconKind::CheckCircle} size={18} class={classes!("accent")} /><span>{*point}</span></li>
                            }) }
                        </ul>
                    </div>
                    <div style={item.style(content_shown, 3, 0.1)}>
                        <Link<Route> to={Route::About} classes="btn btn-primary">{"Learn More About Us"}</Link<Route>>
                    </div>
                </div>
                <div ref={image} class="about-teaser-image" style={Motion::zoom(0.9).duration(0.8).style(image_shown, 0, 0.0)}>
                    <img src={TEAM_AT_WORK_PHOTO.url()} alt="Construction professionals" />
                    <div class="decor decor-blue"></div>
                    <div class="decor decor-orange"></div>
                </div>
            </div>
            <style>
                {r#"
                .about-teaser {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .accent-bar { height: 4px; width: 4rem; background: #f97316; margin-bottom: 1.5rem; }
                .about-teaser h2 { color: #1e3a8a; font-size: clamp(1.875rem, 4vw, 2.25rem); margin-bottom: 1.5rem; }
                .about-teaser h3 { color: #1e3a8a; font-size: 1.25rem; margin-bottom: 1rem; }
                .about-teaser p { color: #4b5563; margin: 0 0 1.5rem; }
                .check-list { list-style: none; padding: 0; margin: 0 0 2rem; display: grid; gap: 0.75rem; }
                .check-list li { display: flex; align-items: flex-start; gap: 0.5rem; }
                .check-list .icon { flex-shrink: 0; margin-top: 0.25rem; }
                .about-teaser-image { position: relative; }
                .about-teaser-image img { position: relative; z-index: 1; border-radius: 0.5rem; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); width: 100%; }
                .decor { position: absolute; border-radius: 0.5rem; z-index: 0; }
                .decor-blue { bottom: -1.5rem; right: -1.5rem; width: 16rem; height: 16rem; background: #dbeafe; }
                .decor-orange { top: -1.5rem; left: -1.5rem; width: 6rem; height: 6rem; background: #ffedd5; }
                "#}
            </style>
        </section>
    }
}

#[function_component(StatsBand)]
fn stats_band() -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), Trigger::at(0.8));

    html! {
        <section ref={node} class="stats-band" style={Motion::fade().style(shown, 0, 0.0)}>
            <div class="container-custom grid grid-4">
                { for STATS.iter().map(|stat| html! { <StatCounter stat={stat} active={shown} /> }) }
            </div>
            <style>
                {r#"
                .stats-band { background: #2563eb; color: #ffffff; padding: 4rem 0; }
                .stat { text-align: center; }
                .stat-value { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; margin-bottom: 0.5rem; }
                .stat p { color: #dbeafe; margin: 0; }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: &'static Stat,
    active: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let stat = props.stat;
    let value = use_count_up(stat.value, stat.duration, props.active);

    html! {
        <div class="stat">
            <div class="stat-value">{format!("{}{}", value, stat.suffix)}</div>
            <p>{stat.label}</p>
        </div>
    }
}

#[function_component(FeaturedProjects)]
fn featured_projects_section() -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), Trigger::at(0.7));
    let card = Motion::rise(50.0).duration(0.8);

    html! {
        <section class="featured-projects section-padding">
            <div ref={node} class="container-custom">
                <SectionTitle
                    title="Featured Projects"
                    subtitle="Explore some of our recent construction and renovation projects"
                    centered={true}
                    light={true}
                />
                <div class="grid grid-4">
                    { for featured_projects().iter().enumerate().map(|(i, project)| html! {
                        <ProjectCard {project} style={card.style(shown, i, 0.15)} />
                    }) }
                </div>
                <div class="text-center featured-more">
                    <Link<Route> to={Route::Portfolio} classes="btn btn-outline">{"View All Projects"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .featured-projects { background: #1e3a8a; }
                .featured-more { margin-top: 3rem; }
                "#}
            </style>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), Trigger::at(0.7));
    let item = Motion::rise(30.0).duration(0.8);

    html! {
        <section class="section-padding bg-light">
            <div ref={node} class="container-custom">
                <SectionTitle
                    title="What Our Clients Say"
                    subtitle="Hear from our satisfied clients about their experience working with BuildMaster"
                    centered={true}
                />
                <div class="grid grid-3">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <div style={item.style(shown, i, 0.2)}>
                            <TestimonialCard {testimonial} />
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_plays_overlay_then_text_then_buttons() {
        let starts = hero_timeline().starts();
        let expected = [0.0, 0.5, 0.7, 1.1];
        for (start, want) in starts.iter().zip(expected) {
            assert!((start - want).abs() < 1e-9, "{starts:?}");
        }
    }
}
