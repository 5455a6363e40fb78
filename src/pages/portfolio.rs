use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::shared::{CtaSection, PageHeader, SectionTitle};
use crate::motion::hooks::use_page_title;
use crate::motion::reveal::Motion;
use crate::site::content::{project, ProjectCategory, PROJECTS, SITE_PHOTO};
use crate::site::listing::{filter, Category, CategoryFilter, ListingQuery};
use crate::Route;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    use_page_title(Route::Portfolio.page_title());

    let query = use_state(ListingQuery::<ProjectCategory>::default);
    let projects = filter(PROJECTS, &query);
    let card = Motion::rise(30.0).duration(0.6);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(ListingQuery { text: input.value(), ..(*query).clone() });
        })
    };

    let select_category = |category: CategoryFilter<ProjectCategory>| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            query.set(ListingQuery { category, ..(*query).clone() });
        })
    };

    let clear_filters = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set(ListingQuery::default()))
    };

    html! {
        <div class="portfolio-page">
            <PageHeader
                title="Our Portfolio"
                subtitle="Explore our completed construction and renovation projects"
                image={SITE_PHOTO}
            />

            <section class="section-padding">
                <div class="container-custom">
                    <SectionTitle
                        title="Our Projects"
                        subtitle="Browse our portfolio of residential, commercial, and institutional construction projects"
                        centered={true}
                    />

                    <div class="portfolio-filters">
                        { for CategoryFilter::<ProjectCategory>::choices().into_iter().map(|choice| html! {
                            <button
                                class={classes!("filter-pill", (query.category == choice).then(|| "selected"))}
                                onclick={select_category(choice)}
                            >
                                {choice.label()}
                            </button>
                        }) }
                    </div>
                    <div class="portfolio-search">
                        <input
                            type="text"
                            class="input"
                            placeholder="Search projects..."
                            value={query.text.clone()}
                            oninput={on_search}
                        />
                        <Icon kind={IconKind::Search} size={20} class={classes!("search-icon")} />
                    </div>
                    if !query.is_unfiltered() {
                        <p class="portfolio-count">
                            {format!("Showing {} of {} projects", projects.len(), PROJECTS.len())}
                        </p>
                    }

                    <div key={format!("{}|{}", query.category, query.text)} class="grid grid-3">
                        { for projects.iter().enumerate().map(|(i, entry)| html! {
                            <div class="portfolio-card" style={card.style(true, i, 0.1)}>
                                <Link<Route> to={Route::ProjectDetail { id: entry.id }}>
                                    <div class="portfolio-card-image">
                                        <img src={entry.image.url()} alt={entry.title} />
                                        <div class="portfolio-card-shade"></div>
                                        <div class="portfolio-card-caption">
                                            <div class="portfolio-card-category">{entry.category.label()}</div>
                                            <h3>{entry.title}</h3>
                                            <p>{entry.location}</p>
                                        </div>
                                    </div>
                                </Link<Route>>
                                <div class="portfolio-card-body">
                                    <p>{entry.description}</p>
                                    <div class="portfolio-year">{format!("Completed In {}", entry.year)}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                    if projects.is_empty() {
                        <div class="portfolio-empty">
                            <p>{"No projects found matching your criteria."}</p>
                            <button class="btn btn-ghost" onclick={clear_filters}>{"Clear Filters"}</button>
                        </div>
                    }
                </div>
            </section>

            <CtaSection
                title="Ready to Start Your Construction Project?"
                subtitle="Contact us today to discuss your vision and how we can bring it to life."
                button_text="Request a Quote"
                to={Route::Quote}
            />

            <style>{PORTFOLIO_STYLES}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub id: u32,
}

/// A single project with its photo gallery.
#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let entry = project(props.id);
    let selected = use_state(|| 0usize);
    use_page_title(Route::ProjectDetail { id: props.id }.page_title());

    let Some(entry) = entry else {
        return html! { <Redirect<Route> to={Route::NotFound} /> };
    };

    let main_photo = entry.gallery.get(*selected).copied().unwrap_or(entry.image);
    let thumb = Motion::zoom(0.9).duration(0.5);

    html! {
        <div class="portfolio-page">
            <PageHeader title={entry.title} subtitle={entry.location} image={entry.image} />

            <section class="section-padding">
                <div class="container-custom project-detail">
                    <div class="gallery">
                        <img class="gallery-main" key={main_photo.url()} src={main_photo.url()} alt={entry.title} />
                        <div class="gallery-thumbs">
                            { for entry.gallery.iter().enumerate().map(|(i, photo)| {
                                let onclick = {
                                    let selected = selected.clone();
                                    Callback::from(move |_: MouseEvent| selected.set(i))
                                };
                                html! {
                                    <button
                                        class={classes!("gallery-thumb", (*selected == i).then(|| "selected"))}
                                        style={thumb.style(true, i, 0.1)}
                                        {onclick}
                                    >
                                        <img src={photo.url()} alt={format!("{} photo {}", entry.title, i + 1)} />
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    <aside class="project-facts">
                        <span class="filter-pill selected">{entry.category.label()}</span>
                        <h2>{entry.title}</h2>
                        <p>{entry.description}</p>
                        <dl>
                            <dt>{"Location"}</dt>
                            <dd>{entry.location}</dd>
                            <dt>{"Completed"}</dt>
                            <dd>{entry.year.to_string()}</dd>
                            <dt>{"Type"}</dt>
                            <dd>{entry.kind}</dd>
                        </dl>
                        <Link<Route> to={Route::Portfolio} classes="btn btn-ghost">
                            <Icon kind={IconKind::ArrowLeft} size={16} />
                            {"Back to Portfolio"}
                        </Link<Route>>
                    </aside>
                </div>
            </section>

            <CtaSection
                title="Ready to Start Your Construction Project?"
                subtitle="Contact us today to discuss your vision and how we can bring it to life."
                button_text="Request a Quote"
                to={Route::Quote}
            />

            <style>{PORTFOLIO_STYLES}</style>
        </div>
    }
}

const PORTFOLIO_STYLES: &str = r#"
.portfolio-filters { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 1.5rem; }
.filter-pill {
    display: inline-block;
    padding: 0.5rem 1.5rem;
    border: none;
    border-radius: 9999px;
    background: #f3f4f6;
    color: #374151;
    font: inherit;
    cursor: pointer;
    transition: background 0.2s ease;
}
.filter-pill:hover { background: #e5e7eb; }
.filter-pill.selected { background: #2563eb; color: #ffffff; }
.portfolio-search { position: relative; max-width: 28rem; margin: 0 auto 3rem; }
.portfolio-search .input { padding-right: 2.5rem; }
.search-icon { position: absolute; right: 0.75rem; top: 50%; transform: translateY(-50%); color: #9ca3af; }
.portfolio-card { background: #ffffff; border-radius: 0.5rem; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07); }
.portfolio-card-image { position: relative; aspect-ratio: 4 / 3; overflow: hidden; }
.portfolio-card-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
.portfolio-card-image:hover img { transform: scale(1.1); }
.portfolio-card-shade { position: absolute; inset: 0; opacity: 0.7; background: linear-gradient(to top, #1e3a8a, transparent); }
.portfolio-card-caption { position: absolute; left: 0; right: 0; bottom: 0; padding: 1.5rem; color: #ffffff; }
.portfolio-card-category { font-size: 0.875rem; margin-bottom: 0.5rem; }
.portfolio-card-caption h3 { font-size: 1.25rem; }
.portfolio-card-caption p { color: #dbeafe; margin: 0; }
.portfolio-card-body { padding: 1.5rem; }
.portfolio-card-body p { color: #4b5563; margin: 0 0 1rem; }
.portfolio-year { font-size: 0.875rem; color: #6b7280; }
.portfolio-count { text-align: center; color: #6b7280; margin: -2rem 0 2rem; }
.portfolio-empty { text-align: center; padding: 2rem 0; color: #6b7280; }
.project-detail {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 3rem;
    align-items: start;
}
.gallery-main {
    width: 100%;
    aspect-ratio: 4 / 3;
    object-fit: cover;
    border-radius: 0.5rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
    animation: bm-page-in 400ms ease both;
}
.gallery-thumbs { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-top: 1rem; }
.gallery-thumb {
    padding: 0;
    border: 3px solid transparent;
    border-radius: 0.5rem;
    overflow: hidden;
    cursor: pointer;
    background: none;
}
.gallery-thumb.selected { border-color: #f97316; }
.gallery-thumb img { width: 100%; aspect-ratio: 4 / 3; object-fit: cover; }
.project-facts h2 { color: #1e3a8a; font-size: 1.875rem; margin: 1rem 0; }
.project-facts p { color: #4b5563; }
.project-facts dl { display: grid; grid-template-columns: auto 1fr; gap: 0.5rem 1rem; margin: 1.5rem 0 2rem; }
.project-facts dt { font-weight: 600; color: #1e3a8a; }
.project-facts dd { margin: 0; color: #4b5563; }
@media (max-width: 1023px) {
    .project-detail { grid-template-columns: 1fr; }
}
"#;
