use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::shared::{CtaSection, PageHeader, SectionTitle};
use crate::motion::hooks::use_page_title;
use crate::motion::reveal::Motion;
use crate::site::content::{post, recent_posts, PostCategory, BLOG_HEADER_PHOTO, BLOG_POSTS};
use crate::site::listing::{filter, Category, CategoryFilter, ListingQuery};
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    use_page_title(Route::Blog.page_title());

    let query = use_state(ListingQuery::<PostCategory>::default);
    let posts = filter(BLOG_POSTS, &query);
    let card = Motion::rise(30.0).duration(0.6);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(ListingQuery { text: input.value(), ..(*query).clone() });
        })
    };

    let select_category = |category: CategoryFilter<PostCategory>| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            query.set(ListingQuery { category, ..(*query).clone() });
        })
    };

    let clear_filters = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set(ListingQuery::default()))
    };

    let heading = match query.category {
        CategoryFilter::All => "All Articles",
        CategoryFilter::Only(category) => category.label(),
    };
    let list_key = format!("{}|{}", query.category, query.text);

    html! {
        <div class="blog-page">
            <PageHeader
                title="BuildMaster Blog"
                subtitle="Insights, news, and trends from the construction industry"
                image={BLOG_HEADER_PHOTO}
            />

            <section class="section-padding">
                <div class="container-custom blog-layout">
                    <aside class="blog-sidebar">
                        <div class="sidebar-box">
                            <h3>{"Search"}</h3>
                            <div class="search-box">
                                <input
                                    type="text"
                                    class="input"
                                    placeholder="Search blog posts..."
                                    value={query.text.clone()}
                                    oninput={on_search}
                                />
                                <Icon kind={IconKind::Search} size={20} class={classes!("search-icon")} />
                            </div>
                        </div>

                        <div class="sidebar-box">
                            <h3>{"Categories"}</h3>
                            <ul class="category-list">
                                { for CategoryFilter::<PostCategory>::choices().into_iter().map(|choice| html! {
                                    <li>
                                        <button
                                            class={classes!("category-button", (query.category == choice).then(|| "selected"))}
                                            onclick={select_category(choice)}
                                        >
                                            <Icon kind={IconKind::ChevronRight} size={16} />
                                            {choice.label()}
                                        </button>
                                    </li>
                                }) }
                            </ul>
                        </div>

                        <div class="sidebar-box">
                            <h3>{"Recent Posts"}</h3>
                            <ul class="recent-posts">
                                { for recent_posts().iter().map(|recent| html! {
                                    <li>
                                        <Link<Route> to={Route::BlogPostDetail { id: recent.id }}>
                                            <h4>{recent.title}</h4>
                                            <p>{recent.date}</p>
                                        </Link<Route>>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </aside>

                    <div class="blog-main">
                        <SectionTitle
                            title={heading}
                            subtitle={format!("{} articles in this category", posts.len())}
                        />
                        <div key={list_key} class="blog-list">
                            { for posts.iter().enumerate().map(|(i, entry)| html! {
                                <article class="blog-card" style={card.style(true, i, 0.1)}>
                                    <div class="blog-card-image">
                                        <img src={entry.image.url()} alt={entry.title} />
                                    </div>
                                    <div class="blog-card-body">
                                        <div class="blog-meta">
                                            <span class="blog-tag">{entry.category.label()}</span>
                                            <span><Icon kind={IconKind::Calendar} size={14} />{entry.date}</span>
                                            <span><Icon kind={IconKind::User} size={14} />{entry.author}</span>
                                        </div>
                                        <h2>
                                            <Link<Route> to={Route::BlogPostDetail { id: entry.id }}>{entry.title}</Link<Route>>
                                        </h2>
                                        <p>{entry.excerpt}</p>
                                        <Link<Route> to={Route::BlogPostDetail { id: entry.id }} classes="read-more">
                                            {"Read More"}
                                            <Icon kind={IconKind::ChevronRight} size={16} />
                                        </Link<Route>>
                                    </div>
                                </article>
                            }) }
                            if posts.is_empty() {
                                <div class="blog-empty">
                                    <p>{"No posts found matching your criteria."}</p>
                                    <button class="btn btn-ghost" onclick={clear_filters}>{"Clear Filters"}</button>
                                </div>
                            }
                        </div>
                    </div>
                </div>
            </section>

            <CtaSection
                title="Have a Construction Question?"
                subtitle="Our team of experts is ready to provide advice and guidance for your project."
                button_text="Contact Our Experts"
                to={Route::Contact}
            />

            <style>{BLOG_STYLES}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub id: u32,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostProps) -> Html {
    let entry = post(props.id);
    use_page_title(Route::BlogPostDetail { id: props.id }.page_title());

    let Some(entry) = entry else {
        return html! { <Redirect<Route> to={Route::NotFound} /> };
    };

    html! {
        <div class="blog-page">
            <PageHeader title={entry.title} subtitle={entry.category.label()} image={entry.image} />
            <section class="section-padding">
                <div class="container-custom post-body">
                    <div class="blog-meta">
                        <span class="blog-tag">{entry.category.label()}</span>
                        <span><Icon kind={IconKind::Calendar} size={14} />{entry.date}</span>
                        <span><Icon kind={IconKind::User} size={14} />{entry.author}</span>
                    </div>
                    <p class="post-lead">{entry.excerpt}</p>
                    <Link<Route> to={Route::Blog} classes="read-more">
                        <Icon kind={IconKind::ArrowLeft} size={16} />
                        {"Back to all articles"}
                    </Link<Route>>
                </div>
            </section>
            <CtaSection
                title="Have a Construction Question?"
                subtitle="Our team of experts is ready to provide advice and guidance for your project."
                button_text="Contact Our Experts"
                to={Route::Contact}
            />
            <style>{BLOG_STYLES}</style>
        </div>
    }
}

const BLOG_STYLES: &str = r#"
.blog-layout {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 2.5rem;
    align-items: start;
}
.blog-main { order: 1; }
.blog-sidebar { order: 2; }
.sidebar-box {
    background: #ffffff;
    padding: 1.5rem;
    border-radius: 0.5rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
    margin-bottom: 2rem;
}
.sidebar-box h3 { color: #1e3a8a; font-size: 1.25rem; margin-bottom: 1rem; }
.search-box { position: relative; }
.search-box .input { padding-right: 2.5rem; }
.search-icon { position: absolute; right: 0.75rem; top: 50%; transform: translateY(-50%); color: #9ca3af; }
.category-list, .recent-posts { list-style: none; margin: 0; padding: 0; }
.category-button {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    width: 100%;
    text-align: left;
    padding: 0.5rem;
    border: none;
    border-radius: 0.25rem;
    background: none;
    color: #4b5563;
    font: inherit;
    cursor: pointer;
    transition: background 0.2s ease;
}
.category-button:hover { background: #f3f4f6; }
.category-button.selected { background: #dbeafe; color: #1e3a8a; font-weight: 500; }
.category-button.selected .icon { color: #2563eb; }
.recent-posts li { padding: 0.75rem 0; border-bottom: 1px solid #e5e7eb; }
.recent-posts li:last-child { border-bottom: none; }
.recent-posts h4 { font-size: 1rem; font-weight: 500; color: #1f2937; transition: color 0.2s ease; }
.recent-posts a:hover h4 { color: #2563eb; }
.recent-posts p { font-size: 0.875rem; color: #6b7280; margin: 0; }
.blog-list { display: grid; gap: 2rem; }
.blog-card {
    display: grid;
    grid-template-columns: 1fr 2fr;
    background: #ffffff;
    border-radius: 0.5rem;
    overflow: hidden;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
}
.blog-card-image img { width: 100%; height: 100%; min-height: 12rem; object-fit: cover; }
.blog-card-body { padding: 1.5rem; }
.blog-meta { display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; font-size: 0.875rem; color: #6b7280; margin-bottom: 0.5rem; }
.blog-meta span { display: inline-flex; align-items: center; gap: 0.25rem; }
.blog-tag { padding: 0.25rem 0.75rem; background: #dbeafe; color: #1e40af; border-radius: 9999px; font-size: 0.75rem; }
.blog-card h2 { color: #1e3a8a; font-size: clamp(1.25rem, 2.5vw, 1.5rem); margin-bottom: 0.75rem; transition: color 0.2s ease; }
.blog-card h2:hover { color: #f97316; }
.blog-card p { color: #4b5563; margin: 0 0 1rem; }
.read-more { display: inline-flex; align-items: center; gap: 0.25rem; color: #2563eb; font-weight: 500; }
.read-more:hover { color: #f97316; }
.blog-empty { text-align: center; padding: 2rem 0; }
.blog-empty p { color: #6b7280; font-size: 1.125rem; }
.post-body { max-width: 48rem; }
.post-lead { font-size: 1.25rem; color: #374151; margin: 1.5rem 0 2rem; }
@media (max-width: 1023px) {
    .blog-layout { grid-template-columns: 1fr; }
    .blog-sidebar { order: 0; }
}
@media (max-width: 767px) {
    .blog-card { grid-template-columns: 1fr; }
}
"#;
