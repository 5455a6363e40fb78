use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod site {
    pub mod content;
    pub mod contact;
    pub mod forms;
    pub mod listing;
    pub mod quote;
}
mod motion {
    pub mod hooks;
    pub mod reveal;
}
mod components {
    pub mod cards;
    pub mod form_field;
    pub mod icons;
    pub mod layout;
    pub mod shared;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod portfolio;
    pub mod quote;
}

use components::layout::Layout;
use pages::{
    about::About,
    blog::{Blog, BlogPostPage},
    contact::Contact,
    home::Home,
    not_found::NotFound,
    portfolio::{Portfolio, ProjectDetail},
    quote::Quote,
};
use site::content::{post, project};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogPostDetail { id: u32 },
    #[at("/portfolio")]
    Portfolio,
    #[at("/portfolio/:id")]
    ProjectDetail { id: u32 },
    #[at("/contact")]
    Contact,
    #[at("/quote")]
    Quote,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Document title shown in the browser tab.
    pub fn page_title(&self) -> String {
        let suffix = config::title_suffix();
        match self {
            Route::Home => format!("{} | Expert Building Solutions", config::COMPANY_NAME),
            Route::About => format!("About Us | {}", suffix),
            Route::Blog => format!("Blog | {}", suffix),
            Route::BlogPostDetail { id } => match post(*id) {
                Some(entry) => format!("{} | {}", entry.title, suffix),
                None => Route::Blog.page_title(),
            },
            Route::Portfolio => format!("Portfolio | {}", suffix),
            Route::ProjectDetail { id } => match project(*id) {
                Some(entry) => format!("{} | {}", entry.title, suffix),
                None => Route::Portfolio.page_title(),
            },
            Route::Contact => format!("Contact Us | {}", suffix),
            Route::Quote => format!("Request a Quote | {}", suffix),
            Route::NotFound => format!("Page Not Found | {}", suffix),
        }
    }

    /// The top-level navigation entry this route belongs to.
    pub fn nav_section(&self) -> Route {
        match self {
            Route::BlogPostDetail { .. } => Route::Blog,
            Route::ProjectDetail { .. } => Route::Portfolio,
            other => other.clone(),
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPostDetail { id } => {
            info!("Rendering Blog post {} page", id);
            html! { <BlogPostPage {id} /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::ProjectDetail { id } => {
            info!("Rendering Project {} page", id);
            html! { <ProjectDetail {id} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Quote => {
            info!("Rendering Quote page");
            html! { <Quote /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");
    tracing_wasm::set_as_global_default();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_its_own_title() {
        let routes = [
            Route::Home,
            Route::About,
            Route::Blog,
            Route::Portfolio,
            Route::Contact,
            Route::Quote,
            Route::NotFound,
        ];
        let mut titles: Vec<String> = routes.iter().map(Route::page_title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), routes.len());
    }

    #[test]
    fn section_titles_match_site_copy() {
        assert_eq!(Route::Home.page_title(), "BuildMaster Construction | Expert Building Solutions");
        assert_eq!(Route::About.page_title(), "About Us | BuildMaster Construction");
        assert_eq!(Route::Quote.page_title(), "Request a Quote | BuildMaster Construction");
        assert_eq!(Route::NotFound.page_title(), "Page Not Found | BuildMaster Construction");
    }

    #[test]
    fn detail_titles_use_entry_name() {
        let first = &site::content::PROJECTS[0];
        assert_eq!(
            Route::ProjectDetail { id: first.id }.page_title(),
            format!("{} | BuildMaster Construction", first.title)
        );
        assert_eq!(Route::ProjectDetail { id: 9999 }.page_title(), Route::Portfolio.page_title());
        assert_eq!(Route::BlogPostDetail { id: 9999 }.page_title(), Route::Blog.page_title());
    }

    #[test]
    fn detail_routes_highlight_their_section() {
        assert_eq!(Route::ProjectDetail { id: 1 }.nav_section(), Route::Portfolio);
        assert_eq!(Route::BlogPostDetail { id: 1 }.nav_section(), Route::Blog);
        assert_eq!(Route::Contact.nav_section(), Route::Contact);
    }

    #[test]
    fn site_paths_resolve_to_their_pages() {
        let pages = [
            ("/", "Expert Building Solutions"),
            ("/about", "About Us"),
            ("/blog", "Blog"),
            ("/portfolio", "Portfolio"),
            ("/contact", "Contact Us"),
            ("/quote", "Request a Quote"),
        ];
        for (path, name) in pages {
            let route = Route::recognize(path).unwrap_or(Route::NotFound);
            assert_ne!(route, Route::NotFound, "{path} fell through to not found");
            assert!(route.page_title().contains(name), "{path} -> {}", route.page_title());
        }
    }

    #[test]
    fn detail_and_unknown_paths_resolve() {
        assert_eq!(Route::recognize("/portfolio/3"), Some(Route::ProjectDetail { id: 3 }));
        assert_eq!(Route::recognize("/blog/2"), Some(Route::BlogPostDetail { id: 2 }));
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }
}
