use chrono::Datelike;
use log::debug;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_hooks::prelude::{use_window_scroll, use_window_size};
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::motion::hooks::use_in_view;
use crate::motion::reveal::{Motion, Trigger, KEYFRAMES};
use crate::site::content::SERVICES;
use crate::Route;

fn nav_links() -> [(&'static str, Route); 5] {
    [
        ("Home", Route::Home),
        ("About", Route::About),
        ("Blog", Route::Blog),
        ("Portfolio", Route::Portfolio),
        ("Contact", Route::Contact),
    ]
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Navbar, routed page content and footer. Each navigation scrolls back to
/// the top and fades the new page in.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    use_effect_with_deps(
        |route: &Route| {
            debug!("navigated to {}", route.to_path());
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route.clone(),
    );

    html! {
        <div class="site">
            <Global css={css!(r#"
                *, *::before, *::after { box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: "Inter", system-ui, -apple-system, sans-serif;
                    color: #1f2937;
                    background: #ffffff;
                    line-height: 1.6;
                }
                h1, h2, h3, h4 { font-family: "Montserrat", "Inter", sans-serif; line-height: 1.2; margin: 0; }
                a { color: inherit; text-decoration: none; }
                img { max-width: 100%; display: block; }
                .container-custom { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
                .section-padding { padding: 5rem 0; }
                .bg-light { background: #f9fafb; }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.375rem;
                    font-weight: 600;
                    border: 2px solid transparent;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    font-size: 1rem;
                }
                .btn-primary { background: #f97316; color: #ffffff; }
                .btn-primary:hover { background: #ea580c; }
                .btn-secondary { background: #1e3a8a; color: #ffffff; }
                .btn-secondary:hover { background: #1e40af; }
                .btn-outline { border-color: #ffffff; color: #ffffff; background: transparent; }
                .btn-outline:hover { background: #ffffff; color: #1e3a8a; }
                .btn-ghost { border-color: #d1d5db; color: #1f2937; background: #ffffff; }
                .btn-ghost:hover { border-color: #1e3a8a; color: #1e3a8a; }
                .grid { display: grid; gap: 2rem; }
                .grid-2 { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
                .grid-3 { grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); }
                .grid-4 { grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); }
                .text-center { text-align: center; }
                .accent { color: #f97316; }
            "#)} />
            <style>{KEYFRAMES}</style>
            <Navbar />
            <main key={route.to_path()} class="page-content">
                { for props.children.iter() }
            </main>
            <Footer />
            <style>
                {r#"
                .page-content {
                    min-height: 60vh;
                    animation: bm-page-in 500ms cubic-bezier(0.25, 0.46, 0.45, 0.94) both;
                }
                @keyframes bm-page-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: none; }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let route = use_route::<Route>();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (width, _) = use_window_size();
    let scrolled = scroll_y > config::SCROLL_THRESHOLD;

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |&desktop: &bool| {
                if desktop {
                    menu_open.set(false);
                }
                || ()
            },
            width >= config::DESKTOP_BREAKPOINT,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let link_class = |target: &Route| {
        let active = route.as_ref().map_or(false, |current| current.nav_section() == *target);
        classes!("nav-link", active.then(|| "active"))
    };

    html! {
        <header class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="container-custom nav-content">
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <Icon kind={IconKind::HardHat} size={28} class={classes!("accent")} />
                        <span>{config::BRAND}</span>
                    </Link<Route>>
                </div>

                <nav class="nav-links">
                    { for nav_links().into_iter().map(|(label, target)| html! {
                        <Link<Route> to={target.clone()} classes={link_class(&target)}>{label}</Link<Route>>
                    }) }
                </nav>

                <div class="nav-cta">
                    <Link<Route> to={Route::Quote} classes="btn btn-primary">{"Get a Quote"}</Link<Route>>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle mobile menu">
                    <Icon kind={if *menu_open { IconKind::Close } else { IconKind::Menu }} />
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    <div class="container-custom mobile-menu-links">
                        { for nav_links().into_iter().enumerate().map(|(i, (label, target))| html! {
                            <div onclick={close_menu.clone()} style={Motion::rise(10.0).duration(0.3).style(true, i, 0.1)}>
                                <Link<Route> to={target.clone()} classes={link_class(&target)}>{label}</Link<Route>>
                            </div>
                        }) }
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Quote} classes="btn btn-primary mobile-quote">{"Get a Quote"}</Link<Route>>
                        </div>
                    </div>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: #ffffff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    padding: 0.5rem 0;
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #ffffff;
                }
                .top-nav.scrolled .nav-logo { color: #1e3a8a; }
                .nav-links { display: flex; gap: 2rem; }
                .nav-link {
                    font-weight: 500;
                    color: #ffffff;
                    transition: color 0.2s ease;
                }
                .top-nav.scrolled .nav-link { color: #1e3a8a; }
                .nav-link:hover, .nav-link.active, .top-nav.scrolled .nav-link.active { color: #f97316; }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #1e3a8a;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    background: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    animation: bm-reveal 300ms cubic-bezier(0.215, 0.61, 0.355, 1) both;
                    --bm-from-transform: translateY(-20px);
                }
                .mobile-menu-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }
                .mobile-menu .nav-link { color: #1e3a8a; display: block; padding: 0.5rem 0; }
                .mobile-menu .nav-link.active { color: #f97316; }
                .mobile-quote { width: 100%; }
                @media (max-width: 767px) {
                    .nav-links, .nav-cta { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), Trigger::at(0.9));
    let column = Motion::rise(50.0).duration(0.7);
    let year = chrono::Local::now().year();

    let quick_links = [
        ("Home", Route::Home),
        ("About Us", Route::About),
        ("Projects", Route::Portfolio),
        ("Blog", Route::Blog),
        ("Contact", Route::Contact),
        ("Request a Quote", Route::Quote),
    ];
    let socials = [
        (IconKind::Facebook, "Facebook"),
        (IconKind::Twitter, "Twitter"),
        (IconKind::Instagram, "Instagram"),
        (IconKind::Linkedin, "LinkedIn"),
    ];

    html! {
        <footer ref={node} class="site-footer">
            <div class="container-custom">
                <div class="footer-content">
                    <div style={column.style(shown, 0, 0.1)}>
                        <Link<Route> to={Route::Home} classes="footer-logo">
                            <Icon kind={IconKind::HardHat} size={28} class={classes!("accent")} />
                            <span>{config::BRAND}</span>
                        </Link<Route>>
                        <p>{"Professional construction services with over 25 years of industry experience. Building the future with quality and precision."}</p>
                        <div class="footer-socials">
                            { for socials.iter().map(|(kind, label)| html! {
                                <a href="#" aria-label={*label}><Icon kind={*kind} size={20} /></a>
                            }) }
                        </div>
                    </div>

                    <div style={column.style(shown, 1, 0.1)}>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            { for quick_links.into_iter().map(|(label, target)| html! {
                                <li><Link<Route> to={target}>{label}</Link<Route>></li>
                            }) }
                        </ul>
                    </div>

                    <div style={column.style(shown, 2, 0.1)}>
                        <h3>{"Our Services"}</h3>
                        <ul>
                            { for SERVICES.iter().map(|service| html! { <li>{service.title}</li> }) }
                        </ul>
                    </div>

                    <div style={column.style(shown, 3, 0.1)}>
                        <h3>{"Contact Us"}</h3>
                        <ul class="footer-contact">
                            <li><Icon kind={IconKind::MapPin} size={20} class={classes!("accent")} /><span>{config::ADDRESS}</span></li>
                            <li><Icon kind={IconKind::Phone} size={20} class={classes!("accent")} /><span>{config::PHONE}</span></li>
                            <li><Icon kind={IconKind::Mail} size={20} class={classes!("accent")} /><span>{config::EMAIL}</span></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #1e3a8a;
                    color: #ffffff;
                    padding: 4rem 0 2rem;
                }
                .footer-content {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .footer-content p, .footer-content li { color: #dbeafe; }
                .footer-content h3 { font-size: 1.25rem; margin-bottom: 1rem; }
                .footer-content ul { list-style: none; padding: 0; margin: 0; display: grid; gap: 0.5rem; }
                .footer-content a:hover { color: #f97316; }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .footer-socials { display: flex; gap: 1rem; margin-top: 1.5rem; }
                .footer-contact li { display: flex; gap: 0.5rem; align-items: flex-start; }
                .footer-bottom {
                    border-top: 1px solid #1e40af;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    text-align: center;
                    color: #bfdbfe;
                }
                "#}
            </style>
        </footer>
    }
}
