use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::motion::hooks::use_page_title;
use crate::motion::reveal::{Ease, Motion};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_title(Route::NotFound.page_title());
    let item = Motion::rise(20.0).duration(0.6).ease(Ease::Power1Out);

    html! {
        <section class="section-padding not-found">
            <div class="container-custom text-center">
                <h1 style={item.style(true, 0, 0.15)}>{"404"}</h1>
                <h2 style={item.style(true, 1, 0.15)}>{"Page Not Found"}</h2>
                <p style={item.style(true, 2, 0.15)}>
                    {"The page you are looking for may have been moved, or it never existed."}
                </p>
                <div style={item.style(true, 3, 0.15)}>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        <Icon kind={IconKind::ArrowLeft} size={18} />
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .not-found { padding-top: 10rem; min-height: 70vh; }
                .not-found h1 { font-size: 6rem; color: #f97316; line-height: 1; }
                .not-found h2 { color: #1e3a8a; font-size: 2rem; margin: 1rem 0; }
                .not-found p { color: #4b5563; margin-bottom: 2rem; }
                "#}
            </style>
        </section>
    }
}
