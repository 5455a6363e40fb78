use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::hooks::use_in_view;
use crate::motion::reveal::{Ease, Motion, Timeline, Trigger};
use crate::site::content::{Photo, HEADER_PHOTO, SITE_PHOTO};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(HEADER_PHOTO)]
    pub image: Photo,
}

/// Full-width banner at the top of every inner page.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let content = Motion::rise(30.0).duration(0.8).delay(0.2);
    let background = format!(
        "background-image: linear-gradient(rgba(15, 23, 42, 0.7), rgba(15, 23, 42, 0.7)), url({});",
        props.image.url()
    );

    html! {
        <div class="page-header" style={background}>
            <div class="page-header-content" style={content.style(true, 0, 0.0)}>
                <h1>{props.title.clone()}</h1>
                if let Some(subtitle) = props.subtitle.clone() {
                    <p>{subtitle}</p>
                }
            </div>
            <style>
                {r#"
                .page-header {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 10rem 1rem 6rem;
                    margin-bottom: 3rem;
                    background-size: cover;
                    background-position: center;
                    color: #ffffff;
                    text-align: center;
                }
                .page-header h1 { font-size: clamp(2.25rem, 5vw, 3rem); margin-bottom: 1rem; }
                .page-header p { font-size: clamp(1.25rem, 3vw, 1.5rem); max-width: 42rem; margin: 0 auto; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub centered: bool,
    #[prop_or_default]
    pub light: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), Trigger::at(0.8));
    let heading = Motion::rise(20.0).duration(0.7);
    let line_style = if shown {
        "animation: bm-grow 1000ms cubic-bezier(0.215, 0.61, 0.355, 1) both;"
    } else {
        "width: 0;"
    };

    html! {
        <div
            ref={node}
            class={classes!("section-title", props.centered.then(|| "centered"), props.light.then(|| "light"))}
        >
            <div class="title-line-track">
                <div class="title-line" style={line_style}></div>
            </div>
            <h2 style={heading.style(shown, 0, 0.0)}>{props.title.clone()}</h2>
            if let Some(subtitle) = props.subtitle.clone() {
                <p style={heading.delay(0.2).style(shown, 0, 0.0)}>{subtitle}</p>
            }
            <style>
                {r#"
                .section-title { margin-bottom: 3rem; }
                .section-title.centered { text-align: center; }
                .title-line-track { max-width: 80px; margin-bottom: 1rem; }
                .section-title.centered .title-line-track { margin-left: auto; margin-right: auto; }
                .title-line { height: 4px; background: #f97316; }
                .section-title.light .title-line { background: #fb923c; }
                .section-title h2 {
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    color: #1e3a8a;
                    margin-bottom: 1rem;
                }
                .section-title.light h2 { color: #ffffff; }
                .section-title p { font-size: 1.125rem; color: #4b5563; max-width: 42rem; margin: 0; }
                .section-title.centered p { margin: 0 auto; }
                .section-title.light p { color: #dbeafe; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub button_text: AttrValue,
    pub to: Route,
    #[prop_or(SITE_PHOTO)]
    pub image: Photo,
}

fn cta_timeline() -> Timeline {
    Timeline::new()
        .then(Motion::rise(30.0).duration(0.8))
        .at(Motion::rise(20.0).duration(0.6), -0.4)
        .at(Motion::rise(20.0).scale(0.9).duration(0.5).ease(Ease::BackOut), -0.3)
}

/// Closing call-to-action band; heading, text and button play in sequence.
#[function_component(CtaSection)]
pub fn cta_section(props: &CtaProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), Trigger::at(0.8));
    let timeline = cta_timeline();
    let background = format!(
        "background-image: linear-gradient(rgba(23, 37, 84, 0.9), rgba(23, 37, 84, 0.9)), url({});",
        props.image.url()
    );

    html! {
        <div ref={node} class="cta-section" style={background}>
            <div class="container-custom text-center cta-inner">
                <h2 style={timeline.step(0).style(shown, 0, 0.0)}>{props.title.clone()}</h2>
                <p style={timeline.step(1).style(shown, 0, 0.0)}>{props.subtitle.clone()}</p>
                <div style={timeline.step(2).style(shown, 0, 0.0)}>
                    <Link<Route> to={props.to.clone()} classes="btn btn-secondary">
                        {props.button_text.clone()}
                    </Link<Route>>
                </div>
            </div>
            <div class="cta-decor">
                <div class="cta-blob blue"></div>
                <div class="cta-blob orange"></div>
            </div>
            <style>
                {r#"
                .cta-section {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 0;
                    background-color: #1e3a8a;
                    background-size: cover;
                    background-position: center;
                    background-attachment: fixed;
                }
                .cta-inner { position: relative; z-index: 1; }
                .cta-section h2 { color: #ffffff; font-size: clamp(1.875rem, 4vw, 2.25rem); margin-bottom: 1rem; }
                .cta-section p { color: #dbeafe; font-size: 1.25rem; max-width: 42rem; margin: 0 auto 2rem; }
                .cta-decor { position: absolute; inset: 0; opacity: 0.1; pointer-events: none; }
                .cta-blob { position: absolute; border-radius: 9999px; }
                .cta-blob.blue { top: -5rem; left: -5rem; width: 16rem; height: 16rem; background: #3b82f6; }
                .cta-blob.orange { top: 100%; right: 0; width: 24rem; height: 24rem; background: #f97316; transform: translateY(-50%); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_steps_overlap() {
        let starts = cta_timeline().starts();
        assert_eq!(starts.len(), 3);
        assert!((starts[1] - 0.4).abs() < 1e-9);
        assert!((starts[2] - 0.7).abs() < 1e-9);
    }
}
