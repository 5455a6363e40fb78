use yew::prelude::*;

use crate::site::content::ServiceIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Home,
    Building,
    Hammer,
    PaintBucket,
    HardHat,
    Ruler,
    Phone,
    Mail,
    MapPin,
    Clock,
    Info,
    Star,
    Check,
    CheckCircle,
    Menu,
    Close,
    ArrowRight,
    ArrowLeft,
    ChevronRight,
    Search,
    Calendar,
    User,
    Send,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
}

impl From<ServiceIcon> for IconKind {
    fn from(icon: ServiceIcon) -> Self {
        match icon {
            ServiceIcon::Home => IconKind::Home,
            ServiceIcon::Building => IconKind::Building,
            ServiceIcon::Hammer => IconKind::Hammer,
            ServiceIcon::PaintBucket => IconKind::PaintBucket,
            ServiceIcon::HardHat => IconKind::HardHat,
            ServiceIcon::Ruler => IconKind::Ruler,
        }
    }
}

impl IconKind {
    /// Stroke paths on a 24x24 grid.
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Home => &["M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            IconKind::Building => &[
                "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18z",
                "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
                "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
                "M10 6h4M10 10h4M10 14h4M10 18h4",
            ],
            IconKind::Hammer => &[
                "M15 12l-8.5 8.5a2.12 2.12 0 1 1-3-3L12 9",
                "M17.64 15L22 10.64",
                "M20.91 11.7l-1.25-1.25a2.41 2.41 0 0 1-.71-1.71v-.86L16.24 5.17a6 6 0 0 0-4.24-1.76H9.5l.92.82A6.18 6.18 0 0 1 12 8.4v1.56l2 2h2.47l2.26 1.91",
            ],
            IconKind::PaintBucket => &[
                "M19 11l-8-8-8.6 8.6a2 2 0 0 0 0 2.8l5.2 5.2c.8.8 2 .8 2.8 0L19 11z",
                "M5 2l5 5",
                "M2 13h15",
                "M22 20a2 2 0 1 1-4 0c0-1.6 1.7-2.4 2-4 .3 1.6 2 2.4 2 4z",
            ],
            IconKind::HardHat => &[
                "M2 18a1 1 0 0 0 1 1h18a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1H3a1 1 0 0 0-1 1z",
                "M10 10V5a1 1 0 0 1 1-1h2a1 1 0 0 1 1 1v5",
                "M4 15v-3a6 6 0 0 1 6-6",
                "M14 6a6 6 0 0 1 6 6v3",
            ],
            IconKind::Ruler => &[
                "M21.3 15.3a2.4 2.4 0 0 1 0 3.4l-2.6 2.6a2.4 2.4 0 0 1-3.4 0L2.7 8.7a2.41 2.41 0 0 1 0-3.4l2.6-2.6a2.41 2.41 0 0 1 3.4 0z",
                "M14.5 12.5l2-2M11.5 9.5l2-2M8.5 6.5l2-2M17.5 15.5l2-2",
            ],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            IconKind::MapPin => &[
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
            ],
            IconKind::Clock => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 6v6l4 2"],
            IconKind::Info => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 16v-4M12 8h.01"],
            IconKind::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            IconKind::Check => &["M20 6L9 17l-5-5"],
            IconKind::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4L12 14.01l-3-3"],
            IconKind::Menu => &["M3 12h18M3 6h18M3 18h18"],
            IconKind::Close => &["M18 6L6 18M6 6l12 12"],
            IconKind::ArrowRight => &["M5 12h14M12 5l7 7-7 7"],
            IconKind::ArrowLeft => &["M19 12H5M12 19l-7-7 7-7"],
            IconKind::ChevronRight => &["M9 18l6-6-6-6"],
            IconKind::Search => &["M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16z", "M21 21l-4.35-4.35"],
            IconKind::Calendar => &[
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M16 2v4M8 2v4M3 10h18",
            ],
            IconKind::User => &["M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z"],
            IconKind::Send => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4 20-7z"],
            IconKind::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            IconKind::Twitter => &[
                "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z",
            ],
            IconKind::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconKind::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub filled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { for props.kind.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
