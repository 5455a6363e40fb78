use std::fmt;

use super::listing::{Category, Listing};

const PEXELS_PARAMS: &str = "auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

/// A stock photo hosted on Pexels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    id: u32,
    file: Option<&'static str>,
}

impl Photo {
    pub const fn pexels(id: u32) -> Self {
        Self { id, file: None }
    }

    /// For photos whose file name is not the default `pexels-photo-{id}`.
    pub const fn pexels_named(id: u32, file: &'static str) -> Self {
        Self { id, file: Some(file) }
    }

    pub fn url(&self) -> String {
        match self.file {
            Some(file) => format!("https://images.pexels.com/photos/{}/{}.jpeg?{}", self.id, file, PEXELS_PARAMS),
            None => format!(
                "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?{params}",
                id = self.id,
                params = PEXELS_PARAMS
            ),
        }
    }
}

pub const HERO_PHOTO: Photo = Photo::pexels(157811);
pub const SITE_PHOTO: Photo = Photo::pexels(1216589);
pub const TEAM_AT_WORK_PHOTO: Photo = Photo::pexels(2760243);
pub const HEADER_PHOTO: Photo = Photo::pexels(2219024);
pub const CONTACT_PHOTO: Photo = Photo::pexels(327533);
pub const BLOG_HEADER_PHOTO: Photo =
    Photo::pexels_named(159306, "construction-site-build-construction-work-159306");

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Commercial,
    Residential,
    Renovation,
    Institutional,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[
        ProjectCategory::Commercial,
        ProjectCategory::Residential,
        ProjectCategory::Renovation,
        ProjectCategory::Institutional,
    ];

    fn label(self) -> &'static str {
        match self {
            ProjectCategory::Commercial => "Commercial",
            ProjectCategory::Residential => "Residential",
            ProjectCategory::Renovation => "Renovation",
            ProjectCategory::Institutional => "Institutional",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    /// Longer label used on the home page's featured grid.
    pub kind: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub year: u16,
    pub image: Photo,
    pub gallery: &'static [Photo],
}

impl Listing for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }

    fn title(&self) -> &str {
        self.title
    }

    fn summary(&self) -> &str {
        self.description
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Skyline Tower",
        category: ProjectCategory::Commercial,
        kind: "Commercial Building",
        description: "A 20-story office tower featuring a sleek glass facade, energy-efficient systems, and state-of-the-art facilities for multiple corporate tenants.",
        location: "Downtown Metropolis",
        year: 2023,
        image: Photo::pexels(1036657),
        gallery: &[Photo::pexels(1036657), Photo::pexels(358639), Photo::pexels(1662159)],
    },
    Project {
        id: 2,
        title: "Oakridge Residences",
        category: ProjectCategory::Residential,
        kind: "Residential Complex",
        description: "A luxury condominium complex with 50 units, featuring modern amenities including a pool, fitness center, and rooftop garden.",
        location: "Oakridge Hills",
        year: 2024,
        image: Photo::pexels(323780),
        gallery: &[Photo::pexels(323780), Photo::pexels(1643383), Photo::pexels(1571460)],
    },
    Project {
        id: 3,
        title: "Metro Plaza Renovation",
        category: ProjectCategory::Renovation,
        kind: "Renovation",
        description: "A complete renovation of a historic shopping plaza, preserving its architectural character while updating all systems and interiors.",
        location: "Historic District",
        year: 2022,
        image: Photo::pexels(2610756),
        gallery: &[Photo::pexels(2610756), Photo::pexels(3097464), Photo::pexels(3097112)],
    },
    Project {
        id: 4,
        title: "Riverfront Office Complex",
        category: ProjectCategory::Commercial,
        kind: "Commercial",
        description: "A riverside office complex with three buildings connected by landscaped courtyards, featuring sustainable design elements.",
        location: "Riverside District",
        year: 2023,
        image: Photo::pexels(439391),
        gallery: &[Photo::pexels(439391), Photo::pexels(2079234), Photo::pexels(561201)],
    },
    Project {
        id: 5,
        title: "Lakeside Villa",
        category: ProjectCategory::Residential,
        kind: "Custom Home",
        description: "A 6,000 sq ft custom lakefront home featuring floor-to-ceiling windows, gourmet kitchen, and outdoor living spaces.",
        location: "Lake Vista",
        year: 2022,
        image: Photo::pexels(2119706),
        gallery: &[Photo::pexels(2119706), Photo::pexels(1396122), Photo::pexels(1438832)],
    },
    Project {
        id: 6,
        title: "Heritage Hotel Restoration",
        category: ProjectCategory::Renovation,
        kind: "Restoration",
        description: "A meticulous restoration of a 100-year-old hotel, preserving historical elements while adding modern amenities and safety features.",
        location: "Old Town",
        year: 2021,
        image: Photo::pexels(70441),
        gallery: &[Photo::pexels(70441), Photo::pexels(261102), Photo::pexels(271614)],
    },
    Project {
        id: 7,
        title: "Green Valley Community Center",
        category: ProjectCategory::Institutional,
        kind: "Community Facility",
        description: "A LEED-certified community center with multipurpose spaces, recreational facilities, and sustainable design features.",
        location: "Green Valley",
        year: 2024,
        image: Photo::pexels(2360673),
        gallery: &[Photo::pexels(2360673), Photo::pexels(260931), Photo::pexels(1747193)],
    },
    Project {
        id: 8,
        title: "The Heights Apartments",
        category: ProjectCategory::Residential,
        kind: "Apartment Complex",
        description: "A modern apartment complex with 120 units, including studios, one and two-bedroom layouts, with shared amenities and underground parking.",
        location: "Upper Eastside",
        year: 2023,
        image: Photo::pexels(2102587),
        gallery: &[Photo::pexels(2102587), Photo::pexels(1550596), Photo::pexels(276724)],
    },
    Project {
        id: 9,
        title: "Downtown Medical Center",
        category: ProjectCategory::Institutional,
        kind: "Healthcare Facility",
        description: "A state-of-the-art medical facility with specialized treatment areas, diagnostic imaging center, and patient-centered design.",
        location: "Downtown District",
        year: 2022,
        image: Photo::pexels(668298),
        gallery: &[Photo::pexels(668298), Photo::pexels(127873), Photo::pexels(247786)],
    },
];

pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn featured_projects() -> &'static [Project] {
    &PROJECTS[..4]
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostCategory {
    Sustainability,
    Renovations,
    Commercial,
    Technology,
    Tips,
    UrbanDevelopment,
}

impl Category for PostCategory {
    const ALL: &'static [Self] = &[
        PostCategory::Sustainability,
        PostCategory::Renovations,
        PostCategory::Commercial,
        PostCategory::Technology,
        PostCategory::Tips,
        PostCategory::UrbanDevelopment,
    ];

    fn label(self) -> &'static str {
        match self {
            PostCategory::Sustainability => "Sustainability",
            PostCategory::Renovations => "Renovations",
            PostCategory::Commercial => "Commercial",
            PostCategory::Technology => "Technology",
            PostCategory::Tips => "Tips",
            PostCategory::UrbanDevelopment => "Urban Development",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub image: Photo,
    pub category: PostCategory,
}

impl Listing for BlogPost {
    type Category = PostCategory;

    fn category(&self) -> PostCategory {
        self.category
    }

    fn title(&self) -> &str {
        self.title
    }

    fn summary(&self) -> &str {
        self.excerpt
    }
}

/// Newest first.
pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "The Future of Sustainable Construction",
        excerpt: "Exploring eco-friendly building materials, energy-efficient designs, and sustainable construction practices that are shaping the future of the industry.",
        date: "June 15, 2025",
        author: "Robert Williams",
        image: Photo::pexels(1804035),
        category: PostCategory::Sustainability,
    },
    BlogPost {
        id: 2,
        title: "Home Renovation Trends for 2025",
        excerpt: "Discover the latest trends in home renovations, from open concept living spaces to smart home integrations and multifunctional rooms.",
        date: "May 28, 2025",
        author: "Sarah Johnson",
        image: Photo::pexels(1648771),
        category: PostCategory::Renovations,
    },
    BlogPost {
        id: 3,
        title: "Commercial Building Design: Form Meets Function",
        excerpt: "How modern commercial buildings are balancing aesthetic appeal with practical considerations for workspace efficiency and employee well-being.",
        date: "May 10, 2025",
        author: "Michael Thompson",
        image: Photo::pexels(323705),
        category: PostCategory::Commercial,
    },
    BlogPost {
        id: 4,
        title: "The Impact of Technology on Construction",
        excerpt: "From BIM and 3D printing to drones and robotics, how technology is revolutionizing the construction industry and improving efficiency.",
        date: "April 22, 2025",
        author: "Jennifer Lee",
        image: Photo::pexels_named(159306, "construction-site-build-construction-work-159306"),
        category: PostCategory::Technology,
    },
    BlogPost {
        id: 5,
        title: "Choosing the Right Contractor for Your Project",
        excerpt: "Essential tips for selecting a qualified and reliable contractor who will deliver your construction project on time and within budget.",
        date: "April 8, 2025",
        author: "Robert Williams",
        image: Photo::pexels(4513940),
        category: PostCategory::Tips,
    },
    BlogPost {
        id: 6,
        title: "Urban Development: Challenges and Solutions",
        excerpt: "Addressing the challenges of urban construction and development, from space constraints to regulatory compliance and community impact.",
        date: "March 19, 2025",
        author: "Michael Thompson",
        image: Photo::pexels(2884867),
        category: PostCategory::UrbanDevelopment,
    },
];

pub fn post(id: u32) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.id == id)
}

pub fn recent_posts() -> &'static [BlogPost] {
    &BLOG_POSTS[..3]
}

// ---------------------------------------------------------------------------
// People and company copy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub image: Photo,
}

pub const MAX_RATING: usize = 5;

impl Testimonial {
    /// One entry per star slot, `true` where the star is filled.
    pub fn stars(&self) -> [bool; MAX_RATING] {
        let filled = usize::from(self.rating).min(MAX_RATING);
        std::array::from_fn(|i| i < filled)
    }
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Michael Roberts",
        role: "Homeowner",
        content: "BuildMaster transformed our outdated home into a modern masterpiece. Their attention to detail and quality craftsmanship exceeded our expectations.",
        rating: 5,
        image: Photo::pexels(220453),
    },
    Testimonial {
        name: "Sarah Johnson",
        role: "Property Developer",
        content: "Working with BuildMaster on our commercial project was a seamless experience. They delivered on schedule and within budget, with exceptional quality.",
        rating: 5,
        image: Photo::pexels(774909),
    },
    Testimonial {
        name: "David Chen",
        role: "Architect",
        content: "As an architect, I appreciate contractors who understand design intent. BuildMaster not only understood our vision but enhanced it with their expertise.",
        rating: 5,
        image: Photo::pexels(614810),
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: Photo,
    pub bio: &'static str,
}

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Robert Williams",
        role: "Founder & CEO",
        image: Photo::pexels(2379004),
        bio: "With over 30 years of experience in construction, Robert founded BuildMaster to deliver exceptional quality and service to clients.",
    },
    TeamMember {
        name: "Jennifer Lee",
        role: "Chief Architect",
        image: Photo::pexels(774909),
        bio: "Jennifer brings creative vision and technical expertise to every project, ensuring both aesthetic appeal and structural integrity.",
    },
    TeamMember {
        name: "Michael Thompson",
        role: "Project Manager",
        image: Photo::pexels(220453),
        bio: "Michael's attention to detail and organizational skills ensure that all projects are completed on time and within budget.",
    },
    TeamMember {
        name: "Sarah Johnson",
        role: "Interior Designer",
        image: Photo::pexels(415829),
        bio: "Sarah transforms spaces with her innovative designs, creating functional and beautiful interiors for all our projects.",
    },
];

/// (title, description)
pub static CORE_VALUES: &[(&str, &str)] = &[
    ("Quality", "We never compromise on the quality of materials or workmanship in any project we undertake."),
    ("Integrity", "Honest communication and transparent practices are the foundation of our business relationships."),
    ("Innovation", "We continuously seek innovative solutions and embrace new technologies in construction."),
    ("Reliability", "Our clients can depend on us to deliver projects on time, within budget, and to specification."),
    ("Safety", "The safety of our workers, clients, and the public is our top priority on every project."),
    ("Sustainability", "We are committed to environmentally responsible construction practices and materials."),
];

pub static WHY_CHOOSE_US: &[&str] = &[
    "Over 25 years of industry experience",
    "A team of certified and highly skilled professionals",
    "Comprehensive services from planning to completion",
    "Use of premium materials and modern techniques",
    "Strict adherence to timelines and budgets",
    "Outstanding client support and communication",
    "Sustainable building practices",
    "Fully licensed, bonded, and insured",
];

pub static HOME_HIGHLIGHTS: &[&str] = &[
    "Experienced team of construction professionals",
    "Quality materials and superior craftsmanship",
    "On-time project completion and transparent pricing",
    "Comprehensive construction solutions",
    "Exceptional customer service and communication",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Home,
    Building,
    Hammer,
    PaintBucket,
    HardHat,
    Ruler,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: &[Service] = &[
    Service {
        icon: ServiceIcon::Home,
        title: "Residential Construction",
        description: "Custom home building with premium materials and superior craftsmanship for your dream residence.",
    },
    Service {
        icon: ServiceIcon::Building,
        title: "Commercial Buildings",
        description: "Office buildings, retail spaces, and industrial facilities built to precise specifications.",
    },
    Service {
        icon: ServiceIcon::Hammer,
        title: "Renovation & Remodeling",
        description: "Transform existing spaces with our expert renovation and remodeling services.",
    },
    Service {
        icon: ServiceIcon::PaintBucket,
        title: "Interior Design",
        description: "Professional interior design services to create beautiful and functional spaces.",
    },
    Service {
        icon: ServiceIcon::HardHat,
        title: "Project Management",
        description: "Complete project management from planning and design to construction and finishing.",
    },
    Service {
        icon: ServiceIcon::Ruler,
        title: "Consulting Services",
        description: "Expert construction consulting for architects, developers, and homeowners.",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
    pub suffix: &'static str,
    /// Count-up duration in seconds.
    pub duration: f64,
}

pub static STATS: &[Stat] = &[
    Stat { value: 25, label: "Years of Experience", suffix: "+", duration: 2.0 },
    Stat { value: 500, label: "Projects Completed", suffix: "+", duration: 2.5 },
    Stat { value: 150, label: "Professional Team", suffix: "+", duration: 2.3 },
    Stat { value: 98, label: "Client Satisfaction", suffix: "%", duration: 2.7 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_lookups_work() {
        for (i, p) in PROJECTS.iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
            assert_eq!(project(p.id), Some(p));
        }
        assert_eq!(project(0), None);
        assert_eq!(post(6).map(|p| p.title), Some("Urban Development: Challenges and Solutions"));
        assert_eq!(post(99), None);
    }

    #[test]
    fn every_project_category_has_projects() {
        for category in ProjectCategory::ALL {
            assert!(PROJECTS.iter().any(|p| p.category == *category), "{category} is empty");
        }
    }

    #[test]
    fn galleries_start_with_the_cover_photo() {
        for p in PROJECTS {
            assert_eq!(p.gallery.first(), Some(&p.image));
        }
    }

    #[test]
    fn stars_clamp_to_five() {
        let mut t = TESTIMONIALS[0].clone();
        t.rating = 3;
        assert_eq!(t.stars(), [true, true, true, false, false]);
        t.rating = 9;
        assert_eq!(t.stars(), [true; 5]);
        t.rating = 0;
        assert_eq!(t.stars(), [false; 5]);
    }

    #[test]
    fn photo_urls() {
        assert_eq!(
            Photo::pexels(42).url(),
            "https://images.pexels.com/photos/42/pexels-photo-42.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
        );
        assert!(BLOG_HEADER_PHOTO.url().contains("/159306/construction-site-build-construction-work-159306.jpeg?"));
    }
}
