use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::shared::{CtaSection, PageHeader, SectionTitle};
use crate::motion::hooks::{use_in_view, use_page_title};
use crate::motion::reveal::{Motion, Trigger};
use crate::site::content::{CORE_VALUES, SITE_PHOTO, TEAM, TEAM_AT_WORK_PHOTO, WHY_CHOOSE_US};
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    use_page_title(Route::About.page_title());

    let mission = use_node_ref();
    let values = use_node_ref();
    let team = use_node_ref();
    let mission_shown = use_in_view(mission.clone(), Trigger::at(0.7));
    let values_shown = use_in_view(values.clone(), Trigger::at(0.7));
    let team_shown = use_in_view(team.clone(), Trigger::at(0.7));

    let column = Motion::rise(30.0).duration(0.8);
    let card = Motion::rise(30.0).duration(0.7);

    html! {
        <div class="about-page">
            <PageHeader
                title="About BuildMaster Construction"
                subtitle="Learn about our company, our mission, and our dedicated team"
                image={SITE_PHOTO}
            />

            <section class="section-padding">
                <div class="container-custom split">
                    <div>
                        <SectionTitle title="Our Story" subtitle="Building excellence since 2000" />
                        <p class="muted">
                            {"BuildMaster Construction was founded in 2000 by Robert Williams, a master builder with a vision of creating a construction company that would prioritize quality craftsmanship, innovative design, and exceptional customer service."}
                        </p>
                        <p class="muted">
                            {"Over the past two decades, we have grown from a small local contractor to one of the region's most respected construction firms, with a portfolio spanning residential homes, commercial buildings, and major renovation projects."}
                        </p>
                        <p class="muted">
                            {"Today, BuildMaster employs a team of over 150 construction professionals, including architects, engineers, project managers, and skilled tradespeople, all committed to our founding principles of excellence, integrity, and client satisfaction."}
                        </p>
                    </div>
                    <div>
                        <img class="rounded-photo" src={TEAM_AT_WORK_PHOTO.url()} alt="BuildMaster team at work" />
                    </div>
                </div>
            </section>

            <section ref={mission} class="section-padding mission">
                <div class="container-custom split">
                    <div style={column.style(mission_shown, 0, 0.2)}>
                        <SectionTitle title="Our Mission" light={true} />
                        <p>
                            {"At BuildMaster Construction, our mission is to deliver exceptional construction services that exceed client expectations. We are committed to creating spaces that inspire, endure, and add value to our clients' lives and businesses."}
                        </p>
                        <p>
                            {"We achieve this through our unwavering commitment to quality craftsmanship, innovative solutions, and sustainable building practices, all delivered by a team of passionate construction professionals."}
                        </p>
                    </div>
                    <div style={column.style(mission_shown, 1, 0.2)}>
                        <SectionTitle title="Our Vision" light={true} />
                        <p>
                            {"Our vision is to be the most trusted and respected construction company in the region, known for our exceptional quality, innovation, and client satisfaction."}
                        </p>
                        <p>
                            {"We strive to be a leader in sustainable construction practices, embracing new technologies and methods that enhance both the building process and the final product. We envision a future where our buildings stand as testaments to our commitment to excellence and environmental responsibility."}
                        </p>
                    </div>
                </div>
            </section>

            <section ref={values} class="section-padding">
                <div class="container-custom">
                    <SectionTitle
                        title="Our Core Values"
                        subtitle="The principles that guide everything we do"
                        centered={true}
                    />
                    <div class="grid grid-3">
                        { for CORE_VALUES.iter().enumerate().map(|(i, (title, description))| html! {
                            <div class="value-card" style={card.style(values_shown, i, 0.15)}>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section ref={team} class="section-padding bg-light">
                <div class="container-custom">
                    <SectionTitle
                        title="Meet Our Team"
                        subtitle="The experienced professionals behind our success"
                        centered={true}
                    />
                    <div class="grid grid-4">
                        { for TEAM.iter().enumerate().map(|(i, member)| html! {
                            <div class="team-member" style={card.style(team_shown, i, 0.15)}>
                                <div class="team-photo">
                                    <img src={member.image.url()} alt={member.name} />
                                </div>
                                <div class="team-body">
                                    <h3>{member.name}</h3>
                                    <p class="accent">{member.role}</p>
                                    <p>{member.bio}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section-padding">
                <div class="container-custom split">
                    <div>
                        <img class="rounded-photo" src={SITE_PHOTO.url()} alt="Construction site" />
                    </div>
                    <div>
                        <SectionTitle title="Why Choose BuildMaster" subtitle="What sets us apart from the competition" />
                        <div class="reasons">
                            { for WHY_CHOOSE_US.iter().map(|reason| html! {
                                <div class="reason">
                                    <Icon kind={IconKind::CheckCircle} size={20} class={classes!("accent")} />
                                    <p>{*reason}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <CtaSection
                title="Ready to Begin Your Construction Journey?"
                subtitle="Let's discuss your project and how BuildMaster can bring your vision to life."
                button_text="Contact Us Today"
                to={Route::Contact}
            />

            <style>
                {r#"
                .split {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .muted { color: #4b5563; margin: 0 0 1.5rem; }
                .rounded-photo { border-radius: 0.5rem; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); width: 100%; }
                .mission { background: #1e3a8a; color: #ffffff; }
                .mission .split { align-items: start; }
                .mission p { color: #dbeafe; margin: 0 0 1.5rem; }
                .value-card {
                    background: #ffffff;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
                    border-top: 4px solid #f97316;
                }
                .value-card h3 { color: #1e3a8a; font-size: 1.25rem; margin-bottom: 0.75rem; }
                .value-card p { color: #4b5563; margin: 0; }
                .team-member { background: #ffffff; border-radius: 0.5rem; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07); }
                .team-photo { aspect-ratio: 1 / 1; }
                .team-photo img { width: 100%; height: 100%; object-fit: cover; }
                .team-body { padding: 1.5rem; }
                .team-body h3 { color: #1e3a8a; font-size: 1.25rem; }
                .team-body p { color: #4b5563; margin: 0; }
                .team-body p.accent { color: #f97316; margin-bottom: 0.75rem; }
                .reasons { display: grid; gap: 1rem; }
                .reason { display: flex; align-items: flex-start; gap: 0.75rem; }
                .reason .icon { flex-shrink: 0; margin-top: 0.25rem; }
                .reason p { color: #4b5563; margin: 0; }
                "#}
            </style>
        </div>
    }
}
