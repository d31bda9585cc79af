use yew::prelude::*;

use crate::components::reveal::{Reveal, SectionHeader};
use crate::hooks::scroll_to_section;

pub const ALL: &str = "All";
pub const CATEGORIES: &[&str] = &[ALL, "Restaurant", "Salon", "Retail", "Professional", "Healthcare"];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub color: &'static str,
    pub emoji: &'static str,
    pub visits: &'static str,
    pub conversion: &'static str,
    pub rating: &'static str,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "La Maison Rouge",
        category: "Restaurant",
        description: "Elegant French bistro with online reservations, menu showcase, and delivery integration.",
        tags: &["React", "Booking API", "Stripe"],
        color: "#ff6584",
        emoji: "🍽️",
        visits: "12K/mo",
        conversion: "+220%",
        rating: "4.9★",
        featured: true,
    },
    Project {
        title: "Glow Beauty Studio",
        category: "Salon",
        description: "Modern beauty salon with appointment booking, service gallery, and loyalty rewards.",
        tags: &["Next.js", "Calendly", "Tailwind"],
        color: "#a78bfa",
        emoji: "💅",
        visits: "8K/mo",
        conversion: "+185%",
        rating: "5.0★",
        featured: false,
    },
    Project {
        title: "Summit Law Group",
        category: "Professional",
        description: "Professional law firm website with case consultations, practice areas, and attorney profiles.",
        tags: &["React", "CMS", "Animations"],
        color: "#43e8d8",
        emoji: "⚖️",
        visits: "5K/mo",
        conversion: "+310%",
        rating: "4.8★",
        featured: false,
    },
    Project {
        title: "Urban Threads Boutique",
        category: "Retail",
        description: "Fashion e-commerce store with product catalog, lookbooks, and seamless checkout.",
        tags: &["React", "Shopify", "Analytics"],
        color: "#fbbf24",
        emoji: "👗",
        visits: "20K/mo",
        conversion: "+160%",
        rating: "4.9★",
        featured: true,
    },
    Project {
        title: "WellCare Clinic",
        category: "Healthcare",
        description: "Patient-friendly medical clinic with appointment booking and service information.",
        tags: &["React", "HIPAA", "Forms"],
        color: "#34d399",
        emoji: "🏥",
        visits: "7K/mo",
        conversion: "+240%",
        rating: "4.7★",
        featured: false,
    },
    Project {
        title: "Pixel Perfect Prints",
        category: "Retail",
        description: "Custom print shop with live design preview, product configurator, and order tracking.",
        tags: &["Vue", "Canvas API", "Stripe"],
        color: "#38bdf8",
        emoji: "🖨️",
        visits: "9K/mo",
        conversion: "+195%",
        rating: "4.8★",
        featured: false,
    },
];

/// `"All"` keeps everything; any other category is an exact match. Order is
/// preserved either way.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| category == ALL || project.category == category)
        .collect()
}

/// Fake address shown in the browser-chrome mockup.
pub fn preview_domain(title: &str) -> String {
    let host: String = title
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    format!("www.{}.com", host)
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let stats = [
        ("visits", project.visits),
        ("conversion", project.conversion),
        ("rating", project.rating),
    ];

    html! {
        <Reveal delay={props.index as f64 * 0.1}>
            <div
                class={classes!("project-card", project.featured.then(|| "featured"))}
                style={format!("--accent: {};", project.color)}
            >
                <div class="project-preview">
                    <div class="browser-chrome">
                        <span class="chrome-dot red" />
                        <span class="chrome-dot amber" />
                        <span class="chrome-dot green" />
                        <div class="chrome-url">{ preview_domain(project.title) }</div>
                    </div>
                    <div class="preview-body">
                        <span class="preview-emoji">{ project.emoji }</span>
                        <div class="preview-title">{ project.title }</div>
                        <div class="preview-category">{ project.category }</div>
                        <div class="preview-overlay">
                            <button class="overlay-button">{"👁 Preview"}</button>
                            <button class="overlay-button solid">{"↗ Live Demo"}</button>
                        </div>
                    </div>
                </div>

                <div class="project-body">
                    <div class="project-heading">
                        <div>
                            <h3>{ project.title }</h3>
                            <span class="project-pill">{ project.category }</span>
                        </div>
                        <span class="project-chevron">{"›"}</span>
                    </div>
                    <p class="project-description">{ project.description }</p>
                    <div class="project-stats">
                        { for stats.iter().map(|(key, value)| html! {
                            <div class="project-stat">
                                <div class="project-stat-value">{ *value }</div>
                                <div class="project-stat-key">{ *key }</div>
                            </div>
                        }) }
                    </div>
                    <div class="project-tags">
                        { for project.tags.iter().map(|tag| html! { <span class="project-tag">{ *tag }</span> }) }
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active = use_state(|| ALL);
    let visible = filter_projects(PROJECTS, *active);

    html! {
        <section id="portfolio" class="section portfolio">
            <div class="section-inner">
                <SectionHeader
                    badge="Our Work"
                    badge_color="#43e8d8"
                    title="Businesses We've"
                    highlight="Transformed"
                    subtitle="Real businesses, real results. Here's a glimpse of what we've built for our clients."
                />

                <Reveal delay={0.3} class={classes!("filter-tabs")}>
                    { for CATEGORIES.iter().map(|category| {
                        let onclick = {
                            let active = active.clone();
                            let category = *category;
                            Callback::from(move |_: MouseEvent| active.set(category))
                        };
                        html! {
                            <button
                                class={classes!("filter-tab", (*active == *category).then(|| "active"))}
                                {onclick}
                            >
                                { *category }
                            </button>
                        }
                    }) }
                </Reveal>

                <div class="project-grid">
                    { for visible.into_iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.title} {project} {index} />
                    }) }
                </div>

                <Reveal class={classes!("portfolio-cta")}>
                    <p>{"Want something like this for your business?"}</p>
                    <button class="gradient-button" onclick={Callback::from(|_: MouseEvent| scroll_to_section("contact"))}>
                        {"Let's Build Yours →"}
                    </button>
                </Reveal>
            </div>

            <style>
                {r#"
                    .filter-tabs {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-bottom: 2.5rem;
                    }
                    .filter-tab {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.03);
                        color: #8888aa;
                        font-weight: 600;
                        font-size: 0.875rem;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .filter-tab:hover { color: white; border-color: rgba(108, 99, 255, 0.3); }
                    .filter-tab.active {
                        background: #6c63ff;
                        color: white;
                        box-shadow: 0 0 20px rgba(108, 99, 255, 0.3);
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 1.5rem;
                    }
                    .project-card {
                        border-radius: 1.5rem;
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        transition: border-color 0.5s;
                    }
                    .project-card:hover { border-color: rgba(255, 255, 255, 0.1); }
                    .project-preview { position: relative; height: 13rem; overflow: hidden; }
                    .browser-chrome {
                        height: 2rem;
                        display: flex;
                        align-items: center;
                        gap: 0.375rem;
                        padding: 0 0.75rem;
                        background: #1a1a30;
                    }
                    .chrome-dot { width: 0.625rem; height: 0.625rem; border-radius: 50%; }
                    .chrome-dot.red { background: #ff5f57; }
                    .chrome-dot.amber { background: #febc2e; }
                    .chrome-dot.green { background: #28c840; }
                    .chrome-url {
                        flex: 1;
                        margin: 0 0.75rem;
                        padding: 0 0.5rem;
                        border-radius: 0.375rem;
                        background: #0a0a0f;
                        color: #8888aa;
                        font-size: 9px;
                        white-space: nowrap;
                        overflow: hidden;
                        text-overflow: ellipsis;
                    }
                    .preview-body {
                        position: relative;
                        height: calc(100% - 2rem);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        background: linear-gradient(135deg, color-mix(in srgb, var(--accent) 20%, transparent), transparent);
                    }
                    .preview-emoji { font-size: 3.75rem; }
                    .preview-title { color: var(--accent); font-size: 1.5rem; font-weight: 900; }
                    .preview-category { color: #8888aa; font-size: 0.75rem; }
                    .preview-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        background: color-mix(in srgb, var(--accent) 8%, transparent);
                        opacity: 0;
                        transition: opacity 0.2s;
                    }
                    .project-card:hover .preview-overlay { opacity: 1; }
                    .overlay-button {
                        padding: 0.5rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.06);
                        color: white;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .overlay-button.solid { background: var(--accent); border: none; }
                    .project-body { padding: 1.25rem; }
                    .project-heading {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        margin-bottom: 0.75rem;
                    }
                    .project-heading h3 { color: white; font-size: 1.125rem; margin: 0; }
                    .project-pill {
                        display: inline-block;
                        margin-top: 0.375rem;
                        padding: 0.125rem 0.625rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: var(--accent);
                        background: color-mix(in srgb, var(--accent) 12%, transparent);
                    }
                    .project-chevron { color: #8888aa; font-size: 1.5rem; transition: transform 0.3s, color 0.3s; }
                    .project-card:hover .project-chevron { color: var(--accent); transform: translateX(4px); }
                    .project-description { color: #8888aa; font-size: 0.875rem; line-height: 1.6; margin-bottom: 1rem; }
                    .project-stats { display: flex; gap: 0.75rem; margin-bottom: 1rem; }
                    .project-stat {
                        flex: 1;
                        text-align: center;
                        padding: 0.5rem 0;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .project-stat-value { color: white; font-weight: 700; font-size: 0.875rem; }
                    .project-stat-key { color: #8888aa; font-size: 10px; text-transform: capitalize; }
                    .project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                    .project-tag {
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.375rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        color: #8888aa;
                        font-size: 10px;
                    }
                    .portfolio-cta { text-align: center; margin-top: 3.5rem; }
                    .portfolio-cta p { color: #8888aa; margin-bottom: 1rem; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keeps_every_project_in_order() {
        let all = filter_projects(PROJECTS, ALL);
        let titles: Vec<_> = all.iter().map(|p| p.title).collect();
        let expected: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn category_is_an_exact_match() {
        let restaurants = filter_projects(PROJECTS, "Restaurant");
        assert_eq!(restaurants.len(), 1);
        assert!(restaurants.iter().all(|p| p.category == "Restaurant"));

        let retail: Vec<_> = filter_projects(PROJECTS, "Retail").iter().map(|p| p.title).collect();
        assert_eq!(retail, vec!["Urban Threads Boutique", "Pixel Perfect Prints"]);

        assert!(filter_projects(PROJECTS, "restaurant").is_empty());
        assert!(filter_projects(PROJECTS, "Bakery").is_empty());
    }

    #[test]
    fn every_tab_except_all_matches_some_project() {
        for category in CATEGORIES.iter().filter(|c| **c != ALL) {
            assert!(!filter_projects(PROJECTS, category).is_empty(), "{category} is empty");
        }
    }

    #[test]
    fn preview_domain_strips_spaces_and_case() {
        assert_eq!(preview_domain("La Maison Rouge"), "www.lamaisonrouge.com");
        assert_eq!(preview_domain("WellCare  Clinic"), "www.wellcareclinic.com");
    }
}
