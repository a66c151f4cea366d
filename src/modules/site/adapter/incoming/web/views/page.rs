use askama::Template;

use crate::{
    content::application::domain::entities::PortfolioContent,
    site::adapter::incoming::web::views::sections::{
        AboutSection, CertificationsSection, ContactSection, ExperienceSection, Footer,
        HeroSection, NavHeader, ProjectsSection, ResearchSection, SkillsSection,
    },
};

#[derive(Template)]
#[template(path = "page.html")]
struct PortfolioPage {
    title: String,
    nav: String,
    sections: Vec<String>,
    footer: String,
}

#[derive(Template)]
#[template(path = "load_failed.html")]
struct LoadFailedPage {
    message: &'static str,
}

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load portfolio content.";

/// Renders the whole page. Sections always appear in the same order
/// between the navigation header and the footer.
pub fn render_portfolio(
    content: &PortfolioContent,
    skills_query: &str,
    year: i32,
) -> Result<String, askama::Error> {
    let info = &content.personal_info;

    let sections = vec![
        HeroSection::new(info).render()?,
        AboutSection::new(info, &content.education).render()?,
        SkillsSection::new(&content.skills, skills_query).render()?,
        ExperienceSection::new(&content.experience).render()?,
        ProjectsSection::new(&content.projects).render()?,
        ResearchSection::new(&content.research).render()?,
        CertificationsSection::new(&content.certifications, &content.awards).render()?,
        ContactSection::new(info).render()?,
    ];

    let title = if info.title.is_empty() {
        info.name.clone()
    } else {
        format!("{} | {}", info.name, info.title)
    };

    PortfolioPage {
        title,
        nav: NavHeader::new(info).render()?,
        sections,
        footer: Footer {
            year,
            name: &info.name,
        }
        .render()?,
    }
    .render()
}

pub fn render_load_failed() -> Result<String, askama::Error> {
    LoadFailedPage {
        message: LOAD_FAILED_MESSAGE,
    }
    .render()
}
