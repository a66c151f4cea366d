//! One template per portfolio section. Each view is built from its own
//! slice of the document only.

use askama::Template;

use crate::{
    content::application::domain::entities::{
        Award, Certification, Education, Experience, PersonalInfo, Project, Research,
        SkillsGroup,
    },
    site::application::{
        presentation::{
            capped_tech_badges, company_initials, gmail_compose_link, initials, slug, Tag,
        },
        skills_filter::filter_skills,
    },
};

pub const PUBLISHED_STATUS: &str = "Published";

// ──────────────────────────────────────────────────────────
// Frame
// ──────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "sections/nav.html")]
pub struct NavHeader {
    pub brand: String,
    pub links: Vec<Tag>,
}

impl NavHeader {
    const LINKS: [&'static str; 7] = [
        "About",
        "Skills",
        "Experience",
        "Projects",
        "Research",
        "Certifications",
        "Contact",
    ];

    pub fn new(info: &PersonalInfo) -> Self {
        Self {
            brand: initials(&info.name),
            links: Self::LINKS.iter().map(|label| Tag::new(label)).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "sections/footer.html")]
pub struct Footer<'a> {
    pub year: i32,
    pub name: &'a str,
}

// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "sections/hero.html")]
pub struct HeroSection<'a> {
    pub info: &'a PersonalInfo,
    pub has_photo: bool,
    pub initials: String,
}

impl<'a> HeroSection<'a> {
    pub fn new(info: &'a PersonalInfo) -> Self {
        Self {
            info,
            has_photo: !info.photo.trim().is_empty(),
            initials: initials(&info.name),
        }
    }
}

#[derive(Template)]
#[template(path = "sections/about.html")]
pub struct AboutSection<'a> {
    pub info: &'a PersonalInfo,
    pub education: &'a [Education],
}

impl<'a> AboutSection<'a> {
    pub fn new(info: &'a PersonalInfo, education: &'a [Education]) -> Self {
        Self { info, education }
    }
}

pub struct SkillCategoryView {
    pub name: String,
    pub slug: String,
    pub skills: Vec<Tag>,
}

#[derive(Template)]
#[template(path = "sections/skills.html")]
pub struct SkillsSection {
    pub query: String,
    pub categories: Vec<SkillCategoryView>,
}

impl SkillsSection {
    pub fn new(skills: &SkillsGroup, query: &str) -> Self {
        let categories = filter_skills(skills, query)
            .into_iter()
            .map(|category| SkillCategoryView {
                slug: slug(&category.name),
                skills: category.skills.iter().map(|s| Tag::new(s)).collect(),
                name: category.name,
            })
            .collect();

        Self {
            query: query.to_string(),
            categories,
        }
    }
}

pub struct ExperienceCard<'a> {
    pub exp: &'a Experience,
    pub initials: String,
    pub tech: Vec<Tag>,
}

#[derive(Template)]
#[template(path = "sections/experience.html")]
pub struct ExperienceSection<'a> {
    pub items: Vec<ExperienceCard<'a>>,
}

impl<'a> ExperienceSection<'a> {
    pub fn new(experience: &'a [Experience]) -> Self {
        let items = experience
            .iter()
            .map(|exp| ExperienceCard {
                exp,
                initials: company_initials(&exp.company),
                tech: exp.tech_stack.iter().map(|t| Tag::new(t)).collect(),
            })
            .collect();
        Self { items }
    }
}

pub struct ProjectCard<'a> {
    pub project: &'a Project,
    pub badges: Vec<Tag>,
    pub hidden: usize,
}

#[derive(Template)]
#[template(path = "sections/projects.html")]
pub struct ProjectsSection<'a> {
    pub items: Vec<ProjectCard<'a>>,
}

impl<'a> ProjectsSection<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        let items = projects
            .iter()
            .map(|project| {
                let (badges, hidden) = capped_tech_badges(&project.technologies);
                ProjectCard {
                    project,
                    badges,
                    hidden,
                }
            })
            .collect();
        Self { items }
    }
}

pub struct ResearchCard<'a> {
    pub paper: &'a Research,
    pub published: bool,
}

#[derive(Template)]
#[template(path = "sections/research.html")]
pub struct ResearchSection<'a> {
    pub items: Vec<ResearchCard<'a>>,
}

impl<'a> ResearchSection<'a> {
    pub fn new(research: &'a [Research]) -> Self {
        let items = research
            .iter()
            .map(|paper| ResearchCard {
                paper,
                published: paper.status == PUBLISHED_STATUS,
            })
            .collect();
        Self { items }
    }
}

#[derive(Template)]
#[template(path = "sections/certifications.html")]
pub struct CertificationsSection<'a> {
    pub certifications: &'a [Certification],
    pub awards: &'a [Award],
}

impl<'a> CertificationsSection<'a> {
    pub fn new(certifications: &'a [Certification], awards: &'a [Award]) -> Self {
        Self {
            certifications,
            awards,
        }
    }
}

pub struct ContactLink {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub href: String,
    pub external: bool,
}

#[derive(Template)]
#[template(path = "sections/contact.html")]
pub struct ContactSection {
    pub first_name: String,
    pub gmail_link: String,
    pub links: Vec<ContactLink>,
}

impl ContactSection {
    pub fn new(info: &PersonalInfo) -> Self {
        let gmail_link = gmail_compose_link(&info.email);
        let links = vec![
            ContactLink {
                key: "email",
                label: "Email",
                value: info.email.clone(),
                href: gmail_link.clone(),
                external: true,
            },
            ContactLink {
                key: "phone",
                label: "Phone",
                value: info.phone.clone(),
                href: format!("tel:{}", info.phone),
                external: false,
            },
            ContactLink {
                key: "linkedin",
                label: "LinkedIn",
                value: "Connect on LinkedIn".to_string(),
                href: info.linkedin.clone(),
                external: true,
            },
            ContactLink {
                key: "github",
                label: "GitHub",
                value: "View GitHub Profile".to_string(),
                href: info.github.clone(),
                external: true,
            },
        ];

        Self {
            first_name: info.name.split(' ').next().unwrap_or_default().to_string(),
            gmail_link,
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::entities::ProjectOutcome;

    fn info() -> PersonalInfo {
        PersonalInfo {
            name: "Ada Lovelace".to_string(),
            title: "Engineer".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555 0100".to_string(),
            summary: "Writes the first programs".to_string(),
            highlights: vec!["Math".to_string(), "Engines".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn hero_falls_back_to_initials_without_photo() {
        let info = info();

        let html = HeroSection::new(&info).render().unwrap();

        assert!(html.contains("data-testid=\"avatar-fallback\""));
        assert!(html.contains(">AL<"));
        assert!(html.contains("Ada Lovelace"));
    }

    #[test]
    fn hero_shows_photo_when_present() {
        let mut info = info();
        info.photo = "photo.png".to_string();

        let html = HeroSection::new(&info).render().unwrap();

        assert!(html.contains("src=\"photo.png\""));
        assert!(!html.contains("avatar-fallback"));
    }

    #[test]
    fn about_lists_highlights_and_education() {
        let info = info();
        let education = vec![Education {
            degree: "BSc Mathematics".to_string(),
            cgpa: "9.1".to_string(),
            ..Default::default()
        }];

        let html = AboutSection::new(&info, &education).render().unwrap();

        assert!(html.contains("data-testid=\"badge-highlight-1\">Engines<"));
        assert!(html.contains("BSc Mathematics"));
        assert!(html.contains("CGPA: 9.1"));
    }

    #[test]
    fn skills_filtered_by_query() {
        let skills = SkillsGroup {
            languages: vec!["Go".to_string(), "Python".to_string()],
            tools: vec!["Git".to_string()],
            ..Default::default()
        };

        let html = SkillsSection::new(&skills, "go").render().unwrap();

        assert!(html.contains("card-skill-category-languages"));
        assert!(html.contains("badge-skill-go"));
        assert!(!html.contains("badge-skill-python"));
        assert!(!html.contains("card-skill-category-tools"));
    }

    #[test]
    fn skills_without_match_show_message() {
        let html = SkillsSection::new(&SkillsGroup::default(), "cobol")
            .render()
            .unwrap();

        assert!(html.contains("No skills found matching \"cobol\""));
    }

    #[test]
    fn skills_category_ids_are_slugged() {
        let skills = SkillsGroup {
            ml_and_data: vec!["PyTorch".to_string()],
            ..Default::default()
        };

        let html = SkillsSection::new(&skills, "").render().unwrap();

        assert!(html.contains("card-skill-category-ml-&amp;-data"));
    }

    #[test]
    fn experience_shows_two_letter_company_initials() {
        let experience = vec![Experience {
            id: "exp-1".to_string(),
            company: "Analytical Engine Works".to_string(),
            tech_stack: vec!["Punch Cards".to_string()],
            achievements: vec!["Shipped".to_string()],
            ..Default::default()
        }];

        let html = ExperienceSection::new(&experience).render().unwrap();

        assert!(html.contains("data-testid=\"avatar-company-exp-1\">AE<"));
        assert!(html.contains("badge-tech-punch-cards-exp-1"));
        assert!(html.contains("item-achievement-exp-1-0"));
    }

    #[test]
    fn projects_cap_badges_and_count_the_rest() {
        let projects = vec![Project {
            id: "p1".to_string(),
            title: "Engine".to_string(),
            technologies: (1..=9).map(|i| format!("T{}", i)).collect(),
            outcomes: vec![ProjectOutcome {
                metric: "40%".to_string(),
                label: "faster".to_string(),
            }],
            ..Default::default()
        }];

        let html = ProjectsSection::new(&projects).render().unwrap();

        assert!(html.contains("badge-tech-t6-p1"));
        assert!(!html.contains("badge-tech-t7-p1"));
        assert!(html.contains("+3 more"));
        assert!(html.contains("text-outcome-metric-0-p1"));
        assert!(!html.contains("link-github-p1"));
    }

    #[test]
    fn six_or_fewer_badges_have_no_more_badge() {
        let projects = vec![Project {
            id: "p2".to_string(),
            technologies: vec!["Rust".to_string()],
            ..Default::default()
        }];

        let html = ProjectsSection::new(&projects).render().unwrap();

        assert!(!html.contains("badge-tech-more-p2"));
    }

    #[test]
    fn published_research_is_emphasised() {
        let research = vec![
            Research {
                title: "Notes".to_string(),
                status: "Published".to_string(),
                ..Default::default()
            },
            Research {
                title: "Draft".to_string(),
                status: "Under Review".to_string(),
                ..Default::default()
            },
        ];

        let html = ResearchSection::new(&research).render().unwrap();

        assert!(html.contains(
            "class=\"badge emphasis\" data-testid=\"badge-research-status-0\">Published<"
        ));
        assert!(html.contains("class=\"badge\" data-testid=\"badge-research-status-1\">Under Review<"));
    }

    #[test]
    fn certifications_and_awards_render_together() {
        let certs = vec![Certification {
            id: "aws".to_string(),
            name: "Cloud Practitioner".to_string(),
            ..Default::default()
        }];
        let awards = vec![Award {
            title: "Best Paper".to_string(),
            ..Default::default()
        }];

        let html = CertificationsSection::new(&certs, &awards).render().unwrap();

        assert!(html.contains("card-cert-aws"));
        assert!(html.contains("Cloud Practitioner"));
        assert!(html.contains("card-award-0"));
        assert!(html.contains("Best Paper"));
    }

    #[test]
    fn contact_links_to_gmail_compose() {
        let html = ContactSection::new(&info()).render().unwrap();

        assert!(html.contains("to=ada%40example.com"));
        assert!(html.contains("Email Ada<"));
        assert!(html.contains("card-contact-phone"));
        assert!(html.contains("View GitHub Profile"));
    }
}
