//! Static site content.
#![allow(dead_code)]
//!
//! Everything the marketing pages show is seeded here as plain data: hero,
//! about, the experience timeline, grouped skills with proficiency levels,
//! education, certifications, contact channels, the navigation items, the
//! travel-blog cards and their storybooks. Handlers serve it read-only.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::book::{Book, BookPage, ImagePosition};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub greeting: String,
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub paragraphs: Vec<String>,
}

/// One card on the experience timeline. Free-form period text ("Jun 2022 -
/// Present · 2 yrs"), unlike the résumé's structured dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatedSkill {
    pub name: String,
    /// Self-assessed proficiency, 0–100, drives the bar width.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<RatedSkill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationCard {
    pub institution: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationCard {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelBlogCard {
    /// Also the slug of the storybook this card opens.
    pub slug: String,
    pub title: String,
    pub location: String,
    pub date: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub experience: Vec<TimelineEntry>,
    pub skill_groups: Vec<SkillGroup>,
    pub education: Vec<EducationCard>,
    pub certifications: Vec<CertificationCard>,
    pub contact: Vec<ContactChannel>,
    pub nav_items: Vec<NavItem>,
    pub blogs: Vec<TravelBlogCard>,
    pub books: Vec<Book>,
}

impl SiteContent {
    pub fn book(&self, slug: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.slug == slug)
    }

    pub fn blog(&self, slug: &str) -> Option<&TravelBlogCard> {
        self.blogs.iter().find(|b| b.slug == slug)
    }

    /// The in-page section anchors the scroll-spy tracks, in DOM order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.nav_items.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn seed() -> Self {
        SiteContent {
            hero: HeroContent {
                greeting: "Hi, I'm".to_string(),
                name: "Alex Carter".to_string(),
                tagline: "I build web platforms and the tooling behind them.".to_string(),
            },
            about: AboutContent {
                paragraphs: vec![
                    "I'm a software engineer who likes working where product and \
                     infrastructure meet: dashboards people actually open, pipelines \
                     that stay quiet, and the occasional side project that gets out \
                     of hand."
                        .to_string(),
                    "Away from a keyboard I'm usually on a trail or planning the \
                     next trip — some of those stories live on the travel page."
                        .to_string(),
                ],
            },
            experience: vec![
                TimelineEntry {
                    title: "Software Development Engineer".to_string(),
                    company: "Northwind Systems".to_string(),
                    period: "Jun 2022 - Present".to_string(),
                    location: "Portland, OR".to_string(),
                    highlights: vec![
                        "Own the board-validation pipeline used across three product lines."
                            .to_string(),
                        "Cut regression triage time in half with a rules engine.".to_string(),
                    ],
                },
                TimelineEntry {
                    title: "Graduate Engineering Intern".to_string(),
                    company: "Northwind Systems".to_string(),
                    period: "Aug 2021 - Jun 2022".to_string(),
                    location: "Portland, OR".to_string(),
                    highlights: vec![
                        "Prototyped lab-host telemetry collection, later adopted team-wide."
                            .to_string(),
                    ],
                },
                TimelineEntry {
                    title: "Research Intern".to_string(),
                    company: "Brightline Labs".to_string(),
                    period: "Apr 2020 - May 2020".to_string(),
                    location: "Remote".to_string(),
                    highlights: vec![
                        "Built data-collection scripts for a mobility study.".to_string(),
                    ],
                },
            ],
            skill_groups: vec![
                SkillGroup {
                    name: "Development".to_string(),
                    skills: vec![
                        RatedSkill {
                            name: "Python".to_string(),
                            level: 90,
                        },
                        RatedSkill {
                            name: "TypeScript".to_string(),
                            level: 85,
                        },
                        RatedSkill {
                            name: "React".to_string(),
                            level: 85,
                        },
                        RatedSkill {
                            name: "Node.js".to_string(),
                            level: 80,
                        },
                        RatedSkill {
                            name: "Flask".to_string(),
                            level: 75,
                        },
                    ],
                },
                SkillGroup {
                    name: "Tools & Practices".to_string(),
                    skills: vec![
                        RatedSkill {
                            name: "Git".to_string(),
                            level: 85,
                        },
                        RatedSkill {
                            name: "Docker".to_string(),
                            level: 70,
                        },
                        RatedSkill {
                            name: "CI/CD".to_string(),
                            level: 70,
                        },
                        RatedSkill {
                            name: "REST APIs".to_string(),
                            level: 85,
                        },
                    ],
                },
                SkillGroup {
                    name: "Data".to_string(),
                    skills: vec![
                        RatedSkill {
                            name: "PostgreSQL".to_string(),
                            level: 75,
                        },
                        RatedSkill {
                            name: "Data Analysis".to_string(),
                            level: 75,
                        },
                        RatedSkill {
                            name: "Machine Learning".to_string(),
                            level: 55,
                        },
                    ],
                },
            ],
            education: vec![
                EducationCard {
                    institution: "Lakeview Institute of Technology".to_string(),
                    degree: "M.S. Computer Science".to_string(),
                    period: "2016 - 2021".to_string(),
                },
                EducationCard {
                    institution: "Riverside Junior College".to_string(),
                    degree: "Higher Secondary, Science".to_string(),
                    period: "2014 - 2016".to_string(),
                },
            ],
            certifications: vec![CertificationCard {
                name: "AWS Certified Developer — Associate".to_string(),
                issuer: "Amazon Web Services".to_string(),
                year: "2023".to_string(),
            }],
            contact: vec![
                ContactChannel {
                    label: "Email".to_string(),
                    value: "alex.carter@example.com".to_string(),
                    href: "mailto:alex.carter@example.com".to_string(),
                },
                ContactChannel {
                    label: "LinkedIn".to_string(),
                    value: "linkedin.com/in/alexcarter".to_string(),
                    href: "https://linkedin.com/in/alexcarter".to_string(),
                },
                ContactChannel {
                    label: "GitHub".to_string(),
                    value: "github.com/alexcarter".to_string(),
                    href: "https://github.com/alexcarter".to_string(),
                },
            ],
            nav_items: vec![
                NavItem {
                    id: "home".to_string(),
                    label: "Home".to_string(),
                },
                NavItem {
                    id: "about".to_string(),
                    label: "About".to_string(),
                },
                NavItem {
                    id: "experience".to_string(),
                    label: "Experience".to_string(),
                },
                NavItem {
                    id: "skills".to_string(),
                    label: "Skills".to_string(),
                },
                NavItem {
                    id: "education".to_string(),
                    label: "Education".to_string(),
                },
                NavItem {
                    id: "contact".to_string(),
                    label: "Contact".to_string(),
                },
            ],
            blogs: vec![
                TravelBlogCard {
                    slug: "steppe-notes".to_string(),
                    title: "Notes from the Steppe".to_string(),
                    location: "Mongolia".to_string(),
                    date: "September 2023".to_string(),
                    description: "Two weeks of grassland, horses, and ger stoves."
                        .to_string(),
                    image: "/images/blogs/steppe.jpg".to_string(),
                },
                TravelBlogCard {
                    slug: "himalayan-traverse".to_string(),
                    title: "A Himalayan Traverse".to_string(),
                    location: "Himachal Pradesh, India".to_string(),
                    date: "March 2024".to_string(),
                    description: "Snow passes and valley villages on foot.".to_string(),
                    image: "/images/blogs/himalaya.jpg".to_string(),
                },
                TravelBlogCard {
                    slug: "coastal-days".to_string(),
                    title: "Coastal Days".to_string(),
                    location: "Goa, India".to_string(),
                    date: "January 2024".to_string(),
                    description: "Slow mornings along the Arabian Sea.".to_string(),
                    image: "/images/blogs/coast.jpg".to_string(),
                },
            ],
            books: vec![steppe_notes_book()],
        }
    }
}

/// The featured storybook. Body text keeps blank-line paragraph breaks; the
/// reader splits on them for the drop-cap effect.
fn steppe_notes_book() -> Book {
    Book {
        slug: "steppe-notes".to_string(),
        title: "Notes from the Steppe".to_string(),
        author: "Alex Carter".to_string(),
        cover_image: "/images/books/steppe-cover.jpg".to_string(),
        pages: vec![
            BookPage {
                title: Some("The Call of the Steppe".to_string()),
                body: "The plane broke through the last layer of cloud and the land \
                       unrolled beneath us, amber grass to every horizon. The airport \
                       felt like a pinprick in an ocean of space.\n\nThat first \
                       evening I walked the main square while the city moved between \
                       centuries around me: office workers, street vendors, and an \
                       old man in a deel robe feeding pigeons under the statue."
                    .to_string(),
                image: Some("/images/books/steppe-1.jpg".to_string()),
                image_position: Some(ImagePosition::Top),
            },
            BookPage {
                title: Some("Into the Endless Green".to_string()),
                body: "Dawn came cold and clear as the city thinned behind the jeep. \
                       The steppe is not a view, it is a scale; the horizon keeps \
                       its distance no matter how long you drive toward it.\n\nWe \
                       stopped at a ger for lunch, three generations under one felt \
                       roof, and were fed like family before they asked our names."
                    .to_string(),
                image: Some("/images/books/steppe-2.jpg".to_string()),
                image_position: Some(ImagePosition::Top),
            },
            BookPage {
                title: Some("The Horse Lords".to_string()),
                body: "My assigned mare was short, shaggy, and entirely unimpressed \
                       by me. These are the horses that crossed continents; they \
                       know the steppe better than any map.\n\nWe rode for hours. \
                       Somewhere in the afternoon the deadlines and feeds and \
                       notifications fell away, and there was only the gait of the \
                       horse and the wind in the grass."
                    .to_string(),
                image: Some("/images/books/steppe-3.jpg".to_string()),
                image_position: Some(ImagePosition::Full),
            },
            BookPage {
                title: Some("The Ger and the Stars".to_string()),
                body: "A ger looks simple from the outside and is anything but: a \
                       circle against the wind, insulated by felt, with a sundial \
                       of light moving across the floor through the crown.\n\nThat \
                       night the stove ticked as it cooled and the sky outside \
                       carried more stars than darkness. I slept like the dead and \
                       woke up wanting nothing."
                    .to_string(),
                image: None,
                image_position: None,
            },
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_nav_matches_home_sections() {
        let content = SiteContent::seed();
        assert_eq!(
            content.section_ids(),
            vec!["home", "about", "experience", "skills", "education", "contact"]
        );
    }

    #[test]
    fn test_every_featured_blog_with_book_resolves() {
        let content = SiteContent::seed();
        // The storybook-backed card must resolve to its book.
        assert!(content.book("steppe-notes").is_some());
        assert!(content.blog("steppe-notes").is_some());
        assert!(content.book("no-such-slug").is_none());
    }

    #[test]
    fn test_book_pages_have_paragraph_breaks() {
        let content = SiteContent::seed();
        let book = content.book("steppe-notes").expect("seed book");
        assert!(book.page_count() >= 4);
        for page in &book.pages {
            assert!(
                page.body.contains("\n\n"),
                "book pages are written with paragraph breaks"
            );
        }
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        let content = SiteContent::seed();
        for group in &content.skill_groups {
            for skill in &group.skills {
                assert!(skill.level <= 100, "{} level out of range", skill.name);
            }
        }
    }
}
