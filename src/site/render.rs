use crate::config::content::{Project, Skill};
use crate::config::site_config::SiteConfig;
use crate::error::*;
use crate::site::scroll::ScrollController;
use crate::site::template::{NAV_PARTIAL, PAGE_TEMPLATE};
use crate::stats::StatLine;
use handlebars::Handlebars;
use serde::Serialize;
use snafu::ResultExt;

const SECTIONS: [&str; 3] = ["intro", "projects", "skills"];
const STATS_SOURCE: &str = "https://testaustime.fi";
const PAGE: &str = "page";

/// Previous/next anchors standing in for wheel navigation.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionNav {
    pub prev: Option<&'static str>,
    pub next: Option<&'static str>,
}

impl SectionNav {
    pub fn for_section(index: usize) -> Self {
        let scroll = ScrollController::at(index, SECTIONS.len());

        Self {
            prev: scroll.neighbour(-1.0).map(|i| SECTIONS[i]),
            next: scroll.neighbour(1.0).map(|i| SECTIONS[i]),
        }
    }
}

#[derive(Serialize)]
struct PageView<'a> {
    handle: &'a str,
    description: String,
    year: i32,
    stats_source: &'static str,
    /// Empty when the fetch failed, which leaves just the card heading.
    stats: &'a [StatLine],
    projects: &'a [Project],
    skills: &'a [Skill],
    github: Option<&'a str>,
    mailto: Option<String>,
    intro_nav: SectionNav,
    projects_nav: SectionNav,
    skills_nav: SectionNav,
}

impl<'a> PageView<'a> {
    fn new(site: &'a SiteConfig, stats: Option<&'a [StatLine]>, year: i32) -> Self {
        Self {
            handle: &site.handle,
            description: site.description_for_year(year),
            year,
            stats_source: STATS_SOURCE,
            stats: stats.unwrap_or_default(),
            projects: &site.projects,
            skills: &site.skills,
            github: site.links.github.as_deref(),
            mailto: site.links.mailto(),
            intro_nav: SectionNav::for_section(0),
            projects_nav: SectionNav::for_section(1),
            skills_nav: SectionNav::for_section(2),
        }
    }
}

/// Template registry for the page, compiled once at startup.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, Error> {
        let mut handlebars = Handlebars::new();

        handlebars
            .register_partial("nav", NAV_PARTIAL)
            .context(TemplateRegisterSnafu { name: "nav" })?;
        handlebars
            .register_template_string(PAGE, PAGE_TEMPLATE)
            .context(TemplateRegisterSnafu { name: PAGE })?;

        Ok(Self { handlebars })
    }

    /// Whole page. `stats` of `None` renders the card with its heading only.
    pub fn render_page(
        &self,
        site: &SiteConfig,
        stats: Option<&[StatLine]>,
        year: i32,
    ) -> Result<String, Error> {
        self.handlebars
            .render(PAGE, &PageView::new(site, stats, year))
            .context(TemplateRenderSnafu { name: PAGE })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::content::Links;

    fn site() -> SiteConfig {
        SiteConfig {
            handle: "trimpsuz".into(),
            birth_year: Some(2006),
            description: "A ${age} year old developer.".into(),
            projects: vec![Project {
                title: "Portfolio".into(),
                description: "Built with <Rust> & axum".into(),
                link: Some("https://github.com/trimpsuz/portfolio".into()),
            }],
            skills: vec![Skill {
                title: "Python".into(),
                description: "Readable.".into(),
            }],
            links: Links {
                github: Some("https://github.com/trimpsuz".into()),
                email: Some("mail@trimpsuz.xyz".into()),
            },
        }
    }

    fn render(site: &SiteConfig, stats: Option<&[StatLine]>) -> String {
        PageRenderer::new()
            .unwrap()
            .render_page(site, stats, 2026)
            .unwrap()
    }

    #[test]
    fn escapes_markup_from_config() {
        let mut site = site();
        site.handle = "<script>alert('x')</script>".into();

        let page = render(&site, None);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("Built with &lt;Rust&gt; &amp; axum"));
    }

    #[test]
    fn renders_stat_lines_in_order() {
        let stats = vec![
            StatLine {
                label: "Python",
                seconds: 3661,
                formatted: "1 hour and 1 second".into(),
            },
            StatLine {
                label: "JSON",
                seconds: 60,
                formatted: "1 minute".into(),
            },
        ];

        let page = render(&site(), Some(stats.as_slice()));

        let python = page.find("<p>Python: 1 hour and 1 second</p>").unwrap();
        let json = page.find("<p>JSON: 1 minute</p>").unwrap();
        assert!(python < json);
    }

    #[test]
    fn missing_stats_leave_only_the_heading() {
        let page = render(&site(), None);

        assert!(page.contains(
            "<aside class=\"stats\"><h2><a href=\"https://testaustime.fi\">testaustime</a> statistics</h2></aside>"
        ));
    }

    #[test]
    fn renders_content_and_footer() {
        let page = render(&site(), Some(&[][..]));

        assert!(page.contains("A 20 year old developer."));
        assert!(page.contains("<a href=\"https://github.com/trimpsuz/portfolio\"><article"));
        assert!(page.contains("<h3>Python</h3>"));
        assert!(page.contains("<a href=\"mailto:mail@trimpsuz.xyz\">Mail</a>"));
        assert!(page.contains("&copy; 2026 trimpsuz"));
    }

    #[test]
    fn unlinked_projects_are_not_wrapped() {
        let mut site = site();
        site.projects[0].link = None;

        let page = render(&site, None);

        assert!(page.contains("<article class=\"card\"><h3>Portfolio</h3>"));
        assert!(!page.contains("<a href=\"https://github.com/trimpsuz/portfolio\">"));
    }

    #[test]
    fn section_navigation_stops_at_the_edges() {
        assert_eq!(
            SectionNav::for_section(0),
            SectionNav {
                prev: None,
                next: Some("projects")
            }
        );
        assert_eq!(
            SectionNav::for_section(1),
            SectionNav {
                prev: Some("intro"),
                next: Some("skills")
            }
        );
        assert_eq!(
            SectionNav::for_section(2),
            SectionNav {
                prev: Some("projects"),
                next: None
            }
        );

        let page = render(&site(), None);
        assert!(page.contains(
            "<nav class=\"section-nav\"><a href=\"#intro\" rel=\"prev\">&uarr;</a><a href=\"#skills\" rel=\"next\">&darr;</a></nav>"
        ));
    }
}
