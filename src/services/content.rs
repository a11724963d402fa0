//! Read-only client for the Sanity content store.
//!
//! The page runs two GROQ queries on load: the project list for the gallery
//! and the single social-links document for the contact section.

use gloo_net::http::Request;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

pub const PROJECTS_QUERY: &str = r#"*[_type == "project"] {
    title,
    description,
    "imageUrl": image.asset->url,
    tags,
    link
}"#;

pub const SOCIAL_QUERY: &str = r#"*[_type == "social"][0]"#;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content store project id is not configured")]
    MissingProject,

    #[error("content request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("content store answered with status {0}")]
    Status(u16),

    #[error("could not decode content response: {0}")]
    Decode(#[source] gloo_net::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    // GROQ projects missing arrays as null rather than [].
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Project Image")
    }

    /// `(href, target)` for the card link. Projects without a link stay on
    /// the page.
    pub fn link_target(&self) -> (&str, &'static str) {
        match self.link.as_deref().filter(|link| !link.trim().is_empty()) {
            Some(link) => (link, "_blank"),
            None => ("#", "_self"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Github,
    Linkedin,
    Facebook,
    Freelancer,
    Fiverr,
    Phone,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::Github => "GitHub",
            SocialKind::Linkedin => "LinkedIn",
            SocialKind::Facebook => "Facebook",
            SocialKind::Freelancer => "Freelancer",
            SocialKind::Fiverr => "Fiverr",
            SocialKind::Phone => "Phone",
        }
    }

    pub fn hover_color(self) -> &'static str {
        match self {
            SocialKind::Github => "#fff",
            SocialKind::Linkedin => "#60a5fa",
            SocialKind::Facebook => "#3b5998",
            SocialKind::Freelancer => "#29b2fe",
            SocialKind::Fiverr => "#1dbf73",
            SocialKind::Phone => "#10b981",
        }
    }

    pub fn opens_new_tab(self) -> bool {
        self != SocialKind::Phone
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub freelancer: Option<String>,
    #[serde(default)]
    pub fiverr: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl SocialLinks {
    /// Links that are actually set, in display order. The phone number
    /// becomes a `tel:` link.
    pub fn entries(&self) -> Vec<SocialLink> {
        let fields = [
            (SocialKind::Github, &self.github),
            (SocialKind::Linkedin, &self.linkedin),
            (SocialKind::Facebook, &self.facebook),
            (SocialKind::Freelancer, &self.freelancer),
            (SocialKind::Fiverr, &self.fiverr),
            (SocialKind::Phone, &self.phone),
        ];
        fields
            .into_iter()
            .filter_map(|(kind, value)| {
                let value = value.as_deref()?.trim();
                if value.is_empty() {
                    return None;
                }
                let href = match kind {
                    SocialKind::Phone => format!("tel:{}", value),
                    _ => value.to_string(),
                };
                Some(SocialLink { kind, href })
            })
            .collect()
    }
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentClient {
    project_id: String,
    dataset: String,
    api_version: String,
    use_cdn: bool,
}

impl ContentClient {
    pub fn new(project_id: &str, dataset: &str, api_version: &str, use_cdn: bool) -> Self {
        Self {
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
            api_version: api_version.trim_start_matches('v').to_string(),
            use_cdn,
        }
    }

    pub fn from_config() -> Result<Self, ContentError> {
        let project_id = config::sanity_project_id().ok_or(ContentError::MissingProject)?;
        Ok(Self::new(
            project_id,
            config::sanity_dataset(),
            config::sanity_api_version(),
            config::use_content_cdn(),
        ))
    }

    pub fn query_url(&self, query: &str) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}?query={}",
            self.project_id,
            host,
            self.api_version,
            self.dataset,
            urlencoding::encode(query)
        )
    }

    async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, ContentError> {
        let url = self.query_url(query);
        debug!("Querying content store: {}", url);

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(ContentError::Status(response.status()));
        }
        let body = response
            .json::<QueryResponse<T>>()
            .await
            .map_err(ContentError::Decode)?;
        Ok(body.result)
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ContentError> {
        let projects: Option<Vec<Project>> = self.query(PROJECTS_QUERY).await?;
        let projects = projects.unwrap_or_default();
        info!("Fetched {} projects", projects.len());
        Ok(projects)
    }

    /// A missing social document is an empty set of links, not an error.
    pub async fn social_links(&self) -> Result<SocialLinks, ContentError> {
        let links: Option<SocialLinks> = self.query(SOCIAL_QUERY).await?;
        Ok(links.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url() {
        let client = ContentClient::new("abc123", "production", "2024-01-01", false);
        let url = client.query_url(SOCIAL_QUERY);
        assert_eq!(
            url,
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production?query=%2A%5B_type%20%3D%3D%20%22social%22%5D%5B0%5D"
        );
    }

    #[test]
    fn test_query_url_uses_cdn_host() {
        let client = ContentClient::new("abc123", "staging", "v2023-05-03", true);
        let url = client.query_url("*");
        assert!(url.starts_with("https://abc123.apicdn.sanity.io/v2023-05-03/data/query/staging?query="));
    }

    #[test]
    fn test_decode_projects() {
        let body = r#"{
            "ms": 4,
            "query": "*[_type == \"project\"]",
            "result": [
                {
                    "title": "Storyboard App",
                    "description": "Shot planning for editors",
                    "imageUrl": "https://cdn.sanity.io/images/abc/production/1.png",
                    "tags": ["React Native", "Figma"],
                    "link": "https://example.com/storyboard"
                },
                { "title": "Untagged", "description": null, "imageUrl": null, "tags": null, "link": null }
            ]
        }"#;
        let response: QueryResponse<Option<Vec<Project>>> = serde_json::from_str(body).unwrap();
        let projects = response.result.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].tags(), ["React Native", "Figma"]);
        assert_eq!(
            projects[0].image_url.as_deref(),
            Some("https://cdn.sanity.io/images/abc/production/1.png")
        );
        assert_eq!(projects[0].link_target(), ("https://example.com/storyboard", "_blank"));

        assert!(projects[1].tags().is_empty());
        assert!(projects[1].image_url.is_none());
        assert_eq!(projects[1].link_target(), ("#", "_self"));
    }

    #[test]
    fn test_missing_social_document_is_empty() {
        let response: QueryResponse<Option<SocialLinks>> =
            serde_json::from_str(r#"{ "result": null }"#).unwrap();
        let links = response.result.unwrap_or_default();
        assert!(links.entries().is_empty());
    }

    #[test]
    fn test_social_entries_skip_blank_and_link_phone() {
        let response: QueryResponse<Option<SocialLinks>> = serde_json::from_str(
            r#"{ "result": {
                "_id": "social",
                "_type": "social",
                "github": "https://github.com/someone",
                "linkedin": "",
                "fiverr": "https://fiverr.com/someone",
                "phone": "+94 77 123 4567"
            } }"#,
        )
        .unwrap();
        let entries = response.result.unwrap().entries();

        let kinds: Vec<SocialKind> = entries.iter().map(|entry| entry.kind).collect();
        assert_eq!(kinds, [SocialKind::Github, SocialKind::Fiverr, SocialKind::Phone]);
        assert_eq!(entries[2].href, "tel:+94 77 123 4567");
        assert!(!entries[2].kind.opens_new_tab());
    }
}
