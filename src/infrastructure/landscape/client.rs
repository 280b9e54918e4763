//! HTTP client for the published landscape document

use std::time::Duration;

use reqwest::Client;
use serde_yaml::Value;

use super::LandscapeError;
use crate::config::LandscapeConfig;

/// A parsed landscape document.
///
/// The top-level category entries are kept as raw YAML values because the
/// published structure varies from entry to entry; interpretation happens
/// in [`super::normalize`].
#[derive(Debug, Clone)]
pub struct LandscapeDocument {
    categories: Vec<Value>,
}

impl LandscapeDocument {
    /// Interpret a parsed YAML body, requiring a non-empty top-level
    /// `landscape` sequence.
    pub fn from_yaml(value: Value) -> Result<Self, LandscapeError> {
        let categories = value
            .get("landscape")
            .and_then(Value::as_sequence)
            .cloned()
            .ok_or_else(|| LandscapeError::InvalidDocument {
                reason: "missing top-level `landscape` sequence".to_string(),
            })?;

        if categories.is_empty() {
            return Err(LandscapeError::InvalidDocument {
                reason: "`landscape` sequence is empty".to_string(),
            });
        }

        Ok(Self { categories })
    }

    /// Top-level category entries, wrapped or bare
    pub fn categories(&self) -> &[Value] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

/// Fetches the landscape YAML from an ordered list of fallback URLs
pub struct LandscapeClient {
    client: Client,
    source_urls: Vec<String>,
}

impl LandscapeClient {
    pub fn new(config: &LandscapeConfig) -> Result<Self, LandscapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            source_urls: config.source_urls.clone(),
        })
    }

    /// Try each source URL in order and return the first payload that
    /// parses into a usable document.
    ///
    /// Network errors, non-2xx responses, parse failures, and missing or
    /// empty `landscape` sequences all count as a failed attempt; only
    /// when every URL has failed does the whole operation error out.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_and_parse(&self) -> Result<LandscapeDocument, LandscapeError> {
        let mut last_error: Option<LandscapeError> = None;

        for url in &self.source_urls {
            tracing::info!(url, "attempting to fetch landscape YAML");

            match self.fetch_one(url).await {
                Ok(document) => {
                    tracing::info!(
                        url,
                        categories = document.category_count(),
                        "successfully fetched landscape YAML"
                    );
                    return Ok(document);
                }
                Err(e) => {
                    tracing::warn!(url, error = %e, "landscape fetch attempt failed");
                    last_error = Some(e);
                }
            }
        }

        let message = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no source URLs configured".to_string());
        tracing::error!(
            attempts = self.source_urls.len(),
            last_error = %message,
            "failed to fetch landscape data from all URLs"
        );
        Err(LandscapeError::SourceUnavailable {
            attempts: self.source_urls.len(),
            message,
        })
    }

    async fn fetch_one(&self, url: &str) -> Result<LandscapeDocument, LandscapeError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "application/x-yaml, text/yaml, text/plain",
            )
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let value: Value = serde_yaml::from_str(&body)?;
        LandscapeDocument::from_yaml(value)
    }

    /// Star count lookup for a GitHub repository URL.
    ///
    /// Wired for future catalog enrichment; the sync path never calls it.
    pub async fn fetch_github_stars(&self, repo_url: &str) -> Option<u64> {
        let (owner, repo) = parse_github_repo(repo_url)?;
        let api_url = format!("https://api.github.com/repos/{}/{}", owner, repo);

        match self.request_stars(&api_url).await {
            Ok(stars) => stars,
            Err(e) => {
                tracing::warn!(repo_url, error = %e, "could not fetch GitHub stars");
                None
            }
        }
    }

    async fn request_stars(&self, api_url: &str) -> Result<Option<u64>, reqwest::Error> {
        let body: serde_json::Value = self
            .client
            .get(api_url)
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body.get("stargazers_count").and_then(|v| v.as_u64()))
    }
}

/// Extract `owner/repo` from a GitHub URL
fn parse_github_repo(repo_url: &str) -> Option<(&str, &str)> {
    let rest = repo_url.split("github.com/").nth(1)?;
    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let repo = segments.next()?;
    Some((owner, repo.trim_end_matches(".git")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_LANDSCAPE: &str = r#"
landscape:
  - name: Observability and Analysis
    subcategories:
      - name: Tracing
        items:
          - name: Jaeger
            project: graduated
"#;

    fn test_config(source_urls: Vec<String>) -> LandscapeConfig {
        LandscapeConfig {
            source_urls,
            fetch_timeout_seconds: 5,
            ..LandscapeConfig::default()
        }
    }

    #[tokio::test]
    async fn falls_back_to_later_urls() {
        let mut server = mockito::Server::new_async().await;
        let broken = server
            .mock("GET", "/broken.yml")
            .with_status(500)
            .create_async()
            .await;
        let unreachable_url = "http://127.0.0.1:1/landscape.yml".to_string();
        let good = server
            .mock("GET", "/landscape.yml")
            .with_status(200)
            .with_body(VALID_LANDSCAPE)
            .create_async()
            .await;

        let client = LandscapeClient::new(&test_config(vec![
            unreachable_url,
            format!("{}/broken.yml", server.url()),
            format!("{}/landscape.yml", server.url()),
        ]))
        .unwrap();

        let document = client.fetch_and_parse().await.unwrap();
        assert_eq!(document.category_count(), 1);

        broken.assert_async().await;
        good.assert_async().await;
    }

    #[tokio::test]
    async fn reports_attempt_count_when_all_urls_fail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/a.yml")
            .with_status(404)
            .create_async()
            .await;
        let _mock = server
            .mock("GET", "/b.yml")
            .with_status(500)
            .create_async()
            .await;

        let client = LandscapeClient::new(&test_config(vec![
            format!("{}/a.yml", server.url()),
            format!("{}/b.yml", server.url()),
        ]))
        .unwrap();

        let error = client.fetch_and_parse().await.unwrap_err();
        match &error {
            LandscapeError::SourceUnavailable { attempts, .. } => assert_eq!(*attempts, 2),
            other => panic!("expected SourceUnavailable, got {:?}", other),
        }
        assert!(error.to_string().contains("Tried 2 URLs"));
    }

    #[tokio::test]
    async fn rejects_payload_without_landscape_sequence() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/landscape.yml")
            .with_status(200)
            .with_body("something: else\n")
            .create_async()
            .await;

        let client = LandscapeClient::new(&test_config(vec![format!(
            "{}/landscape.yml",
            server.url()
        )]))
        .unwrap();

        let error = client.fetch_and_parse().await.unwrap_err();
        assert!(matches!(error, LandscapeError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn rejects_empty_landscape_sequence() {
        let value: Value = serde_yaml::from_str("landscape: []\n").unwrap();
        assert!(matches!(
            LandscapeDocument::from_yaml(value),
            Err(LandscapeError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn parses_github_repo_urls() {
        assert_eq!(
            parse_github_repo("https://github.com/cncf/landscape"),
            Some(("cncf", "landscape"))
        );
        assert_eq!(
            parse_github_repo("https://github.com/jaegertracing/jaeger.git"),
            Some(("jaegertracing", "jaeger"))
        );
        assert_eq!(parse_github_repo("https://gitlab.com/foo/bar"), None);
        assert_eq!(parse_github_repo("https://github.com/onlyowner"), None);
    }
}
