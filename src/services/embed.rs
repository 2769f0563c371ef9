use serde::Serialize;
use url::Url;

/// A video host whose links can be turned into an inline player.
pub trait VideoProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn matches(&self, url: &Url) -> bool;

    fn video_id(&self, url: &Url) -> Option<String>;

    fn embed_url(&self, video_id: &str) -> String;
}

pub struct YouTube;

impl VideoProvider for YouTube {
    fn name(&self) -> &'static str {
        "youtube"
    }

    fn matches(&self, url: &Url) -> bool {
        host_is(url, "youtube.com") || host_is(url, "youtu.be")
    }

    fn video_id(&self, url: &Url) -> Option<String> {
        if host_is(url, "youtu.be") {
            return last_segment(url);
        }
        url.query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    }

    fn embed_url(&self, video_id: &str) -> String {
        format!("https://www.youtube.com/embed/{}", video_id)
    }
}

pub struct Vimeo;

impl VideoProvider for Vimeo {
    fn name(&self) -> &'static str {
        "vimeo"
    }

    fn matches(&self, url: &Url) -> bool {
        host_is(url, "vimeo.com")
    }

    fn video_id(&self, url: &Url) -> Option<String> {
        last_segment(url)
    }

    fn embed_url(&self, video_id: &str) -> String {
        format!("https://player.vimeo.com/video/{}", video_id)
    }
}

fn host_is(url: &Url, domain: &str) -> bool {
    url.host_str()
        .map(|host| host == domain || host.ends_with(&format!(".{}", domain)))
        .unwrap_or(false)
}

fn last_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .last()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum VideoEmbed {
    Player { provider: &'static str, src: String },
    Link { href: String },
}

/// Ordered provider table. The first provider whose host matches decides the
/// outcome; a match without a usable id falls back to a plain link.
pub struct EmbedRegistry {
    providers: Vec<Box<dyn VideoProvider>>,
}

impl Default for EmbedRegistry {
    fn default() -> Self {
        Self::new().with_provider(YouTube).with_provider(Vimeo)
    }
}

impl EmbedRegistry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn with_provider(mut self, provider: impl VideoProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn resolve(&self, raw_url: &str) -> VideoEmbed {
        let link = || VideoEmbed::Link {
            href: raw_url.to_string(),
        };

        let url = match Url::parse(raw_url) {
            Ok(url) => url,
            Err(_) => return link(),
        };

        match self.providers.iter().find(|p| p.matches(&url)) {
            Some(provider) => match provider.video_id(&url) {
                Some(id) => VideoEmbed::Player {
                    provider: provider.name(),
                    src: provider.embed_url(&id),
                },
                None => link(),
            },
            None => link(),
        }
    }
}
