//! Slide data model and deck loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// A titled column of short text items within a bullet-list slide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulletGroup {
    pub category: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub highlight: bool,
}

/// One unit of displayed content, tagged by its rendering type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Slide {
    Title { title: String, emphasize: String },
    SingleWord { title: String },
    BulletList { title: String, content: Vec<BulletGroup> },
    Command { title: String },
}

/// The fixed, ordered list of slides shown in a session. Never empty.
#[derive(Debug)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            bail!("a deck needs at least one slide");
        }
        Ok(Self { slides })
    }

    /// Load a deck from a JSON file holding an array of slides.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read deck file {}", path.display()))?;
        let slides: Vec<Slide> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse deck file {}", path.display()))?;
        Self::new(slides)
    }

    /// The deck shown when no deck file is given on the command line.
    pub fn builtin() -> Self {
        let slides = vec![
            Slide::Title {
                title: "Code is eating the world. Now computers can talk to us.".to_string(),
                emphasize: "talk to us".to_string(),
            },
            Slide::SingleWord {
                title: "Imposter".to_string(),
            },
            Slide::BulletList {
                title: "New tool to learn: CodeGen".to_string(),
                content: vec![
                    group(
                        "Approaches",
                        &["autocomplete", "agents", "background workers", "app builders"],
                        false,
                    ),
                    group("Audiences", &["no-code", "low-code", "AI-native devs"], false),
                    group(
                        "Use cases",
                        &["prototypes", "scaffolding", "throwaway apps", "side projects"],
                        false,
                    ),
                ],
            },
            Slide::BulletList {
                title: "Neon & CodeGen".to_string(),
                content: vec![
                    group("Primitives", &["branches", "checkpoints", "instant restore"], false),
                    group("Used by", &["app builder platforms"], false),
                    group("app.build", &["open source demo + research project"], true),
                ],
            },
            Slide::Command {
                title: "npx @app.build/cli --template=laravel".to_string(),
            },
        ];
        Self { slides }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}

fn group(category: &str, items: &[&str], highlight: bool) -> BulletGroup {
    BulletGroup {
        category: category.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
        highlight,
    }
}
