//! Prompt catalog data model.
//!
//! Defines the prompt entity, the closed category enumeration, the seed data
//! set loaded at startup, and [`PromptCatalog`], the single owned in-memory
//! collection the gallery controller operates on. Entities are never updated
//! or deleted; the catalog only grows for the lifetime of one session and
//! reseeds on restart.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Category tag for a prompt entry.
///
/// `All` is a filter-only sentinel: it is a valid selection for the gallery's
/// category filter (and its `Default`) but is never assigned to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PromptCategory {
    Logo,
    Fashion,
    Product,
    Portrait,
    Poster,
    #[serde(rename = "Social Media")]
    SocialMedia,
    Photographs,
    #[default]
    All,
}

impl PromptCategory {
    /// Every category in filter-chip display order (`All` last).
    pub const ALL_VALUES: [PromptCategory; 8] = [
        PromptCategory::Logo,
        PromptCategory::Fashion,
        PromptCategory::Product,
        PromptCategory::Portrait,
        PromptCategory::Poster,
        PromptCategory::SocialMedia,
        PromptCategory::Photographs,
        PromptCategory::All,
    ];

    /// Categories an entity may carry, i.e. everything except `All`.
    pub const SELECTABLE: [PromptCategory; 7] = [
        PromptCategory::Logo,
        PromptCategory::Fashion,
        PromptCategory::Product,
        PromptCategory::Portrait,
        PromptCategory::Poster,
        PromptCategory::SocialMedia,
        PromptCategory::Photographs,
    ];

    /// Human-readable label, also the string the search test matches against.
    pub fn label(&self) -> &'static str {
        match self {
            PromptCategory::Logo => "Logo",
            PromptCategory::Fashion => "Fashion",
            PromptCategory::Product => "Product",
            PromptCategory::Portrait => "Portrait",
            PromptCategory::Poster => "Poster",
            PromptCategory::SocialMedia => "Social Media",
            PromptCategory::Photographs => "Photographs",
            PromptCategory::All => "All",
        }
    }
}

impl std::fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single gallery entry: an AI image-generation directive plus its
/// presentation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiPrompt {
    /// Opaque unique identifier. Uniqueness is required within the catalog;
    /// monotonicity is not.
    pub id: String,
    pub title: String,
    pub description: String,
    /// The directive itself - the full generative prompt text.
    pub prompt: String,
    /// Truncated preview of `prompt`, computed once at creation and never
    /// re-derived.
    pub short_preview: String,
    /// Remote URL or `data:` URI. Opaque to the catalog core; only the
    /// presentation layer interprets it.
    pub image_url: String,
    /// Never `All`.
    pub category: PromptCategory,
    pub author: String,
    /// Human-readable creation date, fixed at creation.
    pub date: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// The fixed entity set every session starts from.
pub fn seed_catalog() -> Vec<AiPrompt> {
    vec![
        AiPrompt {
            id: "1".to_string(),
            title: "Cyberpunk Sneaker Concept".to_string(),
            description: "High-end footwear with integrated LED strips and transparent soles."
                .to_string(),
            short_preview: "Futuristic sneaker, neon purple accents, techwear style...".to_string(),
            prompt: "Professional product photography of a futuristic cyberpunk sneaker, \
                     floating in mid-air, integrated purple LED strips, transparent gel soles, \
                     carbon fiber textures, dark tech background, cinematic lighting, 8k \
                     resolution, ultra-detailed."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?auto=format&fit=crop&q=80&w=800&h=1000"
                .to_string(),
            category: PromptCategory::Product,
            author: "DesignBot".to_string(),
            date: "2024-05-25".to_string(),
            tips: vec![
                "Works best with \"Dark Mode\" lighting keywords".to_string(),
                "Specify material types for better textures".to_string(),
            ],
        },
        AiPrompt {
            id: "5".to_string(),
            title: "Ethereal Mountain Landscape".to_string(),
            description: "Breathtaking high-altitude peak at sunrise with mist layers.".to_string(),
            short_preview: "Majestic mountains, morning mist, golden hour light...".to_string(),
            prompt: "Breathtaking wide-angle landscape photograph of snow-capped Himalayan peaks \
                     at sunrise, dense layers of valley mist, warm golden hour sunlight hitting \
                     the summits, cold blue shadows, hyper-realistic, shot on Phase One XF, \
                     100MP, sharp focus, cinematic atmosphere."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?auto=format&fit=crop&q=80&w=800&h=1000"
                .to_string(),
            category: PromptCategory::Photographs,
            author: "NatureLens".to_string(),
            date: "2024-05-26".to_string(),
            tips: vec![
                "Mention specific camera models for metadata simulation".to_string(),
                "Specify time of day for precise lighting".to_string(),
            ],
        },
        AiPrompt {
            id: "2".to_string(),
            title: "Minimalist Tech Logo".to_string(),
            description: "A clean, geometric logo for a next-gen software company.".to_string(),
            short_preview: "Geometric S shape, gradient purple, white background...".to_string(),
            prompt: "Vector logo design of a minimalist geometric letter S, interlocking shapes, \
                     gradient from deep purple to neon blue, flat design, white background, \
                     professional branding style, symmetrical, clean lines."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1626785774573-4b799315345d?auto=format&fit=crop&q=80&w=800&h=1000"
                .to_string(),
            category: PromptCategory::Logo,
            author: "BrandMaster".to_string(),
            date: "2024-05-24".to_string(),
            tips: vec![
                "Keep descriptors simple for vector-like results".to_string(),
                "Mention \"flat design\" to avoid 3D shadowing".to_string(),
            ],
        },
        AiPrompt {
            id: "3".to_string(),
            title: "Vogue Tech-Noir Fashion".to_string(),
            description: "Editorial shot of high-fashion streetwear in a rainy alley.".to_string(),
            short_preview: "Cyberpunk model, oversized jacket, rainy neon streets...".to_string(),
            prompt: "Editorial fashion photography, model wearing oversized iridescent techwear \
                     jacket, transparent visor, standing in a rainy Tokyo alley at night, neon \
                     purple and green reflections, high contrast, cinematic grain, Vogue style."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?auto=format&fit=crop&q=80&w=800&h=1000"
                .to_string(),
            category: PromptCategory::Fashion,
            author: "StyleAI".to_string(),
            date: "2024-05-23".to_string(),
            tips: vec![
                "Use \"Editorial photography\" for high-end lighting".to_string(),
                "Iridescent materials react well to lighting colors".to_string(),
            ],
        },
        AiPrompt {
            id: "4".to_string(),
            title: "Cybernetic Portrait".to_string(),
            description: "Intimate close-up of a human with subtle digital enhancements."
                .to_string(),
            short_preview: "Portrait of woman, glowing blue eyes, chrome skin patches..."
                .to_string(),
            prompt: "Close-up portrait of a woman with bioluminescent blue eyes, small chrome \
                     cybernetic patches on cheekbones, soft volumetric lighting, deep shadows, \
                     hyper-realistic skin texture, depth of field, 8k."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1614728263952-84ea256f9679?auto=format&fit=crop&q=80&w=800&h=1000"
                .to_string(),
            category: PromptCategory::Portrait,
            author: "Humanoid".to_string(),
            date: "2024-05-22".to_string(),
            tips: vec![
                "Mention \"Hyper-realistic skin texture\" for close-ups".to_string(),
                "Soft volumetric lighting prevents harsh edges".to_string(),
            ],
        },
    ]
}

/// The ordered prompt collection, exclusively owned by the gallery
/// controller.
///
/// Most-recent-first: new entries are prepended. The revision counter bumps
/// on every mutation so tests and logging can observe changes without
/// diffing contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptCatalog {
    entries: Vec<AiPrompt>,
    revision: u64,
}

impl PromptCatalog {
    /// A catalog initialized from the seed data set.
    pub fn seeded() -> Self {
        Self {
            entries: seed_catalog(),
            revision: 0,
        }
    }

    /// An empty catalog. Primarily useful in tests.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            revision: 0,
        }
    }

    pub fn entries(&self) -> &[AiPrompt] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &str) -> Option<&AiPrompt> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }

    /// Prepend a new entry (most-recent-first ordering).
    ///
    /// Refuses an entry whose id already exists, preserving the catalog-wide
    /// uniqueness invariant. Ids come from UUID v4, so a refusal only ever
    /// indicates misuse of the API.
    pub fn prepend(&mut self, prompt: AiPrompt) {
        if self.contains_id(&prompt.id) {
            warn!(id = %prompt.id, title = %prompt.title, "duplicate prompt id, entry not added");
            return;
        }
        self.entries.insert(0, prompt);
        self.revision += 1;
    }

    /// Restore the seed data set, discarding all published entries.
    pub fn reset(&mut self) {
        self.entries = seed_catalog();
        self.revision += 1;
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
