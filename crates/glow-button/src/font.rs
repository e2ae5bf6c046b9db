//! Font loading for button labels.
//!
//! Fonts are read through the [`ResourceManager`], validated with
//! `ttf-parser` and registered in a shared `fontdb` database owned by the
//! [`FontRegistry`]. When a resource cannot be used, callers can ask the
//! registry for the system sans-serif font instead.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use fontdb::{Database, Family, ID as FontFaceId, Query, Source};
use glow_core::PerfSpan;
use glow_core::logging::{span_names, targets};
use parking_lot::RwLock;

use crate::error::ResourceLoadError;
use crate::file::ResourceManager;

/// Global font registry instance.
static GLOBAL_REGISTRY: OnceLock<FontRegistry> = OnceLock::new();

/// Configuration for the fallback font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    /// Whether system fonts may be scanned to find a fallback face.
    pub load_system_fonts: bool,
    /// Family to use for the generic sans-serif family.
    pub sans_serif_family: Option<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            sans_serif_family: None,
        }
    }
}

impl FontConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether system fonts may be scanned for the fallback face.
    pub fn load_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// Set the family used for the generic sans-serif family.
    pub fn sans_serif_family(mut self, family: impl Into<String>) -> Self {
        self.sans_serif_family = Some(family.into());
        self
    }
}

/// Where a [`LoadedFont`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Loaded from the resource at this path.
    Resource(String),
    /// The system sans-serif font, used after a resource failed to load.
    SystemFallback,
}

/// A font selected for a label: a family at a point size.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFont {
    family: String,
    size: f32,
    face_id: Option<FontFaceId>,
    source: FontSource,
}

impl LoadedFont {
    /// The family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The matching face in the [`FontRegistry`] database, if any.
    ///
    /// A fallback font has no face when no system fonts were loaded.
    pub fn face_id(&self) -> Option<FontFaceId> {
        self.face_id
    }

    /// Where the font came from.
    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Whether this is the system fallback rather than the requested resource.
    pub fn is_fallback(&self) -> bool {
        self.source == FontSource::SystemFallback
    }

    /// The same font at another size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

/// A registered font resource.
#[derive(Debug, Clone)]
struct RegisteredFont {
    family: String,
    face_id: Option<FontFaceId>,
}

/// The font database shared by all buttons.
///
/// Each resource path is parsed and registered once; later loads of the same
/// path reuse the registered face.
pub struct FontRegistry {
    db: RwLock<Database>,
    registered: RwLock<HashMap<String, RegisteredFont>>,
    system_fonts_loaded: AtomicBool,
}

impl FontRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            db: RwLock::new(Database::new()),
            registered: RwLock::new(HashMap::new()),
            system_fonts_loaded: AtomicBool::new(false),
        }
    }

    /// Gets the global font registry instance.
    pub fn global() -> &'static FontRegistry {
        GLOBAL_REGISTRY.get_or_init(FontRegistry::new)
    }

    /// Load the font resource at `path` via `resources`.
    pub fn load_resource(
        &self,
        resources: &ResourceManager,
        path: &str,
        size: f32,
    ) -> Result<LoadedFont, ResourceLoadError> {
        if let Some(font) = self.registered.read().get(path) {
            tracing::trace!(target: targets::FONT, path, "font already registered");
            return Ok(LoadedFont {
                family: font.family.clone(),
                size,
                face_id: font.face_id,
                source: FontSource::Resource(path.to_string()),
            });
        }

        let _span = PerfSpan::new(span_names::FONT_LOAD);
        let data = resources.load(path)?;
        self.load_font_data(path, data, size)
    }

    /// Validate and register raw font data under `path`.
    pub fn load_font_data(
        &self,
        path: &str,
        data: Cow<'static, [u8]>,
        size: f32,
    ) -> Result<LoadedFont, ResourceLoadError> {
        let family =
            family_name(&data).map_err(|reason| ResourceLoadError::invalid_font(path, reason))?;

        let source = match data {
            Cow::Borrowed(bytes) => Source::Binary(Arc::new(bytes)),
            Cow::Owned(bytes) => Source::Binary(Arc::new(bytes)),
        };

        let face_id = {
            let mut db = self.db.write();
            db.load_font_source(source);
            db.query(&Query {
                families: &[Family::Name(&family)],
                ..Query::default()
            })
        };

        tracing::info!(
            target: targets::FONT,
            path,
            family = %family,
            "registered font resource"
        );

        self.registered.write().insert(
            path.to_string(),
            RegisteredFont {
                family: family.clone(),
                face_id,
            },
        );

        Ok(LoadedFont {
            family,
            size,
            face_id,
            source: FontSource::Resource(path.to_string()),
        })
    }

    /// The system sans-serif font at `size`.
    ///
    /// Never fails. Without any loaded faces the result names the generic
    /// family and carries no face.
    pub fn fallback(&self, config: &FontConfig, size: f32) -> LoadedFont {
        if config.load_system_fonts {
            self.ensure_system_fonts();
        }

        let mut db = self.db.write();
        if let Some(family) = &config.sans_serif_family {
            db.set_sans_serif_family(family.clone());
        }

        let face_id = db.query(&Query {
            families: &[Family::SansSerif],
            ..Query::default()
        });

        let family = face_id
            .and_then(|id| db.face(id))
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_else(|| db.family_name(&Family::SansSerif).to_string());

        LoadedFont {
            family,
            size,
            face_id,
            source: FontSource::SystemFallback,
        }
    }

    /// Check if a font family exists in the database.
    pub fn has_family(&self, family: &str) -> bool {
        self.db
            .read()
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| name == family))
    }

    /// Get the number of loaded font faces.
    pub fn face_count(&self) -> usize {
        self.db.read().faces().count()
    }

    fn ensure_system_fonts(&self) {
        if self.system_fonts_loaded.swap(true, Ordering::AcqRel) {
            return;
        }

        let _span = PerfSpan::new(span_names::SYSTEM_FONTS);
        let mut db = self.db.write();
        db.load_system_fonts();
        tracing::debug!(
            target: targets::FONT,
            face_count = db.len(),
            "loaded system fonts"
        );
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontRegistry")
            .field("face_count", &self.face_count())
            .field("registered", &self.registered.read().len())
            .finish()
    }
}

static_assertions::assert_impl_all!(FontRegistry: Send, Sync);

/// Parse the first face of `data` and return its family name.
fn family_name(data: &[u8]) -> Result<String, String> {
    let face = ttf_parser::Face::parse(data, 0).map_err(|e| e.to_string())?;

    let names: Vec<_> = face
        .names()
        .into_iter()
        .filter(|name| name.is_unicode())
        .collect();

    [
        ttf_parser::name_id::TYPOGRAPHIC_FAMILY,
        ttf_parser::name_id::FAMILY,
    ]
    .iter()
    .find_map(|id| {
        names
            .iter()
            .filter(|name| name.name_id == *id)
            .find_map(|name| name.to_string())
    })
    .ok_or_else(|| "font has no family name".to_string())
}
