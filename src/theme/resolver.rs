//! Theme resolution with a generation-keyed color cache.
//!
//! Every resolved solid color and every sampled gradient run is cached
//! under `(name, width, plane, generation)`. Any change to the definitions
//! bumps the generation and drops the cache, so stale entries are never
//! served and memory stays bounded by what the current theme uses.
//!
//! Unknown names resolve to `None` and are logged once per generation;
//! a missing color is a visual problem, never a crash.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

use tracing::{debug, warn};

use super::config::ThemeConfig;
use super::defaults;
use super::property::{Gradient, ThemeProperty};
use crate::buffer::Rgb;

/// Which side of a cell a color is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Plane {
    Foreground,
    Background,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    name: String,
    width: usize,
    plane: Plane,
    generation: u64,
}

/// A definition found for a name.
enum Definition<'a> {
    Solid(Rgb),
    Gradient(&'a Gradient),
}

/// Maps property names to colors.
#[derive(Debug, Default)]
pub struct ThemeResolver {
    properties: HashMap<String, ThemeProperty>,
    palette: BTreeMap<String, Rgb>,
    generation: u64,
    cache: RefCell<HashMap<CacheKey, Rc<[Rgb]>>>,
    warned: RefCell<HashSet<String>>,
}

impl ThemeResolver {
    /// Create a resolver with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver holding the built-in theme.
    pub fn with_defaults() -> Self {
        let mut resolver = Self::new();
        for (name, property) in defaults::default_properties() {
            resolver.properties.insert(name.to_string(), property);
        }
        resolver
    }

    /// Replace every definition with the contents of a theme document.
    ///
    /// Entries that fail to parse are logged and skipped.
    pub fn load(&mut self, config: &ThemeConfig) {
        let (palette, properties) = build_definitions(config);
        self.properties = properties;
        self.palette = palette;
        self.invalidate_cache();
    }

    /// Overlay a theme document on the current definitions.
    ///
    /// Names the document defines replace existing ones; everything else is
    /// kept. Entries that fail to parse are logged and skipped.
    pub fn apply(&mut self, config: &ThemeConfig) {
        let (palette, properties) = build_definitions(config);
        self.properties.extend(properties);
        self.palette.extend(palette);
        self.invalidate_cache();
    }

    /// Define or replace one property.
    pub fn set_property(&mut self, name: impl Into<String>, property: impl Into<ThemeProperty>) {
        self.properties.insert(name.into(), property.into());
        self.invalidate_cache();
    }

    /// Remove one property.
    pub fn remove_property(&mut self, name: &str) -> Option<ThemeProperty> {
        let removed = self.properties.remove(name);
        if removed.is_some() {
            self.invalidate_cache();
        }
        removed
    }

    /// Replace the fallback palette.
    pub fn set_palette(&mut self, palette: impl IntoIterator<Item = (String, Rgb)>) {
        self.palette = palette.into_iter().collect();
        self.invalidate_cache();
    }

    /// The property defined under `name`, if any.
    pub fn property(&self, name: &str) -> Option<&ThemeProperty> {
        self.properties.get(name)
    }

    /// Whether `name` resolves to anything (property or palette entry).
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name) || self.palette.contains_key(name)
    }

    /// Start a new cache generation, dropping every cached color.
    pub fn invalidate_cache(&mut self) {
        self.generation += 1;
        self.cache.get_mut().clear();
        self.warned.get_mut().clear();
        debug!(generation = self.generation, "theme cache invalidated");
    }

    /// Current cache generation.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of cached entries.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Foreground color of a solid property.
    ///
    /// Gradients have no single foreground color and resolve to `None`.
    pub fn resolve_foreground(&self, name: &str) -> Option<Rgb> {
        let run = self.cached(name, 1, Plane::Foreground, |definition| match definition {
            Definition::Solid(color) => vec![color],
            Definition::Gradient(_) => Vec::new(),
        })?;
        run.first().copied()
    }

    /// Background color for cell `index` of a run `width` cells long.
    ///
    /// Solid properties ignore `width` and `index`. For gradients the index
    /// is clamped to the run and a zero-width run resolves to `None`.
    pub fn resolve_background(&self, name: &str, width: usize, index: usize) -> Option<Rgb> {
        match self.definition(name)? {
            Definition::Solid(_) => {
                let run = self.cached(name, 1, Plane::Background, |definition| match definition {
                    Definition::Solid(color) => vec![color],
                    Definition::Gradient(_) => Vec::new(),
                })?;
                run.first().copied()
            }
            Definition::Gradient(_) => {
                let run = self.resolve_gradient(name, width)?;
                run.get(index.min(run.len().checked_sub(1)?)).copied()
            }
        }
    }

    /// The full color run for a property `width` cells long.
    ///
    /// Solid properties produce `width` copies of their color.
    pub fn resolve_gradient(&self, name: &str, width: usize) -> Option<Rc<[Rgb]>> {
        if width == 0 {
            return None;
        }
        self.cached(name, width, Plane::Background, |definition| match definition {
            Definition::Solid(color) => vec![color; width],
            Definition::Gradient(gradient) => gradient.sample(width),
        })
    }

    /// Packed `0xRRGGBB` color. Gradients use their first stop.
    pub fn resolve_int(&self, name: &str) -> Option<u32> {
        match self.definition(name)? {
            Definition::Solid(_) => self.resolve_foreground(name).map(Rgb::to_u32),
            Definition::Gradient(gradient) => gradient.first_color().map(Rgb::to_u32),
        }
    }

    /// Direction of a gradient property, `None` for solids and unknown names.
    pub fn gradient_direction(&self, name: &str) -> Option<super::GradientDirection> {
        match self.properties.get(name)? {
            ThemeProperty::Gradient(gradient) => Some(gradient.direction()),
            ThemeProperty::Solid(_) => None,
        }
    }

    fn definition(&self, name: &str) -> Option<Definition<'_>> {
        if let Some(property) = self.properties.get(name) {
            return Some(match property {
                ThemeProperty::Solid(color) => Definition::Solid(*color),
                ThemeProperty::Gradient(gradient) => Definition::Gradient(gradient),
            });
        }
        if let Some(color) = self.palette.get(name) {
            return Some(Definition::Solid(*color));
        }
        if self.warned.borrow_mut().insert(name.to_string()) {
            warn!(property = name, "undefined theme property");
        }
        None
    }

    fn cached(
        &self,
        name: &str,
        width: usize,
        plane: Plane,
        compute: impl FnOnce(Definition<'_>) -> Vec<Rgb>,
    ) -> Option<Rc<[Rgb]>> {
        let key = CacheKey {
            name: name.to_string(),
            width,
            plane,
            generation: self.generation,
        };
        if let Some(hit) = self.cache.borrow().get(&key) {
            return Some(Rc::clone(hit));
        }

        let run: Rc<[Rgb]> = compute(self.definition(name)?).into();
        debug!(property = name, width, ?plane, "theme cache miss");
        self.cache.borrow_mut().insert(key, Rc::clone(&run));
        Some(run)
    }
}

fn build_definitions(config: &ThemeConfig) -> (BTreeMap<String, Rgb>, HashMap<String, ThemeProperty>) {
    let (palette, failures) = config.parse_palette();
    for (name, err) in failures {
        warn!(palette_entry = %name, error = %err, "skipping palette entry");
    }

    let mut properties = HashMap::with_capacity(config.properties.len());
    for (name, definition) in &config.properties {
        match definition.build(name, &palette) {
            Ok(property) => {
                properties.insert(name.clone(), property);
            }
            Err(err) => warn!(property = %name, error = %err, "skipping theme property"),
        }
    }
    (palette, properties)
}
