//! Overlay layout configuration
//!
//! The slot count and per-slot base positions live in an explicit table
//! instead of inline literals, so adding a fifth overlay block is a config
//! edit rather than a code change. Missing or unreadable configuration
//! degrades to the built-in four-slot layout; startup never fails on a
//! config problem.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Top-left corner of one slot's overlay block, in screen pixels.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    pub x: f32,
    pub y: f32,
}

/// Ordered table of overlay base positions; entry N belongs to slot N.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    pub slots: Vec<SlotLayout>,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            slots: vec![
                SlotLayout { x: 20.0, y: 20.0 },
                SlotLayout { x: 40.0, y: 260.0 },
                SlotLayout { x: 400.0, y: 20.0 },
                SlotLayout { x: 420.0, y: 260.0 },
            ],
        }
    }
}

impl OverlayLayout {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Loads the layout from the user config file, falling back to the
    /// built-in table when the file is absent or unparsable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_path() else {
            warn!("No config directory available, using default layout");
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<OverlayLayout>(&raw) {
                Ok(layout) => {
                    info!(
                        "Loaded overlay layout with {} slots from {}",
                        layout.slot_count(),
                        path.display()
                    );
                    layout
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                debug!("No layout file at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("padscope").join("layout.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_four_canonical_positions() {
        let layout = OverlayLayout::default();
        assert_eq!(layout.slot_count(), 4);
        assert_eq!(layout.slots[0], SlotLayout { x: 20.0, y: 20.0 });
        assert_eq!(layout.slots[1], SlotLayout { x: 40.0, y: 260.0 });
        assert_eq!(layout.slots[2], SlotLayout { x: 400.0, y: 20.0 });
        assert_eq!(layout.slots[3], SlotLayout { x: 420.0, y: 260.0 });
    }

    #[test]
    fn layout_parses_from_toml() {
        let raw = r#"
            [[slots]]
            x = 10.0
            y = 15.0

            [[slots]]
            x = 320.0
            y = 15.0
        "#;
        let layout: OverlayLayout = toml::from_str(raw).unwrap();
        assert_eq!(layout.slot_count(), 2);
        assert_eq!(layout.slots[1], SlotLayout { x: 320.0, y: 15.0 });
    }

    #[test]
    fn layout_round_trips_through_toml() {
        let layout = OverlayLayout::default();
        let raw = toml::to_string(&layout).unwrap();
        let parsed: OverlayLayout = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, layout);
    }
}
