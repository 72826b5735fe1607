#![forbid(unsafe_code)]

//! Size and placement of the undo prompt.
//!
//! The prompt width steps with the screen width (in density-independent
//! units) so it reads as a compact bar on phones and does not stretch
//! across tablets.
//!
//! | screen (dp) | prompt width (dp) |
//! |-------------|-------------------|
//! | < 300       | 280               |
//! | < 350       | 300               |
//! | < 500       | 330               |
//! | otherwise   | 450               |

/// Prompt height in dp.
pub const PROMPT_HEIGHT_DP: f32 = 56.0;
/// Gap between the prompt and the bottom edge, in dp.
pub const PROMPT_BOTTOM_OFFSET_DP: f32 = 15.0;

/// Screen metrics the prompt is laid out against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptLayout {
    /// Screen width in physical pixels.
    pub screen_width_px: f32,
    /// Physical pixels per dp.
    pub density: f32,
}

impl Default for PromptLayout {
    fn default() -> Self {
        Self::new(360.0, 1.0)
    }
}

/// Resolved prompt placement, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptGeometry {
    /// Prompt width.
    pub width: f32,
    /// Prompt height.
    pub height: f32,
    /// Distance from the bottom edge (horizontally centered).
    pub bottom_offset: f32,
}

impl PromptLayout {
    /// Create a layout. Non-positive densities are treated as 1.
    #[must_use]
    pub fn new(screen_width_px: f32, density: f32) -> Self {
        Self {
            screen_width_px,
            density: if density > 0.0 { density } else { 1.0 },
        }
    }

    /// Screen width in dp.
    #[must_use]
    pub fn screen_width_dp(&self) -> f32 {
        self.screen_width_px / self.density
    }

    /// Prompt width in dp.
    #[must_use]
    pub fn prompt_width_dp(&self) -> f32 {
        let screen = self.screen_width_dp();
        if screen < 300.0 {
            280.0
        } else if screen < 350.0 {
            300.0
        } else if screen < 500.0 {
            330.0
        } else {
            450.0
        }
    }

    /// Prompt placement in pixels.
    #[must_use]
    pub fn geometry(&self) -> PromptGeometry {
        PromptGeometry {
            width: self.prompt_width_dp() * self.density,
            height: PROMPT_HEIGHT_DP * self.density,
            bottom_offset: PROMPT_BOTTOM_OFFSET_DP * self.density,
        }
    }
}
