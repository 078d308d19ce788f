/// Width of a full health bar, in world units.
pub const BAR_FULL_WIDTH: f32 = 500.0;
const RED_AT_OR_BELOW: f32 = 100.0;
const YELLOW_BELOW: f32 = 250.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarTier {
    Green,
    Yellow,
    Red,
}

/// Read-only projection of a unit's life for the HUD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HealthBar {
    pub life: i32,
    pub max_life: i32,
    /// Filled width; `BAR_FULL_WIDTH` at full life.
    pub width: f32,
    pub tier: BarTier,
}

impl HealthBar {
    pub fn of(life: i32, max_life: i32) -> Self {
        let scale = BAR_FULL_WIDTH / max_life.max(1) as f32;
        let width = (life as f32 * scale).max(0.0);
        let tier = if width <= RED_AT_OR_BELOW {
            BarTier::Red
        } else if width < YELLOW_BELOW {
            BarTier::Yellow
        } else {
            BarTier::Green
        };
        Self {
            life,
            max_life,
            width,
            tier,
        }
    }

    /// Filled share of the bar, 0.0 to 1.0.
    pub fn fraction(&self) -> f32 {
        (self.width / BAR_FULL_WIDTH).clamp(0.0, 1.0)
    }
}
