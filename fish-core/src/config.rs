/// Configuration for the fish school simulation.
///
/// Fixed at initialization. The zone radii must be strictly ordered
/// (`repel_radius < orient_radius < attract_radius`); the core does not check
/// this, front-ends validate settings they load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchoolConfig {
    /// Total population, including the shill.
    pub fish_count: usize,
    /// Distance travelled per tick.
    pub speed: f32,
    /// Maximum heading change per tick, in radians.
    pub max_turn_rate: f32,
    /// How many ordinary fish the shill counts as in a neighbor's zones.
    pub shill_influence: f32,
    pub repel_radius: f32,
    pub orient_radius: f32,
    pub attract_radius: f32,
    /// The shill holds its course while the pointer is this close.
    pub pointer_deadzone: f32,
    /// Horizon of the shill's path preview, in ticks.
    pub preview_steps: usize,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            fish_count: 60,
            speed: 1.2,
            max_turn_rate: 0.08,
            shill_influence: 5.0,
            repel_radius: 20.0,
            orient_radius: 50.0,
            attract_radius: 100.0,
            pointer_deadzone: 5.0,
            preview_steps: 200,
        }
    }
}

/// Size of the toroidal world. Both axes span `[0, width]` / `[0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pointer position as last reported by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: crate::Vector2,
    pub active: bool,
}

impl PointerState {
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Pointer moved: record the position and mark it active.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = crate::Vector2::new(x, y);
        self.active = true;
    }

    /// Pointer left the surface. The last position is kept but ignored.
    pub fn leave(&mut self) {
        self.active = false;
    }

    /// The pointer position, when active.
    pub fn target(&self) -> Option<crate::Vector2> {
        self.active.then_some(self.position)
    }
}
