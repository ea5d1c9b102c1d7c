use crate::config::{Bounds, PointerState, SchoolConfig};
use crate::fish::Fish;
#[cfg(feature = "std")]
use crate::fish::Role;
use crate::preview::PathPreview;
use crate::vector::Vector2;

#[cfg(feature = "std")]
use rand::Rng;

/// Desired direction of every fish, read from the same frame-start state.
pub fn plan<'a>(
    school: &'a [Fish],
    pointer: &'a PointerState,
    config: &'a SchoolConfig,
) -> impl Iterator<Item = Vector2> + 'a {
    school
        .iter()
        .enumerate()
        .map(move |(i, fish)| fish.desired_direction(i, school, pointer, config))
}

/// Applies previously planned directions, one per fish, in order.
pub fn apply<I>(school: &mut [Fish], desired: I, config: &SchoolConfig, bounds: Bounds)
where
    I: IntoIterator<Item = Vector2>,
{
    for (fish, direction) in school.iter_mut().zip(desired) {
        fish.advance(direction, config, bounds);
    }
}

/// The first shill in the school, if any.
pub fn shill(school: &[Fish]) -> Option<&Fish> {
    school.iter().find(|fish| fish.is_shill())
}

/// Path preview for the shill, present only while the pointer is active.
pub fn preview(school: &[Fish], pointer: &PointerState, config: &SchoolConfig) -> Option<PathPreview> {
    let target = pointer.target()?;
    let shill = shill(school)?;
    Some(PathPreview::new(
        shill.position,
        shill.velocity,
        target,
        config.preview_steps,
        config,
    ))
}

/// Magnitude of the mean unit heading: 1 when every fish swims the same way.
pub fn polarization(school: &[Fish]) -> f32 {
    if school.is_empty() {
        return 0.0;
    }
    let mut sum = Vector2::zero();
    for fish in school {
        sum += fish.velocity.normalize();
    }
    sum.magnitude() / school.len() as f32
}

/// Mean position, ignoring the wrap-around.
pub fn centroid(school: &[Fish]) -> Vector2 {
    if school.is_empty() {
        return Vector2::zero();
    }
    let mut sum = Vector2::zero();
    for fish in school {
        sum += fish.position;
    }
    sum * (1.0 / school.len() as f32)
}

/// A school with a fixed capacity for embedded (no_std) environments.
pub struct SchoolFixed<const N: usize> {
    pub fish: heapless::Vec<Fish, N>,
    pub config: SchoolConfig,
    pub bounds: Bounds,
}

impl<const N: usize> SchoolFixed<N> {
    pub fn new(bounds: Bounds, config: SchoolConfig) -> Self {
        Self {
            fish: heapless::Vec::new(),
            config,
            bounds,
        }
    }

    pub fn add_fish(&mut self, fish: Fish) -> Result<(), Fish> {
        self.fish.push(fish)
    }

    pub fn preview(&self, pointer: &PointerState) -> Option<PathPreview> {
        preview(&self.fish, pointer, &self.config)
    }

    pub fn tick(&mut self, pointer: &PointerState) {
        let mut desired = heapless::Vec::<Vector2, N>::new();
        for direction in plan(&self.fish, pointer, &self.config) {
            // Cannot overflow: one entry per fish and the school holds at most N.
            let _ = desired.push(direction);
        }
        apply(&mut self.fish, desired, &self.config, self.bounds);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
    }
}

/// A school of fish for std environments.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct School {
    pub fish: Vec<Fish>,
    pub config: SchoolConfig,
    pub bounds: Bounds,
}

#[cfg(feature = "std")]
impl School {
    /// Random school: one shill first, then `fish_count - 1` normal fish.
    pub fn new(bounds: Bounds, config: SchoolConfig) -> Self {
        Self::with_rng(&mut rand::thread_rng(), bounds, config)
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, config: SchoolConfig) -> Self {
        let mut fish = Vec::with_capacity(config.fish_count);
        if config.fish_count > 0 {
            fish.push(Fish::random(rng, bounds, Role::shill(&config), &config));
        }
        for _ in 1..config.fish_count {
            fish.push(Fish::random(rng, bounds, Role::Normal, &config));
        }

        log::debug!(
            "Created school of {} fish in {}x{}",
            fish.len(),
            bounds.width,
            bounds.height
        );

        Self {
            fish,
            config,
            bounds,
        }
    }

    /// School made of hand-placed fish.
    pub fn from_fish(fish: Vec<Fish>, bounds: Bounds, config: SchoolConfig) -> Self {
        Self {
            fish,
            config,
            bounds,
        }
    }

    pub fn shill(&self) -> Option<&Fish> {
        shill(&self.fish)
    }

    pub fn preview(&self, pointer: &PointerState) -> Option<PathPreview> {
        preview(&self.fish, pointer, &self.config)
    }

    /// Advances every fish by one tick.
    ///
    /// All directions are planned from the state at the start of the tick
    /// before any fish moves, so iteration order has no effect.
    pub fn tick(&mut self, pointer: &PointerState) {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "Tick: {} fish, pointer {:?}, preview {} steps",
                self.fish.len(),
                pointer.target(),
                self.preview_len(pointer)
            );
        }
        let desired: Vec<Vector2> = plan(&self.fish, pointer, &self.config).collect();
        apply(&mut self.fish, desired, &self.config, self.bounds);
    }

    /// Number of points in the current preview, 0 while the pointer is inactive.
    pub fn preview_len(&self, pointer: &PointerState) -> usize {
        self.preview(pointer).map_or(0, |preview| preview.iter().count())
    }

    /// Returns the school one tick later, leaving `self` untouched.
    pub fn stepped(&self, pointer: &PointerState) -> Self {
        let mut next = self.clone();
        next.tick(pointer);
        next
    }

    pub fn polarization(&self) -> f32 {
        polarization(&self.fish)
    }

    pub fn centroid(&self) -> Vector2 {
        centroid(&self.fish)
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        log::debug!("Resized school bounds to {}x{}", width, height);
    }
}
