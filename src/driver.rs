//! Transform driver: smoothed position, rotation, and scale for one object.

use crate::channel::Channel;
use crate::config::DriverConfig;
use crate::float::Float;
use crate::vec::{Vec, Vec3, Vec4};

/// A pose: position, rotation, and scale.
///
/// Rotation is stored as raw quaternion components `(x, y, z, w)` in a
/// flat [`Vec4`]. Nothing here enforces unit length; filtered rotations
/// drift off the unit sphere mid-transition (see the crate docs).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform<F: Float> {
    pub position: Vec3<F>,
    pub rotation: Vec4<F>,
    pub scale: Vec3<F>,
}

impl<F: Float> Transform<F> {
    /// Origin position, identity rotation, unit scale.
    pub fn identity() -> Self {
        Transform {
            position: Vec3::zero(),
            rotation: Vec4::identity_quat(),
            scale: Vec3::splat(F::one()),
        }
    }
}

impl<F: Float> Default for Transform<F> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Drives one object's transform toward a moving target, one channel per
/// property, each channel independently filtered or passed through.
///
/// The driver owns its output [`Transform`] and its three [`Channel`]s
/// exclusively. It expects exactly one [`tick`] per fixed simulation
/// step; run one driver per animated object.
///
/// [`tick`]: TransformDriver::tick
#[derive(Clone, Debug)]
pub struct TransformDriver<F: Float> {
    pub position: Channel<Vec3<F>>,
    pub rotation: Channel<Vec4<F>>,
    pub scale: Channel<Vec3<F>>,
    transform: Transform<F>,
}

impl<F: Float> TransformDriver<F> {
    /// Create a driver at `initial`, with every channel's filter seeded
    /// from the matching initial value.
    pub fn new(config: DriverConfig<F>, initial: Transform<F>) -> Self {
        let mut position = Channel::new(config.position.tuning, config.position.enabled);
        let mut rotation = Channel::new(config.rotation.tuning, config.rotation.enabled);
        let mut scale = Channel::new(config.scale.tuning, config.scale.enabled);
        position.start(initial.position);
        rotation.start(initial.rotation);
        scale.start(initial.scale);
        TransformDriver { position, rotation, scale, transform: initial }
    }

    /// Advance all channels by `dt` seconds toward `target` and write the
    /// results into the owned transform.
    ///
    /// Disabled channels copy the target value straight through. When
    /// `frozen` is true every enabled channel snaps to its target with
    /// zeroed velocity, so the object shadows the target exactly and
    /// resumes smoothly on the first unfrozen tick.
    pub fn tick(&mut self, dt: F, target: &Transform<F>, frozen: bool) -> &Transform<F> {
        self.transform.position = self.position.tick(dt, target.position, frozen);
        self.transform.rotation = self.rotation.tick(dt, target.rotation, frozen);
        self.transform.scale = self.scale.tick(dt, target.scale, frozen);
        &self.transform
    }

    /// Rebuild every channel's filter from its stored tuning, seeded at
    /// the current owned transform.
    ///
    /// Call this after changing a channel's tuning; nothing watches for
    /// tuning changes, and without a restart the old coefficients stay
    /// live.
    pub fn restart(&mut self) {
        self.position.start(self.transform.position);
        self.rotation.start(self.transform.rotation);
        self.scale.start(self.transform.scale);
    }

    /// The driver's current output transform.
    pub fn transform(&self) -> &Transform<F> {
        &self.transform
    }
}
