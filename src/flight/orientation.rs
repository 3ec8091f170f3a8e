use glam::{Mat4, Vec3, Vec4};

/// Fixed world up used to build the travel basis
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Local-space distance from the airplane origin to its nose and tail
pub const NOSE_OFFSET: f32 = 1.5;
pub const TAIL_OFFSET: f32 = 1.5;

/// Chase anchors sit slightly above the nose and above/behind the tail
pub const NOSE_ANCHOR_LIFT: f32 = 0.2;
pub const TAIL_ANCHOR_LIFT: f32 = 1.2;
pub const TAIL_ANCHOR_TRAIL: f32 = 1.5;

/// Displacements shorter than this carry no usable direction
pub const MIN_DISPLACEMENT: f32 = 1e-6;

/// Rigid transform derived from the direction of travel.
///
/// Columns 0..2 of `rotation` are `right`, `up`, `direction`; column 3 is the
/// position. The basis is rebuilt from cross products on every update and
/// never rotated incrementally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub right: Vec3,
    pub up: Vec3,
    pub direction: Vec3,
    pub rotation: Mat4,
    pub nose_anchor: Vec3,
    pub tail_anchor: Vec3,
}

impl Orientation {
    /// Axis-aligned orientation facing +Z at `position`
    pub fn identity(position: Vec3) -> Self {
        Self::from_basis(Vec3::X, Vec3::Y, Vec3::Z, position)
    }

    /// Recompute the basis, rotation and anchors for one step of motion.
    ///
    /// A zero (or non-finite) displacement keeps the previous direction of
    /// travel. Motion parallel to `WORLD_UP` keeps the previous right axis,
    /// which is always horizontal and therefore still orthogonal.
    pub fn update(&self, position: Vec3, previous_position: Vec3) -> Self {
        let displacement = position - previous_position;

        let direction = if displacement.is_finite() && displacement.length() >= MIN_DISPLACEMENT {
            displacement.normalize()
        } else {
            log::trace!("stationary step at {position}, keeping direction {}", self.direction);
            self.direction
        };

        let right = WORLD_UP.cross(direction);
        let right = if right.length() >= MIN_DISPLACEMENT {
            right.normalize()
        } else {
            log::debug!("vertical travel, reusing right axis {}", self.right);
            self.right
        };

        // Both operands are unit length and orthogonal
        let up = direction.cross(right);

        Self::from_basis(right, up, direction, position)
    }

    fn from_basis(right: Vec3, up: Vec3, direction: Vec3, position: Vec3) -> Self {
        let rotation = Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            direction.extend(0.0),
            position.extend(1.0),
        );

        let nose_position = (rotation * Vec4::new(0.0, 0.0, NOSE_OFFSET, 1.0)).truncate();
        let nose_anchor = nose_position + up * NOSE_ANCHOR_LIFT;

        let tail_position = (rotation * Vec4::new(0.0, 0.0, -TAIL_OFFSET, 1.0)).truncate();
        let tail_anchor = tail_position + up * TAIL_ANCHOR_LIFT - direction * TAIL_ANCHOR_TRAIL;

        Self {
            right,
            up,
            direction,
            rotation,
            nose_anchor,
            tail_anchor,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.rotation.w_axis.truncate()
    }
}
