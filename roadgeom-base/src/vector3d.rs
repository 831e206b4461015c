use cgmath::{AbsDiffEq, InnerSpace, Matrix4, Point3, Transform, Vector3};

/// A point or displacement in global 3D Euclidean space.
///
/// Backed by `cgmath`'s f64-specialised `Point3`, the way the teacher
/// crate's `cgmath64` module redefines `cgmath::Vector3<f64>` and friends
/// under short names for the whole workspace to share.
pub type Vector3D = Point3<f64>;

/// Constructs a [`Vector3D`] from its three coordinates.
pub fn vector3d(x: f64, y: f64, z: f64) -> Vector3D { Vector3D::new(x, y, z) }

/// `true` if `a` and `b` are within `tol` of each other in Euclidean distance.
pub fn near(a: &Vector3D, b: &Vector3D, tol: f64) -> bool {
    let diff = Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z);
    diff.magnitude().abs_diff_eq(&0.0, tol)
}

/// A rigid pose: a translation plus an orientation, expressed as a 4x4
/// homogeneous transform.
///
/// `Pose3D` composes with [`AffineSequence3D`] the same way the teacher's
/// `Processor<E, T>` combinator wraps a geometric entity with a
/// `Matrix4`-valued transform: the pose never mutates the entity, it is
/// applied at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose3D {
    /// Translation component, applied after `orientation`.
    pub translation: Vector3D,
    /// Orientation/scale component, a raw 4x4 homogeneous matrix.
    pub orientation: Matrix4<f64>,
}

impl Pose3D {
    /// The identity pose: no translation, no rotation.
    pub fn identity() -> Self {
        Pose3D { translation: Vector3D::new(0.0, 0.0, 0.0), orientation: Matrix4::from_scale(1.0) }
    }

    /// Builds a pose from a translation and an orientation matrix.
    pub fn new(translation: Vector3D, orientation: Matrix4<f64>) -> Self {
        Pose3D { translation, orientation }
    }

    /// Applies this pose to a point expressed in the pose's local frame.
    pub fn transform_point(&self, p: Vector3D) -> Vector3D {
        let transformed = self.orientation.transform_point(p);
        Vector3D::new(
            transformed.x + self.translation.x,
            transformed.y + self.translation.y,
            transformed.z + self.translation.z,
        )
    }
}

/// An ordered list of affine transforms, applied left to right.
///
/// Used to compose a road's reference-curve pose, its superelevation
/// (torsion) rotation, and its lateral-shape tilt into the single
/// transform a curve-relative `(s, t)` sample is pushed through to reach
/// global coordinates.
#[derive(Debug, Clone, Default)]
pub struct AffineSequence3D {
    poses: Vec<Pose3D>,
}

impl AffineSequence3D {
    /// The empty sequence: applying it is the identity.
    pub fn new() -> Self { Self::default() }

    /// Appends a pose to the end of the sequence.
    pub fn push(mut self, pose: Pose3D) -> Self {
        self.poses.push(pose);
        self
    }

    /// Applies every pose in order to `p`.
    pub fn transform_point(&self, mut p: Vector3D) -> Vector3D {
        for pose in &self.poses {
            p = pose.transform_point(p);
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_detects_close_points() {
        let a = vector3d(1.0, 2.0, 3.0);
        let b = vector3d(1.0 + 1e-9, 2.0, 3.0);
        assert!(near(&a, &b, 1e-7));
    }

    #[test]
    fn near_rejects_far_points() {
        let a = vector3d(0.0, 0.0, 0.0);
        let b = vector3d(1.0, 0.0, 0.0);
        assert!(!near(&a, &b, 1e-7));
    }

    #[test]
    fn identity_pose_preserves_points() {
        let pose = Pose3D::identity();
        let p = vector3d(1.0, 2.0, 3.0);
        assert!(near(&pose.transform_point(p), &p, 1e-12));
    }

    #[test]
    fn affine_sequence_composes_translations() {
        let seq = AffineSequence3D::new()
            .push(Pose3D::new(vector3d(1.0, 0.0, 0.0), Matrix4::from_scale(1.0)))
            .push(Pose3D::new(vector3d(0.0, 2.0, 0.0), Matrix4::from_scale(1.0)));
        let p = seq.transform_point(vector3d(0.0, 0.0, 0.0));
        assert!(near(&p, &vector3d(1.0, 2.0, 0.0), 1e-12));
    }
}
