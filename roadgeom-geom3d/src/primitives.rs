use crate::curve::Curve3D;
use crate::errors::Result;
use crate::ring::{LinearRing3D, Polygon3D};
use crate::CompositeSurface3D;
use roadgeom_base::{vector3d, Pose3D, Vector3D};

/// An axis-aligned box, built as six quad faces and placed in space by a
/// [`Pose3D`].
///
/// Used for furniture-like road-space objects (signs, poles, barriers) that
/// the core hands off as plain boundary geometry rather than parametric
/// surfaces.
#[derive(Debug, Clone, Copy)]
pub struct Cuboid3D {
    half_extents: Vector3D,
    pose: Pose3D,
}

impl Cuboid3D {
    /// A cuboid centered on `pose`'s translation, with half-widths
    /// `half_extents` along each local axis.
    pub fn new(half_extents: Vector3D, pose: Pose3D) -> Self {
        Cuboid3D { half_extents, pose }
    }

    /// Builds the six-face boundary representation.
    pub fn to_composite_surface(&self) -> CompositeSurface3D {
        let (hx, hy, hz) = (self.half_extents.x, self.half_extents.y, self.half_extents.z);
        let corners: Vec<Vector3D> = [
            (-hx, -hy, -hz),
            (hx, -hy, -hz),
            (hx, hy, -hz),
            (-hx, hy, -hz),
            (-hx, -hy, hz),
            (hx, -hy, hz),
            (hx, hy, hz),
            (-hx, hy, hz),
        ]
        .iter()
        .map(|&(x, y, z)| self.pose.transform_point(vector3d(x, y, z)))
        .collect();

        let faces: [[usize; 4]; 6] = [
            [0, 1, 2, 3],
            [4, 7, 6, 5],
            [0, 4, 5, 1],
            [1, 5, 6, 2],
            [2, 6, 7, 3],
            [3, 7, 4, 0],
        ];
        let panels = faces
            .iter()
            .filter_map(|face| {
                let points: Vec<Vector3D> = face.iter().map(|&i| corners[i]).collect();
                LinearRing3D::try_new(points, 1.0e-9).ok().map(Polygon3D::new)
            })
            .collect();
        CompositeSurface3D::new(panels)
    }
}

/// A right circular cylinder, built as a faceted side wall plus top and
/// bottom caps.
#[derive(Debug, Clone, Copy)]
pub struct Cylinder3D {
    radius: f64,
    height: f64,
    slices: usize,
    pose: Pose3D,
}

impl Cylinder3D {
    /// A cylinder of `radius` and `height`, centered on `pose`'s
    /// translation with its axis along local `z`, faceted into `slices`
    /// segments (minimum 3).
    pub fn new(radius: f64, height: f64, slices: usize, pose: Pose3D) -> Self {
        Cylinder3D { radius, height, slices: slices.max(3), pose }
    }

    /// Builds the faceted boundary representation.
    pub fn to_composite_surface(&self) -> CompositeSurface3D {
        let half_height = self.height / 2.0;
        let bottom: Vec<Vector3D> = (0..self.slices)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / self.slices as f64;
                self.pose.transform_point(vector3d(
                    self.radius * angle.cos(),
                    self.radius * angle.sin(),
                    -half_height,
                ))
            })
            .collect();
        let top: Vec<Vector3D> = (0..self.slices)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / self.slices as f64;
                self.pose.transform_point(vector3d(
                    self.radius * angle.cos(),
                    self.radius * angle.sin(),
                    half_height,
                ))
            })
            .collect();

        let mut panels = Vec::with_capacity(self.slices + 2);
        for i in 0..self.slices {
            let j = (i + 1) % self.slices;
            let quad = vec![bottom[i], bottom[j], top[j], top[i]];
            if let Ok(ring) = LinearRing3D::try_new(quad, 1.0e-9) {
                panels.push(Polygon3D::new(ring));
            }
        }
        if let Ok(ring) = LinearRing3D::try_new(bottom.clone(), 1.0e-9) {
            panels.push(Polygon3D::new(ring));
        }
        if let Ok(ring) = LinearRing3D::try_new(top, 1.0e-9) {
            panels.push(Polygon3D::new(ring));
        }
        CompositeSurface3D::new(panels)
    }
}

/// A profile ring extruded along a path curve, sampled at `step`, each
/// sample's pose taken from the path's local tangent frame.
#[derive(Debug)]
pub struct ParametricSweep3D<'a> {
    profile: LinearRing3D,
    path: &'a dyn Curve3D,
    step: f64,
}

impl<'a> ParametricSweep3D<'a> {
    /// Sweeps `profile` along `path`, sampling every `step` units of arc
    /// length.
    pub fn new(profile: LinearRing3D, path: &'a dyn Curve3D, step: f64) -> Self {
        ParametricSweep3D { profile, path, step }
    }

    /// Builds the swept boundary representation, connecting each
    /// consecutive pair of samples' profile rings with quad side panels.
    pub fn to_composite_surface(&self) -> Result<CompositeSurface3D> {
        let samples = self.path.sample(self.step)?;
        let rings: Vec<Vec<Vector3D>> = samples
            .into_iter()
            .map(|center| {
                self.profile
                    .points()
                    .iter()
                    .map(|p| vector3d(p.x + center.x, p.y + center.y, p.z + center.z))
                    .collect()
            })
            .collect();

        let mut panels = Vec::new();
        for pair in rings.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            for i in 0..a.len() {
                let j = (i + 1) % a.len();
                let quad = vec![a[i], a[j], b[j], b[i]];
                if let Ok(ring) = LinearRing3D::try_new(quad, 1.0e-9) {
                    panels.push(Polygon3D::new(ring));
                }
            }
        }
        Ok(CompositeSurface3D::new(panels))
    }
}
