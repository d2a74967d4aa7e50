//! Camera model and perspective projection

/// 3D point or vector in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Row-major 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(pub [[f64; 3]; 3]);

impl Mat3 {
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }
}

/// Integer pixel coordinates on the image plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePoint {
    pub u: i32,
    pub v: i32,
}

/// A calibrated camera of the capture rig
///
/// Extrinsics (rotation matrix and translation vector) come from the
/// `Calib/` folder, intrinsics from the camera parameter files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rotation matrix of the camera extrinsics
    pub rotation: Mat3,
    /// Translation vector of the camera extrinsics
    pub translation: Vec3,
    /// Intrinsic matrix of the camera
    pub intrinsic: Mat3,
}

impl Camera {
    pub fn new(rotation: Mat3, translation: Vec3, intrinsic: Mat3) -> Self {
        Self {
            rotation,
            translation,
            intrinsic,
        }
    }

    /// The 4x3 projection matrix `[R; t] . K`
    fn projection_matrix(&self) -> [[f64; 3]; 4] {
        let rot_tran: [[f64; 3]; 4] = [
            self.rotation.0[0],
            self.rotation.0[1],
            self.rotation.0[2],
            [self.translation.x, self.translation.y, self.translation.z],
        ];

        let mut projection = [[0.0; 3]; 4];
        for (row_idx, row) in rot_tran.iter().enumerate() {
            for col in 0..3 {
                projection[row_idx][col] = (0..3).map(|k| row[k] * self.intrinsic.0[k][col]).sum();
            }
        }
        projection
    }

    /// Projects a world-space point onto the image plane
    ///
    /// The homogeneous row vector `[x y z 1]` is multiplied by the
    /// projection matrix and divided by its last coordinate. Coordinates
    /// are truncated to integer pixels.
    pub fn project_point(&self, world: Vec3) -> ImagePoint {
        let projection = self.projection_matrix();
        let homogeneous = [world.x, world.y, world.z, 1.0];

        let mut result = [0.0; 3];
        for (col, value) in result.iter_mut().enumerate() {
            *value = (0..4).map(|k| homogeneous[k] * projection[k][col]).sum();
        }

        ImagePoint {
            u: (result[0] / result[2]) as i32,
            v: (result[1] / result[2]) as i32,
        }
    }

    /// Projects a set of world-space points onto the image plane
    pub fn project_points(&self, world: &[Vec3]) -> Vec<ImagePoint> {
        world.iter().map(|point| self.project_point(*point)).collect()
    }
}
