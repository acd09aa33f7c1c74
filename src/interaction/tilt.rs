use crate::config::{TILT_FACTOR_DEG, TILT_PERSPECTIVE_PX};

/// Rotation applied to a portfolio card, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Pointer position relative to the card's own top-left corner.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::REST;
        }
        let nx = x / width;
        let ny = y / height;
        Self {
            rotate_x: (ny - 0.5) * -TILT_FACTOR_DEG,
            rotate_y: (nx - 0.5) * TILT_FACTOR_DEG,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            TILT_PERSPECTIVE_PX,
            // -0.00 reads oddly in the inspector
            self.rotate_x + 0.0,
            self.rotate_y + 0.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_flat() {
        assert_eq!(Tilt::from_pointer(150.0, 100.0, 300.0, 200.0), Tilt::REST);
    }

    #[test]
    fn corners_hit_the_limit() {
        let top_left = Tilt::from_pointer(0.0, 0.0, 300.0, 200.0);
        assert_eq!(top_left.rotate_x, 3.0);
        assert_eq!(top_left.rotate_y, -3.0);

        let bottom_right = Tilt::from_pointer(300.0, 200.0, 300.0, 200.0);
        assert_eq!(bottom_right.rotate_x, -3.0);
        assert_eq!(bottom_right.rotate_y, 3.0);
    }

    #[test]
    fn empty_rect_stays_at_rest() {
        assert_eq!(Tilt::from_pointer(10.0, 10.0, 0.0, 0.0), Tilt::REST);
    }

    #[test]
    fn transform_string() {
        let tilt = Tilt::from_pointer(0.0, 150.0, 300.0, 200.0);
        assert_eq!(
            tilt.transform(),
            "perspective(800px) rotateX(-1.50deg) rotateY(-3.00deg)"
        );
        assert_eq!(
            Tilt::REST.transform(),
            "perspective(800px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }
}
