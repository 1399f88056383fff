use nalgebra::{Point2, Point3};

/// 3-D atom position in ångströms, relative to the molecule's common origin.
pub type Point = Point3<f64>;

/// 2-D projected coordinate used when laying out drawing primitives.
pub type PlanePoint = Point2<f64>;
