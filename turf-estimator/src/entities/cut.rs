/// One physical piece of turf to be ordered. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cut {
    /// Index of the roll-width strip this piece covers
    pub strip_index: usize,
    /// Length of the piece (feet)
    pub length: f64,
    /// Area of the piece at full roll width (sqft)
    pub area_sq_ft: f64,
}

impl Cut {
    /// Creates a cut of `length` feet within strip `strip_index`.
    /// A cut always spans the full roll width, narrower pieces cannot be ordered.
    pub fn new(strip_index: usize, length: f64, roll_width_feet: f64) -> Self {
        Self {
            strip_index,
            length,
            area_sq_ft: length * roll_width_feet,
        }
    }
}
