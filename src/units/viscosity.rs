use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, scaled};

/// 동점도가 아닌 (동적) 점도. Pa·s = kg/(m·s)
pub fn pascal_second() -> Unit {
    named(
        "Pa·s",
        &[
            (Dimension::Mass, 1),
            (Dimension::Length, -1),
            (Dimension::Time, -1),
        ],
    )
}

/// 센티포아즈. 1 cP = 1 mPa·s
pub fn centipoise() -> Unit {
    scaled(&pascal_second(), "cP", 1e-3)
}
