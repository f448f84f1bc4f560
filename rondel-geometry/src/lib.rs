pub mod border;
pub mod bounds;
pub mod marks;
pub mod path;
pub mod rounded_rect;
