pub mod datum;
pub mod numeric;
