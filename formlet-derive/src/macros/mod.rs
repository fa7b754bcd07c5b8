pub mod lenses;
