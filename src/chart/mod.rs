/// Figure output: `layout` turns aggregates into panel geometry, `figure`
/// rasterises it.
pub mod figure;
pub mod layout;
