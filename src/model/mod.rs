pub mod artist;
pub mod genre;
pub mod image;
pub mod mix;
pub mod product;

pub use artist::Artist;
pub use genre::Genre;
pub use image::Thumbnails;
pub use mix::{Mix, MixGroup};
pub use product::{Product, ProductCategory};
