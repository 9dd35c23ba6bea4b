pub mod dataset;
pub mod domain;
pub mod primitives;
pub mod transform;
pub mod types;
pub mod viewport;

pub use dataset::{Dataset, PointId};
pub use domain::DomainConfig;
pub use transform::{CoordinateTransformer, data_to_screen, screen_to_data};
pub use types::{DataPoint, ScreenPoint, ScreenSize};
pub use viewport::Viewport;
