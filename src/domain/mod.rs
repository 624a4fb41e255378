pub mod body;
pub mod settings;
pub mod types;

pub use body::Body;
pub use settings::WorldSettings;
pub use types::{Blocked, CollisionFaces, PhysicsType, RectBounds, Touching};
