pub mod geom;
pub mod scene;
pub mod shadow;
pub mod vecutils;
pub mod view;

// Prelude
pub use geom::point::Point;
pub use geom::polygon::Polygon;
pub use geom::vector::Vector;
pub use scene::params::{ParamKey, SceneParameters};
pub use scene::store::ParameterStore;
pub use shadow::classifier::{Backend, Classification, ShadowClassifier, classify_sample};
pub use shadow::config::ShadowConfig;
pub use shadow::solver::{ShadowGeometry, solve};
