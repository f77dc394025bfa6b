//! Border and geodesic algorithms.
//!
//! - **Border**: vertices enclosed by a closed curve on the surface
//! - **Geodesics**: Dijkstra shortest edge paths, used to close gaps in borders

pub mod border;
pub mod geodesic;
mod progress;

pub use progress::Progress;
