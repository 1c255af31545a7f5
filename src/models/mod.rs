//! Flow-shop domain models.
//!
//! Provides the instance and solution types shared by every search
//! strategy.
//!
//! # Domain Mappings
//!
//! | u-flowshop | Manufacturing | Print shop | Data pipeline |
//! |------------|---------------|------------|---------------|
//! | Job | Order | Print run | Batch |
//! | Machine | Workstation | Press / Cutter / Binder | Stage |
//! | Permutation | Release sequence | Run order | Batch order |
//! | Makespan | Completion of last order | Shift length | Pipeline latency |

mod loading;
mod problem;
mod solution;

pub use loading::ProblemLoadError;
pub use problem::Problem;
pub use solution::Solution;
