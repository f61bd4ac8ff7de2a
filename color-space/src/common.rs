pub use num_traits::{Float, NumCast, ToPrimitive};
#[cfg(feature = "serde")]
pub use serde::{Deserialize, Serialize};
pub use std::fmt::Debug;
