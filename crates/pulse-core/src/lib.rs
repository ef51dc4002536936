pub mod legacy;
pub mod score;
pub mod sort;
pub mod types;
pub mod util;

pub mod prelude {
    pub use crate::{legacy, score::*, sort::*, types::*, util::*};

    pub use serde::{Deserialize, Serialize};
    pub use serde_json;
}
