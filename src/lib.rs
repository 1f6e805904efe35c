//! 한글 음절 <-> 자모 분해/조합
//!
//! ```
//! use hangul_split::{join, split};
//!
//! let groups = split("마켓", false);
//! assert_eq!(groups[1].tokens(), ["ㅋ", "ㅔ", "ㅅ"]);
//! assert_eq!(join(&groups[1]), Ok('켓'));
//! ```

pub mod config;
pub mod core;
pub mod detection;

pub use self::config::{ConfigError, SplitConfig};
pub use self::core::composer::{join, join_groups, join_to_string, JoinError};
pub use self::core::splitter::{split, split_with_config, CharGroup};
pub use self::detection::{can_compose, find_non_korean_members};
