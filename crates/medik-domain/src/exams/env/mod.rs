//! Exams over environment variables (`env.*`).

mod hostname;
mod ip;
mod is_set;
mod not_empty;
mod numeric;
mod options;
mod path;
mod regex;

pub use hostname::Hostname;
pub use ip::{Ip, Ipv4, Ipv6};
pub use is_set::IsSet;
pub use not_empty::NotEmpty;
pub use numeric::{Float, FloatRange, Int, IntRange};
pub use options::Options;
pub use path::{Dir, File};
pub use self::regex::Regex;
