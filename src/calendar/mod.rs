pub mod weekday;
pub mod rule;
pub mod resolver;

pub use weekday::Weekday;
pub use rule::{AbsoluteRule, EventDateRule, RelativeRule};
pub use resolver::{anchor_date, format_date, resolve_codes, resolve_dates};
