//! Country calendars.
//!
//! Each module exposes one `static` [`RuleCalendar`](crate::RuleCalendar).
//! The statics are immutable, so handing out `&'static` references to them
//! is safe across threads.

pub mod australia;
pub mod brazil;
pub mod canada;
pub mod denmark;
pub mod france;
pub mod germany;
pub mod italy;
pub mod mexico;
pub mod new_zealand;
pub mod norway;
pub mod south_africa;
pub mod sweden;
pub mod switzerland;
pub mod united_kingdom;
pub mod united_states;
