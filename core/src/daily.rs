//! Stage 3 — per-day roles (chat, appointments).
//!
//! Selected per weekday from the engineers available that day minus the
//! week's on-call engineer. The rotation advances once per calendar day so
//! the two roles walk through the pool rather than sticking. A small pool
//! may hand both roles to the same engineer; early-shift holders stay
//! eligible.

use crate::{
    request::RotationSeeds,
    rotation::rotation_order,
    types::{DayOffset, Engineer},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyRoles {
    pub chat:         Option<Engineer>,
    pub appointments: Option<Engineer>,
}

/// `pool` is the day's available, non-on-call roster in roster order.
pub fn assign_daily(
    pool: &[Engineer],
    seeds: &RotationSeeds,
    day_offset: DayOffset,
) -> DailyRoles {
    DailyRoles {
        chat:         rotation_order(pool, day_offset + seeds.chat).first().cloned(),
        appointments: rotation_order(pool, day_offset + seeds.appointments)
            .first()
            .cloned(),
    }
}
