pub const M_PER_FT: f64 = 0.3048;
pub const M_PER_IN: f64 = 0.0254;
pub const M_PER_MM: f64 = 0.001;
pub const SEC_PER_DAY: f64 = 86400.0;

pub const MIN_PER_HOUR: i64 = 60;
pub const MIN_PER_DAY: i64 = 1440;

/// Default relative viscosity and diffusivity (multipliers of water at 20 C)
pub const RELATIVE_DEFAULT: f64 = 1.0;
