/// Diurnal illuminance curve used by the simulated light sensor.
pub fn simulation_lux(day_fraction: f64) -> f64 {
    let radians = day_fraction * 2.0 * std::f64::consts::PI;

    const MAX_SUNLIGHT_LUX: f64 = 500.0;
    const MAX_MOONLIGHT_LUX: f64 = 5.0;

    // Smooth transition windows
    const SUNRISE_START: f64 = 0.23;
    const SUNRISE_END: f64 = 0.25;
    const SUNSET_START: f64 = 0.73;
    const SUNSET_END: f64 = 0.75;

    if day_fraction >= SUNRISE_START && day_fraction <= SUNSET_END {
        if day_fraction <= SUNRISE_END {
            // Sunrise - ramp up along a quarter sine
            let sunrise_radians = ((day_fraction - SUNRISE_START) / (SUNRISE_END - SUNRISE_START))
                * std::f64::consts::PI
                / 2.0;
            sunrise_radians.sin() * MAX_SUNLIGHT_LUX
        } else if day_fraction >= SUNSET_START {
            // Sunset - ramp down along a quarter cosine
            let sunset_radians = ((day_fraction - SUNSET_START) / (SUNSET_END - SUNSET_START))
                * std::f64::consts::PI
                / 2.0;
            sunset_radians.cos() * MAX_SUNLIGHT_LUX
        } else {
            MAX_SUNLIGHT_LUX
        }
    } else {
        // Moonlight peaking at midnight
        ((radians + std::f64::consts::PI).cos().max(0.0) * (MAX_MOONLIGHT_LUX - 0.01)) + 0.01
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lux_stays_within_physical_bounds() {
        for step in 0..=1000 {
            let lux = simulation_lux(step as f64 / 1000.0);
            assert!((0.0..=500.0).contains(&lux), "lux {lux} out of range");
        }
    }
}
