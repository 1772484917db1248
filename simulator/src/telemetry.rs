use rand::Rng;

/// Sensor families simulated per device, one feed per sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    Temperature,
    Humidity,
    Battery,
}

pub const SENSORS: [Sensor; 3] = [Sensor::Temperature, Sensor::Humidity, Sensor::Battery];

impl Sensor {
    pub fn feed_suffix(self) -> &'static str {
        match self {
            Sensor::Temperature => "temperature",
            Sensor::Humidity => "humidity",
            Sensor::Battery => "battery",
        }
    }

    /// Samples one reading, with occasional outliers.
    pub fn sample(self, rng: &mut impl Rng) -> f64 {
        match self {
            Sensor::Temperature => {
                if rng.gen_bool(0.05) {
                    rng.gen_range(-50.0..100.0) // 5% outliers
                } else {
                    rng.gen_range(15.0..35.0) // Normal range
                }
            }
            Sensor::Humidity => {
                if rng.gen_bool(0.05) {
                    rng.gen_range(0.0..100.0) // 5% outliers
                } else {
                    rng.gen_range(30.0..80.0) // Normal range
                }
            }
            Sensor::Battery => {
                if rng.gen_bool(0.02) {
                    rng.gen_range(0.0..20.0) // 2% low battery
                } else {
                    rng.gen_range(20.0..100.0) // Normal range
                }
            }
        }
    }
}
