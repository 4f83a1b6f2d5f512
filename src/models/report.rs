use serde::Serialize;

/// Derived summary of one workout. Values are stored unrounded; rounding
/// happens only when rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub workout_type_name: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Report {
    /// Render the single-line text summary
    pub fn render(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
