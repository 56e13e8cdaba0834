use super::{Grade, Measurement};

/// Fallback measurements shown when nothing has been captured yet
pub fn demo_measurements() -> Vec<Measurement> {
    vec![
        Measurement::new("Chest", 102.5, "cm", 0.92, Grade::P0),
        Measurement::new("Waist", 88.3, "cm", 0.89, Grade::P0),
        Measurement::new("Hip", 98.7, "cm", 0.91, Grade::P0),
        Measurement::new("Shoulder", 46.2, "cm", 0.94, Grade::P0),
        Measurement::new("Arm Length", 64.8, "cm", 0.88, Grade::P0),
        Measurement::new("Back Length", 48.5, "cm", 0.90, Grade::P0),
        Measurement::new("Neck", 39.4, "cm", 0.93, Grade::P0),
        Measurement::new("Bicep", 32.1, "cm", 0.85, Grade::P1),
        Measurement::new("Wrist", 17.8, "cm", 0.87, Grade::P1),
        Measurement::new("Inseam", 82.4, "cm", 0.86, Grade::P1),
    ]
}
