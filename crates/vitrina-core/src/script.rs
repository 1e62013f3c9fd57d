//! Video script generation for the cover studio.
//!
//! A pure function of (business name, city, duration) producing five
//! fixed-purpose narrative lines. Timestamps and commentary switch between
//! the short and the extended variant based on the duration.

use serde::{Deserialize, Serialize};

/// Target duration of the narrated video.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScriptDuration {
    /// 45-second short.
    Short45,
    /// Two-minute extended cut.
    Extended120,
}

impl ScriptDuration {
    /// Total length in seconds.
    pub fn seconds(self) -> u32 {
        match self {
            Self::Short45 => 45,
            Self::Extended120 => 120,
        }
    }
}

impl Default for ScriptDuration {
    fn default() -> Self {
        Self::Short45
    }
}

/// Generate the five-line script for a business and city.
pub fn generate(business_name: &str, city: &str, duration: ScriptDuration) -> String {
    let short = duration == ScriptDuration::Short45;

    let lines = [
        format!(
            "HOOK (0–3s): Esto pasó HOY en {city} 🔥 Llegamos a {business_name}, \
             un negocio que no se rinde."
        ),
        format!(
            "ACCIÓN (3–{}s): Mostrar al dueño trabajando (soldadura / esmeril), \
             cortes cada 3s, subtítulos dinámicos: \"{business_name} 🔑 | {city}\".",
            if short { 20 } else { 40 }
        ),
        format!(
            "PICO EMOCIONAL ({}–{}s): Entrega de la app web en el celular, \
             reacción y sonrisa.",
            if short { 21 } else { 41 },
            if short { 30 } else { 70 }
        ),
        format!(
            "POST-PICO ({}–{}s): 'Esto… esto es lo que vale la pena. Ver a un \
             ecuatoriano feliz porque alguien creyó en su trabajo.' (pausa 1–2s).",
            if short { 31 } else { 71 },
            if short { 38 } else { 100 }
        ),
        format!(
            "CIERRE ({}–{}s): 'Seguimos mañana con otro emprendedor. Si crees en \
             los que trabajan con el corazón, únete a esta comunidad.'",
            if short { 39 } else { 101 },
            if short { 45 } else { 120 }
        ),
    ];

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_variant_timestamps() {
        let script = generate("Cerrajería Totti", "Shushufindi", ScriptDuration::Short45);
        let lines: Vec<&str> = script.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("HOOK (0–3s):"));
        assert!(lines[1].starts_with("ACCIÓN (3–20s):"));
        assert!(lines[2].starts_with("PICO EMOCIONAL (21–30s):"));
        assert!(lines[3].starts_with("POST-PICO (31–38s):"));
        assert!(lines[4].starts_with("CIERRE (39–45s):"));
    }

    #[test]
    fn test_extended_variant_timestamps() {
        let script = generate("Cerrajería Totti", "Shushufindi", ScriptDuration::Extended120);
        let lines: Vec<&str> = script.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("ACCIÓN (3–40s):"));
        assert!(lines[2].starts_with("PICO EMOCIONAL (41–70s):"));
        assert!(lines[3].starts_with("POST-PICO (71–100s):"));
        assert!(lines[4].starts_with("CIERRE (101–120s):"));
    }

    #[test]
    fn test_inputs_are_interpolated() {
        let script = generate("Taller Ruiz", "Quito", ScriptDuration::Short45);

        assert!(script.contains("Esto pasó HOY en Quito"));
        assert!(script.contains("Llegamos a Taller Ruiz"));
        assert!(script.contains("\"Taller Ruiz 🔑 | Quito\""));
    }

    #[test]
    fn test_commentary_text_is_fixed() {
        let script = generate("X", "Y", ScriptDuration::Short45);

        assert!(script.contains("Entrega de la app web en el celular"));
        assert!(script.contains("esto es lo que vale la pena"));
        assert!(script.contains("únete a esta comunidad"));
    }

    #[test]
    fn test_duration_seconds() {
        assert_eq!(ScriptDuration::Short45.seconds(), 45);
        assert_eq!(ScriptDuration::Extended120.seconds(), 120);
    }
}
