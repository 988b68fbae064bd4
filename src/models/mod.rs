// Estructuras de datos principales del catálogo de cursos

use serde::{Deserialize, Serialize};

/// Un curso ofertado. El orden de los campos es el orden de las claves en el JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name_en: String,
    pub name_th: String,
    pub faculty: String,
    /// Formato "3(2-2-5)": créditos(teoría-práctica-estudio).
    pub credits: String,
    /// Código del curso prerequisito; vacío si no tiene.
    pub prerequisite: String,
    pub semester: u8,
    /// Año académico en era budista (p. ej. 2567).
    pub year: u16,
    pub program: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub number: String,
    pub seats: u32,
    pub instructor: Vec<String>,
    pub exam_date: String,
    pub schedules: Vec<Schedule>,
}

/// Bloque semanal de una sección.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub day: Weekday,
    /// Rango "HH:MM-HH:MM"
    pub time: String,
    pub room: String,
    #[serde(rename = "type")]
    pub kind: SessionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    Lecture,
    Lab,
}

impl Schedule {
    pub fn new(day: Weekday, time: &str, room: &str, kind: SessionType) -> Self {
        Schedule {
            day,
            time: time.to_string(),
            room: room.to_string(),
            kind,
        }
    }
}
