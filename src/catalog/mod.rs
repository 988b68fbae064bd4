//! Catálogo de cursos en memoria, de solo lectura.
//!
//! Se construye una única vez (primer acceso a `catalog()`) y vive durante todo
//! el proceso. No hay inserciones ni borrados, así que no se necesita Mutex:
//! basta con el `OnceLock` de inicialización.

mod data;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::api_json::AvailableCodes;
use crate::error::ApiError;
use crate::models::Course;

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Devuelve el catálogo global, construyéndolo en el primer acceso.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| Catalog::from_courses(data::seed_courses()))
}

#[derive(Debug)]
pub struct Catalog {
    courses: Vec<Course>,
    // código -> posición en `courses`
    index: HashMap<String, usize>,
}

/// Resultado de resolver una clave contra el catálogo.
#[derive(Debug)]
pub enum Lookup<'a> {
    /// Clave vacía: listado de códigos disponibles
    Index(AvailableCodes),
    Course(&'a Course),
}

impl Catalog {
    /// Si hay códigos repetidos gana el primero y el resto se descarta.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut index = HashMap::with_capacity(courses.len());
        let mut unique = Vec::with_capacity(courses.len());
        for course in courses {
            if index.contains_key(&course.code) {
                continue;
            }
            index.insert(course.code.clone(), unique.len());
            unique.push(course);
        }
        Catalog { courses: unique, index }
    }

    /// Búsqueda exacta, sensible a mayúsculas.
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.index.get(code).map(|&pos| &self.courses[pos])
    }

    /// Códigos en orden de inserción.
    pub fn codes(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.code.as_str()).collect()
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn resolve(&self, key: &str) -> Result<Lookup<'_>, ApiError> {
        if key.is_empty() {
            return Ok(Lookup::Index(AvailableCodes::from_catalog(self)));
        }
        self.get(key)
            .map(Lookup::Course)
            .ok_or_else(|| ApiError::CourseNotFound(key.to_string()))
    }
}
