/// Sport grouping a set of courts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sport {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Sport {
    /// Converts an entity model to a sport domain model at the repository boundary.
    pub fn from_entity(entity: entity::sport::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}
