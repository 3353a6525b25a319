//! UI state - which screen is showing and which entity it manages

/// Entity types that have a management screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Brands,
    Categories,
}

impl EntityKind {
    pub fn all() -> Vec<EntityKind> {
        vec![EntityKind::Brands, EntityKind::Categories]
    }

    /// Path segment of the remote resource
    pub fn resource(&self) -> &'static str {
        match self {
            EntityKind::Brands => "brands",
            EntityKind::Categories => "categories",
        }
    }
}

/// Screen currently occupying the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    StockManager,
    Entity(EntityKind),
}
