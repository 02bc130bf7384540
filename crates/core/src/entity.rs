//! Master-data entity catalog.
//!
//! Every CRUD screen pair in the console is driven by one [`EntityKind`]:
//! its backend resource path, its console routes, its pagination style,
//! its role gate, and its field schema.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::roles::ROLE_ADMIN;
use crate::schema::{catalog, EntitySchema};
use crate::types::EntityId;

/// A master-data record type managed by an add/list/update screen set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Department,
    HospitalType,
    Hospital,
    Nodal,
    Instrument,
    Role,
    Technician,
    Doctor,
    SpecimenType,
    Color,
    ReportType,
    Profile,
    User,
    Designation,
    Investigation,
    Unit,
}

/// Where list pagination happens for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pagination {
    /// The whole collection is fetched once and paged in memory.
    Client,
    /// The backend pages (`?page=&limit=`) and reports totals in `meta`.
    Server,
}

impl EntityKind {
    /// Every entity kind, in menu order.
    pub fn all() -> &'static [EntityKind] {
        use EntityKind::*;
        &[
            Department,
            HospitalType,
            Hospital,
            Nodal,
            Instrument,
            Role,
            Technician,
            Doctor,
            SpecimenType,
            Color,
            ReportType,
            Profile,
            User,
            Designation,
            Investigation,
            Unit,
        ]
    }

    /// URL slug used in console routes, e.g. `specimen-type`.
    pub fn slug(self) -> &'static str {
        match self {
            EntityKind::Department => "department",
            EntityKind::HospitalType => "hospital-type",
            EntityKind::Hospital => "hospital",
            EntityKind::Nodal => "nodal",
            EntityKind::Instrument => "instrument",
            EntityKind::Role => "role",
            EntityKind::Technician => "technician",
            EntityKind::Doctor => "doctor",
            EntityKind::SpecimenType => "specimen-type",
            EntityKind::Color => "color",
            EntityKind::ReportType => "report-type",
            EntityKind::Profile => "profile",
            EntityKind::User => "user",
            EntityKind::Designation => "designation",
            EntityKind::Investigation => "investigation",
            EntityKind::Unit => "unit",
        }
    }

    /// Human-readable name used in notices and headings.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Department => "Department",
            EntityKind::HospitalType => "Hospital Type",
            EntityKind::Hospital => "Hospital",
            EntityKind::Nodal => "Nodal",
            EntityKind::Instrument => "Instrument",
            EntityKind::Role => "Role",
            EntityKind::Technician => "Technician",
            EntityKind::Doctor => "Doctor",
            EntityKind::SpecimenType => "Specimen Type",
            EntityKind::Color => "Color",
            EntityKind::ReportType => "Report Type",
            EntityKind::Profile => "Profile",
            EntityKind::User => "User",
            EntityKind::Designation => "Designation",
            EntityKind::Investigation => "Investigation",
            EntityKind::Unit => "Unit",
        }
    }

    /// Backend path segment. Collections live at `/{resource}`, single
    /// records at `/{resource}/{id}`.
    pub fn resource(self) -> &'static str {
        match self {
            EntityKind::Department => "department",
            EntityKind::HospitalType => "hospitaltype",
            EntityKind::Hospital => "hospital",
            EntityKind::Nodal => "nodal",
            EntityKind::Instrument => "instrument",
            EntityKind::Role => "role",
            EntityKind::Technician => "technician",
            EntityKind::Doctor => "doctor",
            EntityKind::SpecimenType => "specimentype",
            EntityKind::Color => "color",
            EntityKind::ReportType => "reporttype",
            EntityKind::Profile => "profile",
            EntityKind::User => "user",
            EntityKind::Designation => "designation",
            EntityKind::Investigation => "investigation",
            EntityKind::Unit => "unit",
        }
    }

    /// Large, growing collections are paged by the backend.
    pub fn pagination(self) -> Pagination {
        match self {
            EntityKind::Hospital
            | EntityKind::Doctor
            | EntityKind::User
            | EntityKind::Investigation => Pagination::Server,
            _ => Pagination::Client,
        }
    }

    /// Role type required to manage this entity, if any.
    pub fn required_role(self) -> Option<&'static str> {
        match self {
            EntityKind::Role | EntityKind::User => Some(ROLE_ADMIN),
            _ => None,
        }
    }

    /// Backend path of the collection: list and create.
    pub fn collection_path(self) -> String {
        format!("/{}", self.resource())
    }

    /// Backend path of one record: fetch and update.
    pub fn record_path(self, id: EntityId) -> String {
        format!("/{}/{id}", self.resource())
    }

    pub fn list_route(self) -> String {
        format!("/{}/list", self.slug())
    }

    pub fn create_route(self) -> String {
        format!("/{}/new", self.slug())
    }

    pub fn update_route(self, id: EntityId) -> String {
        format!("/{}/{id}/edit", self.slug())
    }

    /// The field schema shared by this entity's add and update forms.
    pub fn schema(self) -> &'static EntitySchema {
        catalog::schema_for(self)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    /// Parse a console slug. Accepts any case, and `_` in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        EntityKind::all()
            .iter()
            .copied()
            .find(|kind| kind.slug() == normalized)
            .ok_or_else(|| CoreError::UnknownEntity(s.to_string()))
    }
}
