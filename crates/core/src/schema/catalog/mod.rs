//! Field schemas for every master-data entity.
//!
//! Grouped by area: organisation (departments, hospitals, nodal centres),
//! staff (roles, users, technicians, doctors) and laboratory reference data.

mod laboratory;
mod organisation;
mod staff;

use super::EntitySchema;
use crate::entity::EntityKind;

pub fn schema_for(kind: EntityKind) -> &'static EntitySchema {
    match kind {
        EntityKind::Department => &organisation::DEPARTMENT,
        EntityKind::HospitalType => &organisation::HOSPITAL_TYPE,
        EntityKind::Hospital => &organisation::HOSPITAL,
        EntityKind::Nodal => &organisation::NODAL,
        EntityKind::Designation => &organisation::DESIGNATION,
        EntityKind::Role => &staff::ROLE,
        EntityKind::User => &staff::USER,
        EntityKind::Technician => &staff::TECHNICIAN,
        EntityKind::Doctor => &staff::DOCTOR,
        EntityKind::Instrument => &laboratory::INSTRUMENT,
        EntityKind::SpecimenType => &laboratory::SPECIMEN_TYPE,
        EntityKind::Color => &laboratory::COLOR,
        EntityKind::ReportType => &laboratory::REPORT_TYPE,
        EntityKind::Profile => &laboratory::PROFILE,
        EntityKind::Investigation => &laboratory::INVESTIGATION,
        EntityKind::Unit => &laboratory::UNIT,
    }
}
