//! Well-known role type constants.
//!
//! These are the coarse role strings the backend issues alongside the
//! session token (`roleType`).

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_NODAL: &str = "nodal";
pub const ROLE_HOSPITAL: &str = "hospital";
pub const ROLE_TECHNICIAN: &str = "technician";
pub const ROLE_DOCTOR: &str = "doctor";

/// Every role type a `role` record may carry.
pub const ROLE_TYPES: &[&str] = &[
    ROLE_ADMIN,
    ROLE_NODAL,
    ROLE_HOSPITAL,
    ROLE_TECHNICIAN,
    ROLE_DOCTOR,
];

/// Check whether a role string is one of the known role types.
pub fn is_known_role(role: &str) -> bool {
    ROLE_TYPES.contains(&role)
}
