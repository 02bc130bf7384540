use crate::entity::EntityKind;
use crate::schema::patterns::{PHONE, PIN_CODE};
use crate::schema::{EntitySchema, FieldSpec, PayloadType};
use crate::validation::Rule;

pub static DEPARTMENT: EntitySchema = EntitySchema {
    entity: EntityKind::Department,
    fields: &[
        FieldSpec::text("departmentname", "Department Name").with_rules(&[
            Rule::Required {
                message: "Department name is required",
            },
            Rule::MaxLength {
                max: 100,
                message: "Department name must be at most 100 characters",
            },
        ]),
        FieldSpec::text("departmentcode", "Department Code").with_rules(&[Rule::MaxLength {
            max: 20,
            message: "Department code must be at most 20 characters",
        }]),
        FieldSpec::text_area("description", "Description").with_rules(&[Rule::MaxLength {
            max: 250,
            message: "Description must be at most 250 characters",
        }]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["departmentname", "departmentcode"],
    display_field: "departmentname",
    sort_field: "departmentname",
};

pub static HOSPITAL_TYPE: EntitySchema = EntitySchema {
    entity: EntityKind::HospitalType,
    fields: &[
        FieldSpec::text("hospitaltypename", "Hospital Type").with_rules(&[
            Rule::Required {
                message: "Hospital type is required",
            },
            Rule::MaxLength {
                max: 100,
                message: "Hospital type must be at most 100 characters",
            },
        ]),
        FieldSpec::text_area("description", "Description").with_rules(&[Rule::MaxLength {
            max: 250,
            message: "Description must be at most 250 characters",
        }]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["hospitaltypename"],
    display_field: "hospitaltypename",
    sort_field: "hospitaltypename",
};

pub static HOSPITAL: EntitySchema = EntitySchema {
    entity: EntityKind::Hospital,
    fields: &[
        FieldSpec::text("hospitalname", "Hospital Name").with_rules(&[
            Rule::Required {
                message: "Hospital name is required",
            },
            Rule::MaxLength {
                max: 150,
                message: "Hospital name must be at most 150 characters",
            },
        ]),
        FieldSpec::reference(
            "hospitaltypeid",
            "Hospital Type",
            EntityKind::HospitalType,
            "id",
            "hospitaltypename",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a hospital type",
        }]),
        FieldSpec::reference(
            "nodalid",
            "Nodal",
            EntityKind::Nodal,
            "id",
            "nodalname",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a nodal",
        }]),
        FieldSpec::text_area("address", "Address").with_rules(&[Rule::Required {
            message: "Address is required",
        }]),
        FieldSpec::text("city", "City").with_rules(&[Rule::Required {
            message: "City is required",
        }]),
        FieldSpec::text("district", "District"),
        FieldSpec::text("state", "State").with_rules(&[Rule::Required {
            message: "State is required",
        }]),
        FieldSpec::text("pincode", "PIN Code").with_rules(&[
            Rule::Required {
                message: "PIN code is required",
            },
            Rule::Pattern {
                pattern: PIN_CODE,
                message: "PIN code must be exactly 6 digits",
            },
        ]),
        FieldSpec::text("contactno", "Contact Number").with_rules(&[
            Rule::Required {
                message: "Contact number is required",
            },
            Rule::Pattern {
                pattern: PHONE,
                message: "Enter a valid 10-digit mobile number",
            },
        ]),
        FieldSpec::email("email", "Email").with_rules(&[Rule::Email {
            message: "Enter a valid email address",
        }]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["hospitalname", "city", "district", "state"],
    display_field: "hospitalname",
    sort_field: "hospitalname",
};

pub static NODAL: EntitySchema = EntitySchema {
    entity: EntityKind::Nodal,
    fields: &[
        FieldSpec::text("nodalname", "Nodal Name").with_rules(&[
            Rule::Required {
                message: "Nodal name is required",
            },
            Rule::MaxLength {
                max: 150,
                message: "Nodal name must be at most 150 characters",
            },
        ]),
        FieldSpec::text("motherlab", "Mother Lab"),
        FieldSpec::text_area("address", "Address").with_rules(&[Rule::Required {
            message: "Address is required",
        }]),
        FieldSpec::text("city", "City"),
        FieldSpec::text("pincode", "PIN Code").with_rules(&[
            Rule::Required {
                message: "PIN code is required",
            },
            Rule::Pattern {
                pattern: PIN_CODE,
                message: "PIN code must be exactly 6 digits",
            },
        ]),
        FieldSpec::text("contactno", "Contact Number").with_rules(&[Rule::Pattern {
            pattern: PHONE,
            message: "Enter a valid 10-digit mobile number",
        }]),
        FieldSpec::email("email", "Email").with_rules(&[Rule::Email {
            message: "Enter a valid email address",
        }]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["nodalname", "motherlab", "city"],
    display_field: "nodalname",
    sort_field: "nodalname",
};

pub static DESIGNATION: EntitySchema = EntitySchema {
    entity: EntityKind::Designation,
    fields: &[
        FieldSpec::text("designationname", "Designation").with_rules(&[
            Rule::Required {
                message: "Designation is required",
            },
            Rule::MaxLength {
                max: 100,
                message: "Designation must be at most 100 characters",
            },
        ]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["designationname"],
    display_field: "designationname",
    sort_field: "designationname",
};
