use crate::entity::EntityKind;
use crate::roles::{ROLE_ADMIN, ROLE_DOCTOR, ROLE_HOSPITAL, ROLE_NODAL, ROLE_TECHNICIAN};
use crate::schema::patterns::{PERSON_NAME, PHONE, USERNAME};
use crate::schema::{
    EntitySchema, FieldDefault, FieldLock, FieldOption, FieldSpec, PayloadType,
};
use crate::validation::Rule;

const ROLE_TYPE_CHOICES: &[FieldOption] = &[
    FieldOption {
        value: ROLE_ADMIN,
        label: "Admin",
    },
    FieldOption {
        value: ROLE_NODAL,
        label: "Nodal",
    },
    FieldOption {
        value: ROLE_HOSPITAL,
        label: "Hospital",
    },
    FieldOption {
        value: ROLE_TECHNICIAN,
        label: "Technician",
    },
    FieldOption {
        value: ROLE_DOCTOR,
        label: "Doctor",
    },
];

const GENDER_CHOICES: &[FieldOption] = &[
    FieldOption {
        value: "male",
        label: "Male",
    },
    FieldOption {
        value: "female",
        label: "Female",
    },
    FieldOption {
        value: "other",
        label: "Other",
    },
];

pub static ROLE: EntitySchema = EntitySchema {
    entity: EntityKind::Role,
    fields: &[
        FieldSpec::text("rolename", "Role Name").with_rules(&[
            Rule::Required {
                message: "Role name is required",
            },
            Rule::MaxLength {
                max: 50,
                message: "Role name must be at most 50 characters",
            },
        ]),
        FieldSpec::select("roletype", "Role Type", ROLE_TYPE_CHOICES).with_rules(&[
            Rule::Required {
                message: "Please select a role type",
            },
            Rule::OneOf {
                message: "Unknown role type",
            },
        ]),
        FieldSpec::text_area("description", "Description").with_rules(&[Rule::MaxLength {
            max: 250,
            message: "Description must be at most 250 characters",
        }]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["rolename", "roletype"],
    display_field: "rolename",
    sort_field: "rolename",
};

pub static USER: EntitySchema = EntitySchema {
    entity: EntityKind::User,
    fields: &[
        FieldSpec::text("username", "Username")
            .with_rules(&[
                Rule::Required {
                    message: "Username is required",
                },
                Rule::MinLength {
                    min: 3,
                    message: "Username must be at least 3 characters",
                },
                Rule::MaxLength {
                    max: 30,
                    message: "Username must be at most 30 characters",
                },
                Rule::Pattern {
                    pattern: USERNAME,
                    message: "Username may only contain letters, digits, '_' and '.'",
                },
            ])
            .with_lock(FieldLock::AfterPopulate),
        FieldSpec::text("fullname", "Full Name").with_rules(&[
            Rule::Required {
                message: "Full name is required",
            },
            Rule::Pattern {
                pattern: PERSON_NAME,
                message: "Full name may only contain letters and spaces",
            },
        ]),
        FieldSpec::email("email", "Email").with_rules(&[
            Rule::Required {
                message: "Email is required",
            },
            Rule::Email {
                message: "Enter a valid email address",
            },
        ]),
        FieldSpec::text("contactno", "Mobile Number").with_rules(&[
            Rule::Required {
                message: "Mobile number is required",
            },
            Rule::Pattern {
                pattern: PHONE,
                message: "Enter a valid 10-digit mobile number",
            },
        ]),
        FieldSpec::reference(
            "roleid",
            "Role",
            EntityKind::Role,
            "id",
            "rolename",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a role",
        }]),
        FieldSpec::reference(
            "hospitalid",
            "Hospital",
            EntityKind::Hospital,
            "id",
            "hospitalname",
            PayloadType::Integer,
        ),
        FieldSpec::reference(
            "nodalid",
            "Nodal",
            EntityKind::Nodal,
            "id",
            "nodalname",
            PayloadType::Integer,
        ),
        FieldSpec::date("createdon", "Created On")
            .with_default(FieldDefault::Today)
            .with_lock(FieldLock::Always),
        FieldSpec::active_flag(),
    ],
    search_fields: &["username", "fullname", "email", "contactno"],
    display_field: "fullname",
    sort_field: "username",
};

pub static TECHNICIAN: EntitySchema = EntitySchema {
    entity: EntityKind::Technician,
    fields: &[
        FieldSpec::text("technicianname", "Technician Name").with_rules(&[
            Rule::Required {
                message: "Technician name is required",
            },
            Rule::Pattern {
                pattern: PERSON_NAME,
                message: "Technician name may only contain letters and spaces",
            },
        ]),
        // Technicians reference their nodal centre by name, not id.
        FieldSpec::reference(
            "nodalname",
            "Nodal",
            EntityKind::Nodal,
            "nodalname",
            "nodalname",
            PayloadType::Text,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a nodal",
        }]),
        FieldSpec::reference(
            "designationid",
            "Designation",
            EntityKind::Designation,
            "id",
            "designationname",
            PayloadType::Integer,
        ),
        FieldSpec::select("gender", "Gender", GENDER_CHOICES).with_rules(&[Rule::OneOf {
            message: "Please select a valid gender",
        }]),
        FieldSpec::text("qualification", "Qualification").with_rules(&[Rule::MaxLength {
            max: 100,
            message: "Qualification must be at most 100 characters",
        }]),
        FieldSpec::text("contactno", "Mobile Number").with_rules(&[
            Rule::Required {
                message: "Mobile number is required",
            },
            Rule::Pattern {
                pattern: PHONE,
                message: "Enter a valid 10-digit mobile number",
            },
        ]),
        FieldSpec::email("email", "Email").with_rules(&[Rule::Email {
            message: "Enter a valid email address",
        }]),
        FieldSpec::select("roletype", "Role Type", ROLE_TYPE_CHOICES)
            .with_default(FieldDefault::RoleType)
            .with_rules(&[Rule::OneOf {
                message: "Unknown role type",
            }]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["technicianname", "nodalname", "contactno"],
    display_field: "technicianname",
    sort_field: "technicianname",
};

pub static DOCTOR: EntitySchema = EntitySchema {
    entity: EntityKind::Doctor,
    fields: &[
        FieldSpec::text("doctorname", "Doctor Name").with_rules(&[
            Rule::Required {
                message: "Doctor name is required",
            },
            Rule::Pattern {
                pattern: PERSON_NAME,
                message: "Doctor name may only contain letters and spaces",
            },
        ]),
        FieldSpec::text("registrationno", "Registration Number")
            .with_rules(&[
                Rule::Required {
                    message: "Registration number is required",
                },
                Rule::MaxLength {
                    max: 30,
                    message: "Registration number must be at most 30 characters",
                },
            ])
            .with_lock(FieldLock::AfterPopulate),
        FieldSpec::text("specialization", "Specialization"),
        FieldSpec::reference(
            "hospitalid",
            "Hospital",
            EntityKind::Hospital,
            "id",
            "hospitalname",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a hospital",
        }]),
        FieldSpec::text("contactno", "Mobile Number").with_rules(&[
            Rule::Required {
                message: "Mobile number is required",
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
    search_fields: &["doctorname", "registrationno", "specialization"],
    display_field: "doctorname",
    sort_field: "doctorname",
};
